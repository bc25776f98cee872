use taskpad_client::TaskApi;

use crate::cli::{AddArgs, ListArgs, OutputFormat, TaskIdArgs};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::{checkbox, render_task, render_task_list};

pub(crate) async fn handle_list(
    ctx: &AppContext,
    args: ListArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let token = ctx.session.require_token()?;
    let tasks = ctx.api.list_tasks(token).await?;
    let visible: Vec<_> = tasks
        .into_iter()
        .filter(|task| args.filter.matches(task))
        .collect();
    tracing::debug!(filter = %args.filter, count = visible.len(), "listing tasks");
    render_task_list(&visible, format)
}

pub(crate) async fn handle_add(
    ctx: &AppContext,
    args: AddArgs,
    format: OutputFormat,
) -> CliResult<()> {
    if args.title.trim().is_empty() {
        return Err(CliError::validation("title must not be empty"));
    }
    let token = ctx.session.require_token()?;
    let task = ctx.api.create_task(token, &args.title).await?;
    render_task(&task, format)
}

pub(crate) async fn handle_toggle(ctx: &AppContext, args: TaskIdArgs) -> CliResult<()> {
    let token = ctx.session.require_token()?;
    let tasks = ctx.api.list_tasks(token).await?;
    let task = tasks
        .into_iter()
        .find(|task| task.id == args.id)
        .ok_or_else(|| CliError::validation(format!("task {} not found", args.id)))?;
    let completed = !task.completed;
    ctx.api.update_task(token, task.id, completed).await?;
    println!("{} {} {}", task.id, checkbox(completed), task.title);
    Ok(())
}

pub(crate) async fn handle_remove(ctx: &AppContext, args: TaskIdArgs) -> CliResult<()> {
    let token = ctx.session.require_token()?;
    ctx.api.delete_task(token, args.id).await?;
    println!("Deleted task {}", args.id);
    Ok(())
}
