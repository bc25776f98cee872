//! Output renderers and formatting helpers for CLI commands.

use anyhow::anyhow;
use taskpad_api_models::Task;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

pub(crate) fn render_task_list(tasks: &[Task], format: OutputFormat) -> CliResult<()> {
    print!("{}", format_task_list(tasks, format)?);
    Ok(())
}

pub(crate) fn render_task(task: &Task, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(task)?),
        OutputFormat::Table => println!("{} {} {}", task.id, checkbox(task.completed), task.title),
    }
    Ok(())
}

pub(crate) fn format_task_list(tasks: &[Task], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", to_json(tasks)?)),
        OutputFormat::Table => {
            let mut text = format!("{:<8} {:<4} TITLE\n", "ID", "DONE");
            for task in tasks {
                text.push_str(&format!(
                    "{:<8} {:<4} {}\n",
                    task.id,
                    checkbox(task.completed),
                    task.title
                ));
            }
            if tasks.is_empty() {
                text.push_str("(no tasks)\n");
            }
            Ok(text)
        }
    }
}

#[must_use]
pub(crate) const fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
}
