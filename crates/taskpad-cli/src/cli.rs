//! Argument parsing and command dispatch.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use taskpad_api_models::{TaskFilter, TaskId};
use taskpad_client::config::{
    DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, ENV_API_URL, ENV_TIMEOUT_SECS,
};
use taskpad_client::{ClientConfig, HttpClient, Session};
use taskpad_telemetry::{LogFormat, LoggingConfig, init_logging};
use url::Url;

use crate::client::{AppContext, CliResult};
use crate::commands::auth::{handle_login, handle_logout, handle_signup};
use crate::commands::tasks::{handle_add, handle_list, handle_remove, handle_toggle};
use crate::session_store;

/// Parses CLI arguments, executes the requested command, and reports
/// failures on stderr. Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    let logging = LoggingConfig {
        directives: &cli.log_level,
        format: cli.log_format.unwrap_or_else(LogFormat::for_build),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err:#}");
    }

    let command = command_label(&cli.command);
    match dispatch(cli).await {
        Ok(()) => 0,
        Err(err) => {
            tracing::debug!(command, exit_code = err.exit_code(), "command failed");
            eprintln!("error: {err}");
            err.exit_code()
        }
    }
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    let ctx = build_context(&cli)?;
    let output = cli.output;
    match cli.command {
        Command::Signup(args) => handle_signup(&ctx, args).await,
        Command::Login(args) => handle_login(&ctx, args).await,
        Command::Logout => handle_logout(&ctx),
        Command::Ls(args) => handle_list(&ctx, args, output).await,
        Command::Add(args) => handle_add(&ctx, args, output).await,
        Command::Toggle(args) => handle_toggle(&ctx, args).await,
        Command::Rm(args) => handle_remove(&ctx, args).await,
    }
}

fn build_context(cli: &Cli) -> CliResult<AppContext> {
    let config = ClientConfig {
        base_url: cli.api_url.clone(),
        timeout: Duration::from_secs(cli.timeout),
    };
    let api = HttpClient::new(&config)?;
    let home = env::var_os("HOME").map(PathBuf::from);
    let session_file = session_store::resolve_path(cli.session_file.clone(), home);
    let session = match cli.token.as_deref().filter(|token| !token.trim().is_empty()) {
        Some(token) => Session::with_token(token),
        None => session_store::load(&session_file)?,
    };
    Ok(AppContext {
        api,
        session,
        session_file,
    })
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Signup(_) => "signup",
        Command::Login(_) => "login",
        Command::Logout => "logout",
        Command::Ls(_) => "ls",
        Command::Add(_) => "add",
        Command::Toggle(_) => "toggle",
        Command::Rm(_) => "rm",
    }
}

#[derive(Parser)]
#[command(name = "taskpad", about = "Manage your Taskpad todo list from the terminal")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = ENV_API_URL,
        value_parser = parse_url,
        default_value = DEFAULT_API_URL
    )]
    pub(crate) api_url: Url,
    #[arg(
        long,
        global = true,
        env = ENV_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "Per-request timeout in seconds"
    )]
    pub(crate) timeout: u64,
    #[arg(
        long,
        global = true,
        env = "TASKPAD_TOKEN",
        hide_env_values = true,
        help = "Bearer token to use instead of the stored session"
    )]
    pub(crate) token: Option<String>,
    #[arg(
        long,
        global = true,
        env = "TASKPAD_SESSION_FILE",
        help = "Where `login` stores the session token"
    )]
    pub(crate) session_file: Option<PathBuf>,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render tasks"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        global = true,
        env = "TASKPAD_LOG",
        default_value = taskpad_telemetry::DEFAULT_LOG_LEVEL
    )]
    pub(crate) log_level: String,
    #[arg(
        long,
        global = true,
        env = "TASKPAD_LOG_FORMAT",
        value_parser = parse_log_format
    )]
    pub(crate) log_format: Option<LogFormat>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Create an account.
    Signup(CredentialArgs),
    /// Log in and store the session token.
    Login(CredentialArgs),
    /// Forget the stored session token.
    Logout,
    /// List tasks.
    Ls(ListArgs),
    /// Create a task.
    Add(AddArgs),
    /// Flip a task between open and completed.
    Toggle(TaskIdArgs),
    /// Delete a task.
    Rm(TaskIdArgs),
}

#[derive(Args)]
pub(crate) struct CredentialArgs {
    #[arg(long, short = 'u')]
    pub(crate) username: String,
    #[arg(long, short = 'p', help = "Prompted for when omitted")]
    pub(crate) password: Option<String>,
}

#[derive(Args, Default)]
pub(crate) struct ListArgs {
    #[arg(long, value_parser = parse_filter, default_value = "all")]
    pub(crate) filter: TaskFilter,
}

#[derive(Args)]
pub(crate) struct AddArgs {
    #[arg(help = "Task title")]
    pub(crate) title: String,
}

#[derive(Args)]
pub(crate) struct TaskIdArgs {
    #[arg(help = "Task identifier")]
    pub(crate) id: TaskId,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn parse_url(input: &str) -> Result<Url, String> {
    taskpad_client::config::parse_base_url(input).map_err(|err| err.to_string())
}

fn parse_filter(input: &str) -> Result<TaskFilter, String> {
    input.parse::<TaskFilter>().map_err(|err| err.to_string())
}

fn parse_log_format(input: &str) -> Result<LogFormat, String> {
    input.parse::<LogFormat>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "taskpad",
            "ls",
            "--filter",
            "active",
            "--api-url",
            "http://127.0.0.1:9000",
            "--output",
            "json",
        ])
        .expect("arguments should parse");
        assert_eq!(cli.api_url.port(), Some(9000));
        assert!(matches!(cli.output, OutputFormat::Json));
        match cli.command {
            Command::Ls(args) => assert_eq!(args.filter, TaskFilter::Active),
            _ => panic!("expected ls"),
        }
    }

    #[test]
    fn rejects_unknown_filter_and_bad_url() {
        assert!(Cli::try_parse_from(["taskpad", "ls", "--filter", "pending"]).is_err());
        assert!(Cli::try_parse_from(["taskpad", "--api-url", "ftp://x", "ls"]).is_err());
    }

    #[test]
    fn timeout_must_be_positive() {
        let zero = Cli::try_parse_from(["taskpad", "--timeout", "0", "--token", "tok", "ls"]);
        assert!(zero.is_err());
        let cli = Cli::try_parse_from(["taskpad", "--timeout", "3", "ls"]).expect("parse");
        assert_eq!(cli.timeout, 3);
    }

    #[test]
    fn command_labels_are_stable() {
        let cli = Cli::try_parse_from(["taskpad", "rm", "4"]).expect("parse");
        assert_eq!(command_label(&cli.command), "rm");
        match cli.command {
            Command::Rm(args) => assert_eq!(args.id, 4),
            _ => panic!("expected rm"),
        }
    }
}
