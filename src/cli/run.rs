use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{init::init, migrate::migrate, sort::sort},
    exit_status::ExitStatus,
};

/// Dispatch to the handler for the parsed command.
///
/// `Err` is returned for fatal errors (unreadable or malformed input,
/// failed writes); `main` turns those into exit code 2.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Migrate(args)) => migrate(args),
        Some(Command::Sort(args)) => sort(args),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
