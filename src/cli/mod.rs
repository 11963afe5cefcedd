pub mod commands;
pub mod output;
mod shell;
pub mod table;

pub use commands::{CliError, CliMode, CommandError, ShellContext};
pub use shell::run_cli;
