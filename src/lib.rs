//! Batch rename files and directories by regular expression.
//!
//! The run is a straight pipeline: [`ops::scan`] collects matching entries,
//! [`ops::plan`] computes their new names, [`prompt::confirm_batch`] asks
//! once, and [`ops::execute`] applies the renames.

pub mod cli;
pub mod command;
pub mod error;
pub mod ops;
pub mod prompt;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::error::ErrorKind;
    use clap::{CommandFactory, Parser};

    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(RenameError::InvalidArguments(e.to_string())),
    };

    init_logging(cli.log_level());

    match cli.rename_args() {
        Some(args) => command::rename::execute(args, &mut prompt::ConsoleInput),
        None => {
            cli::Cli::command().print_help()?;
            Ok(())
        }
    }
}

/// Sends log output to stderr. `RUST_LOG` takes precedence over `level`.
fn init_logging(level: log::LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
