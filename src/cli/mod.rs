//! Command-line interface.
//!
//! Flags are handled before the TUI starts:
//!
//! ```ignore
//! use examdesk::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args())?;
//! let config = args.apply(DashboardConfig::from_env());
//! if let Some(result) = run_cli_command(&args, &config) {
//!     return result;
//! }
//! // continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliArgs, CliCommand};
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

use crate::adapters::FileSessionStore;
use crate::config::DashboardConfig;
use crate::traits::SessionStore;

/// Run a non-TUI command.
///
/// Returns `None` when the dashboard should start.
pub fn run_cli_command(args: &CliArgs, config: &DashboardConfig) -> Option<Result<()>> {
    match args.command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Logout => Some(handle_logout_command(config)),
        CliCommand::RunTui => None,
    }
}

/// Clear the stored session without starting the TUI.
fn handle_logout_command(config: &DashboardConfig) -> Result<()> {
    let store = FileSessionStore::new(config.session_file()?);
    store.clear()?;
    println!("Session cleared ({})", store.path().display());
    Ok(())
}
