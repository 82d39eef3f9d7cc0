//! Log file setup.
//!
//! The TUI owns stdout, so every `tracing` event goes to a file instead.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Level filter: `info` normally; `debug` when enabled, in which case
/// `RUST_LOG` may override it.
pub fn filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    }
}

/// Install the global subscriber writing to `path` (appending).
///
/// Returns `Ok(false)` if a subscriber was already installed.
pub fn init(debug: bool, path: &Path) -> std::io::Result<bool> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok();

    if installed {
        let debug_enabled = debug;
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            debug = debug_enabled,
            "logging initialised"
        );
    }
    Ok(installed)
}
