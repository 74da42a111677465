//! Logging setup.
//!
//! The library only emits `tracing` events; the binary installs a subscriber
//! here once at startup. `RUST_LOG` takes precedence over the configured
//! level:
//!
//! ```bash
//! RUST_LOG=deskcalc=trace deskcalc eval "2+3*4="
//! ```
//!
//! The interactive TUI owns the terminal, so without `--log-file` nothing is
//! installed in that mode.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::CalcConfig;
use crate::core::{CalcError, CalcResult};

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Append to a file
    File(std::path::PathBuf),
    /// Standard error
    Stderr,
    /// No subscriber
    Disabled,
}

/// Picks the sink for a run: a configured file wins, otherwise stderr unless
/// the screen belongs to the TUI.
#[must_use]
pub fn sink_for(config: &CalcConfig, interactive: bool) -> LogSink {
    match &config.log_file {
        Some(path) => LogSink::File(path.clone()),
        None if interactive => LogSink::Disabled,
        None => LogSink::Stderr,
    }
}

fn env_filter(config: &CalcConfig) -> EnvFilter {
    if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(config.log_level.as_filter())
    }
}

/// Installs the global subscriber. Call once at startup.
pub fn init(config: &CalcConfig, interactive: bool) -> CalcResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true);

    let installed = match sink_for(config, interactive) {
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogSink::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogSink::Disabled => return Ok(()),
    };

    installed.map_err(|e| CalcError::config(format!("cannot install logger: {e}")))
}
