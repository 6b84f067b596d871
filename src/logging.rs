//! Debug logging for fm.
//!
//! Logging is off by default. With `enable_logging = true` in `[general]` every
//! `tracing` event is written to `debug.log` in the directory fm was started from.
//! The filter is read from `FM_LOG` (same syntax as `RUST_LOG`) and defaults to `debug`.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// File written in the start directory when logging is enabled.
pub const LOG_FILE: &str = "debug.log";
/// Env var holding the log filter directives.
pub const LOG_ENV: &str = "FM_LOG";

/// Installs the global subscriber when `enabled`.
///
/// The returned guard flushes the non-blocking writer on drop, so it must be held
/// until the program exits.
pub fn init(enabled: bool) -> Option<WorkerGuard> {
    if !enabled {
        return None;
    }

    let appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("debug"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init();

    match installed {
        Ok(()) => {
            tracing::info!(version = env!("CARGO_PKG_VERSION"), "fm logging started");
            Some(guard)
        }
        Err(e) => {
            eprintln!("[fm] Could not start logging: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_logging_installs_nothing() {
        assert!(init(false).is_none());
    }
}
