//! Logger bootstrap
//!
//! Writes `key=value` diagnostic events to stderr. The level comes from
//! `MOODLOG_LOG` (a `log` filter spec such as `debug` or `moodlog=trace`),
//! falling back to the level the caller asks for.
//!
//! Initialization is idempotent and never panics.

use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use std::sync::OnceLock;

/// Environment variable holding the log filter spec
pub const LOG_ENV: &str = "MOODLOG_LOG";

/// Level used when neither the caller nor the environment sets one
pub const DEFAULT_LEVEL: &str = "warn";

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Pick the effective filter spec: environment first, then `verbose`.
pub fn resolve_spec(env_value: Option<&str>, verbose: bool) -> String {
    match env_value.map(str::trim).filter(|s| !s.is_empty()) {
        Some(spec) => spec.to_string(),
        None if verbose => "debug".to_string(),
        None => DEFAULT_LEVEL.to_string(),
    }
}

/// Start the stderr logger once per process.
pub fn init_logging(verbose: bool) -> Result<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let spec = resolve_spec(std::env::var(LOG_ENV).ok().as_deref(), verbose);
    let handle = Logger::try_with_str(&spec)
        .with_context(|| format!("invalid log spec `{}`", spec))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .context("failed to start logger")?;

    // A concurrent init may have won; its handle stays, ours is dropped.
    let _ = LOGGER.set(handle);

    debug!(
        "event=app_start status=ok version={} level={}",
        env!("CARGO_PKG_VERSION"),
        spec
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_spec_wins() {
        assert_eq!(resolve_spec(Some("trace"), false), "trace");
        assert_eq!(resolve_spec(Some(" info "), true), "info");
    }

    #[test]
    fn test_verbose_and_default() {
        assert_eq!(resolve_spec(None, true), "debug");
        assert_eq!(resolve_spec(None, false), "warn");
        assert_eq!(resolve_spec(Some(""), false), "warn");
    }
}
