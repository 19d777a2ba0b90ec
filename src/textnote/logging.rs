//! Logger bootstrap for the binary.
//!
//! The library only talks to the `log` facade; this is the one place a backend is chosen.
//! Records go to stderr so they never mix with command output on stdout.

use flexi_logger::{Logger, LoggerHandle};

/// Default level, raised to `debug` by `--verbose`. `RUST_LOG` overrides both.
pub fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Starts logging to stderr. The returned handle must be kept alive.
pub fn init_logging(verbose: bool) -> Result<LoggerHandle, String> {
    let level = default_log_level(verbose);
    Logger::try_with_env_or_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))
}
