//! Logging initialisation via tracing-subscriber.
//!
//! The binary calls [`init`] once, before the backplane config is loaded.
//! Library code only emits `tracing` events and never installs a subscriber.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::BackplaneError;

/// Level used when neither the command line nor the environment picks one.
pub const DEFAULT_LEVEL: &str = "info";

/// Install the global subscriber, writing to stderr.
///
/// When `forced` is set, `level` wins over `RUST_LOG`. Otherwise `RUST_LOG`
/// wins and `level` is only the fallback.
pub fn init(level: &str, forced: bool) -> Result<(), BackplaneError> {
    let filter = if forced {
        EnvFilter::try_new(level)
            .map_err(|e| BackplaneError::Logger(format!("invalid log level '{level}': {e}")))?
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .map_err(|e| BackplaneError::Logger(format!("invalid log level '{level}': {e}")))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| BackplaneError::Logger(format!("failed to set subscriber: {e}")))
}

/// Parse a plain level name such as `"debug"`.
pub fn parse_level(level: &str) -> Result<LevelFilter, BackplaneError> {
    if level.is_empty() {
        return Err(BackplaneError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| BackplaneError::Logger(format!("unrecognised log level: '{level}'")))
}

/// Map a `-v` count onto a level name. Zero means "no opinion".
pub fn level_for_verbosity(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        3 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Count the `v`s in a `-v`/`-vvv` style flag. Other arguments give `None`.
/// Absurdly long flags saturate at `u8::MAX`.
pub fn verbosity_flag(arg: &str) -> Option<u8> {
    let vs = arg.strip_prefix('-')?;
    if vs.is_empty() || !vs.chars().all(|c| c == 'v') {
        return None;
    }
    Some(u8::try_from(vs.len()).unwrap_or(u8::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_levels_parse() {
        for l in &["error", "warn", "info", "debug", "trace"] {
            assert!(parse_level(l).is_ok(), "expected '{l}' to be valid");
        }
    }

    #[test]
    fn invalid_level_errors() {
        assert!(parse_level("verbose").is_err());
        assert!(parse_level("").is_err());
    }

    #[test]
    fn verbosity_tiers() {
        assert_eq!(level_for_verbosity(0), None);
        assert_eq!(level_for_verbosity(1), Some("warn"));
        assert_eq!(level_for_verbosity(3), Some("debug"));
        assert_eq!(level_for_verbosity(9), Some("trace"));
    }

    #[test]
    fn verbosity_flags_count_and_saturate() {
        assert_eq!(verbosity_flag("-v"), Some(1));
        assert_eq!(verbosity_flag("-vvv"), Some(3));
        assert_eq!(verbosity_flag("-"), None);
        assert_eq!(verbosity_flag("-f"), None);
        assert_eq!(verbosity_flag("--verbose"), None);
        let long = format!("-{}", "v".repeat(300));
        assert_eq!(verbosity_flag(&long), Some(u8::MAX));
    }

    #[test]
    fn init_succeeds_or_already_init() {
        match init(DEFAULT_LEVEL, false) {
            Ok(()) => {}
            Err(BackplaneError::Logger(msg)) if msg.contains("set subscriber") => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}
