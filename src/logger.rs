//! Leveled log sink
//!
//! Thin layer over the `log` facade. Records come out as
//! `[INFO] message`, `[WARNING] message`, `[ERROR] message` or
//! `[INPUT] message`; INPUT is an info record with the `input` target.

use std::fmt;
use std::io::Write;

use env_logger::Env;

/// Log target used for echoed input lines
pub const INPUT_TARGET: &str = "input";

/// Severity tags understood by the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Input,
}

impl LogLevel {
    /// Prefix printed in front of every record of this level
    pub fn tag(&self) -> &'static str {
        match self {
            LogLevel::Info => "[INFO] ",
            LogLevel::Warning => "[WARNING] ",
            LogLevel::Error => "[ERROR] ",
            LogLevel::Input => "[INPUT] ",
        }
    }

    fn from_record(record: &log::Record<'_>) -> Option<Self> {
        if record.target() == INPUT_TARGET {
            return Some(LogLevel::Input);
        }
        match record.level() {
            log::Level::Error => Some(LogLevel::Error),
            log::Level::Warn => Some(LogLevel::Warning),
            log::Level::Info => Some(LogLevel::Info),
            log::Level::Debug | log::Level::Trace => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().trim_end())
    }
}

/// Send a preformatted message at the given level. Fire-and-forget.
pub fn log_message(level: LogLevel, args: fmt::Arguments<'_>) {
    match level {
        LogLevel::Info => log::info!("{}", args),
        LogLevel::Warning => log::warn!("{}", args),
        LogLevel::Error => log::error!("{}", args),
        LogLevel::Input => log::info!(target: INPUT_TARGET, "{}", args),
    }
}

/// Install the process-wide logger.
///
/// Honors `RUST_LOG`; falls back to `info` (or `debug` when `verbose`).
/// Calling this more than once leaves the first logger in place.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };

    let result = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            let tag = match LogLevel::from_record(record) {
                Some(level) => level.tag(),
                None => "[DEBUG] ",
            };
            writeln!(buf, "{}{}", tag, record.args())
        })
        .try_init();

    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tags() {
        assert_eq!(LogLevel::Info.tag(), "[INFO] ");
        assert_eq!(LogLevel::Warning.tag(), "[WARNING] ");
        assert_eq!(LogLevel::Error.tag(), "[ERROR] ");
        assert_eq!(LogLevel::Input.tag(), "[INPUT] ");
        assert_eq!(LogLevel::Warning.to_string(), "[WARNING]");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
