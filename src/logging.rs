//! Diagnostic logging setup
//!
//! The TUI owns the terminal, so log records go to a file while the login
//! screen is up. Headless commands log to stderr.

use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

/// Where log records are written.
#[derive(Debug, Clone, Copy)]
pub enum LogSink<'a> {
    /// Append to the file at the given path, creating parent directories.
    File(&'a Path),
    Stderr,
}

/// Global threshold set by `RUST_LOG`, if its first directive names no module.
pub fn get_rust_log_level() -> Option<LogLevel> {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    global_rust_log_level(&rust_log)
}

/// `None` when the first directive is `module=level`; env_logger then applies
/// the module filters without a global override.
pub fn global_rust_log_level(rust_log: &str) -> Option<LogLevel> {
    let first = rust_log.split(',').next().unwrap_or(rust_log);
    if first.contains('=') {
        None
    } else {
        Some(parse_rust_log_level(first))
    }
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

/// Installs the global logger.
///
/// Module filters in `RUST_LOG` are honoured by env_logger itself. A bare
/// leading level sets the global threshold through [`get_rust_log_level`], so
/// a malformed value still yields `info`.
///
/// # Errors
/// Returns an `std::io::Error` if the log file cannot be opened.
pub fn init(sink: LogSink<'_>) -> Result<(), std::io::Error> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = get_rust_log_level() {
        builder.filter_level(level.into());
    }
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    match sink {
        LogSink::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        LogSink::Stderr => {
            builder.target(Target::Stderr);
        }
    }

    // A logger may already be installed (e.g. by a test harness); keep it.
    let _ = builder.try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("info"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("warn"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("warning"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("error"), LogLevel::Error);
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);

        // Test with module-specific formats
        assert_eq!(parse_rust_log_level("vhs_login=debug"), LogLevel::Debug);
        assert_eq!(
            parse_rust_log_level("vhs_login=debug,hyper=info"),
            LogLevel::Debug
        );

        // Test default
        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
    }

    #[test]
    // Module-scoped directives must not raise the level of every crate.
    fn test_global_level_only_from_bare_directive() {
        assert_eq!(global_rust_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(
            global_rust_log_level("warn,hyper=debug"),
            Some(LogLevel::Warn)
        );
        assert_eq!(global_rust_log_level("invalid"), Some(LogLevel::Info));
        assert_eq!(global_rust_log_level("hyper=debug"), None);
        assert_eq!(global_rust_log_level("vhs_login=trace,info"), None);
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Error > LogLevel::Warn);
        assert!(LogLevel::Warn > LogLevel::Info);
        assert!(LogLevel::Debug > LogLevel::Trace);
        assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::Warn);
    }

    #[test]
    // Initializing with a file sink creates the log file and its directories.
    fn test_init_creates_log_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("login.log");

        init(LogSink::File(&path)).unwrap();

        assert!(path.exists(), "Log file was not created");
    }
}
