//! Logger initialization.
//!
//! `env_logger` with two output formats: colored plain text for terminals and
//! one JSON object per line for log shippers.

use std::io::Write;

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first so per-module directives still work; the `level`
/// argument then overrides the global and `catsite` levels.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Use RUST_LOG for quick debugging (no CLI args needed)
/// RUST_LOG=debug catsite --auth-secret s3cret
///
/// # Override with CLI args (takes precedence)
/// RUST_LOG=debug catsite --auth-secret s3cret --log-level info
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=catsite::classify=trace,reqwest=info catsite --auth-secret s3cret
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // scraper's HTML parser is extremely chatty below error
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    // sqlx logs every statement at info
    builder.filter_module("sqlx", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("catsite", level);

    let plain = matches!(format, LogFormat::Plain);
    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    render_json(
                        chrono::Utc::now().timestamp_millis(),
                        record.level(),
                        record.target(),
                        &record.args().to_string(),
                    )
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.target().cyan(),
                    colored_level(record.level()),
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;
    if plain {
        // Keep colors when stderr is redirected to a file or journald
        colored::control::set_override(true);
    }

    Ok(())
}

fn colored_level(level: Level) -> ColoredString {
    let text = level.to_string();
    match level {
        Level::Error => text.red().bold(),
        Level::Warn => text.yellow(),
        Level::Info => text.green(),
        Level::Debug => text.blue(),
        Level::Trace => text.purple(),
    }
}

/// One JSON log line. The message is escaped through serde_json.
fn render_json(ts_millis: i64, level: Level, target: &str, message: &str) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": level.as_str(),
        "target": target,
        "msg": message,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json_is_parseable() {
        let line = render_json(1_700_000_000_000, Level::Warn, "catsite::llm", "model said \"hi\"\n");
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["ts"], 1_700_000_000_000i64);
        assert_eq!(value["level"], "WARN");
        assert_eq!(value["target"], "catsite::llm");
        assert_eq!(value["msg"], "model said \"hi\"\n");
        assert!(!line.contains('\n'), "one record per line");
    }

    #[test]
    fn test_colored_level_keeps_level_text() {
        colored::control::set_override(false);
        assert_eq!(colored_level(Level::Error).to_string(), "ERROR");
        assert_eq!(colored_level(Level::Trace).to_string(), "TRACE");
    }

    #[test]
    fn test_init_logger_does_not_panic_when_called_twice() {
        // Only the first initialization in a process can succeed
        let first = init_logger_with(LevelFilter::Info, LogFormat::Json);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Plain);
        assert!(first.is_ok() || second.is_err());
        assert!(second.is_err());
    }
}
