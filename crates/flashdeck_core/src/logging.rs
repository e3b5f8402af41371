//! Core logging bootstrap.
//!
//! # Responsibility
//! - Initialize rolling file logs once per process.
//! - Capture panics as sanitized log events.
//!
//! # Invariants
//! - Initialization is idempotent for identical settings.
//! - Initialization never panics.
//! - Reconfiguration with a different level or directory is rejected.
//! - Card text is never written to logs; events carry counts, positions and
//!   group names only.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "flashdeck";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

/// Normalized logging parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    level: &'static str,
    log_dir: PathBuf,
}

impl LogSettings {
    fn parse(level: &str, log_dir: &str) -> Result<Self, String> {
        Ok(Self {
            level: normalize_level(level)?,
            log_dir: normalize_log_dir(log_dir)?,
        })
    }

    /// Rejects settings that differ from the active ones.
    fn ensure_matches(&self, active: &LogSettings) -> Result<(), String> {
        if active.log_dir != self.log_dir {
            return Err(format!(
                "logging already initialized at `{}`; refusing to switch to `{}`",
                active.log_dir.display(),
                self.log_dir.display()
            ));
        }
        if active.level != self.level {
            return Err(format!(
                "logging already initialized with level `{}`; refusing to switch to `{}`",
                active.level, self.level
            ));
        }
        Ok(())
    }
}

struct ActiveLogger {
    settings: LogSettings,
    _handle: LoggerHandle,
}

/// Initializes rolling file logging.
///
/// `level` is one of `trace|debug|info|warn|error` (case-insensitive,
/// `warning` accepted). `log_dir` must be absolute and is created if missing.
///
/// # Errors
/// - Unsupported level, empty or relative directory.
/// - Directory creation or logger backend failure.
/// - Logging already active with different settings.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let requested = LogSettings::parse(level, log_dir)?;

    if let Some(active) = ACTIVE_LOGGER.get() {
        return requested.ensure_matches(&active.settings);
    }

    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(requested.clone()))?;
    requested.ensure_matches(&active.settings)
}

/// Returns `(level, log_dir)` of active logging, `None` before init.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE_LOGGER
        .get()
        .map(|active| (active.settings.level, active.settings.log_dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(settings: LogSettings) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(&settings.log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            settings.log_dir.display()
        )
    })?;

    let handle = Logger::try_with_str(settings.level)
        .map_err(|err| format!("invalid log level `{}`: {err}", settings.level))?
        .log_to_file(
            FileSpec::default()
                .directory(settings.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook_once();

    info!(
        "event=logging_init module=core status=ok platform={} build_mode={} version={} level={} log_dir={}",
        std::env::consts::OS,
        build_mode(),
        env!("CARGO_PKG_VERSION"),
        settings.level,
        settings.log_dir.display()
    );

    Ok(ActiveLogger {
        settings,
        _handle: handle,
    })
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

fn build_mode() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

fn install_panic_hook_once() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location,
            panic_payload_summary(panic_info)
        );
        previous_hook(panic_info);
    }));
}

fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = info
        .payload()
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());

    sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

/// Flattens newlines and caps length; panic payloads may embed card text.
fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::{normalize_level, normalize_log_dir, sanitize_message, LogSettings};
    use std::path::PathBuf;

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level(" Debug ").unwrap(), "debug");
        assert_eq!(normalize_level("WARNING").unwrap(), "warn");
        assert!(normalize_level("verbose").is_err());
    }

    #[test]
    fn normalize_log_dir_rejects_empty_and_relative_paths() {
        assert!(normalize_log_dir("   ").unwrap_err().contains("empty"));
        assert!(normalize_log_dir("logs/dev")
            .unwrap_err()
            .contains("absolute"));
    }

    #[test]
    fn settings_conflicts_are_reported() {
        let active = LogSettings {
            level: "info",
            log_dir: PathBuf::from("/tmp/flashdeck-a"),
        };
        let same = active.clone();
        assert!(same.ensure_matches(&active).is_ok());

        let other_level = LogSettings {
            level: "debug",
            ..active.clone()
        };
        assert!(other_level
            .ensure_matches(&active)
            .unwrap_err()
            .contains("level"));

        let other_dir = LogSettings {
            level: "info",
            log_dir: PathBuf::from("/tmp/flashdeck-b"),
        };
        assert!(other_dir
            .ensure_matches(&active)
            .unwrap_err()
            .contains("refusing to switch"));
    }

    #[test]
    fn sanitize_message_flattens_and_truncates() {
        let sanitized = sanitize_message("front\nback\rtext", 8);
        assert_eq!(sanitized, "front ba...");
    }
}
