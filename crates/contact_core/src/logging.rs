//! Rolling file logging for directory events.
//!
//! # Responsibility
//! - Route the `log` events emitted by the directory service to a rolling
//!   file under a caller-chosen absolute directory.
//!
//! # Invariants
//! - The backend starts at most once per process.
//! - Repeating `init_logging` with the same level and directory is a no-op;
//!   any other configuration is rejected with `LoggingError::AlreadyActive`.
//! - Events are metadata-only; see `service::contact_service`.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{info, LevelFilter};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const LOG_FILE_BASENAME: &str = "contact_directory";
const ROTATE_AT_BYTES: u64 = 1024 * 1024;
const KEEP_LOG_FILES: usize = 3;

static ACTIVE: OnceCell<ActiveLogging> = OnceCell::new();

struct ActiveLogging {
    level: LevelFilter,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Logging bootstrap failure.
#[derive(Debug)]
pub enum LoggingError {
    /// Level is not a `log` level name.
    UnknownLevel(String),
    /// Directory is empty or not absolute.
    InvalidDir(String),
    /// Directory could not be created.
    CreateDir(PathBuf, std::io::Error),
    /// Logging already runs with another level or directory.
    AlreadyActive { level: LevelFilter, dir: PathBuf },
    /// The flexi_logger backend refused to start.
    Backend(flexi_logger::FlexiLoggerError),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLevel(level) => write!(f, "unknown log level `{level}`"),
            Self::InvalidDir(dir) => write!(f, "log dir must be an absolute path, got `{dir}`"),
            Self::CreateDir(dir, err) => {
                write!(f, "cannot create log dir `{}`: {err}", dir.display())
            }
            Self::AlreadyActive { level, dir } => write!(
                f,
                "logging already active at level `{level}` in `{}`",
                dir.display()
            ),
            Self::Backend(err) => write!(f, "logger backend failed: {err}"),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDir(_, err) => Some(err),
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}

/// Starts file logging at `level` (a `log` level name, any case) in `log_dir`.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), LoggingError> {
    let level = LevelFilter::from_str(level.trim())
        .map_err(|_| LoggingError::UnknownLevel(level.to_string()))?;
    let dir = absolute_dir(log_dir)?;

    let active = ACTIVE.get_or_try_init(|| start(level, &dir))?;
    if active.level != level || active.dir != dir {
        return Err(LoggingError::AlreadyActive {
            level: active.level,
            dir: active.dir.clone(),
        });
    }
    Ok(())
}

/// Default level for the current build: `debug` in debug builds, else `info`.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn absolute_dir(log_dir: &str) -> Result<PathBuf, LoggingError> {
    let path = Path::new(log_dir.trim());
    if log_dir.trim().is_empty() || !path.is_absolute() {
        return Err(LoggingError::InvalidDir(log_dir.to_string()));
    }
    Ok(path.to_path_buf())
}

fn start(level: LevelFilter, dir: &Path) -> Result<ActiveLogging, LoggingError> {
    std::fs::create_dir_all(dir).map_err(|err| LoggingError::CreateDir(dir.to_path_buf(), err))?;

    let handle = Logger::with(LogSpecification::builder().default(level).build())
        .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(LoggingError::Backend)?;

    info!(
        "event=logging_init module=directory status=ok level={level} version={}",
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogging {
        level,
        dir: dir.to_path_buf(),
        _handle: handle,
    })
}
