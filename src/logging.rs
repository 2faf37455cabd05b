use std::fs::{self, File};
use std::path::{Path, PathBuf};

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::error::AppError;

const APP_DIR_NAME: &str = "classic-snake";
const LOG_FILE_NAME: &str = "classic-snake.log";

/// Returns the platform-correct log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Routes `log` records to `path`, truncating any previous run's log.
///
/// The terminal belongs to the game while it runs, so records never go to
/// stdout or stderr.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file)?;
    Ok(())
}
