use std::io;

use log::SetLoggerError;
use thiserror::Error;

use crate::settings::SettingsError;

/// Everything that can stop the game from starting or keep it from running.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("logger already installed: {0}")]
    Logger(#[from] SetLoggerError),
    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}
