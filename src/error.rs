use std::io;

use thiserror::Error;

/// Failures that end the program before the player quits.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
