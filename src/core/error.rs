//! Error types for the application

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No devices to analyze")]
    EmptyDeviceList,

    #[error("Input closed before a value was entered")]
    InputClosed,
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
