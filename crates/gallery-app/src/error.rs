//! Application errors.

use gallery_core::config::ConfigError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    Usage(String),

    #[error("Game loop already running")]
    AlreadyRunning,

    #[error("Game loop not running")]
    NotRunning,

    #[error("Game loop thread panicked")]
    LoopPanicked,

    #[error("Shared state lock poisoned")]
    Poisoned,
}
