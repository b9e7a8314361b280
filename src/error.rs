//! Application error type.

/// Errors raised while configuring or running the server.
///
/// Shell rendering is infallible; nothing here originates from a shell.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid layout tokens: {0}")]
    InvalidLayout(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
