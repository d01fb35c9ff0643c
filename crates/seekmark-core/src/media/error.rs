//! Media error types

use thiserror::Error;

/// Errors raised by a media element
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("media command queue is full")]
    QueueFull,

    #[error("media clock is not running")]
    Disconnected,

    #[error("invalid seek target: {0}")]
    InvalidTime(f64),

    #[error("failed to start media clock thread: {0}")]
    Spawn(#[from] std::io::Error),
}
