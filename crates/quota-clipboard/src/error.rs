use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The backend cannot reach a clipboard at all.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The backend reached a clipboard but the write was rejected.
    #[error("clipboard write failed: {0}")]
    Write(String),
}
