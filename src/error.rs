use thiserror::Error;

/// Errors produced while talking to the browser or decoding playlist data
#[derive(Debug, Error)]
pub enum ProgressError {
    /// Failed to launch a browser instance
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Failed to connect to an existing browser instance
    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    /// Tab enumeration or activation failed
    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    /// No open tab matches the expected video platform host
    #[error("No bilibili tab found: {0}")]
    WrongPage(String),

    /// JavaScript evaluation in the page failed
    #[error("JavaScript evaluation failed: {0}")]
    EvaluationFailed(String),

    /// The in-page extraction script reported a fault
    #[error("Extraction failed in page: {0}")]
    ExtractionFailed(String),

    /// The extraction reply matched neither the snapshot nor the error shape
    #[error("Invalid extraction reply: {0}")]
    InvalidReply(String),

    /// The extraction did not complete within the configured timeout
    #[error("Extraction timed out after {0} ms")]
    TimedOut(u64),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, ProgressError>;
