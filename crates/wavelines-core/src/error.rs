pub type WaveResult<T> = Result<T, WaveError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WaveError {
    #[error("invalid wave interval index {0} (expected 0..4)")]
    InvalidIntervalIndex(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("dom error: {0}")]
    Dom(String),

    #[error("line count mismatch: {waves} waves for {lines} lines")]
    LineCountMismatch { waves: usize, lines: usize },
}

impl WaveError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingElement(what.into())
    }

    pub fn dom(msg: impl Into<String>) -> Self {
        Self::Dom(msg.into())
    }
}
