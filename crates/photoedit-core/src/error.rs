#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("pixel buffer holds {actual} pixels, expected {expected}")]
    BufferLength { expected: usize, actual: usize },
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("invalid engine config: {0}")]
    Config(#[from] serde_json::Error),
}
