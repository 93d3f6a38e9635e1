use thiserror::Error;

#[derive(Debug, Error)]
pub enum McssError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("magnitude bound must be positive, got {0}")]
    InvalidMagnitude(i32),
    #[error("start ({start}) must be less than end ({end})")]
    InvalidRange { start: u64, end: u64 },
}
