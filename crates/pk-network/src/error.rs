//! Network-subsystem error type.

use thiserror::Error;

use pk_core::SegmentId;

/// Errors produced by `pk-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("segment {0} added twice")]
    DuplicateSegment(SegmentId),

    #[error("segment parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
