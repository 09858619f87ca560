use thiserror::Error;

use pk_core::SegmentId;

#[derive(Debug, Error, PartialEq)]
pub enum ReplayError {
    /// An event or kernel neighbour names a segment the table does not
    /// know: the event stream and the network disagree.
    #[error("segment {0} is not part of the network")]
    UnknownSegment(SegmentId),

    #[error("capacity initializer produced no entry for segment {0}")]
    MissingInitialCapacity(SegmentId),

    #[error("initial occupancy {initial} of segment {segment} exceeds the occupancy counter range")]
    InitialOccupancyOutOfRange { segment: SegmentId, initial: u32 },

    #[error("parking configuration error: {0}")]
    Config(String),
}

pub type ReplayResult<T> = Result<T, ReplayError>;
