use crate::{OccupancySnapshotRow, OutputResult, ScoreRow};

/// Sink for replay output.
///
/// [`ReplayOutputObserver`](crate::ReplayOutputObserver) stores the first
/// error instead of propagating it, since observer hooks return nothing.
pub trait OutputWriter {
    fn write_score(&mut self, row: &ScoreRow) -> OutputResult<()>;

    fn write_occupancy(&mut self, rows: &[OccupancySnapshotRow]) -> OutputResult<()>;

    /// Flush and close.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
