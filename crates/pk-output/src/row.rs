//! Flat rows as they appear in the output files.

use pk_core::Time;
use pk_occupancy::{OccupancyRow, ScoreSignal};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRow {
    /// Seconds since simulation start.
    pub time:   u64,
    pub person: u32,
    pub amount: f64,
    pub kind:   &'static str,
}

impl From<&ScoreSignal> for ScoreRow {
    fn from(s: &ScoreSignal) -> Self {
        Self { time: s.time.secs(), person: s.person.0, amount: s.amount, kind: s.kind }
    }
}

/// One segment's state at the end of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancySnapshotRow {
    /// Time of the last replayed event; 0 for an empty run.
    pub time:      u64,
    pub segment:   u32,
    pub capacity:  u32,
    /// Can be negative, see `ParkingState`.
    pub occupancy: i32,
}

impl OccupancySnapshotRow {
    pub fn at(time: Option<Time>, row: &OccupancyRow) -> Self {
        Self {
            time:      time.map_or(0, Time::secs),
            segment:   row.segment.0,
            capacity:  row.capacity,
            occupancy: row.occupancy,
        }
    }
}
