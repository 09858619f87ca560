//! `ReplayOutputObserver<W>`: bridges `ReplayObserver` to an `OutputWriter`.

use pk_core::Time;
use pk_events::TrafficEvent;
use pk_occupancy::{ParkingState, ReplayObserver, ScoreSignal};

use crate::row::{OccupancySnapshotRow, ScoreRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`ReplayObserver`] that writes every score signal and the final
/// occupancy snapshot to any [`OutputWriter`].
///
/// Observer hooks cannot fail, so the first write error is kept and later
/// ones are dropped.  Check [`take_error`][Self::take_error] after the run.
pub struct ReplayOutputObserver<W: OutputWriter> {
    writer:     W,
    last_time:  Option<Time>,
    written:    u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ReplayOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_time: None, written: 0, last_error: None }
    }

    /// `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Score rows written so far.
    pub fn scores_written(&self) -> u64 {
        self.written
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                log::error!("replay output failed: {e}");
                self.last_error = Some(e);
            }
        }
    }

    fn seen(&mut self, time: Time) {
        self.last_time = Some(self.last_time.map_or(time, |t| t.max(time)));
    }
}

impl<W: OutputWriter> ReplayObserver for ReplayOutputObserver<W> {
    fn on_unpark(&mut self, event: &TrafficEvent, _occupancy: i32) {
        self.seen(event.time);
    }

    fn on_score(&mut self, signal: &ScoreSignal) {
        self.seen(signal.time);
        let result = self.writer.write_score(&ScoreRow::from(signal));
        if result.is_ok() {
            self.written += 1;
        }
        self.store_err(result);
    }

    fn on_replay_end(&mut self, state: &ParkingState) {
        let rows: Vec<OccupancySnapshotRow> = state
            .snapshot()
            .iter()
            .map(|r| OccupancySnapshotRow::at(self.last_time, r))
            .collect();
        let result = self.writer.write_occupancy(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
