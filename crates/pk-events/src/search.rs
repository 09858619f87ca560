//! Empirical distribution of parking search durations.
//!
//! Consumes explicit search start/end markers, pairs them per vehicle, and
//! reports the probability mass of each observed duration.  A vehicle may
//! have at most one open search at a time.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use pk_core::{Time, VehicleId};

use crate::{EventError, EventResult, MobsimEvent, SearchEvent};

/// One row of the density table: share of searches lasting `search_time`
/// seconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DensityRow {
    pub search_time: u64,
    pub density:     f64,
}

#[derive(Default)]
pub struct SearchTimeDiagnostic {
    started: FxHashMap<VehicleId, Time>,
    samples: Vec<u64>,
}

impl SearchTimeDiagnostic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a search marker.  Protocol violations are returned as errors and
    /// leave the diagnostic unchanged.
    pub fn handle(&mut self, event: &SearchEvent) -> EventResult<()> {
        match *event {
            SearchEvent::Started { time, vehicle } => {
                if let Some(&first) = self.started.get(&vehicle) {
                    return Err(EventError::SearchAlreadyStarted { vehicle, first, again: time });
                }
                self.started.insert(vehicle, time);
            }
            SearchEvent::Ended { time, vehicle } => {
                let start = *self
                    .started
                    .get(&vehicle)
                    .ok_or(EventError::SearchNotStarted(vehicle))?;
                let duration = time
                    .checked_since(start)
                    .ok_or(EventError::NegativeSearchTime { vehicle, start, end: time })?;
                self.started.remove(&vehicle);
                self.samples.push(duration);
            }
        }
        Ok(())
    }

    /// Convenience for a mixed stream: search markers are handled, all other
    /// events are ignored.
    pub fn observe(&mut self, event: &MobsimEvent) -> EventResult<()> {
        match event {
            MobsimEvent::Search(e) => self.handle(e),
            _ => Ok(()),
        }
    }

    /// Completed search durations in seconds, in completion order.
    pub fn samples(&self) -> &[u64] {
        &self.samples
    }

    /// Searches started but not yet ended.
    pub fn open_searches(&self) -> usize {
        self.started.len()
    }

    /// Count per distinct duration divided by the total sample count,
    /// ascending by duration.  Empty if no search completed.
    pub fn density(&self) -> Vec<DensityRow> {
        let total = self.samples.len() as f64;
        let mut counts: BTreeMap<u64, usize> = BTreeMap::new();
        for &s in &self.samples {
            *counts.entry(s).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(search_time, n)| DensityRow { search_time, density: n as f64 / total })
            .collect()
    }
}
