//! Replay observer trait and the score signal it receives.

use pk_core::{PersonId, Time};
use pk_events::TrafficEvent;

use crate::{NeighborCount, ParkingState};

/// Category label carried by every parking score signal.
pub const PARKING_SCORE_KIND: &str = "parking";

/// Score contribution for one person, delivered to the scoring pipeline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScoreSignal {
    pub time:   Time,
    pub person: PersonId,
    /// The search penalty of the park event.
    pub amount: f64,
    pub kind:   &'static str,
}

impl ScoreSignal {
    pub fn parking(time: Time, person: PersonId, amount: f64) -> Self {
        Self { time, person, amount, kind: PARKING_SCORE_KIND }
    }
}

/// Callbacks invoked by the replay loop, in replay order.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: total penalty
///
/// ```rust,ignore
/// struct Total(f64);
///
/// impl ReplayObserver for Total {
///     fn on_score(&mut self, signal: &ScoreSignal) {
///         self.0 += signal.amount;
///     }
/// }
/// ```
pub trait ReplayObserver {
    /// A car left `event.segment`; `occupancy` is the count after the
    /// decrement.
    fn on_unpark(&mut self, _event: &TrafficEvent, _occupancy: i32) {}

    /// A car is about to park.  `counts` is the neighbourhood snapshot the
    /// penalty was computed from, before this car's increment.
    fn on_park(&mut self, _event: &TrafficEvent, _counts: &[NeighborCount], _penalty: f64) {}

    /// One signal per park event, right after [`on_park`](Self::on_park).
    fn on_score(&mut self, _signal: &ScoreSignal) {}

    /// Called once after the last event with the final state.
    fn on_replay_end(&mut self, _state: &ParkingState) {}
}

/// A [`ReplayObserver`] that does nothing.
pub struct NoopObserver;

impl ReplayObserver for NoopObserver {}

/// Keeps every emitted signal in memory.
#[derive(Default, Debug)]
pub struct CollectingObserver {
    pub signals: Vec<ScoreSignal>,
}

impl CollectingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_signals(self) -> Vec<ScoreSignal> {
        self.signals
    }
}

impl ReplayObserver for CollectingObserver {
    fn on_score(&mut self, signal: &ScoreSignal) {
        self.signals.push(*signal);
    }
}
