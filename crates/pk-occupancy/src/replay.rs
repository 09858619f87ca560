//! `ParkingReplay` and its run state machine.
//!
//! # States
//!
//! ```text
//! ParkingReplay ──initialize(FrozenEvents)──▶ ReplayRun ──replay()──▶ ReplayOutcome
//!     idle                                      initialized              done
//! ```
//!
//! `ParkingReplay` holds only read-only collaborators and can start any
//! number of runs.  `ReplayRun::replay` consumes the run, so a run cannot be
//! replayed twice, and `FrozenEvents` can only come from a frozen recorder
//! (or explicitly pre-sorted streams).
//!
//! # Time stepping
//!
//! The loop jumps from one event timestamp to the next instead of visiting
//! every second in `[0, T]`; seconds without events change nothing.  At each
//! visited `t` all unparks with `time <= t` are applied before any park with
//! `time <= t`.  With correctly ordered streams this is exactly "all events at
//! `t`"; an out-of-order event is applied at the next visited step and
//! logged once.

use pk_core::Time;
use pk_events::{FrozenEvents, TrafficEvent};
use pk_network::{Kernel, KernelFunction, SegmentTable};

use crate::{
    BellochePenalty, CapacityInitializer, CollectingObserver, ParkingConfig, ParkingState,
    PenaltyFunction, ReplayError, ReplayObserver, ReplayResult, ScoreSignal,
};

// ── ParkingReplay ─────────────────────────────────────────────────────────────

/// Read-only collaborators of a replay: the network, a kernel, a penalty
/// function, and the kernel radius.
pub struct ParkingReplay<'n, K: KernelFunction, P: PenaltyFunction> {
    segments: &'n SegmentTable,
    kernel:   K,
    penalty:  P,
    radius:   f64,
}

impl<'n, K: KernelFunction, P: PenaltyFunction> ParkingReplay<'n, K, P> {
    pub fn new(segments: &'n SegmentTable, kernel: K, penalty: P, radius: f64) -> Self {
        Self { segments, kernel, penalty, radius }
    }

    pub fn segments(&self) -> &SegmentTable {
        self.segments
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Initialize and replay one run.
    pub fn run<I, O>(
        &self,
        events:      FrozenEvents,
        initializer: &I,
        observer:    &mut O,
    ) -> ReplayResult<ReplayOutcome>
    where
        I: CapacityInitializer + ?Sized,
        O: ReplayObserver,
    {
        ReplayRun::initialize(self, events, initializer)?.replay(observer)
    }

    /// Replay independent runs (e.g. one per simulation iteration) against
    /// the same network, each from a fresh state.  Results are in input
    /// order.
    ///
    /// With the `parallel` Cargo feature the runs execute on Rayon's thread
    /// pool; each run is still single-threaded internally.
    pub fn replay_iterations<I>(
        &self,
        iterations:  Vec<FrozenEvents>,
        initializer: &I,
    ) -> ReplayResult<Vec<IterationReplay>>
    where
        I: CapacityInitializer + ?Sized,
    {
        let one = |events: FrozenEvents| -> ReplayResult<IterationReplay> {
            let mut observer = CollectingObserver::new();
            let outcome = self.run(events, initializer, &mut observer)?;
            Ok(IterationReplay { outcome, signals: observer.into_signals() })
        };

        #[cfg(not(feature = "parallel"))]
        {
            iterations.into_iter().map(one).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            iterations.into_par_iter().map(one).collect()
        }
    }
}

impl<'n> ParkingReplay<'n, Kernel, BellochePenalty> {
    /// Build the configured kernel and penalty over `segments`.
    pub fn from_config(segments: &'n SegmentTable, config: &ParkingConfig) -> ReplayResult<Self> {
        config.validate()?;
        Ok(Self::new(
            segments,
            Kernel::build(config.kernel, segments),
            BellochePenalty::new(config.penalty)?,
            config.kernel_radius_m,
        ))
    }
}

// ── ReplayRun ─────────────────────────────────────────────────────────────────

/// An initialized run: occupancy seeded, events waiting.
pub struct ReplayRun<'r, 'n, K: KernelFunction, P: PenaltyFunction> {
    replay:    &'r ParkingReplay<'n, K, P>,
    state:     ParkingState,
    unparks:   Vec<TrafficEvent>,
    parks:     Vec<TrafficEvent>,
    last_time: Option<Time>,
}

impl<'r, 'n, K: KernelFunction, P: PenaltyFunction> ReplayRun<'r, 'n, K, P> {
    pub fn initialize<I>(
        replay:      &'r ParkingReplay<'n, K, P>,
        events:      FrozenEvents,
        initializer: &I,
    ) -> ReplayResult<Self>
    where
        I: CapacityInitializer + ?Sized,
    {
        let initial = initializer.initialize(replay.segments, &events);
        let state = ParkingState::new(replay.segments, &initial)?;
        log::debug!(
            "parking state initialized: {} segments, {} vehicles parked at start",
            state.len(),
            state.total_occupancy(),
        );
        let last_time = events.last_time();
        let (unparks, parks) = events.drain();
        Ok(Self { replay, state, unparks, parks, last_time })
    }

    /// State as seeded by the initializer.
    pub fn state(&self) -> &ParkingState {
        &self.state
    }

    /// Apply every event in order, reporting to `observer`.
    pub fn replay<O: ReplayObserver>(mut self, observer: &mut O) -> ReplayResult<ReplayOutcome> {
        let last_time = self.last_time;
        log::info!(
            "replaying {} unparks and {} parks on {} segments (last event at {})",
            self.unparks.len(),
            self.parks.len(),
            self.state.len(),
            last_time.unwrap_or(Time::ZERO),
        );

        let unparks = std::mem::take(&mut self.unparks);
        let parks = std::mem::take(&mut self.parks);
        let (mut u, mut p) = (0, 0);
        let mut cursor = Cursor::default();
        let mut signals = 0;

        loop {
            let next_u = unparks.get(u).map(|e| e.time);
            let next_p = parks.get(p).map(|e| e.time);
            let Some(t) = next_u.into_iter().chain(next_p).min() else {
                break;
            };

            while let Some(e) = unparks.get(u).filter(|e| e.time <= t) {
                cursor.advance(e.time);
                self.apply_unpark(e, &mut cursor, observer)?;
                u += 1;
            }
            while let Some(e) = parks.get(p).filter(|e| e.time <= t) {
                cursor.advance(e.time);
                self.apply_park(e, observer)?;
                signals += 1;
                p += 1;
            }
        }
        log::debug!("event streams drained at {}", cursor.now.unwrap_or(Time::ZERO));

        observer.on_replay_end(&self.state);
        log::info!(
            "replay finished: {} score signals, {} segments oversubscribed",
            signals,
            self.state.oversubscribed(),
        );

        Ok(ReplayOutcome { state: self.state, signals_emitted: signals, last_time })
    }

    fn apply_unpark<O: ReplayObserver>(
        &mut self,
        event:    &TrafficEvent,
        cursor:   &mut Cursor,
        observer: &mut O,
    ) -> ReplayResult<()> {
        let occupancy = self.state.unpark(event.segment)?;
        if occupancy < 0 && !cursor.warned_negative {
            cursor.warned_negative = true;
            log::warn!(
                "occupancy of {} dropped below zero at {}; vehicles parked at start are not \
                 covered by the capacity initializer",
                event.segment,
                event.time,
            );
        }
        observer.on_unpark(event, occupancy);
        Ok(())
    }

    // Score against the state before this car's increment.
    fn apply_park<O: ReplayObserver>(&mut self, event: &TrafficEvent, observer: &mut O) -> ReplayResult<()> {
        let replay = self.replay;
        let segment = replay
            .segments
            .get(event.segment)
            .ok_or(ReplayError::UnknownSegment(event.segment))?;

        let weights = replay.kernel.calculate_kernel(segment, replay.radius);
        let counts = self.state.counts(&weights)?;
        let penalty = replay.penalty.calculate_penalty(&counts);

        observer.on_park(event, &counts, penalty);
        observer.on_score(&ScoreSignal::parking(event.time, event.person, penalty));

        self.state.park(event.segment)?;
        Ok(())
    }
}

/// Latest applied event time plus one-shot warning flags.
#[derive(Default)]
struct Cursor {
    now:             Option<Time>,
    warned_order:    bool,
    warned_negative: bool,
}

impl Cursor {
    fn advance(&mut self, t: Time) {
        if let Some(now) = self.now {
            if t < now && !self.warned_order {
                self.warned_order = true;
                log::warn!("event at {t} arrived after {now}; event streams are not time ordered");
            }
        }
        self.now = Some(self.now.map_or(t, |now| now.max(t)));
    }
}

// ── Outcome ───────────────────────────────────────────────────────────────────

/// A finished run.
#[derive(Debug)]
pub struct ReplayOutcome {
    /// Occupancy after the last event.
    pub state:           ParkingState,
    pub signals_emitted: usize,
    /// `max(last unpark, last park)`; `None` for a run without events.
    pub last_time:       Option<Time>,
}

/// Outcome plus the signals of one run of
/// [`ParkingReplay::replay_iterations`].
#[derive(Debug)]
pub struct IterationReplay {
    pub outcome: ReplayOutcome,
    pub signals: Vec<ScoreSignal>,
}
