//! Capacity initializers: `(capacity, initial occupancy)` per segment before
//! the replay starts.
//!
//! Every initializer returns exactly one entry per segment of the table, with
//! capacity taken from the segment's spot counts (missing counts are zero).
//! They differ only in the initial occupancy:
//!
//! | Initializer              | Initial occupancy                                 |
//! |--------------------------|---------------------------------------------------|
//! | [`ZeroInitializer`]      | 0 everywhere                                      |
//! | [`EventBasedInitializer`]| persons whose first unpark happens on the segment |
//! | [`PlanBasedInitializer`] | persons whose first car access walk starts there  |
//!
//! Initial occupancy may exceed capacity; it is never clamped.

use rustc_hash::{FxHashMap, FxHashSet};

use pk_core::{PersonId, SegmentId};
use pk_events::FrozenEvents;
use pk_network::SegmentTable;
use pk_population::DailyPlan;

use crate::{InitializerKind, ReplayError, ReplayResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct InitialCapacity {
    pub capacity: u32,
    pub initial:  u32,
}

pub type InitialCapacities = FxHashMap<SegmentId, InitialCapacity>;

/// Pluggable start-of-day occupancy estimate.
pub trait CapacityInitializer: Send + Sync {
    fn initialize(&self, segments: &SegmentTable, events: &FrozenEvents) -> InitialCapacities;
}

/// One entry per segment; `initial` looked up in `parked`, default zero.
fn per_segment(segments: &SegmentTable, parked: &FxHashMap<SegmentId, u32>) -> InitialCapacities {
    segments
        .iter()
        .map(|s| {
            let initial = parked.get(&s.id).copied().unwrap_or(0);
            (s.id, InitialCapacity { capacity: s.capacity(), initial })
        })
        .collect()
}

// ── Zero ──────────────────────────────────────────────────────────────────────

/// All segments start empty.
pub struct ZeroInitializer;

impl CapacityInitializer for ZeroInitializer {
    fn initialize(&self, segments: &SegmentTable, _events: &FrozenEvents) -> InitialCapacities {
        per_segment(segments, &FxHashMap::default())
    }
}

// ── Event based ───────────────────────────────────────────────────────────────

/// A person's first car departure of the day reveals where the car stood
/// overnight.
///
/// The unpark stream is time ordered, so the first occurrence of a person is
/// their earliest departure.
pub struct EventBasedInitializer;

impl CapacityInitializer for EventBasedInitializer {
    fn initialize(&self, segments: &SegmentTable, events: &FrozenEvents) -> InitialCapacities {
        let mut seen: FxHashSet<PersonId> = FxHashSet::default();
        let mut parked: FxHashMap<SegmentId, u32> = FxHashMap::default();
        for e in events.unparks() {
            if seen.insert(e.person) {
                *parked.entry(e.segment).or_default() += 1;
            }
        }
        per_segment(segments, &parked)
    }
}

// ── Plan based ────────────────────────────────────────────────────────────────

/// Start-of-day occupancy from selected plans rather than events.
///
/// Counts are derived once at construction, so the initializer can be
/// reused across runs over the same population.
pub struct PlanBasedInitializer {
    parked: FxHashMap<SegmentId, u32>,
}

impl PlanBasedInitializer {
    pub fn new(plans: &[DailyPlan]) -> Self {
        let mut parked: FxHashMap<SegmentId, u32> = FxHashMap::default();
        for segment in plans.iter().filter_map(DailyPlan::car_access_segment) {
            *parked.entry(segment).or_default() += 1;
        }
        Self { parked }
    }
}

impl CapacityInitializer for PlanBasedInitializer {
    fn initialize(&self, segments: &SegmentTable, _events: &FrozenEvents) -> InitialCapacities {
        per_segment(segments, &self.parked)
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

/// Closed set of the built-in initializers, for configuration-driven setup.
pub enum Initializer {
    Zero(ZeroInitializer),
    EventBased(EventBasedInitializer),
    PlanBased(PlanBasedInitializer),
}

impl Initializer {
    /// `plans` is required for [`InitializerKind::PlanBased`] and ignored
    /// otherwise.
    pub fn build(kind: InitializerKind, plans: Option<&[DailyPlan]>) -> ReplayResult<Self> {
        match kind {
            InitializerKind::Zero       => Ok(Initializer::Zero(ZeroInitializer)),
            InitializerKind::EventBased => Ok(Initializer::EventBased(EventBasedInitializer)),
            InitializerKind::PlanBased  => plans
                .map(|p| Initializer::PlanBased(PlanBasedInitializer::new(p)))
                .ok_or_else(|| ReplayError::Config("plan_based initializer needs a plans file".into())),
        }
    }
}

impl CapacityInitializer for Initializer {
    fn initialize(&self, segments: &SegmentTable, events: &FrozenEvents) -> InitialCapacities {
        match self {
            Initializer::Zero(i)       => i.initialize(segments, events),
            Initializer::EventBased(i) => i.initialize(segments, events),
            Initializer::PlanBased(i)  => i.initialize(segments, events),
        }
    }
}
