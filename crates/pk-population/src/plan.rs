//! A person's selected plan: alternating activities and legs.
//!
//! A car trip is typically `activity → walk → car → walk → activity`: the
//! walk legs are access and egress to wherever the car is parked.  The
//! activity in front of the first car access walk is therefore where the
//! person's car stands at the start of the day.
//!
//! Routed plans put stage activities such as `"car interaction"` between the
//! walk and the car leg; those belong to the trip, not to the activity chain.

use pk_core::{PersonId, SegmentId, TransportMode};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanElement {
    Activity { kind: String, segment: SegmentId },
    Leg { mode: TransportMode },
}

/// Suffix of routing stage activities such as `"car interaction"`.
pub const STAGE_ACTIVITY_SUFFIX: &str = " interaction";

impl PlanElement {
    /// A routing artefact inside a trip rather than a real activity.
    pub fn is_stage_activity(&self) -> bool {
        match self {
            PlanElement::Activity { kind, .. } => kind.ends_with(STAGE_ACTIVITY_SUFFIX),
            PlanElement::Leg { .. } => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyPlan {
    pub person:   PersonId,
    pub elements: Vec<PlanElement>,
}

impl DailyPlan {
    pub fn new(person: PersonId, elements: Vec<PlanElement>) -> Self {
        Self { person, elements }
    }

    /// Segment of the activity preceding the first car access walk, i.e. the
    /// first walk leg followed by a car leg.
    ///
    /// Stage activities (`"car interaction"` and similar) are skipped: they
    /// neither count as the trip's origin nor separate the walk from the car
    /// leg.
    ///
    /// `None` if the plan has no car access walk or no activity before it.
    pub fn car_access_segment(&self) -> Option<SegmentId> {
        let mut last_activity = None;
        let mut after_walk = false;
        for element in self.elements.iter().filter(|e| !e.is_stage_activity()) {
            match element {
                PlanElement::Activity { segment, .. } => {
                    last_activity = Some(*segment);
                    after_walk = false;
                }
                PlanElement::Leg { mode } => {
                    if after_walk && mode.is_car() {
                        return last_activity;
                    }
                    after_walk = *mode == TransportMode::Walk;
                }
            }
        }
        None
    }
}
