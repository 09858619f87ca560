//! Search penalty as a function of local parking pressure.
//!
//! The pressure around a segment is the kernel-weighted occupancy ratio
//!
//! ```text
//! ρ = Σ wᵢ · occupancyᵢ / Σ wᵢ · capacityᵢ
//! ```
//!
//! over all neighbours `i` returned by the kernel.  A neighbourhood with no
//! weighted capacity (no spots, or all weights zero) counts as saturated,
//! `ρ = 1`.

use pk_core::SegmentId;

use crate::{PenaltyParams, ReplayResult};

/// Occupancy snapshot of one neighbour at the moment a car parks.
///
/// `occupancy` may exceed `capacity`, and may be negative when a car that was
/// never counted as parked leaves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParkingCount {
    pub occupancy: i32,
    pub capacity:  u32,
    pub weight:    f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NeighborCount {
    pub segment: SegmentId,
    pub count:   ParkingCount,
}

/// Pluggable penalty.
///
/// Implementations must be pure and non-decreasing in every neighbour's
/// occupancy, and must return a finite value for any input the replay can
/// produce, including oversubscribed and zero-capacity neighbourhoods.
pub trait PenaltyFunction: Send + Sync {
    fn calculate_penalty(&self, counts: &[NeighborCount]) -> f64;
}

/// `Σ w·occ / Σ w·cap`, or `None` when the weighted capacity is not positive.
pub fn weighted_occupancy_ratio(counts: &[NeighborCount]) -> Option<f64> {
    let (occ, cap) = counts.iter().fold((0.0, 0.0), |(occ, cap), n| {
        (
            occ + n.count.weight * n.count.occupancy as f64,
            cap + n.count.weight * n.count.capacity as f64,
        )
    });
    (cap > 0.0).then(|| occ / cap)
}

/// Exponential search-time model after Belloche (2015):
///
/// ```text
/// penalty = scale · exp(−exponent · ρ)
/// ```
///
/// With the default `scale = 0.4`, `exponent = −6` the penalty grows from
/// 0.4 on an empty neighbourhood to ≈161 at full occupancy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BellochePenalty {
    scale:       f64,
    exponent:    f64,
    max_penalty: Option<f64>,
}

impl BellochePenalty {
    pub fn new(params: PenaltyParams) -> ReplayResult<Self> {
        params.validate()?;
        Ok(Self {
            scale:       params.scale,
            exponent:    params.exponent,
            max_penalty: params.max_penalty,
        })
    }

    /// Penalty for a given occupancy ratio.  Extreme oversubscription
    /// saturates at `f64::MAX` instead of overflowing to infinity.
    pub fn at_ratio(&self, ratio: f64) -> f64 {
        if self.scale == 0.0 {
            return 0.0;
        }
        let raw = self.scale * (-self.exponent * ratio).exp();
        raw.min(self.max_penalty.unwrap_or(f64::MAX))
    }
}

impl Default for BellochePenalty {
    fn default() -> Self {
        let p = PenaltyParams::default();
        Self { scale: p.scale, exponent: p.exponent, max_penalty: p.max_penalty }
    }
}

impl PenaltyFunction for BellochePenalty {
    fn calculate_penalty(&self, counts: &[NeighborCount]) -> f64 {
        self.at_ratio(weighted_occupancy_ratio(counts).unwrap_or(1.0))
    }
}
