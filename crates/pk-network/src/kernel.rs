//! Spatial kernels: which neighbouring segments contribute to the parking
//! pressure felt on a segment, and with what weight.
//!
//! # Spatial index
//!
//! Both kernels index segment centroids in an R-tree (via `rstar`) and answer
//! disk queries with `locate_within_distance`, which is inclusive: a centroid
//! at exactly `radius` from the query centre is part of the neighbourhood.
//! The query segment is always at distance zero and therefore always present.
//!
//! # Adding a kernel
//!
//! Implement [`KernelFunction`].  Callers only see [`KernelWeights`], so a
//! new weighting scheme never touches the replay loop.

use rstar::RTree;
use rstar::primitives::GeomWithData;

use pk_core::{Coord, SegmentId};

use crate::{Segment, SegmentTable};

// ── KernelWeights ─────────────────────────────────────────────────────────────

/// Per-query neighbour weights, sorted by `SegmentId`.
///
/// Sorting fixes the summation order downstream, so penalties are
/// bit-for-bit reproducible regardless of R-tree traversal order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KernelWeights(Vec<(SegmentId, f64)>);

impl KernelWeights {
    pub fn from_unsorted(mut weights: Vec<(SegmentId, f64)>) -> Self {
        weights.sort_unstable_by_key(|&(id, _)| id);
        Self(weights)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: SegmentId) -> Option<f64> {
        self.0
            .binary_search_by_key(&id, |&(s, _)| s)
            .ok()
            .map(|i| self.0[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, f64)> + '_ {
        self.0.iter().copied()
    }

    pub fn total_weight(&self) -> f64 {
        self.0.iter().map(|&(_, w)| w).sum()
    }
}

// ── KernelFunction ────────────────────────────────────────────────────────────

/// Pluggable neighbourhood weighting.
///
/// Implementations must return non-negative weights and include `segment`
/// itself.  They must be `Send + Sync` so one kernel can serve several replay
/// runs at once.
pub trait KernelFunction: Send + Sync {
    fn calculate_kernel(&self, segment: &Segment, radius: f64) -> KernelWeights;
}

// ── Shared centroid index ─────────────────────────────────────────────────────

type CentroidEntry = GeomWithData<[f64; 2], SegmentId>;

/// R-tree over segment centroids.
struct CentroidIndex {
    tree: RTree<CentroidEntry>,
}

impl CentroidIndex {
    fn build(table: &SegmentTable) -> Self {
        let entries: Vec<CentroidEntry> = table
            .iter()
            .map(|s| GeomWithData::new(s.centroid.to_array(), s.id))
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    /// All `(id, distance)` pairs with `distance <= radius`.
    fn within(&self, center: Coord, radius: f64) -> impl Iterator<Item = (SegmentId, f64)> + '_ {
        let radius = radius.max(0.0);
        self.tree
            .locate_within_distance(center.to_array(), radius * radius)
            .map(move |e| {
                let [x, y] = *e.geom();
                (e.data, center.distance(Coord::new(x, y)))
            })
    }
}

// ── ConstantKernel ────────────────────────────────────────────────────────────

/// Weight 1.0 for every segment whose centroid lies within the radius.
pub struct ConstantKernel {
    index: CentroidIndex,
}

impl ConstantKernel {
    pub fn new(table: &SegmentTable) -> Self {
        Self { index: CentroidIndex::build(table) }
    }
}

impl KernelFunction for ConstantKernel {
    fn calculate_kernel(&self, segment: &Segment, radius: f64) -> KernelWeights {
        KernelWeights::from_unsorted(
            self.index
                .within(segment.centroid, radius)
                .map(|(id, _)| (id, 1.0))
                .collect(),
        )
    }
}

// ── LinearDecayKernel ─────────────────────────────────────────────────────────

/// Weight `1 − d / radius`: 1.0 at the query segment, falling to 0.0 at the
/// boundary.  Boundary segments stay in the set with zero weight, so the
/// neighbourhood is the same as [`ConstantKernel`]'s.
pub struct LinearDecayKernel {
    index: CentroidIndex,
}

impl LinearDecayKernel {
    pub fn new(table: &SegmentTable) -> Self {
        Self { index: CentroidIndex::build(table) }
    }
}

impl KernelFunction for LinearDecayKernel {
    fn calculate_kernel(&self, segment: &Segment, radius: f64) -> KernelWeights {
        KernelWeights::from_unsorted(
            self.index
                .within(segment.centroid, radius)
                .map(|(id, d)| {
                    let w = if radius > 0.0 { (1.0 - d / radius).max(0.0) } else { 1.0 };
                    (id, w)
                })
                .collect(),
        )
    }
}

// ── Kernel selection ──────────────────────────────────────────────────────────

/// Which kernel a run uses.  Selected from configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KernelKind {
    #[default]
    Constant,
    LinearDecay,
}

/// Closed set of the built-in kernels, for configuration-driven setup.
pub enum Kernel {
    Constant(ConstantKernel),
    LinearDecay(LinearDecayKernel),
}

impl Kernel {
    pub fn build(kind: KernelKind, table: &SegmentTable) -> Self {
        match kind {
            KernelKind::Constant    => Kernel::Constant(ConstantKernel::new(table)),
            KernelKind::LinearDecay => Kernel::LinearDecay(LinearDecayKernel::new(table)),
        }
    }
}

impl KernelFunction for Kernel {
    fn calculate_kernel(&self, segment: &Segment, radius: f64) -> KernelWeights {
        match self {
            Kernel::Constant(k)    => k.calculate_kernel(segment, radius),
            Kernel::LinearDecay(k) => k.calculate_kernel(segment, radius),
        }
    }
}
