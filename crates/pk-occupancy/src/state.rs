//! `ParkingState`: per-segment capacity and live occupancy.
//!
//! # Data layout
//!
//! Dense arrays indexed by the segment's position in the table's enumeration
//! order; the `SegmentId → index` map is built once per run.  A fresh state
//! is built for every run so nothing carries over between iterations.
//!
//! Occupancy is a signed counter.  It may exceed capacity (oversubscription
//! is observed, not prevented) and may drop below zero when a car leaves a
//! segment it was never counted on, e.g. under the zero initializer.

use rustc_hash::FxHashMap;

use pk_core::SegmentId;
use pk_network::{KernelWeights, SegmentTable};

use crate::{InitialCapacities, NeighborCount, ParkingCount, ReplayError, ReplayResult};

/// One row of a persisted occupancy snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OccupancyRow {
    pub segment:   SegmentId,
    pub capacity:  u32,
    pub occupancy: i32,
}

#[derive(Clone, Debug)]
pub struct ParkingState {
    ids:       Vec<SegmentId>,
    index:     FxHashMap<SegmentId, u32>,
    capacity:  Vec<u32>,
    occupancy: Vec<i32>,
}

impl ParkingState {
    /// Seed capacity and occupancy from `initial`, which must cover every
    /// segment of `segments`.
    pub fn new(segments: &SegmentTable, initial: &InitialCapacities) -> ReplayResult<Self> {
        let n = segments.len();
        let mut ids = Vec::with_capacity(n);
        let mut index = FxHashMap::with_capacity_and_hasher(n, Default::default());
        let mut capacity = Vec::with_capacity(n);
        let mut occupancy = Vec::with_capacity(n);

        for (i, id) in segments.ids().enumerate() {
            let init = initial.get(&id).ok_or(ReplayError::MissingInitialCapacity(id))?;
            ids.push(id);
            index.insert(id, i as u32);
            capacity.push(init.capacity);
            let parked = i32::try_from(init.initial)
                .map_err(|_| ReplayError::InitialOccupancyOutOfRange { segment: id, initial: init.initial })?;
            occupancy.push(parked);
        }

        Ok(Self { ids, index, capacity, occupancy })
    }

    #[inline]
    fn index_of(&self, id: SegmentId) -> ReplayResult<usize> {
        self.index
            .get(&id)
            .map(|&i| i as usize)
            .ok_or(ReplayError::UnknownSegment(id))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn occupancy(&self, id: SegmentId) -> ReplayResult<i32> {
        Ok(self.occupancy[self.index_of(id)?])
    }

    pub fn capacity(&self, id: SegmentId) -> ReplayResult<u32> {
        Ok(self.capacity[self.index_of(id)?])
    }

    /// Sum of occupancy over all segments.
    pub fn total_occupancy(&self) -> i64 {
        self.occupancy.iter().map(|&o| o as i64).sum()
    }

    /// Number of segments whose occupancy exceeds capacity.
    pub fn oversubscribed(&self) -> usize {
        self.occupancy
            .iter()
            .zip(&self.capacity)
            .filter(|&(&o, &c)| o > 0 && o as u32 > c)
            .count()
    }

    /// Returns the new occupancy.
    pub(crate) fn park(&mut self, id: SegmentId) -> ReplayResult<i32> {
        let i = self.index_of(id)?;
        self.occupancy[i] += 1;
        Ok(self.occupancy[i])
    }

    /// Returns the new occupancy.
    pub(crate) fn unpark(&mut self, id: SegmentId) -> ReplayResult<i32> {
        let i = self.index_of(id)?;
        self.occupancy[i] -= 1;
        Ok(self.occupancy[i])
    }

    /// Current counts of every kernel neighbour, in kernel order.
    pub fn counts(&self, weights: &KernelWeights) -> ReplayResult<Vec<NeighborCount>> {
        weights
            .iter()
            .map(|(segment, weight)| {
                let i = self.index_of(segment)?;
                Ok(NeighborCount {
                    segment,
                    count: ParkingCount {
                        occupancy: self.occupancy[i],
                        capacity:  self.capacity[i],
                        weight,
                    },
                })
            })
            .collect()
    }

    /// Capacity and occupancy of every segment, in enumeration order.
    pub fn snapshot(&self) -> Vec<OccupancyRow> {
        self.ids
            .iter()
            .zip(&self.capacity)
            .zip(&self.occupancy)
            .map(|((&segment, &capacity), &occupancy)| OccupancyRow { segment, capacity, occupancy })
            .collect()
    }
}
