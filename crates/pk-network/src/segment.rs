//! Road segments and the read-only segment table.
//!
//! # Parking supply
//!
//! Each segment carries an optional on-street and an optional off-street spot
//! count.  Either may be missing from the source data; a missing count means
//! zero spots, never an error.  Capacity is the sum of both.
//!
//! # Enumeration order
//!
//! `SegmentTable` preserves insertion order.  That order is the stable
//! enumeration from which the occupancy tracker derives its dense indices, so
//! two runs over the same table always lay out their arrays identically.

use rustc_hash::FxHashMap;

use pk_core::{Coord, SegmentId};

use crate::{NetworkError, NetworkResult};

// ── Segment ───────────────────────────────────────────────────────────────────

/// A directed road segment able to host parked vehicles.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub id: SegmentId,
    /// Midpoint of the segment; the centre of kernel queries.
    pub centroid: Coord,
    pub on_street_spots: Option<u32>,
    pub off_street_spots: Option<u32>,
}

impl Segment {
    pub fn new(id: SegmentId, centroid: Coord) -> Self {
        Self { id, centroid, on_street_spots: None, off_street_spots: None }
    }

    pub fn with_spots(mut self, on_street: Option<u32>, off_street: Option<u32>) -> Self {
        self.on_street_spots = on_street;
        self.off_street_spots = off_street;
        self
    }

    /// Total parking spots; missing counts contribute zero.  Saturates at
    /// `u32::MAX`.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.on_street_spots.unwrap_or(0).saturating_add(self.off_street_spots.unwrap_or(0))
    }
}

// ── SegmentTable ──────────────────────────────────────────────────────────────

/// All segments of the network, immutable once built.
///
/// Do not construct directly; use [`SegmentTableBuilder`].
#[derive(Clone, Debug, Default)]
pub struct SegmentTable {
    segments: Vec<Segment>,
    position: FxHashMap<SegmentId, u32>,
}

impl SegmentTable {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, id: SegmentId) -> Option<&Segment> {
        self.position.get(&id).map(|&i| &self.segments[i as usize])
    }

    pub fn contains(&self, id: SegmentId) -> bool {
        self.position.contains_key(&id)
    }

    /// Segments in stable enumeration (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = SegmentId> + '_ {
        self.segments.iter().map(|s| s.id)
    }
}

// ── SegmentTableBuilder ───────────────────────────────────────────────────────

/// Construct a [`SegmentTable`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use pk_core::{Coord, SegmentId};
/// use pk_network::SegmentTableBuilder;
///
/// let mut b = SegmentTableBuilder::new();
/// b.add_link(SegmentId(1), Coord::new(0.0, 0.0), Coord::new(100.0, 0.0), Some(4), None).unwrap();
/// let table = b.build();
/// assert_eq!(table.get(SegmentId(1)).unwrap().capacity(), 4);
/// ```
#[derive(Default)]
pub struct SegmentTableBuilder {
    segments: Vec<Segment>,
    position: FxHashMap<SegmentId, u32>,
}

impl SegmentTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(segments: usize) -> Self {
        Self {
            segments: Vec::with_capacity(segments),
            position: FxHashMap::with_capacity_and_hasher(segments, Default::default()),
        }
    }

    /// Add a segment.  Ids must be unique.
    pub fn add_segment(&mut self, segment: Segment) -> NetworkResult<()> {
        if self.position.contains_key(&segment.id) {
            return Err(NetworkError::DuplicateSegment(segment.id));
        }
        self.position.insert(segment.id, self.segments.len() as u32);
        self.segments.push(segment);
        Ok(())
    }

    /// Convenience: add a segment given its end points; the centroid is the
    /// midpoint.
    pub fn add_link(
        &mut self,
        id:         SegmentId,
        from:       Coord,
        to:         Coord,
        on_street:  Option<u32>,
        off_street: Option<u32>,
    ) -> NetworkResult<()> {
        self.add_segment(Segment::new(id, from.midpoint(to)).with_spots(on_street, off_street))
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn build(self) -> SegmentTable {
        SegmentTable { segments: self.segments, position: self.position }
    }
}
