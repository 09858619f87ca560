//! 10×10 node chessboard with 100 m blocks.
//!
//! ```text
//!  y=900  ·──·──·── … ──·
//!         │  │  │       │
//!    …
//!  y=0    ·──·──·── … ──·
//!        x=0            x=900
//! ```
//!
//! 180 segments: 1..=90 run east (row by row), 91..=180 run north (column by
//! column).  Spot counts are drawn per segment so neighbourhoods differ.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use pk_core::{Coord, SegmentId};
use pk_network::{NetworkResult, SegmentTable, SegmentTableBuilder};

pub const NODES_PER_SIDE: u32 = 10;
pub const BLOCK_M: f64 = 100.0;

pub fn build_network(seed: u64) -> NetworkResult<SegmentTable> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let n = NODES_PER_SIDE;
    let mut b = SegmentTableBuilder::with_capacity((2 * n * (n - 1)) as usize);
    let node = |x: u32, y: u32| Coord::new(x as f64 * BLOCK_M, y as f64 * BLOCK_M);

    let mut id = 1u32;
    for y in 0..n {
        for x in 0..n - 1 {
            b.add_link(SegmentId(id), node(x, y), node(x + 1, y), Some(rng.gen_range(0..=6)), None)?;
            id += 1;
        }
    }
    for x in 0..n {
        for y in 0..n - 1 {
            // Every third avenue block has a garage.
            let off_street = (id % 3 == 0).then_some(10);
            b.add_link(SegmentId(id), node(x, y), node(x, y + 1), Some(rng.gen_range(0..=6)), off_street)?;
            id += 1;
        }
    }
    Ok(b.build())
}

/// Segments of the western (`x < 300`) and eastern (`x > 600`) districts.
pub fn districts(segments: &SegmentTable) -> (Vec<SegmentId>, Vec<SegmentId>) {
    let west = segments.iter().filter(|s| s.centroid.x < 300.0).map(|s| s.id).collect();
    let east = segments.iter().filter(|s| s.centroid.x > 600.0).map(|s| s.id).collect();
    (west, east)
}
