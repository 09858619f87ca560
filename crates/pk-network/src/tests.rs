//! Unit tests for pk-network.
//!
//! All tests use a hand-crafted chessboard so they run without any input file.

#[cfg(test)]
mod helpers {
    use pk_core::{Coord, SegmentId};
    use crate::{SegmentTable, SegmentTableBuilder};

    /// 10×10 node chessboard from (0,0) to (9000,9000), 1000 m spacing.
    ///
    /// Segments 1..=90 are horizontal (row by row), 91..=180 vertical
    /// (column by column).  Segment `i` gets `i` on-street spots.
    pub fn chessboard() -> SegmentTable {
        let mut b = SegmentTableBuilder::with_capacity(180);
        let mut id = 1u32;
        for y in 0..10 {
            for x in 0..9 {
                let from = Coord::new(x as f64 * 1000.0, y as f64 * 1000.0);
                let to = Coord::new((x + 1) as f64 * 1000.0, y as f64 * 1000.0);
                b.add_link(SegmentId(id), from, to, Some(id), Some(0)).unwrap();
                id += 1;
            }
        }
        for x in 0..10 {
            for y in 0..9 {
                let from = Coord::new(x as f64 * 1000.0, y as f64 * 1000.0);
                let to = Coord::new(x as f64 * 1000.0, (y + 1) as f64 * 1000.0);
                b.add_link(SegmentId(id), from, to, Some(id), Some(0)).unwrap();
                id += 1;
            }
        }
        b.build()
    }

    /// Id of the segment whose centroid is exactly `c`.
    pub fn id_at(table: &SegmentTable, c: Coord) -> SegmentId {
        table.iter().find(|s| s.centroid == c).map(|s| s.id).unwrap()
    }
}

// ── Segment table ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod segment_table {
    use pk_core::{Coord, SegmentId};
    use crate::{NetworkError, Segment, SegmentTableBuilder};

    #[test]
    fn capacity_treats_missing_as_zero() {
        let s = Segment::new(SegmentId(1), Coord::default());
        assert_eq!(s.capacity(), 0);
        assert_eq!(s.clone().with_spots(Some(3), None).capacity(), 3);
        assert_eq!(s.clone().with_spots(None, Some(5)).capacity(), 5);
        assert_eq!(s.with_spots(Some(3), Some(5)).capacity(), 8);
    }

    #[test]
    fn capacity_saturates_instead_of_overflowing() {
        let csv = "segment_id,x,y,onstreet_spots,offstreet_spots\n1,0,0,4294967295,1\n2,0,0,4294967290,5\n";
        let table = crate::load_segments_reader(std::io::Cursor::new(csv)).unwrap();
        assert_eq!(table.get(SegmentId(1)).unwrap().capacity(), u32::MAX);
        assert_eq!(table.get(SegmentId(2)).unwrap().capacity(), u32::MAX);
    }

    #[test]
    fn duplicate_segment_rejected() {
        let mut b = SegmentTableBuilder::new();
        b.add_segment(Segment::new(SegmentId(4), Coord::default())).unwrap();
        let err = b.add_segment(Segment::new(SegmentId(4), Coord::default())).unwrap_err();
        assert!(matches!(err, NetworkError::DuplicateSegment(SegmentId(4))));
    }

    #[test]
    fn preserves_insertion_order() {
        let mut b = SegmentTableBuilder::new();
        for id in [30, 10, 20] {
            b.add_segment(Segment::new(SegmentId(id), Coord::default())).unwrap();
        }
        let table = b.build();
        let ids: Vec<_> = table.ids().collect();
        assert_eq!(ids, vec![SegmentId(30), SegmentId(10), SegmentId(20)]);
        assert!(table.contains(SegmentId(10)));
        assert!(table.get(SegmentId(11)).is_none());
    }

    #[test]
    fn chessboard_shape() {
        let table = super::helpers::chessboard();
        assert_eq!(table.len(), 180);
        assert_eq!(table.get(SegmentId(180)).unwrap().capacity(), 180);
    }
}

// ── Constant kernel ───────────────────────────────────────────────────────────

#[cfg(test)]
mod constant_kernel {
    use pk_core::Coord;
    use crate::{ConstantKernel, KernelFunction};
    use super::helpers::{chessboard, id_at};

    #[test]
    fn only_self_below_diagonal_distance() {
        let table = chessboard();
        let center = id_at(&table, Coord::new(5000.0, 4500.0));
        let kernel = ConstantKernel::new(&table);
        let seg = table.get(center).unwrap();

        // Nearest other centroids are sqrt(2 * 500²) ≈ 707.1 away.
        for radius in [0.0, 100.0, 707.0] {
            let w = kernel.calculate_kernel(seg, radius);
            assert_eq!(w.len(), 1, "radius {radius}");
            assert_eq!(w.get(center), Some(1.0));
        }
    }

    #[test]
    fn diagonal_neighbours_inside_disk() {
        let table = chessboard();
        let center = id_at(&table, Coord::new(5000.0, 4500.0));
        let kernel = ConstantKernel::new(&table);
        let seg = table.get(center).unwrap();

        let expected = [
            center,
            id_at(&table, Coord::new(4500.0, 4000.0)),
            id_at(&table, Coord::new(5500.0, 4000.0)),
            id_at(&table, Coord::new(4500.0, 5000.0)),
            id_at(&table, Coord::new(5500.0, 5000.0)),
        ];
        for radius in [708.0, 999.0] {
            let w = kernel.calculate_kernel(seg, radius);
            assert_eq!(w.len(), 5, "radius {radius}");
            for id in expected {
                assert_eq!(w.get(id), Some(1.0));
            }
        }
    }

    #[test]
    fn boundary_is_inclusive() {
        let table = chessboard();
        let center = id_at(&table, Coord::new(5000.0, 4500.0));
        let kernel = ConstantKernel::new(&table);
        let seg = table.get(center).unwrap();

        // Four parallel segments sit exactly 1000 m away.
        let w = kernel.calculate_kernel(seg, 1000.0);
        assert_eq!(w.len(), 9);
        assert_eq!(w.get(id_at(&table, Coord::new(5000.0, 5500.0))), Some(1.0));
        assert_eq!(w.get(id_at(&table, Coord::new(4000.0, 4500.0))), Some(1.0));
    }

    #[test]
    fn border_segment_has_fewer_neighbours() {
        let table = chessboard();
        let corner = id_at(&table, Coord::new(0.0, 500.0));
        let kernel = ConstantKernel::new(&table);
        let seg = table.get(corner).unwrap();

        for radius in [708.0, 999.0] {
            let w = kernel.calculate_kernel(seg, radius);
            assert_eq!(w.len(), 3);
            assert!(w.get(id_at(&table, Coord::new(500.0, 0.0))).is_some());
            assert!(w.get(id_at(&table, Coord::new(500.0, 1000.0))).is_some());
        }
    }

    #[test]
    fn weights_sorted_by_segment() {
        let table = chessboard();
        let center = id_at(&table, Coord::new(5000.0, 4500.0));
        let w = ConstantKernel::new(&table).calculate_kernel(table.get(center).unwrap(), 2500.0);
        let ids: Vec<_> = w.iter().map(|(id, _)| id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(w.total_weight(), w.len() as f64);
    }

    #[test]
    fn larger_radius_never_shrinks_neighbourhood() {
        use rand::{Rng, SeedableRng, rngs::SmallRng};

        let table = chessboard();
        let kernel = ConstantKernel::new(&table);
        let mut rng = SmallRng::seed_from_u64(7);
        let segments: Vec<_> = table.iter().collect();

        for _ in 0..50 {
            let seg = segments[rng.gen_range(0..segments.len())];
            let mut radii: Vec<f64> = (0..8).map(|_| rng.gen_range(0.0..5000.0)).collect();
            radii.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let sizes: Vec<usize> = radii
                .iter()
                .map(|&r| kernel.calculate_kernel(seg, r).len())
                .collect();
            assert!(sizes.windows(2).all(|p| p[0] <= p[1]), "{sizes:?} for {radii:?}");
        }
    }
}

// ── Linear decay kernel ───────────────────────────────────────────────────────

#[cfg(test)]
mod linear_decay_kernel {
    use pk_core::Coord;
    use crate::{ConstantKernel, Kernel, KernelFunction, KernelKind, LinearDecayKernel};
    use super::helpers::{chessboard, id_at};

    #[test]
    fn weights_fall_with_distance() {
        let table = chessboard();
        let center = id_at(&table, Coord::new(5000.0, 4500.0));
        let seg = table.get(center).unwrap();
        let w = LinearDecayKernel::new(&table).calculate_kernel(seg, 1000.0);

        assert_eq!(w.get(center), Some(1.0));
        let diag = w.get(id_at(&table, Coord::new(4500.0, 4000.0))).unwrap();
        assert!((diag - (1.0 - 500.0 * 2f64.sqrt() / 1000.0)).abs() < 1e-9);
        // Boundary neighbour kept with zero weight.
        assert_eq!(w.get(id_at(&table, Coord::new(5000.0, 5500.0))), Some(0.0));
    }

    #[test]
    fn same_neighbourhood_as_constant() {
        let table = chessboard();
        let seg = table.get(id_at(&table, Coord::new(2000.0, 2500.0))).unwrap();
        let a = ConstantKernel::new(&table).calculate_kernel(seg, 1800.0);
        let b = Kernel::build(KernelKind::LinearDecay, &table).calculate_kernel(seg, 1800.0);
        let ids_a: Vec<_> = a.iter().map(|(id, _)| id).collect();
        let ids_b: Vec<_> = b.iter().map(|(id, _)| id).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn zero_radius_keeps_self_at_full_weight() {
        let table = chessboard();
        let center = id_at(&table, Coord::new(500.0, 0.0));
        let w = LinearDecayKernel::new(&table).calculate_kernel(table.get(center).unwrap(), 0.0);
        assert_eq!(w.len(), 1);
        assert_eq!(w.get(center), Some(1.0));
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use pk_core::{Coord, SegmentId};
    use crate::{NetworkError, load_segments_reader};

    #[test]
    fn loads_with_missing_spot_counts() {
        let csv = "\
segment_id,x,y,onstreet_spots,offstreet_spots\n\
1,500.0,0.0,4,\n\
2,1000.0,500.0,,12\n\
3,1500.0,0.0,,\n";
        let table = load_segments_reader(Cursor::new(csv)).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(SegmentId(1)).unwrap().capacity(), 4);
        assert_eq!(table.get(SegmentId(2)).unwrap().capacity(), 12);
        assert_eq!(table.get(SegmentId(3)).unwrap().capacity(), 0);
        assert_eq!(table.get(SegmentId(2)).unwrap().centroid, Coord::new(1000.0, 500.0));
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let csv = "segment_id,x,y,onstreet_spots,offstreet_spots\nabc,0,0,1,1\n";
        let err = load_segments_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, NetworkError::Parse(_)));
    }

    #[test]
    fn duplicate_row_is_error() {
        let csv = "segment_id,x,y,onstreet_spots,offstreet_spots\n1,0,0,1,1\n1,5,5,1,1\n";
        let err = load_segments_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, NetworkError::DuplicateSegment(SegmentId(1))));
    }
}
