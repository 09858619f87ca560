//! CSV segment loader.
//!
//! # CSV format
//!
//! One row per segment.  Spot counts may be left empty.
//!
//! ```csv
//! segment_id,x,y,onstreet_spots,offstreet_spots
//! 1,500.0,0.0,4,
//! 2,1000.0,500.0,,12
//! 3,1500.0,0.0,2,2
//! ```
//!
//! Row order becomes the table's enumeration order.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pk_core::{Coord, SegmentId};

use crate::{NetworkError, NetworkResult, Segment, SegmentTable, SegmentTableBuilder};

#[derive(Deserialize)]
struct SegmentRecord {
    segment_id:      u32,
    x:               f64,
    y:               f64,
    onstreet_spots:  Option<u32>,
    offstreet_spots: Option<u32>,
}

/// Load a [`SegmentTable`] from a CSV file.
pub fn load_segments_csv(path: &Path) -> NetworkResult<SegmentTable> {
    let file = std::fs::File::open(path)?;
    load_segments_reader(file)
}

/// Like [`load_segments_csv`] but accepts any `Read` source.
pub fn load_segments_reader<R: Read>(reader: R) -> NetworkResult<SegmentTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = SegmentTableBuilder::new();

    for result in csv_reader.deserialize::<SegmentRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        let segment = Segment::new(SegmentId(row.segment_id), Coord::new(row.x, row.y))
            .with_spots(row.onstreet_spots, row.offstreet_spots);
        builder.add_segment(segment)?;
    }

    Ok(builder.build())
}
