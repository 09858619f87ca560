//! CSV output backend.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{Writer, WriterBuilder};

use pk_events::DensityRow;

use crate::writer::OutputWriter;
use crate::{OccupancySnapshotRow, OutputResult, ScoreRow};

pub const SCORES_FILE: &str = "parking_scores.csv";
pub const OCCUPANCY_FILE: &str = "parking_occupancy.csv";
pub const SEARCH_TIMES_FILE: &str = "parking_search_times.csv";

/// Writes `parking_scores.csv` and `parking_occupancy.csv` into one
/// directory.
pub struct CsvWriter {
    scores:    Writer<File>,
    occupancy: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create both files in `dir` (which must exist) and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut scores = Writer::from_path(dir.join(SCORES_FILE))?;
        scores.write_record(["time", "person", "amount", "kind"])?;

        let mut occupancy = Writer::from_path(dir.join(OCCUPANCY_FILE))?;
        occupancy.write_record(["time", "segment", "capacity", "occupancy"])?;

        Ok(Self { scores, occupancy, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_score(&mut self, row: &ScoreRow) -> OutputResult<()> {
        self.scores.write_record(&[
            row.time.to_string(),
            row.person.to_string(),
            row.amount.to_string(),
            row.kind.to_string(),
        ])?;
        Ok(())
    }

    fn write_occupancy(&mut self, rows: &[OccupancySnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.occupancy.write_record(&[
                row.time.to_string(),
                row.segment.to_string(),
                row.capacity.to_string(),
                row.occupancy.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.scores.flush()?;
        self.occupancy.flush()?;
        Ok(())
    }
}

/// Write the search-time density table to `dir/parking_search_times.csv`,
/// `;` delimited, rows as given (ascending `search_time` from
/// `SearchTimeDiagnostic::density`).  Returns the file path.
pub fn write_search_times(dir: &Path, rows: &[DensityRow]) -> OutputResult<PathBuf> {
    let path = dir.join(SEARCH_TIMES_FILE);
    let mut w = WriterBuilder::new().delimiter(b';').from_path(&path)?;
    w.write_record(["search_time", "density"])?;
    for row in rows {
        w.write_record(&[row.search_time.to_string(), row.density.to_string()])?;
    }
    w.flush()?;
    log::debug!("wrote {} search-time rows to {}", rows.len(), path.display());
    Ok(path)
}
