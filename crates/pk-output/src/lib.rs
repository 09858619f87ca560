//! `pk-output`: CSV output for parking replays.
//!
//! | File                        | Contents                                        |
//! |-----------------------------|-------------------------------------------------|
//! | `parking_scores.csv`        | one row per emitted score signal, replay order   |
//! | `parking_occupancy.csv`     | capacity and occupancy per segment at replay end |
//! | `parking_search_times.csv`  | search-time density table, `;` delimited         |
//!
//! The first two are produced by [`ReplayOutputObserver`] driving an
//! [`OutputWriter`]; the search table comes from the event stream rather than
//! the replay and is written with [`write_search_times`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use pk_output::{CsvWriter, ReplayOutputObserver};
//!
//! let mut obs = ReplayOutputObserver::new(CsvWriter::new(Path::new("./output"))?);
//! replay.run(events, &initializer, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::{CsvWriter, OCCUPANCY_FILE, SCORES_FILE, SEARCH_TIMES_FILE, write_search_times};
pub use error::{OutputError, OutputResult};
pub use observer::ReplayOutputObserver;
pub use row::{OccupancySnapshotRow, ScoreRow};
pub use writer::OutputWriter;
