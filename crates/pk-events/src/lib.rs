//! `pk-events`: ingestion of the mobility simulation's event stream.
//!
//! # Two phases
//!
//! ```text
//! ingestion:  producers ──handle()──▶ EventRecorder   (Sync, may be shared)
//!                                          │ freeze()
//!                                          ▼
//! replay:                              FrozenEvents    (owned, read-only)
//! ```
//!
//! `FrozenEvents` is the only way to hand events to the replay, so reading a
//! recorder that is still accepting events cannot be expressed.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`event`]    | `TrafficEvent`, `ParkingEvent`, `SearchEvent`, `MobsimEvent` |
//! | [`recorder`] | `EventRecorder`, `FrozenEvents`                          |
//! | [`search`]   | `SearchTimeDiagnostic`, `DensityRow`                     |
//! | [`loader`]   | `load_events_csv` / `load_events_reader`                 |
//! | [`error`]    | `EventError`, `EventResult<T>`                           |

pub mod error;
pub mod event;
pub mod loader;
pub mod recorder;
pub mod search;


pub use error::{EventError, EventResult};
pub use event::{MobsimEvent, ParkingEvent, SearchEvent, TrafficEvent};
pub use loader::{load_events_csv, load_events_reader};
pub use recorder::{EventRecorder, FrozenEvents};
pub use search::{DensityRow, SearchTimeDiagnostic};
