//! `pk-core`: foundational types for the parking occupancy engine.
//!
//! Every other `pk-*` crate depends on this one.  It has no `pk-*`
//! dependencies and a single required external one (`thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `SegmentId`, `PersonId`, `VehicleId`                  |
//! | [`geo`]         | `Coord` (projected x/y), Euclidean distance           |
//! | [`time`]        | `Time`: whole seconds since simulation start         |
//! | [`transport`]   | `TransportMode` enum                                  |
//! | [`error`]       | `CoreError`                                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod time;
pub mod transport;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::CoreError;
pub use geo::Coord;
pub use ids::{PersonId, SegmentId, VehicleId};
pub use time::Time;
pub use transport::TransportMode;
