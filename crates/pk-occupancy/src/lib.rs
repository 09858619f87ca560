//! `pk-occupancy`: post-simulation parking occupancy replay.
//!
//! # Replay
//!
//! ```text
//! FrozenEvents ─┐
//!               ├─ ReplayRun::initialize ── CapacityInitializer → ParkingState
//! SegmentTable ─┘
//!
//! for each timestamp t with events, ascending:
//!   ① Unparks at t : decrement occupancy of the segment.
//!   ② Parks at t   : kernel around the segment → ParkingCount per neighbour
//!                     → PenaltyFunction → ScoreSignal to the observer,
//!                     then increment occupancy.
//! ```
//!
//! Unparks before parks and score before increment: a car freeing a spot at
//! `t` is visible to cars parking at `t`, and no car is scored against its
//! own arrival.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`capacity`] | `CapacityInitializer` trait and its Zero / EventBased / PlanBased variants |
//! | [`penalty`]  | `PenaltyFunction` trait, `ParkingCount`, `BellochePenalty`   |
//! | [`state`]    | `ParkingState`: dense capacity/occupancy arrays             |
//! | [`observer`] | `ReplayObserver`, `ScoreSignal`, `CollectingObserver`        |
//! | [`replay`]   | `ParkingReplay`, `ReplayRun`, `ReplayOutcome`                |
//! | [`config`]   | `ParkingConfig`, `PenaltyParams`, `InitializerKind`          |
//! | [`error`]    | `ReplayError`, `ReplayResult<T>`                             |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | `ParkingReplay::replay_iterations` runs on Rayon.           |
//! | `serde`    | `Serialize`/`Deserialize` on configuration types.           |

pub mod capacity;
pub mod config;
pub mod error;
pub mod observer;
pub mod penalty;
pub mod replay;
pub mod state;


pub use capacity::{
    CapacityInitializer, EventBasedInitializer, InitialCapacities, InitialCapacity, Initializer,
    PlanBasedInitializer, ZeroInitializer,
};
pub use config::{InitializerKind, ParkingConfig, PenaltyParams};
pub use error::{ReplayError, ReplayResult};
pub use observer::{CollectingObserver, NoopObserver, PARKING_SCORE_KIND, ReplayObserver, ScoreSignal};
pub use penalty::{BellochePenalty, NeighborCount, ParkingCount, PenaltyFunction, weighted_occupancy_ratio};
pub use replay::{IterationReplay, ParkingReplay, ReplayOutcome, ReplayRun};
pub use state::{OccupancyRow, ParkingState};
