//! Event-subsystem error type.
//!
//! Every variant except `Parse`/`Io` is a protocol violation by the event
//! producer.  They are fatal: callers should abort the run, not retry.

use thiserror::Error;

use pk_core::{Time, VehicleId};

#[derive(Debug, Error)]
pub enum EventError {
    #[error("event recorder is frozen; all events must be recorded before freezing")]
    Frozen,

    #[error("vehicle {vehicle} started parking search twice (first at {first}, again at {again})")]
    SearchAlreadyStarted { vehicle: VehicleId, first: Time, again: Time },

    #[error("vehicle {0} ended parking search without starting it")]
    SearchNotStarted(VehicleId),

    #[error("vehicle {vehicle} ended parking search at {end}, before it started at {start}")]
    NegativeSearchTime { vehicle: VehicleId, start: Time, end: Time },

    #[error("event parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EventResult<T> = Result<T, EventError>;
