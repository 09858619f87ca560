//! `EventRecorder`: buffers parking events during the mobility simulation.
//!
//! # Filtering
//!
//! Two kinds of traffic events never reach the buffers:
//!
//! - events of vehicles previously announced by a
//!   [`MobsimEvent::TransitDriverStarts`] (buses and trams stop on segments
//!   but do not occupy parking);
//! - events whose network mode is not [`TransportMode::Car`].
//!
//! # Concurrency
//!
//! All methods take `&self`; the recorder is `Sync` and may be shared
//! between event-dispatch threads.  Appends are serialised by one mutex.
//! The producer is responsible for delivering each stream in non-decreasing
//! time order; the recorder does not re-sort.
//!
//! # Freezing
//!
//! [`freeze`](EventRecorder::freeze) moves both buffers out into a
//! [`FrozenEvents`] and leaves the recorder permanently closed.  Any later
//! call, including a second `freeze`, returns [`EventError::Frozen`].

use std::sync::{Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashSet;

use pk_core::{Time, TransportMode, VehicleId};

use crate::{EventError, EventResult, MobsimEvent, ParkingEvent, TrafficEvent};

// ── FrozenEvents ──────────────────────────────────────────────────────────────

/// The two parking streams, closed for writing.
///
/// `unparks` holds vehicles entering traffic, `parks` vehicles leaving it.
/// Each is in non-decreasing time order as delivered by the producer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrozenEvents {
    unparks: Vec<TrafficEvent>,
    parks:   Vec<TrafficEvent>,
}

impl FrozenEvents {
    /// Wrap two already time-ordered streams, e.g. read back from disk.
    ///
    /// No filtering or sorting is applied.
    pub fn from_streams(unparks: Vec<TrafficEvent>, parks: Vec<TrafficEvent>) -> Self {
        Self { unparks, parks }
    }

    pub fn unparks(&self) -> &[TrafficEvent] {
        &self.unparks
    }

    pub fn parks(&self) -> &[TrafficEvent] {
        &self.parks
    }

    pub fn len(&self) -> usize {
        self.unparks.len() + self.parks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unparks.is_empty() && self.parks.is_empty()
    }

    /// `max(last unpark time, last park time)`, or `None` if both are empty.
    pub fn last_time(&self) -> Option<Time> {
        let u = self.unparks.last().map(|e| e.time);
        let p = self.parks.last().map(|e| e.time);
        u.max(p)
    }

    /// Consume into `(unparks, parks)`.
    pub fn drain(self) -> (Vec<TrafficEvent>, Vec<TrafficEvent>) {
        (self.unparks, self.parks)
    }
}

// ── EventRecorder ─────────────────────────────────────────────────────────────

#[derive(Default)]
struct Buffers {
    transit_vehicles: FxHashSet<VehicleId>,
    unparks:          Vec<TrafficEvent>,
    parks:            Vec<TrafficEvent>,
    dropped:          usize,
}

impl Buffers {
    fn accept(&mut self, event: &TrafficEvent) -> bool {
        let keep = event.mode == TransportMode::Car
            && !self.transit_vehicles.contains(&event.vehicle);
        if !keep {
            self.dropped += 1;
        }
        keep
    }
}

enum RecorderState {
    Recording(Buffers),
    Frozen,
}

/// Thread-safe, freezable buffer of parking events.
pub struct EventRecorder {
    state: Mutex<RecorderState>,
}

impl Default for EventRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRecorder {
    pub fn new() -> Self {
        Self { state: Mutex::new(RecorderState::Recording(Buffers::default())) }
    }

    // Buffers are append-only, so a panicking producer cannot leave them
    // half-updated; recover the guard instead of propagating the poison.
    fn lock(&self) -> MutexGuard<'_, RecorderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_buffers<T>(&self, f: impl FnOnce(&mut Buffers) -> T) -> EventResult<T> {
        match &mut *self.lock() {
            RecorderState::Recording(buffers) => Ok(f(buffers)),
            RecorderState::Frozen => Err(EventError::Frozen),
        }
    }

    /// Dispatch any simulation event.  Search markers are not the recorder's
    /// concern and are ignored, but still rejected once frozen.
    pub fn handle(&self, event: &MobsimEvent) -> EventResult<()> {
        match event {
            MobsimEvent::TransitDriverStarts { vehicle, .. } => self.transit_driver_starts(*vehicle),
            MobsimEvent::Parking(e) => self.record(*e),
            MobsimEvent::Search(_) => self.with_buffers(|_| ()),
        }
    }

    /// Mark `vehicle` as transit.  Must arrive before the vehicle's traffic
    /// events to have an effect.
    pub fn transit_driver_starts(&self, vehicle: VehicleId) -> EventResult<()> {
        self.with_buffers(|b| {
            b.transit_vehicles.insert(vehicle);
        })
    }

    /// Append `event` to its stream unless it is filtered out.
    pub fn record(&self, event: ParkingEvent) -> EventResult<()> {
        self.with_buffers(|b| match event {
            ParkingEvent::Unpark(e) => {
                if b.accept(&e) {
                    b.unparks.push(e);
                }
            }
            ParkingEvent::Park(e) => {
                if b.accept(&e) {
                    b.parks.push(e);
                }
            }
        })
    }

    pub fn is_frozen(&self) -> bool {
        matches!(*self.lock(), RecorderState::Frozen)
    }

    /// Close the recorder and take both streams.
    pub fn freeze(&self) -> EventResult<FrozenEvents> {
        let previous = std::mem::replace(&mut *self.lock(), RecorderState::Frozen);
        match previous {
            RecorderState::Recording(b) => {
                log::debug!(
                    "event recorder frozen: {} unparks, {} parks, {} filtered, {} transit vehicles",
                    b.unparks.len(),
                    b.parks.len(),
                    b.dropped,
                    b.transit_vehicles.len(),
                );
                Ok(FrozenEvents { unparks: b.unparks, parks: b.parks })
            }
            RecorderState::Frozen => Err(EventError::Frozen),
        }
    }
}
