//! Event types emitted by the mobility simulation.
//!
//! A car *leaving* traffic parks on the segment where it stops; a car
//! *entering* traffic vacates the segment it pulls out from.

use pk_core::{PersonId, SegmentId, Time, TransportMode, VehicleId};

/// A vehicle entering or leaving the traffic stream on a segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficEvent {
    pub time:    Time,
    pub person:  PersonId,
    pub vehicle: VehicleId,
    pub segment: SegmentId,
    pub mode:    TransportMode,
}

/// A change in on-segment parking occupancy.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParkingEvent {
    /// Vehicle leaves traffic and occupies a spot.
    Park(TrafficEvent),
    /// Vehicle enters traffic and frees its spot.
    Unpark(TrafficEvent),
}

impl ParkingEvent {
    #[inline]
    pub fn traffic(&self) -> &TrafficEvent {
        match self {
            ParkingEvent::Park(e) | ParkingEvent::Unpark(e) => e,
        }
    }

    #[inline]
    pub fn time(&self) -> Time {
        self.traffic().time
    }
}

/// Explicit parking search markers, used only by the search-time diagnostic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    Started { time: Time, vehicle: VehicleId },
    Ended   { time: Time, vehicle: VehicleId },
}

/// Every event kind this workspace consumes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MobsimEvent {
    /// A transit driver took over `vehicle`; the vehicle is not a parked car.
    TransitDriverStarts { time: Time, vehicle: VehicleId },
    Parking(ParkingEvent),
    Search(SearchEvent),
}

impl MobsimEvent {
    pub fn time(&self) -> Time {
        match self {
            MobsimEvent::TransitDriverStarts { time, .. } => *time,
            MobsimEvent::Parking(e) => e.time(),
            MobsimEvent::Search(SearchEvent::Started { time, .. })
            | MobsimEvent::Search(SearchEvent::Ended { time, .. }) => *time,
        }
    }
}
