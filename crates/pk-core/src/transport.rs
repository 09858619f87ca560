//! Network mode of a vehicle entering or leaving traffic.
//!
//! Only `Car` participates in parking; every other mode is dropped at
//! ingestion.  Unknown strings are an error rather than silently mapped to a
//! catch-all, so a typo in an events file surfaces immediately.

use std::str::FromStr;

use crate::CoreError;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum TransportMode {
    /// Private car.  The only mode that occupies parking.
    Car,
    /// Car passenger.
    Ride,
    Bike,
    Walk,
    /// Freight or commercial vehicle.
    Truck,
    /// Scheduled public transit (bus, tram, rail).
    Pt,
}

impl TransportMode {
    #[inline]
    pub fn is_car(self) -> bool {
        matches!(self, TransportMode::Car)
    }

    /// Label used in event and plan files.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Car   => "car",
            TransportMode::Ride  => "ride",
            TransportMode::Bike  => "bike",
            TransportMode::Walk  => "walk",
            TransportMode::Truck => "truck",
            TransportMode::Pt    => "pt",
        }
    }
}

impl FromStr for TransportMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "car"   => Ok(TransportMode::Car),
            "ride"  => Ok(TransportMode::Ride),
            "bike"  => Ok(TransportMode::Bike),
            "walk"  => Ok(TransportMode::Walk),
            "truck" => Ok(TransportMode::Truck),
            "pt"    => Ok(TransportMode::Pt),
            other   => Err(CoreError::UnknownMode(other.to_owned())),
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
