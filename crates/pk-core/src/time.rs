//! Simulation time model.
//!
//! Events carry integer-second timestamps measured from simulation start
//! (midnight of the simulated day).  Values past 24:00:00 are legal; a
//! simulated day routinely runs into the early hours of the next.

use std::fmt;

/// Whole seconds since simulation start.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time(pub u64);

impl Time {
    pub const ZERO: Time = Time(0);

    /// Build a time from hours, minutes, and seconds.
    #[inline]
    pub fn from_hms(h: u64, m: u64, s: u64) -> Time {
        Time(h * 3_600 + m * 60 + s)
    }

    #[inline]
    pub fn secs(self) -> u64 {
        self.0
    }

    /// Return the time `n` seconds after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Time {
        Time(self.0 + n)
    }

    /// Seconds elapsed from `earlier` to `self`, or `None` if `earlier` is
    /// later than `self`.
    #[inline]
    pub fn checked_since(self, earlier: Time) -> Option<u64> {
        self.0.checked_sub(earlier.0)
    }
}

impl From<u64> for Time {
    #[inline]
    fn from(secs: u64) -> Time {
        Time(secs)
    }
}

impl fmt::Display for Time {
    /// `HH:MM:SS`; hours are not wrapped at 24.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.0 / 3_600;
        let m = (self.0 % 3_600) / 60;
        let s = self.0 % 60;
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}
