//! Strongly typed, zero-cost identifier wrappers.
//!
//! Ids are external keys: they come from the network and population files
//! and are **not** dense indices.  Code that needs dense storage (the
//! occupancy tracker) builds its own `id → index` map once per run.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Identifier of a directed road segment (a network link).
    pub struct SegmentId(u32);
}

typed_id! {
    /// Identifier of a person in the synthetic population.
    pub struct PersonId(u32);
}

typed_id! {
    /// Identifier of a vehicle (private car or transit vehicle).
    pub struct VehicleId(u32);
}
