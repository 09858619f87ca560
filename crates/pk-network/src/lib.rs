//! `pk-network`: road segments, parking supply, and spatial kernels.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`segment`] | `Segment`, `SegmentTable`, `SegmentTableBuilder`              |
//! | [`kernel`]  | `KernelFunction` trait, `ConstantKernel`, `LinearDecayKernel` |
//! | [`loader`]  | `load_segments_csv` / `load_segments_reader`                  |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod kernel;
pub mod loader;
pub mod segment;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use kernel::{ConstantKernel, Kernel, KernelFunction, KernelKind, KernelWeights, LinearDecayKernel};
pub use loader::{load_segments_csv, load_segments_reader};
pub use segment::{Segment, SegmentTable, SegmentTableBuilder};
