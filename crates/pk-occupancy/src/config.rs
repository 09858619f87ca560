//! Replay configuration.
//!
//! Typically loaded from a TOML file by the application crate (with the
//! `serde` feature) and passed to [`ParkingReplay::from_config`].
//!
//! [`ParkingReplay::from_config`]: crate::ParkingReplay::from_config

use pk_network::KernelKind;

use crate::{ReplayError, ReplayResult};

/// Parameters of the exponential search penalty.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PenaltyParams {
    /// Penalty at zero occupancy.  Must be `>= 0`.
    pub scale: f64,
    /// Growth rate, applied as `exp(-exponent * ratio)`.  Must be `<= 0`.
    pub exponent: f64,
    /// Optional upper bound on the penalty.
    pub max_penalty: Option<f64>,
}

impl Default for PenaltyParams {
    fn default() -> Self {
        Self { scale: 0.4, exponent: -6.0, max_penalty: None }
    }
}

/// How the occupancy at simulation start is estimated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InitializerKind {
    #[default]
    Zero,
    EventBased,
    PlanBased,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParkingConfig {
    /// Radius of the kernel neighbourhood in metres.
    pub kernel_radius_m: f64,
    pub kernel: KernelKind,
    pub penalty: PenaltyParams,
    pub initializer: InitializerKind,
}

impl Default for ParkingConfig {
    fn default() -> Self {
        Self {
            kernel_radius_m: 500.0,
            kernel:          KernelKind::Constant,
            penalty:         PenaltyParams::default(),
            initializer:     InitializerKind::Zero,
        }
    }
}

impl ParkingConfig {
    pub fn validate(&self) -> ReplayResult<()> {
        if !self.kernel_radius_m.is_finite() || self.kernel_radius_m < 0.0 {
            return Err(ReplayError::Config(format!(
                "kernel_radius_m must be a finite non-negative number, got {}",
                self.kernel_radius_m
            )));
        }
        self.penalty.validate()
    }
}

impl PenaltyParams {
    /// A negative scale or a positive exponent would make the penalty fall
    /// as occupancy rises.
    pub fn validate(&self) -> ReplayResult<()> {
        if !self.scale.is_finite() || self.scale < 0.0 {
            return Err(ReplayError::Config(format!("penalty scale must be >= 0, got {}", self.scale)));
        }
        if !self.exponent.is_finite() || self.exponent > 0.0 {
            return Err(ReplayError::Config(format!(
                "penalty exponent must be <= 0, got {}",
                self.exponent
            )));
        }
        match self.max_penalty {
            Some(cap) if cap.is_nan() || cap < 0.0 => {
                Err(ReplayError::Config(format!("max_penalty must be >= 0, got {cap}")))
            }
            _ => Ok(()),
        }
    }
}
