pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliShot;
pub use crate::config::ShotFile;

pub use crate::core::{engine::CaddieEngine, estimator::estimate};
pub use crate::domain::model::{
    Breakdown, Estimate, LandingSlope, LieQuality, ShotInputs, SurfaceMoisture, TurfFirmness,
    WindDirection,
};
pub use crate::domain::ports::ShotSource;
pub use crate::utils::error::{CaddieError, Result};
