use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::model::{
    LandingSlope, LieQuality, ShotInputs, SurfaceMoisture, TurfFirmness, WindDirection,
};
use crate::domain::ports::ShotSource;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, validate_required_str};

/// A shot described in a TOML file. Every field is optional so resolution can
/// name exactly which field is missing; categorical fields stay free strings
/// here and only become enums through the lenient parsers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShotFile {
    pub rangefinder_distance: Option<i32>,
    pub temperature_fahrenheit: Option<i32>,
    pub elevation_feet: Option<i32>,
    pub wind_speed_mph: Option<i32>,
    pub wind_direction: Option<String>,
    pub lie_quality: Option<String>,
    pub surface_moisture: Option<String>,
    pub turf_firmness: Option<String>,
    pub landing_slope: Option<String>,
}

impl ShotFile {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Presence check and categorical resolution. Range validation is the
    /// estimator's job and happens later.
    pub fn resolve(&self) -> Result<ShotInputs> {
        Ok(ShotInputs {
            rangefinder_distance: *validate_required_field(
                "rangefinder_distance",
                &self.rangefinder_distance,
            )?,
            temperature_fahrenheit: *validate_required_field(
                "temperature_fahrenheit",
                &self.temperature_fahrenheit,
            )?,
            elevation_feet: *validate_required_field("elevation_feet", &self.elevation_feet)?,
            wind_speed_mph: *validate_required_field("wind_speed_mph", &self.wind_speed_mph)?,
            wind_direction: WindDirection::parse(validate_required_str(
                "wind_direction",
                &self.wind_direction,
            )?),
            lie_quality: LieQuality::parse(validate_required_str("lie_quality", &self.lie_quality)?),
            surface_moisture: SurfaceMoisture::parse(validate_required_str(
                "surface_moisture",
                &self.surface_moisture,
            )?),
            turf_firmness: TurfFirmness::parse(validate_required_str(
                "turf_firmness",
                &self.turf_firmness,
            )?),
            landing_slope: LandingSlope::parse(validate_required_str(
                "landing_slope",
                &self.landing_slope,
            )?),
        })
    }
}

impl ShotSource for ShotFile {
    fn load(&self) -> Result<ShotInputs> {
        self.resolve()
    }
}
