use clap::Parser;
use std::path::PathBuf;

use crate::config::ShotFile;
use crate::domain::model::{
    LandingSlope, LieQuality, ShotInputs, SurfaceMoisture, TurfFirmness, WindDirection,
};
use crate::domain::ports::ShotSource;
use crate::utils::error::Result;

/// One shot described as CLI flags. Defaults reproduce the neutral form
/// state: a 150-yard shot at 75°F, sea level, no wind, normal fairway.
/// Categorical flags take free strings and go through the lenient parsers,
/// so an unrecognized label falls back to its neutral value instead of
/// failing the parse.
#[derive(Debug, Clone, Parser)]
#[command(name = "shot-caddie")]
#[command(about = "Estimates a golf shot's adjusted carry distance from conditions")]
pub struct CliShot {
    /// Rangefinder distance in yards (0-300)
    #[arg(long, default_value_t = 150)]
    pub distance: i32,

    /// Air temperature in °F (-50 to 120)
    #[arg(long, default_value_t = 75)]
    pub temperature: i32,

    /// Course elevation in feet (-300 to 15000)
    #[arg(long, default_value_t = 0)]
    pub elevation: i32,

    /// Wind speed in mph (0-100)
    #[arg(long, default_value_t = 0)]
    pub wind_speed: i32,

    /// Wind direction: headwind, tailwind, crosswind, calm
    #[arg(long, default_value = "calm")]
    pub wind_direction: String,

    /// Lie: tee, perfect-fairway, normal-fairway, first-cut, flyer-rough, heavy-rough
    #[arg(long, default_value = "normal-fairway")]
    pub lie: String,

    /// Surface moisture at the landing area: dry, damp, wet
    #[arg(long, default_value = "dry")]
    pub moisture: String,

    /// Turf firmness at the landing area: soft, normal, firm, baked
    #[arg(long, default_value = "normal")]
    pub firmness: String,

    /// Landing-area slope: uphill, flat, downhill
    #[arg(long, default_value = "flat")]
    pub slope: String,

    /// Load the shot from a TOML file instead of flags
    #[arg(long)]
    pub shot_file: Option<PathBuf>,

    /// Print the estimate as JSON instead of the report
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliShot {
    fn to_inputs(&self) -> ShotInputs {
        ShotInputs {
            rangefinder_distance: self.distance,
            temperature_fahrenheit: self.temperature,
            elevation_feet: self.elevation,
            wind_speed_mph: self.wind_speed,
            wind_direction: WindDirection::parse(&self.wind_direction),
            lie_quality: LieQuality::parse(&self.lie),
            surface_moisture: SurfaceMoisture::parse(&self.moisture),
            turf_firmness: TurfFirmness::parse(&self.firmness),
            landing_slope: LandingSlope::parse(&self.slope),
        }
    }
}

impl ShotSource for CliShot {
    fn load(&self) -> Result<ShotInputs> {
        if let Some(path) = &self.shot_file {
            tracing::debug!("Loading shot file: {}", path.display());
            return ShotFile::from_path(path)?.resolve();
        }
        Ok(self.to_inputs())
    }
}
