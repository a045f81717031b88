use serde::{Deserialize, Serialize};

use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};

/// Carry and spin multipliers for a given lie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LieProfile {
    pub carry_factor: f64,
    pub spin_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindDirection {
    Headwind,
    Tailwind,
    Crosswind,
    Calm,
}

impl WindDirection {
    /// Lenient parse. Accepts the short names as well as the long form UI
    /// labels ("Straight In (Headwind)"); anything unrecognized reads as
    /// calm, which has no effect on distance.
    pub fn parse(s: &str) -> Self {
        let key = normalize(s);
        if key.contains("headwind") || key == "head" {
            WindDirection::Headwind
        } else if key.contains("tailwind") || key == "tail" {
            WindDirection::Tailwind
        } else if key.contains("crosswind") || key == "cross" {
            WindDirection::Crosswind
        } else {
            WindDirection::Calm
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LieQuality {
    Tee,
    PerfectFairway,
    NormalFairway,
    FirstCut,
    FlyerRough,
    HeavyRough,
}

impl LieQuality {
    /// Unrecognized lies read as a normal fairway (neutral factors).
    pub fn parse(s: &str) -> Self {
        match normalize(s).as_str() {
            "tee" => LieQuality::Tee,
            "perfectfairway" => LieQuality::PerfectFairway,
            "firstcut" => LieQuality::FirstCut,
            "flyerrough" | "flyer" => LieQuality::FlyerRough,
            "heavyrough" => LieQuality::HeavyRough,
            _ => LieQuality::NormalFairway,
        }
    }

    /// A flyer lie grabs less spin, so the ball carries further and rolls
    /// further; heavy rough does the opposite.
    pub fn profile(self) -> LieProfile {
        match self {
            LieQuality::Tee | LieQuality::PerfectFairway | LieQuality::NormalFairway => LieProfile {
                carry_factor: 1.0,
                spin_factor: 1.0,
            },
            LieQuality::FirstCut => LieProfile {
                carry_factor: 0.97,
                spin_factor: 1.05,
            },
            LieQuality::FlyerRough => LieProfile {
                carry_factor: 1.05,
                spin_factor: 0.7,
            },
            LieQuality::HeavyRough => LieProfile {
                carry_factor: 0.85,
                spin_factor: 1.2,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceMoisture {
    Dry,
    Damp,
    Wet,
}

impl SurfaceMoisture {
    /// Unrecognized moisture reads as dry (factor 1.0).
    pub fn parse(s: &str) -> Self {
        match normalize(s).as_str() {
            "damp" => SurfaceMoisture::Damp,
            "wet" => SurfaceMoisture::Wet,
            _ => SurfaceMoisture::Dry,
        }
    }

    pub fn runout_factor(self) -> f64 {
        match self {
            SurfaceMoisture::Dry => 1.0,
            SurfaceMoisture::Damp => 0.97,
            SurfaceMoisture::Wet => 0.94,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurfFirmness {
    Soft,
    Normal,
    Firm,
    Baked,
}

impl TurfFirmness {
    /// Unrecognized firmness reads as normal (factor 1.0).
    pub fn parse(s: &str) -> Self {
        match normalize(s).as_str() {
            "soft" => TurfFirmness::Soft,
            "firm" => TurfFirmness::Firm,
            "baked" => TurfFirmness::Baked,
            _ => TurfFirmness::Normal,
        }
    }

    pub fn runout_factor(self) -> f64 {
        match self {
            TurfFirmness::Soft => 0.8,
            TurfFirmness::Normal => 1.0,
            TurfFirmness::Firm => 1.15,
            TurfFirmness::Baked => 1.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandingSlope {
    Uphill,
    Flat,
    Downhill,
}

impl LandingSlope {
    /// Unrecognized slope reads as flat (factor 1.0).
    pub fn parse(s: &str) -> Self {
        match normalize(s).as_str() {
            "uphill" => LandingSlope::Uphill,
            "downhill" => LandingSlope::Downhill,
            _ => LandingSlope::Flat,
        }
    }

    pub fn runout_factor(self) -> f64 {
        match self {
            LandingSlope::Uphill => 0.85,
            LandingSlope::Flat => 1.0,
            LandingSlope::Downhill => 1.2,
        }
    }
}

// Case, spaces, hyphens, and punctuation are all insignificant when matching
// categorical labels.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// A single shot's conditions, fully resolved. Construction goes through a
/// `ShotSource` (CLI flags or a shot file); the estimator revalidates the
/// numeric ranges regardless of where the record came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotInputs {
    pub rangefinder_distance: i32,
    pub temperature_fahrenheit: i32,
    pub elevation_feet: i32,
    pub wind_speed_mph: i32,
    pub wind_direction: WindDirection,
    pub lie_quality: LieQuality,
    pub surface_moisture: SurfaceMoisture,
    pub turf_firmness: TurfFirmness,
    pub landing_slope: LandingSlope,
}

impl Validate for ShotInputs {
    fn validate(&self) -> Result<()> {
        validate_range(
            self.rangefinder_distance,
            0,
            300,
            "Rangefinder distance must be 0-300 yards",
        )?;
        validate_range(
            self.temperature_fahrenheit,
            -50,
            120,
            "Temperature must be -50 to 120°F",
        )?;
        validate_range(
            self.elevation_feet,
            -300,
            15_000,
            "Elevation must be -300 to 15,000 feet",
        )?;
        validate_range(self.wind_speed_mph, 0, 100, "Wind speed must be 0-100 mph")?;
        Ok(())
    }
}

/// Per-step contribution detail. Percentages are signed `(factor * 100)`
/// values rounded to one decimal; wind is reported in yards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub baseline: i32,
    pub after_temperature: i32,
    pub after_elevation: i32,
    pub after_wind: i32,
    pub after_lie: i32,
    pub temp_adjustment_percent: f64,
    pub elevation_adjustment_percent: f64,
    pub wind_adjustment_yards: i32,
    pub lie_adjustment_percent: f64,
}

/// The estimate for one shot. Built once per calculation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub adjusted_distance: i32,
    pub carry_distance: i32,
    pub runout_distance: i32,
    pub breakdown: Breakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wind_direction_lenient_parse() {
        assert_eq!(
            WindDirection::parse("Straight In (Headwind)"),
            WindDirection::Headwind
        );
        assert_eq!(
            WindDirection::parse("Straight Out (Tailwind)"),
            WindDirection::Tailwind
        );
        assert_eq!(WindDirection::parse("crosswind"), WindDirection::Crosswind);
        assert_eq!(WindDirection::parse("Calm / No Wind"), WindDirection::Calm);
        assert_eq!(WindDirection::parse("None"), WindDirection::Calm);
        assert_eq!(WindDirection::parse("gusty"), WindDirection::Calm);
    }

    #[test]
    fn test_lie_quality_lenient_parse() {
        assert_eq!(LieQuality::parse("Tee"), LieQuality::Tee);
        assert_eq!(LieQuality::parse("perfect-fairway"), LieQuality::PerfectFairway);
        assert_eq!(LieQuality::parse("First Cut"), LieQuality::FirstCut);
        assert_eq!(LieQuality::parse("Flyer Rough"), LieQuality::FlyerRough);
        assert_eq!(LieQuality::parse("heavy_rough"), LieQuality::HeavyRough);
        assert_eq!(LieQuality::parse("cart path"), LieQuality::NormalFairway);
    }

    #[test]
    fn test_unknown_categoricals_fall_back_to_neutral() {
        assert_eq!(SurfaceMoisture::parse("Normal"), SurfaceMoisture::Dry);
        assert_eq!(TurfFirmness::parse("spongy"), TurfFirmness::Normal);
        assert_eq!(LandingSlope::parse("sidehill"), LandingSlope::Flat);
    }

    #[test]
    fn test_lie_profiles() {
        let tee = LieQuality::Tee.profile();
        assert_eq!(tee.carry_factor, 1.0);
        assert_eq!(tee.spin_factor, 1.0);
        assert_eq!(LieQuality::NormalFairway.profile(), tee);

        let flyer = LieQuality::FlyerRough.profile();
        assert_eq!(flyer.carry_factor, 1.05);
        assert_eq!(flyer.spin_factor, 0.7);

        let heavy = LieQuality::HeavyRough.profile();
        assert_eq!(heavy.carry_factor, 0.85);
        assert_eq!(heavy.spin_factor, 1.2);

        let first_cut = LieQuality::FirstCut.profile();
        assert_eq!(first_cut.carry_factor, 0.97);
        assert_eq!(first_cut.spin_factor, 1.05);
    }

    #[test]
    fn test_runout_factor_tables() {
        assert_eq!(SurfaceMoisture::Wet.runout_factor(), 0.94);
        assert_eq!(TurfFirmness::Baked.runout_factor(), 1.3);
        assert_eq!(LandingSlope::Downhill.runout_factor(), 1.2);
        assert_eq!(LandingSlope::Uphill.runout_factor(), 0.85);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut inputs = ShotInputs {
            rangefinder_distance: 150,
            temperature_fahrenheit: 75,
            elevation_feet: 0,
            wind_speed_mph: 0,
            wind_direction: WindDirection::Calm,
            lie_quality: LieQuality::NormalFairway,
            surface_moisture: SurfaceMoisture::Dry,
            turf_firmness: TurfFirmness::Normal,
            landing_slope: LandingSlope::Flat,
        };
        assert!(inputs.validate().is_ok());

        inputs.rangefinder_distance = 301;
        let err = inputs.validate().unwrap_err();
        assert_eq!(err.to_string(), "Rangefinder distance must be 0-300 yards");
    }
}
