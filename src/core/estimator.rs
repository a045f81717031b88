//! The distance estimator: five adjustment steps composed into one pass.
//!
//! Carry is adjusted for temperature, elevation, wind, and lie; runout is an
//! independent pipeline seeded from a fixed base and scaled by ground
//! conditions and spin. The function is pure: same inputs, same estimate.

use crate::domain::model::{Breakdown, Estimate, ShotInputs, WindDirection};
use crate::utils::error::{CaddieError, Result};
use crate::utils::validation::Validate;

/// No adjustment at 75°F.
const BASELINE_TEMP_F: f64 = 75.0;
/// Fractional carry change per 10°F away from baseline.
const TEMP_PCT_PER_10F: f64 = 0.0075;
/// Fractional carry bonus per foot of elevation (~6% at 5,000 ft).
const ELEV_PCT_PER_FOOT: f64 = 0.000012;
/// A tailwind helps half as much as a headwind hurts.
const TAILWIND_BENEFIT: f64 = 0.5;
/// Average iron-shot roll at sea level on normal turf.
const BASE_RUNOUT_YARDS: f64 = 12.0;

pub fn estimate(inputs: &ShotInputs) -> Result<Estimate> {
    inputs.validate()?;

    let distance = f64::from(inputs.rangefinder_distance);

    // Carry pipeline.
    let temp_adj = temperature_adjustment(inputs.temperature_fahrenheit);
    let after_temperature = distance * (1.0 + temp_adj);

    // The elevation bonus is a percentage of the original distance, not
    // compounded onto the temperature-adjusted carry.
    let elev_pct = elevation_adjustment(inputs.elevation_feet);
    let after_elevation = after_temperature + distance * elev_pct;

    let wind_adj = wind_adjustment(inputs.wind_speed_mph, inputs.wind_direction);
    let after_wind = after_elevation + wind_adj;

    let lie = inputs.lie_quality.profile();
    let carry = after_wind * lie.carry_factor;

    // Runout pipeline. Spin couples it to the lie: more spin, less roll.
    let runout = BASE_RUNOUT_YARDS
        * inputs.surface_moisture.runout_factor()
        * inputs.turf_firmness.runout_factor()
        * inputs.landing_slope.runout_factor()
        * (1.0 / lie.spin_factor);

    let total = carry + runout;
    if !total.is_finite() {
        return Err(CaddieError::Calculation {
            message: format!("non-finite distance (carry {carry}, runout {runout})"),
        });
    }

    Ok(Estimate {
        adjusted_distance: round_yards(total),
        carry_distance: round_yards(carry),
        runout_distance: round_yards(runout),
        breakdown: Breakdown {
            baseline: inputs.rangefinder_distance,
            after_temperature: round_yards(after_temperature),
            after_elevation: round_yards(after_elevation),
            after_wind: round_yards(after_wind),
            after_lie: round_yards(carry),
            temp_adjustment_percent: round_percent(temp_adj),
            elevation_adjustment_percent: round_percent(elev_pct),
            wind_adjustment_yards: round_yards(wind_adj),
            lie_adjustment_percent: round_percent(lie.carry_factor - 1.0),
        },
    })
}

/// Cold air is denser: roughly 0.75% of carry per 10°F from baseline, signed.
fn temperature_adjustment(temp_fahrenheit: i32) -> f64 {
    (f64::from(temp_fahrenheit) - BASELINE_TEMP_F) / 10.0 * TEMP_PCT_PER_10F
}

/// Thinner air at altitude adds carry; below sea level it costs a little.
fn elevation_adjustment(elevation_feet: i32) -> f64 {
    f64::from(elevation_feet) * ELEV_PCT_PER_FOOT
}

/// Additive yards, asymmetric: full penalty into the wind, half benefit
/// downwind, nothing for crosswind or calm.
fn wind_adjustment(wind_speed_mph: i32, direction: WindDirection) -> f64 {
    let speed = f64::from(wind_speed_mph);
    match direction {
        WindDirection::Headwind => -speed,
        WindDirection::Tailwind => speed * TAILWIND_BENEFIT,
        WindDirection::Crosswind | WindDirection::Calm => 0.0,
    }
}

// Rounds half away from zero, matching f64::round.
fn round_yards(value: f64) -> i32 {
    value.round() as i32
}

fn round_percent(fraction: f64) -> f64 {
    (fraction * 1000.0).round() / 10.0
}
