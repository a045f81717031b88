use crate::core::estimator;
use crate::core::{Estimate, Result, ShotSource};

pub struct CaddieEngine<S: ShotSource> {
    source: S,
}

impl<S: ShotSource> CaddieEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn run(&self) -> Result<Estimate> {
        tracing::info!("Loading shot inputs...");
        let inputs = self.source.load()?;
        tracing::debug!(?inputs, "Shot inputs resolved");

        tracing::info!("Estimating adjusted distance...");
        let estimate = estimator::estimate(&inputs)?;
        tracing::info!(
            adjusted = estimate.adjusted_distance,
            carry = estimate.carry_distance,
            runout = estimate.runout_distance,
            "Estimate complete"
        );

        Ok(estimate)
    }
}
