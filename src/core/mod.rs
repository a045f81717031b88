pub mod engine;
pub mod estimator;

pub use crate::domain::model::{Breakdown, Estimate, ShotInputs};
pub use crate::domain::ports::ShotSource;
pub use crate::utils::error::Result;
