use crate::domain::model::ShotInputs;
use crate::utils::error::Result;

/// Where a shot's conditions come from: CLI flags, a shot file on disk, or a
/// test fixture.
pub trait ShotSource {
    fn load(&self) -> Result<ShotInputs>;
}
