#[cfg(feature = "cli")]
pub mod cli;
pub mod shot_file;

#[cfg(feature = "cli")]
pub use cli::CliShot;
pub use shot_file::ShotFile;
