//! Random planet generation library
//!
//! Re-exports modules for use by the binary and tools.

pub mod catalogs;
pub mod export;
pub mod generator;
pub mod habitability;
pub mod physics;
pub mod planet;
pub mod report;
pub mod seeds;

pub use generator::{PlanetGenerator, PlanetParams};
pub use planet::{ExplorationStatus, Planet, PlanetType};
pub use seeds::PlanetSeed;
