//! Seed management for planet generation
//!
//! A planet is fully determined by its master seed. Seeds come either from
//! the command line (to replay a planet) or from the operating system.

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Master seed for one generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanetSeed {
    pub master: u64,
}

impl PlanetSeed {
    pub fn from_master(master: u64) -> Self {
        Self { master }
    }

    /// Draw a fresh seed from the OS random source.
    ///
    /// Fails instead of falling back to a fixed seed when no entropy is available.
    pub fn from_entropy() -> Result<Self, SeedError> {
        let mut bytes = [0u8; 8];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| SeedError::Entropy(e.to_string()))?;
        Ok(Self::from_master(u64::from_le_bytes(bytes)))
    }

    /// Use the explicit seed if given, otherwise ask the OS
    pub fn resolve(explicit: Option<u64>) -> Result<Self, SeedError> {
        match explicit {
            Some(master) => Ok(Self::from_master(master)),
            None => Self::from_entropy(),
        }
    }

    /// Deterministic generator for this seed
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.master)
    }
}

impl std::fmt::Display for PlanetSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.master)
    }
}

#[derive(Debug)]
pub enum SeedError {
    Entropy(String),
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::Entropy(e) => write!(f, "Random source unavailable: {}", e),
        }
    }
}

impl std::error::Error for SeedError {}
