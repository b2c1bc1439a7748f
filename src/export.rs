//! JSON export of a generated planet

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::planet::Planet;
use crate::seeds::PlanetSeed;

/// Top-level export document
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanetExport {
    pub metadata: ExportMetadata,
    pub planet: Planet,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Seed that regenerates this planet
    pub seed: u64,
    /// Local wall-clock time of generation
    pub generated_at: String,
}

impl PlanetExport {
    pub fn new(planet: &Planet, seed: PlanetSeed) -> Self {
        Self {
            metadata: ExportMetadata {
                seed: seed.master,
                generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            },
            planet: planet.clone(),
        }
    }
}

/// Write a planet and its seed as pretty-printed JSON
pub fn export_planet_json<P: AsRef<Path>>(
    planet: &Planet,
    seed: PlanetSeed,
    path: P,
) -> Result<(), ExportError> {
    let export = PlanetExport::new(planet, seed);

    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &export)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "I/O error: {}", e),
            ExportError::Serialize(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Serialize(e)
    }
}
