//! Planet record and its enumerated attributes

use serde::{Deserialize, Serialize};

/// Broad planet classification, fully determined by livability and temperature
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetType {
    #[serde(rename = "Ice Planet")]
    IcePlanet,
    #[serde(rename = "Desert Planet")]
    DesertPlanet,
    #[serde(rename = "Terrestrial Planet")]
    TerrestrialPlanet,
    #[serde(rename = "Gas Giant")]
    GasGiant,
}

impl PlanetType {
    /// Human-readable label
    pub fn name(&self) -> &'static str {
        match self {
            Self::IcePlanet => "Ice Planet",
            Self::DesertPlanet => "Desert Planet",
            Self::TerrestrialPlanet => "Terrestrial Planet",
            Self::GasGiant => "Gas Giant",
        }
    }
}

impl std::fmt::Display for PlanetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How far the planet has been explored or settled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExplorationStatus {
    Unexplored,
    #[serde(rename = "Partially Explored")]
    PartiallyExplored,
    #[serde(rename = "Extensively Explored")]
    ExtensivelyExplored,
    Inhabited,
    Colonized,
}

impl ExplorationStatus {
    /// All statuses, in selection order
    pub fn all() -> &'static [Self] {
        &[
            Self::Unexplored,
            Self::PartiallyExplored,
            Self::ExtensivelyExplored,
            Self::Inhabited,
            Self::Colonized,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unexplored => "Unexplored",
            Self::PartiallyExplored => "Partially Explored",
            Self::ExtensivelyExplored => "Extensively Explored",
            Self::Inhabited => "Inhabited",
            Self::Colonized => "Colonized",
        }
    }
}

impl std::fmt::Display for ExplorationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One generated planet.
///
/// Built in a single call to [`crate::generator::PlanetGenerator::generate`]
/// and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    /// Diameter (km), derived from mass
    pub diameter: f64,
    /// Surface gravity (m/s^2), derived from mass and diameter
    pub gravity: f64,
    /// Mass (kg)
    pub mass: f64,
    pub planet_type: PlanetType,
    pub livable: bool,
    pub description: String,
    pub atmosphere: String,
    pub moons: u32,
    /// Mean surface temperature (°C)
    pub temperature: f64,
    /// Rotation period (hours)
    pub rotation_period: f64,
    /// Revolution period (days)
    pub revolution_period: f64,
    /// Distinct features in shuffled order, 1 to 5 entries
    pub surface_features: Vec<String>,
    pub magnetic_field: bool,
    pub rings: bool,
    pub exploration: ExplorationStatus,
}
