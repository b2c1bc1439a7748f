//! Habitability rule and planet type classification

use crate::planet::PlanetType;

/// Coldest temperature (°C, inclusive) a livable planet may have
pub const LIVABLE_MIN_TEMPERATURE: f64 = -20.0;
/// Hottest temperature (°C, inclusive) a livable planet may have
pub const LIVABLE_MAX_TEMPERATURE: f64 = 50.0;
/// Livable planets colder than this are ice planets
pub const ICE_PLANET_THRESHOLD: f64 = -30.0;
/// Livable planets hotter than this are desert planets
pub const DESERT_PLANET_THRESHOLD: f64 = 30.0;

/// Temperature band and type thresholds used for classification
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HabitabilityRules {
    pub livable_min: f64,
    pub livable_max: f64,
    pub ice_below: f64,
    pub desert_above: f64,
}

impl Default for HabitabilityRules {
    fn default() -> Self {
        Self {
            livable_min: LIVABLE_MIN_TEMPERATURE,
            livable_max: LIVABLE_MAX_TEMPERATURE,
            ice_below: ICE_PLANET_THRESHOLD,
            desert_above: DESERT_PLANET_THRESHOLD,
        }
    }
}

impl HabitabilityRules {
    /// A planet is livable only with a magnetic field and a temperature
    /// inside the livable band.
    pub fn is_livable(&self, magnetic_field: bool, temperature: f64) -> bool {
        if !magnetic_field {
            return false;
        }
        temperature >= self.livable_min && temperature <= self.livable_max
    }

    /// Classify from livability and temperature alone.
    ///
    /// Anything not livable is a gas giant regardless of temperature.
    pub fn classify(&self, livable: bool, temperature: f64) -> PlanetType {
        if !livable {
            return PlanetType::GasGiant;
        }
        if temperature < self.ice_below {
            PlanetType::IcePlanet
        } else if temperature > self.desert_above {
            PlanetType::DesertPlanet
        } else {
            PlanetType::TerrestrialPlanet
        }
    }
}
