//! Fixed word catalogs used for planet generation
//!
//! All selections are uniform by index with replacement, so repeated entries
//! (e.g. "Orionis") are simply more likely to be picked.

// ============================================================================
// IDENTITY
// ============================================================================

pub const PLANET_NAMES: &[&str] = &[
    "Novus", "Stella", "Astraea", "Epsilon", "Orionis", "Nebula", "Seraphina",
    "Zenith", "Arctica", "Valora", "Solstice", "Galactron", "Nebulon",
    "Celestis", "Zirconia", "Helios", "Aquila", "Eridanus", "Cassiopeia",
    "Lunaris", "Aetherius", "Calypso", "Astralis", "Volantis", "Lyricus",
    "Phobos", "Isolde", "Solara", "Electra", "Arcanum", "Orionis", "Zephyrus",
    "Andromeda", "Arcturus", "Astraia", "Nocturna", "Vespera", "Nebulus",
    "Solis", "Helix", "Galaxia", "Vega", "Nova", "Draco", "Bellatrix",
    "Lumina", "Celestia", "Elysia", "Aurius", "Selene",
];

pub const PLANET_DESCRIPTIONS: &[&str] = &[
    "This planet is known for its breathtaking landscapes and vibrant ecosystems.",
    "As one of the largest planets in the galaxy, it boasts majestic rings and numerous moons.",
    "This planet is a frozen world with extreme temperatures and icy terrains.",
    "Home to stunning auroras and powerful magnetic fields, this planet is a sight to behold.",
    "Scientists believe this planet may have the potential to support life due to its favorable conditions.",
    "With its vast oceans and lush forests, this planet is a haven for biodiversity.",
    "Featuring towering mountains and vast deserts, this planet is a study in contrasting landscapes.",
    "This planet is shrouded in mystery, with ancient ruins and unexplored territories waiting to be discovered.",
    "Known for its extreme weather phenomena, this planet experiences frequent storms and atmospheric turbulence.",
    "Rich in valuable resources, this planet has attracted the attention of intergalactic miners and explorers.",
];

pub const PLANET_ATMOSPHERES: &[&str] = &[
    "Primarily composed of nitrogen and oxygen, this planet's atmosphere supports various life forms.",
    "This planet has a dense atmosphere rich in hydrogen and helium, making it an ideal gas giant.",
    "The atmosphere of this planet is composed of methane and ammonia, resulting in its distinctive blue appearance.",
    "With a thin atmosphere of carbon dioxide, this planet experiences extreme temperature variations.",
    "Scientists have yet to fully explore and understand the complex atmosphere of this exoplanet.",
    "The atmosphere of this planet is laden with sulfur compounds, creating a pungent and acidic environment.",
    "Featuring swirling clouds of dust and gas, this planet's atmosphere gives it an ethereal beauty.",
    "The atmosphere of this planet is known for its mesmerizing light displays and atmospheric electricity.",
    "This planet experiences frequent atmospheric disturbances, resulting in intense auroras and atmospheric phenomena.",
    "The atmosphere of this planet contains rare elements that give it a unique coloration and composition.",
];

// ============================================================================
// SURFACE FEATURES
// ============================================================================

/// Terrain offered to planets that pass the habitability rule
pub const LIVABLE_SURFACE_FEATURES: &[&str] = &[
    "Mountains", "Valleys", "Oceans", "Forests", "Grassland", "Swamps", "Lakes",
];

/// Terrain offered to everything else
pub const BARREN_SURFACE_FEATURES: &[&str] = &[
    "Craters", "Deserts", "Volcanoes", "Canyons", "Ice Caps", "Hurricanes",
    "Tornados", "Caves",
];

/// Surface feature catalog matching a livability verdict
pub fn surface_features_for(livable: bool) -> &'static [&'static str] {
    if livable {
        LIVABLE_SURFACE_FEATURES
    } else {
        BARREN_SURFACE_FEATURES
    }
}
