//! Planet generation
//!
//! Samples the independent attributes from a caller-supplied random source,
//! then derives diameter, gravity, livability, surface features and type.
//! The generator holds no state between calls; give each thread its own rng
//! if planets are generated in parallel.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalogs::{self, PLANET_ATMOSPHERES, PLANET_DESCRIPTIONS, PLANET_NAMES};
use crate::habitability::HabitabilityRules;
use crate::physics::{self, DIAMETER_DIVISOR, GRAVITY_DENOMINATOR_FACTOR};
use crate::planet::{ExplorationStatus, Planet};

/// Tunable constants for planet generation.
///
/// The defaults reproduce the reference generator exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetParams {
    /// Mass range in kg, sampled as min + u * (max - min)
    pub mass_range: (f64, f64),
    /// Mass-to-diameter divisor
    pub diameter_divisor: f64,
    /// Factor on the squared diameter in the gravity formula
    pub gravity_factor: f64,
    /// Highest moon count (inclusive)
    pub max_moons: u32,
    /// Temperature range in °C (upper bound exclusive)
    pub temperature_range: (f64, f64),
    /// Rotation period upper bound in hours (exclusive)
    pub max_rotation_period: f64,
    /// Revolution period upper bound in days (exclusive)
    pub max_revolution_period: f64,
    /// Number of surface features to keep (inclusive range)
    pub surface_feature_count: (usize, usize),
    pub habitability: HabitabilityRules,
}

impl Default for PlanetParams {
    fn default() -> Self {
        Self {
            mass_range: (1e22, 1e28),
            diameter_divisor: DIAMETER_DIVISOR,
            gravity_factor: GRAVITY_DENOMINATOR_FACTOR,
            max_moons: 9,
            temperature_range: (-100.0, 100.0),
            max_rotation_period: 24.0,
            max_revolution_period: 100.0,
            surface_feature_count: (1, 5),
            habitability: HabitabilityRules::default(),
        }
    }
}

/// Produces complete planets from a random source
#[derive(Clone, Debug, Default)]
pub struct PlanetGenerator {
    params: PlanetParams,
}

impl PlanetGenerator {
    pub fn new(params: PlanetParams) -> Self {
        Self { params }
    }

    /// Generate one planet.
    ///
    /// Draws are taken in a fixed order, so the same seeded rng always
    /// yields the same planet.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Planet {
        let p = &self.params;

        let name = pick(PLANET_NAMES, rng);
        let description = pick(PLANET_DESCRIPTIONS, rng);
        let atmosphere = pick(PLANET_ATMOSPHERES, rng);

        let mass = sample_span(p.mass_range, rng);
        let diameter = physics::calculate_diameter(mass, p.diameter_divisor);
        let gravity = physics::calculate_gravity(mass, diameter, p.gravity_factor);

        let moons = rng.gen_range(0..=p.max_moons);
        let temperature = sample_span(p.temperature_range, rng);
        let rotation_period = rng.gen::<f64>() * p.max_rotation_period;
        let revolution_period = rng.gen::<f64>() * p.max_revolution_period;

        let magnetic_field = rng.gen::<bool>();
        let livable = p.habitability.is_livable(magnetic_field, temperature);
        let surface_features = select_surface_features(livable, p.surface_feature_count, rng);

        let rings = rng.gen::<bool>();
        let exploration = pick_exploration_status(rng);

        let planet_type = p.habitability.classify(livable, temperature);

        Planet {
            name: name.to_string(),
            diameter,
            gravity,
            mass,
            planet_type,
            livable,
            description: description.to_string(),
            atmosphere: atmosphere.to_string(),
            moons,
            temperature,
            rotation_period,
            revolution_period,
            surface_features,
            magnetic_field,
            rings,
            exploration,
        }
    }
}

/// Shuffle the catalog matching `livable` and keep the first `count` entries,
/// where `count` is drawn from the inclusive range (capped at catalog size).
pub fn select_surface_features<R: Rng + ?Sized>(
    livable: bool,
    count_range: (usize, usize),
    rng: &mut R,
) -> Vec<String> {
    let mut features: Vec<&str> = catalogs::surface_features_for(livable).to_vec();
    features.shuffle(rng);

    let (min, max) = count_range;
    let count = rng.gen_range(min..=max).min(features.len());
    features.truncate(count);

    features.into_iter().map(str::to_string).collect()
}

/// Uniformly pick an exploration status
pub fn pick_exploration_status<R: Rng + ?Sized>(rng: &mut R) -> ExplorationStatus {
    let all = ExplorationStatus::all();
    all[rng.gen_range(0..all.len())]
}

/// Uniform pick by index; catalogs are non-empty constants
fn pick<R: Rng + ?Sized>(catalog: &'static [&'static str], rng: &mut R) -> &'static str {
    catalog[rng.gen_range(0..catalog.len())]
}

/// min + u * (max - min), u in [0, 1)
fn sample_span<R: Rng + ?Sized>(range: (f64, f64), rng: &mut R) -> f64 {
    let (min, max) = range;
    rng.gen::<f64>() * (max - min) + min
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogs::{BARREN_SURFACE_FEATURES, LIVABLE_SURFACE_FEATURES};
    use crate::planet::PlanetType;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn sample_planets(seed: u64, count: usize) -> Vec<Planet> {
        let generator = PlanetGenerator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..count).map(|_| generator.generate(&mut rng)).collect()
    }

    #[test]
    fn test_same_seed_same_planet() {
        let generator = PlanetGenerator::default();
        let a = generator.generate(&mut ChaCha8Rng::seed_from_u64(42));
        let b = generator.generate(&mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_42_golden_planet() {
        let planet = PlanetGenerator::default().generate(&mut ChaCha8Rng::seed_from_u64(42));

        // Any reordering of draws in `generate` shifts these values
        assert_eq!(planet.name, "Astraia");
        assert_eq!(planet.mass, 6.273608938368191e27);
        assert_eq!(planet.diameter, 12547217.876736382);
        assert_eq!(planet.gravity, 5319.346540060267);
        assert_eq!(planet.moons, 7);
        assert!(planet.magnetic_field);
        assert!(planet.livable);
        assert_eq!(planet.planet_type, PlanetType::TerrestrialPlanet);
        assert_eq!(
            planet.surface_features,
            vec!["Mountains", "Forests", "Valleys", "Oceans", "Swamps"]
        );
        assert_eq!(planet.exploration, ExplorationStatus::ExtensivelyExplored);
    }

    #[test]
    fn test_seed_42_golden_report() {
        let planet = PlanetGenerator::default().generate(&mut ChaCha8Rng::seed_from_u64(42));
        let report = crate::report::render_report(&planet);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Planet Name: Astraia");
        assert_eq!(lines[2], "Planet Type: Terrestrial Planet");
        assert_eq!(lines[3], format!("Description: {}", planet.description));
        assert_eq!(lines[4], "Surface Features: [Mountains Forests Valleys Oceans Swamps]");
        assert_eq!(lines[5], "Livable: true");
        assert!(lines[6].starts_with("Temperature: ") && lines[6].ends_with(" °C"));
        // `lines()` strips the delimiter's CRLF endings
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "######### INFO #########");
        assert_eq!(lines[9], "Diameter: 1.2547217876736382e+07 km");
        assert_eq!(lines[10], "Gravity: 5319.346540060267 m/s^2");
        assert_eq!(lines[11], "Mass: 6.273608938368191e+27 kg");
        assert_eq!(lines[12], format!("Atmosphere: {}", planet.atmosphere));
        assert_eq!(lines[13], "Moons: 7");
        assert!(lines[14].starts_with("Rotation Period: ") && lines[14].ends_with(" hours"));
        assert!(lines[15].starts_with("Revolution Period: ") && lines[15].ends_with(" days"));
        assert_eq!(lines[16], "Magnetic Field: true");
        assert_eq!(lines[17], format!("Rings: {}", planet.rings));
        assert_eq!(lines[18], "Exploration Status: Extensively Explored");
        assert_eq!(lines.len(), 19);
        assert!(report.contains(crate::report::INFO_DELIMITER));
    }

    #[test]
    fn test_different_seeds_vary() {
        let planets = sample_planets(7, 50);
        let names: HashSet<_> = planets.iter().map(|p| p.name.as_str()).collect();
        let masses: HashSet<_> = planets.iter().map(|p| p.mass.to_bits()).collect();
        assert!(names.len() > 10);
        assert_eq!(masses.len(), 50);
    }

    #[test]
    fn test_sampled_ranges() {
        for planet in sample_planets(42, 2000) {
            assert!(planet.mass >= 1e22 && planet.mass <= 1e28);
            assert!(planet.diameter > 0.0);
            assert!(planet.gravity > 0.0);
            assert!(planet.moons <= 9);
            assert!(planet.temperature >= -100.0 && planet.temperature < 100.0);
            assert!(planet.rotation_period >= 0.0 && planet.rotation_period < 24.0);
            assert!(planet.revolution_period >= 0.0 && planet.revolution_period < 100.0);
            assert!(PLANET_NAMES.contains(&planet.name.as_str()));
            assert!(PLANET_DESCRIPTIONS.contains(&planet.description.as_str()));
            assert!(PLANET_ATMOSPHERES.contains(&planet.atmosphere.as_str()));
        }
    }

    #[test]
    fn test_derived_values_follow_formulas() {
        for planet in sample_planets(3, 200) {
            assert_eq!(planet.diameter, planet.mass / 5e20);
            assert_eq!(
                planet.gravity,
                (6.67430e-11 * planet.mass) / (0.5 * planet.diameter * planet.diameter)
            );
        }
    }

    #[test]
    fn test_livable_requires_magnetic_field() {
        for planet in sample_planets(42, 2000) {
            if planet.livable {
                assert!(planet.magnetic_field);
                assert!(planet.temperature >= -20.0 && planet.temperature <= 50.0);
            }
            if !planet.magnetic_field {
                assert!(!planet.livable);
            }
        }
    }

    #[test]
    fn test_type_matches_livability_and_temperature() {
        for planet in sample_planets(42, 2000) {
            assert_eq!(planet.planet_type == PlanetType::GasGiant, !planet.livable);
            if planet.livable {
                let expected = if planet.temperature < -30.0 {
                    PlanetType::IcePlanet
                } else if planet.temperature > 30.0 {
                    PlanetType::DesertPlanet
                } else {
                    PlanetType::TerrestrialPlanet
                };
                assert_eq!(planet.planet_type, expected);
            }
        }
    }

    #[test]
    fn test_surface_features_unique_and_from_matching_catalog() {
        for planet in sample_planets(42, 2000) {
            let features = &planet.surface_features;
            assert!(!features.is_empty() && features.len() <= 5);

            let unique: HashSet<_> = features.iter().collect();
            assert_eq!(unique.len(), features.len());

            let catalog = if planet.livable {
                LIVABLE_SURFACE_FEATURES
            } else {
                BARREN_SURFACE_FEATURES
            };
            assert!(features.iter().all(|f| catalog.contains(&f.as_str())));
        }
    }

    #[test]
    fn test_all_outcomes_reachable() {
        let planets = sample_planets(11, 3000);

        let livable = planets.iter().filter(|p| p.livable).count();
        assert!(livable > 0 && livable < planets.len());

        let statuses: HashSet<_> = planets.iter().map(|p| p.exploration).collect();
        assert_eq!(statuses.len(), 5);

        let lengths: HashSet<_> = planets.iter().map(|p| p.surface_features.len()).collect();
        assert_eq!(lengths.len(), 5);

        assert!(planets.iter().any(|p| p.planet_type == PlanetType::DesertPlanet));
        assert!(planets.iter().any(|p| p.planet_type == PlanetType::TerrestrialPlanet));
        assert!(planets.iter().any(|p| p.rings) && planets.iter().any(|p| !p.rings));
    }

    #[test]
    fn test_surface_feature_order_is_shuffled() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let differs = (0..50).any(|_| {
            let picked = select_surface_features(true, (5, 5), &mut rng);
            picked
                .iter()
                .zip(LIVABLE_SURFACE_FEATURES)
                .any(|(a, b)| a.as_str() != *b)
        });
        assert!(differs);
    }

    #[test]
    fn test_surface_feature_count_capped_by_catalog() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let picked = select_surface_features(true, (20, 20), &mut rng);
        assert_eq!(picked.len(), LIVABLE_SURFACE_FEATURES.len());
    }

    #[test]
    fn test_custom_params_pin_mass() {
        let params = PlanetParams {
            mass_range: (1e22, 1e22),
            ..PlanetParams::default()
        };
        let generator = PlanetGenerator::new(params);
        let planet = generator.generate(&mut ChaCha8Rng::seed_from_u64(5));
        assert_eq!(planet.mass, 1e22);
        assert_eq!(planet.diameter, 20.0);
        assert!((planet.gravity - 3.33715e9).abs() / 3.33715e9 < 1e-12);
    }

    #[test]
    fn test_parallel_generation_with_independent_rngs() {
        let generator = PlanetGenerator::default();
        let handles: Vec<_> = (0..4u64)
            .map(|seed| {
                let generator = generator.clone();
                std::thread::spawn(move || {
                    generator.generate(&mut ChaCha8Rng::seed_from_u64(seed))
                })
            })
            .collect();

        for (seed, handle) in handles.into_iter().enumerate() {
            let planet = handle.join().unwrap();
            let expected = generator.generate(&mut ChaCha8Rng::seed_from_u64(seed as u64));
            assert_eq!(planet, expected);
        }
    }
}
