//! Closed-form size and gravity relations.
//!
//! These are deliberately simplified: the diameter is a straight mass ratio
//! and the gravity term keeps a 0.5 factor on the squared diameter. Sample
//! outputs depend on the exact constants, so they are not "corrected".

/// Gravitational constant (m^3 kg^-1 s^-2)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Mass-to-diameter divisor (kg per km)
pub const DIAMETER_DIVISOR: f64 = 5e20;

/// Factor applied to the squared diameter in the gravity denominator
pub const GRAVITY_DENOMINATOR_FACTOR: f64 = 0.5;

/// Diameter in kilometers from mass in kilograms
pub fn calculate_diameter(mass: f64, divisor: f64) -> f64 {
    mass / divisor
}

/// Surface gravity proxy: (G * M) / (factor * D^2)
pub fn calculate_gravity(mass: f64, diameter: f64, factor: f64) -> f64 {
    (GRAVITATIONAL_CONSTANT * mass) / (factor * diameter * diameter)
}
