//! Human-readable planet report
//!
//! Layout and number formatting match the sample outputs of the reference
//! generator, so existing transcripts can be compared line by line.

use std::fmt;
use std::io;

use crate::planet::Planet;

/// Separator between the overview and the detailed info block
pub const INFO_DELIMITER: &str = "\r\n######### INFO #########\r\n";

/// Report view of a planet; `Display` renders the full text
pub struct PlanetReport<'a>(pub &'a Planet);

impl fmt::Display for PlanetReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_overview(f, self.0)?;
        f.write_str(INFO_DELIMITER)?;
        write_info(f, self.0)
    }
}

/// Render the full report.
pub fn render_report(planet: &Planet) -> String {
    PlanetReport(planet).to_string()
}

/// Write the report to any byte sink (stdout in the binary)
pub fn write_report<W: io::Write>(writer: &mut W, planet: &Planet) -> io::Result<()> {
    write!(writer, "{}", PlanetReport(planet))?;
    writer.flush()
}

fn write_overview(out: &mut fmt::Formatter<'_>, planet: &Planet) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "Planet Name: {}", planet.name)?;
    writeln!(out, "Planet Type: {}", planet.planet_type)?;
    writeln!(out, "Description: {}", planet.description)?;
    writeln!(out, "Surface Features: {}", format_list(&planet.surface_features))?;
    writeln!(out, "Livable: {}", planet.livable)?;
    writeln!(out, "Temperature: {} °C", format_float(planet.temperature))
}

fn write_info(out: &mut fmt::Formatter<'_>, planet: &Planet) -> fmt::Result {
    writeln!(out, "Diameter: {} km", format_float(planet.diameter))?;
    writeln!(out, "Gravity: {} m/s^2", format_float(planet.gravity))?;
    writeln!(out, "Mass: {} kg", format_float(planet.mass))?;
    writeln!(out, "Atmosphere: {}", planet.atmosphere)?;
    writeln!(out, "Moons: {}", planet.moons)?;
    writeln!(out, "Rotation Period: {} hours", format_float(planet.rotation_period))?;
    writeln!(out, "Revolution Period: {} days", format_float(planet.revolution_period))?;
    writeln!(out, "Magnetic Field: {}", planet.magnetic_field)?;
    writeln!(out, "Rings: {}", planet.rings)?;
    writeln!(out, "Exploration Status: {}", planet.exploration)
}

/// Space-separated items in square brackets, e.g. `[Caves Deserts]`
pub fn format_list(items: &[String]) -> String {
    format!("[{}]", items.join(" "))
}

/// Shortest round-trip decimal, switching to `d.ddde+XX` form when the
/// decimal exponent is below -4 or at least 6.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let sci = format!("{:e}", value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return format!("{}", value),
    };

    if exponent < -4 || exponent >= 6 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        format!("{}", value)
    }
}
