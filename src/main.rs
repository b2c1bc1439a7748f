use std::process::ExitCode;

use clap::Parser;

use random_planet::export::export_planet_json;
use random_planet::report::write_report;
use random_planet::{PlanetGenerator, PlanetSeed};

#[derive(Parser, Debug)]
#[command(name = "random_planet")]
#[command(about = "Generate a random fictional planet and describe it")]
struct Args {
    /// Random seed (uses OS entropy if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the seed used to stderr so the planet can be reproduced
    #[arg(long)]
    show_seed: bool,

    /// Also export the planet as JSON (e.g., "planet.json")
    #[arg(long)]
    export_json: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let seed = match PlanetSeed::resolve(args.seed) {
        Ok(seed) => seed,
        Err(e) => {
            eprintln!("Failed to seed planet generator: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if args.show_seed {
        eprintln!("Generating planet with seed: {}", seed);
    }

    let mut rng = seed.rng();
    let planet = PlanetGenerator::default().generate(&mut rng);

    if let Err(e) = write_report(&mut std::io::stdout().lock(), &planet) {
        eprintln!("Failed to write report: {}", e);
        return ExitCode::FAILURE;
    }

    if let Some(ref filename) = args.export_json {
        if let Err(e) = export_planet_json(&planet, seed, filename) {
            eprintln!("Failed to export planet: {}", e);
            return ExitCode::FAILURE;
        }
        eprintln!("Exported planet to: {}", filename);
    }

    ExitCode::SUCCESS
}
