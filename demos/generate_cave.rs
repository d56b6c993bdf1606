//! Example: Generate a cave map
//!
//! Demonstrates the basic usage of the generation pipeline.
//! Run with `RUST_LOG=debug` to see every phase transition.

use cellular_caves::*;

fn main() {
    env_logger::init();

    println!("Cellular Cave Generation Example");
    println!("================================\n");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);

    let config = CaveConfigBuilder::new()
        .map_size(MapSize::Medium)
        .wall_chance(0.45)
        .unwrap()
        .number_of_steps(5)
        .spawn_required_neighbors(7)
        .unwrap()
        .min_distance_from_spawn(12.0)
        .unwrap()
        .point_distribution_chance(0.015)
        .unwrap()
        .build()
        .unwrap();

    println!("Configuration:");
    println!("  Seed: {}", seed);
    println!("  Map Size: {} ({}x{})", config.map_size.name(), config.width(), config.height());
    println!("  Wall Chance: {}", config.wall_chance);
    println!("  Steps: {}", config.number_of_steps);
    println!("  Rules: death < {}, birth > {}", config.death_limit, config.birth_number);
    println!();

    match CaveMap::generate(&config, seed) {
        Ok(map) => {
            println!("{}", render_ascii(map.grid()));
            println!("Statistics:");
            println!("  Caves found: {}", map.cave_count());
            println!("  Kept cave: {} cells ({:.1}% of map)", map.dominant_cave_size(), map.open_ratio() * 100.0);
            println!("  Spawn: ({}, {})", map.spawn().x, map.spawn().y);
            println!("  Markers: {}", map.marker_count());
        }
        Err(err) => {
            eprintln!("Generation failed: {}", err);
            eprintln!("Try another seed or relax the spawn threshold.");
            std::process::exit(1);
        }
    }
}
