//! Example: Watch the pipeline step by step
//!
//! The observer redraws the grid after every phase transition and sleeps to
//! pace the animation. Pacing lives here, not in the library.

use std::thread;
use std::time::Duration;

use cellular_caves::*;

fn main() {
    env_logger::init();

    let config = CaveConfigBuilder::new()
        .map_size(MapSize::Small)
        .number_of_steps(6)
        .spawn_required_neighbors(6)
        .unwrap()
        .min_distance_from_spawn(8.0)
        .unwrap()
        .point_distribution_chance(0.03)
        .unwrap()
        .build()
        .unwrap();

    let delay = Duration::from_millis(200);
    let mut frame = 0;

    let mut redraw = |phase: &GenerationPhase, grid: &Grid| {
        frame += 1;
        // Clear the terminal and home the cursor
        print!("\x1b[2J\x1b[H");
        println!("frame {:>2}  {:?}\n", frame, phase);
        print!("{}", render_ascii(grid));
        thread::sleep(delay);
    };

    match CaveMap::generate_with_observer(&config, 7, &mut redraw) {
        Ok(map) => println!(
            "\nDone: spawn at ({}, {}), {} markers",
            map.spawn().x,
            map.spawn().y,
            map.marker_count()
        ),
        Err(err) => eprintln!("\nGeneration failed: {}", err),
    }
}
