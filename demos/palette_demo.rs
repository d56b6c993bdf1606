//! Example: Convert a finished map to texture data
//!
//! Shows how an engine would consume the grid: one RGBA texel per cell.

use cellular_caves::*;

fn main() {
    let config = CaveConfigBuilder::new()
        .map_size(MapSize::Small)
        .spawn_required_neighbors(5)
        .unwrap()
        .build()
        .unwrap();

    let map = CaveMap::generate(&config, 2024).expect("Failed to generate cave");

    let classic = render_rgba8(map.grid(), &ClassicPalette);
    println!(
        "Classic palette: {} bytes for a {}x{} texture",
        classic.len(),
        map.grid().width(),
        map.grid().height()
    );

    // Gold markers on a dark-green floor
    let floor = [0.1, 0.25, 0.1, 1.0];
    let gold = [1.0, 0.84, 0.0, 1.0];
    let palette = CustomPalette::default()
        .with(CellState::Open, floor)
        .with(CellState::Marker, gold);
    let texels = render_rgba(map.grid(), &palette);

    let gold_count = texels.iter().filter(|&&c| c == gold).count();
    println!("Gold texels: {} (markers: {})", gold_count, map.marker_count());

    println!("\nSample row (y = {}):", map.spawn().y);
    let width = map.grid().width();
    let row = map.spawn().y as usize;
    for texel in &texels[row * width..(row + 1) * width] {
        let ch = match *texel {
            c if c == gold => '*',
            c if c == ClassicPalette::START => '@',
            c if c == floor => '.',
            _ => '#',
        };
        print!("{}", ch);
    }
    println!();
}
