//! Sprite generator
//!
//! Generates the placeholder tile and unit sprites for the RTS prototype.
//!
//! Run with: `cargo run --bin generate_sprites`

use spritegen::generate::{tiles, units};

fn main() {
    tiles::run();
    units::run();

    println!("\nAll sprites generated successfully!");
    println!("Note: These are placeholder sprites and should be replaced with proper art assets later.");
}
