//! Tileset atlas builder
//!
//! Pastes the previously generated terrain tiles left-to-right into one
//! 256x64 image for use as a tilemap atlas. Missing tiles are skipped with
//! a notice, leaving their slot transparent.
//!
//! Run with: `cargo run --bin generate atlas`

use image::{RgbaImage, imageops};
use std::path::Path;

use crate::constants::*;

/// Tile filenames in atlas slot order: Grass(0), Forest(1), Stone(2), Gold(3).
pub const ATLAS_TILE_FILES: [&str; 4] = ["grass.png", "forest.png", "stone.png", "gold.png"];

/// Composite the tiles found in `tiles_dir` into a single-row atlas.
/// Each tile is pasted pixel-for-pixel (no alpha blending) at its slot
/// offset; absent or unreadable tiles leave their slot fully transparent.
pub fn build_atlas(tiles_dir: &Path) -> RgbaImage {
    let mut atlas = RgbaImage::new(ATLAS_WIDTH, TILE_SIZE);

    for (i, file) in ATLAS_TILE_FILES.iter().enumerate() {
        let path = tiles_dir.join(file);
        if !path.exists() {
            eprintln!("  Missing {}, leaving slot {} empty", file, i);
            continue;
        }
        match image::open(&path) {
            Ok(img) => {
                let tile = img.to_rgba8();
                imageops::replace(&mut atlas, &tile, i as i64 * TILE_SIZE as i64, 0);
                println!("  Added {} at position {}", file, i);
            }
            Err(e) => {
                eprintln!("  Warning: Failed to load {}: {}", path.display(), e);
            }
        }
    }

    atlas
}

/// Build the atlas from [`TILES_DIR`] and write it next to the tiles.
/// A failed write terminates the process; missing inputs do not.
pub fn run() {
    println!("Building tileset atlas...");
    let atlas = build_atlas(Path::new(TILES_DIR));

    let path = format!("{}/{}", TILES_DIR, ATLAS_FILE);
    atlas
        .save(&path)
        .unwrap_or_else(|e| panic!("\n\nERROR: Could not write atlas '{}': {}\n", path, e));

    println!("\nTileset atlas created: {}", path);
    println!("Atlas contains: Grass(0), Forest(1), Stone(2), Gold(3)");
}
