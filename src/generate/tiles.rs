//! Terrain tile generator
//!
//! Draws the four terrain tile placeholders (grass, forest, stone, gold)
//! onto 64x64 canvases and writes them to assets/sprites/tiles/.
//!
//! Run with: `cargo run --bin generate sprites`

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;
use std::fs;

use crate::constants::*;

/// Drawing recipe selector for a terrain tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilePattern {
    Solid,
    Forest,
    Stone,
    Gold,
}

/// Tree canopy centers for the forest tile, radius 8 each.
const TREE_CENTERS: [(i32, i32); 5] = [(16, 16), (48, 16), (16, 48), (48, 48), (32, 32)];

/// Stone chunk placements: center x, center y, radius.
const STONE_CHUNKS: [(i32, i32, i32); 4] = [(16, 16, 6), (50, 20, 5), (27, 47, 7), (54, 54, 4)];

/// Draw one 64x64 tile. Every pattern fills the whole canvas with `base`
/// before its accents; `Solid` ignores `accent`.
pub fn tile_image(base: [u8; 4], accent: [u8; 4], pattern: TilePattern) -> RgbaImage {
    let mut img = RgbaImage::new(TILE_SIZE, TILE_SIZE);

    draw_filled_rect_mut(
        &mut img,
        Rect::at(0, 0).of_size(TILE_SIZE, TILE_SIZE),
        Rgba(base),
    );

    match pattern {
        TilePattern::Solid => {}
        TilePattern::Forest => {
            for (x, y) in TREE_CENTERS {
                draw_filled_ellipse_mut(&mut img, (x, y), 8, 8, Rgba(accent));
            }
        }
        TilePattern::Stone => {
            for (x, y, r) in STONE_CHUNKS {
                draw_filled_ellipse_mut(&mut img, (x, y), r, r, Rgba(accent));
            }
        }
        TilePattern::Gold => {
            // Gold mine: nugget pile with a peak on top
            draw_filled_rect_mut(&mut img, Rect::at(16, 16).of_size(33, 33), Rgba(accent));
            draw_polygon_mut(
                &mut img,
                &[Point::new(32, 12), Point::new(24, 24), Point::new(40, 24)],
                Rgba(accent),
            );
        }
    }

    img
}

fn save_tile(path: &str, base: [u8; 4], accent: [u8; 4], pattern: TilePattern) {
    tile_image(base, accent, pattern)
        .save(path)
        .unwrap_or_else(|e| panic!("\n\nERROR: Could not write tile '{}': {}\n", path, e));
    println!("  Created: {}", path);
}

/// Generate all four terrain tiles into [`TILES_DIR`], creating the
/// directory first. A failed write terminates the process.
pub fn run() {
    fs::create_dir_all(TILES_DIR)
        .unwrap_or_else(|e| panic!("\n\nERROR: Could not create '{}': {}\n", TILES_DIR, e));

    println!("Generating terrain tiles...");
    save_tile(
        &format!("{}/grass.png", TILES_DIR),
        GRASS_GREEN,
        GRASS_GREEN,
        TilePattern::Solid,
    );
    save_tile(
        &format!("{}/forest.png", TILES_DIR),
        GRASS_GREEN,
        TREE_DARK_GREEN,
        TilePattern::Forest,
    );
    save_tile(
        &format!("{}/stone.png", TILES_DIR),
        STONE_GRAY,
        STONE_DARK_GRAY,
        TilePattern::Stone,
    );
    save_tile(
        &format!("{}/gold.png", TILES_DIR),
        MINE_BROWN,
        GOLD_YELLOW,
        TilePattern::Gold,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;
    use std::io::Cursor;

    const PATTERNS: [TilePattern; 4] = [
        TilePattern::Solid,
        TilePattern::Forest,
        TilePattern::Stone,
        TilePattern::Gold,
    ];

    #[test]
    fn every_pattern_is_tile_sized() {
        for pattern in PATTERNS {
            let img = tile_image(GRASS_GREEN, TREE_DARK_GREEN, pattern);
            assert_eq!(img.dimensions(), (TILE_SIZE, TILE_SIZE), "{:?}", pattern);
        }
    }

    #[test]
    fn solid_fills_every_pixel_with_base() {
        let img = tile_image(GRASS_GREEN, TREE_DARK_GREEN, TilePattern::Solid);
        for pixel in img.pixels() {
            assert_eq!(pixel.0, GRASS_GREEN);
        }
    }

    #[test]
    fn forest_places_trees_over_grass() {
        let img = tile_image(GRASS_GREEN, TREE_DARK_GREEN, TilePattern::Forest);
        // Tree canopy centers are accent-colored
        for (x, y) in TREE_CENTERS {
            assert_eq!(img.get_pixel(x as u32, y as u32).0, TREE_DARK_GREEN);
        }
        // Corners are outside every radius-8 canopy
        assert_eq!(img.get_pixel(0, 0).0, GRASS_GREEN);
        assert_eq!(img.get_pixel(63, 63).0, GRASS_GREEN);
    }

    #[test]
    fn stone_places_chunks_over_base() {
        let img = tile_image(STONE_GRAY, STONE_DARK_GRAY, TilePattern::Stone);
        for (x, y, _) in STONE_CHUNKS {
            assert_eq!(img.get_pixel(x as u32, y as u32).0, STONE_DARK_GRAY);
        }
        assert_eq!(img.get_pixel(0, 0).0, STONE_GRAY);
        assert_eq!(img.get_pixel(63, 0).0, STONE_GRAY);
    }

    #[test]
    fn gold_draws_nugget_pile_and_peak() {
        let img = tile_image(MINE_BROWN, GOLD_YELLOW, TilePattern::Gold);
        // Inside the nugget rectangle
        assert_eq!(img.get_pixel(32, 32).0, GOLD_YELLOW);
        // Inside the triangular peak, above the rectangle
        assert_eq!(img.get_pixel(32, 14).0, GOLD_YELLOW);
        // Background around the pile
        assert_eq!(img.get_pixel(8, 8).0, MINE_BROWN);
        assert_eq!(img.get_pixel(60, 60).0, MINE_BROWN);
    }

    #[test]
    fn png_encoding_is_deterministic() {
        let img = tile_image(MINE_BROWN, GOLD_YELLOW, TilePattern::Gold);
        let mut first = Vec::new();
        let mut second = Vec::new();
        img.write_to(&mut Cursor::new(&mut first), ImageFormat::Png)
            .expect("encode first");
        img.write_to(&mut Cursor::new(&mut second), ImageFormat::Png)
            .expect("encode second");
        assert_eq!(first, second);
    }
}
