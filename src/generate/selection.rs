//! Selection circle generator
//!
//! Draws one translucent green ring on a transparent 64x64 canvas, used as
//! the unit-selection overlay.
//!
//! Run with: `cargo run --bin generate circle`

use image::{Rgba, RgbaImage};

use crate::constants::*;

/// Draw the selection ring: 3px stroke growing inward from the outer
/// radius, centered on the canvas, everything else transparent.
pub fn selection_circle_image() -> RgbaImage {
    let size = TILE_SIZE;
    let center = size as f32 / 2.0;
    let mut img = RgbaImage::new(size, size);

    for y in 0..size {
        for x in 0..size {
            let fx = x as f32 - center;
            let fy = y as f32 - center;
            let dist = (fx * fx + fy * fy).sqrt();

            if dist > SELECTION_INNER_RADIUS && dist <= SELECTION_OUTER_RADIUS {
                img.put_pixel(x, y, Rgba(SELECTION_GREEN));
            }
        }
    }

    img
}

/// Write the selection circle to [`SELECTION_CIRCLE_FILE`]. The sprites
/// directory must already exist; a failed write terminates the process.
pub fn run() {
    selection_circle_image()
        .save(SELECTION_CIRCLE_FILE)
        .unwrap_or_else(|e| {
            panic!(
                "\n\nERROR: Could not write '{}': {}\n",
                SELECTION_CIRCLE_FILE, e
            )
        });
    println!("Selection circle created: {}", SELECTION_CIRCLE_FILE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_is_tile_sized() {
        let img = selection_circle_image();
        assert_eq!(img.dimensions(), (TILE_SIZE, TILE_SIZE));
    }

    #[test]
    fn ring_is_translucent_green() {
        let img = selection_circle_image();
        // Topmost, bottommost, leftmost, rightmost points of the ring
        assert_eq!(img.get_pixel(32, 4).0, SELECTION_GREEN);
        assert_eq!(img.get_pixel(32, 60).0, SELECTION_GREEN);
        assert_eq!(img.get_pixel(4, 32).0, SELECTION_GREEN);
        assert_eq!(img.get_pixel(60, 32).0, SELECTION_GREEN);
    }

    #[test]
    fn center_and_corners_stay_transparent() {
        let img = selection_circle_image();
        assert_eq!(img.get_pixel(32, 32).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(63, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(0, 63).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(63, 63).0, [0, 0, 0, 0]);
    }
}
