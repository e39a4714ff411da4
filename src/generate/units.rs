//! Unit icon generator
//!
//! Draws the five unit placeholders (worker, soldier, knight, mage, archer)
//! onto 48x48 canvases and writes them to assets/sprites/units/.
//! Each unit is a fixed head/body/accessory layout plus a 1px black border.
//!
//! Run with: `cargo run --bin generate sprites`

use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut,
};
use imageproc::rect::Rect;
use std::fs;

use crate::constants::*;

/// Silhouette selector for a unit icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitType {
    Worker,
    Soldier,
    Knight,
    Mage,
    Archer,
}

/// Body color and output filename per unit type.
const UNIT_SET: [(UnitType, [u8; 4], &str); 5] = [
    (UnitType::Worker, WORKER_TAN, "worker.png"),
    (UnitType::Soldier, SOLDIER_RED, "soldier.png"),
    (UnitType::Knight, KNIGHT_BLUE, "knight.png"),
    (UnitType::Mage, MAGE_PURPLE, "mage.png"),
    (UnitType::Archer, ARCHER_GREEN, "archer.png"),
];

/// Head circle plus torso rectangle shared by every non-knight silhouette.
fn draw_figure(img: &mut RgbaImage, color: [u8; 4]) {
    draw_filled_ellipse_mut(img, (24, 18), 10, 10, Rgba(color));
    draw_filled_rect_mut(img, Rect::at(18, 28).of_size(13, 17), Rgba(color));
}

/// Line with its stroke centered on the segment. Offsets the 1px segment
/// along the perpendicular in half-pixel steps so diagonals stay gap-free.
fn draw_thick_line_mut(
    img: &mut RgbaImage,
    start: (f32, f32),
    end: (f32, f32),
    width: u32,
    color: [u8; 4],
) {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return;
    }
    let nx = -dy / len;
    let ny = dx / len;

    let half = (width as f32 - 1.0) / 2.0;
    let mut offset = -half;
    while offset <= half {
        draw_line_segment_mut(
            img,
            (start.0 + nx * offset, start.1 + ny * offset),
            (end.0 + nx * offset, end.1 + ny * offset),
            Rgba(color),
        );
        offset += 0.5;
    }
}

/// Elliptical arc stroke, angles in degrees clockwise from 3 o'clock
/// (the y axis points down, so sin() already sweeps clockwise). The stroke
/// grows inward from the given radii.
fn draw_arc_mut(
    img: &mut RgbaImage,
    center: (f32, f32),
    radii: (f32, f32),
    start_deg: f32,
    end_deg: f32,
    width: u32,
    color: [u8; 4],
) {
    let end_deg = if end_deg < start_deg {
        end_deg + 360.0
    } else {
        end_deg
    };
    let steps = 96;
    for i in 0..=steps {
        let angle = (start_deg + (end_deg - start_deg) * i as f32 / steps as f32).to_radians();
        for w in 0..width {
            let x = center.0 + (radii.0 - w as f32) * angle.cos();
            let y = center.1 + (radii.1 - w as f32) * angle.sin();
            let (px, py) = (x.round() as i32, y.round() as i32);
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, Rgba(color));
            }
        }
    }
}

/// Draw one 48x48 unit icon in the given body color.
pub fn unit_image(body: [u8; 4], unit: UnitType) -> RgbaImage {
    let mut img = RgbaImage::new(UNIT_SIZE, UNIT_SIZE);

    match unit {
        UnitType::Worker => {
            draw_figure(&mut img, body);
            // Tool slung over the shoulder
            draw_thick_line_mut(&mut img, (18.0, 32.0), (8.0, 42.0), 3, TOOL_BROWN);
        }
        UnitType::Soldier => {
            draw_figure(&mut img, body);
            draw_filled_rect_mut(&mut img, Rect::at(8, 24).of_size(9, 17), Rgba(SHIELD_GRAY));
        }
        UnitType::Knight => {
            // Helmet instead of a bare head, wider armored torso
            draw_filled_ellipse_mut(&mut img, (24, 18), 10, 10, Rgba(HELMET_SILVER));
            draw_filled_rect_mut(&mut img, Rect::at(16, 28).of_size(17, 17), Rgba(body));
            draw_filled_rect_mut(&mut img, Rect::at(32, 20).of_size(13, 19), Rgba(SWORD_GRAY));
        }
        UnitType::Mage => {
            draw_figure(&mut img, body);
            draw_thick_line_mut(&mut img, (34.0, 10.0), (34.0, 40.0), 3, WOOD_BROWN);
            draw_filled_ellipse_mut(&mut img, (34, 8), 2, 2, Rgba(ORB_BLUE));
        }
        UnitType::Archer => {
            draw_figure(&mut img, body);
            // Bow is the right half of an ellipse, strung down the middle
            draw_arc_mut(&mut img, (39.0, 28.0), (5.0, 10.0), 270.0, 90.0, 2, WOOD_BROWN);
            draw_line_segment_mut(&mut img, (39.0, 22.0), (39.0, 34.0), Rgba(WOOD_BROWN));
        }
    }

    // Uniform 1px black border on every unit
    draw_hollow_rect_mut(
        &mut img,
        Rect::at(0, 0).of_size(UNIT_SIZE, UNIT_SIZE),
        Rgba(OUTLINE_BLACK),
    );

    img
}

/// Generate all five unit icons into [`UNITS_DIR`], creating the directory
/// first. A failed write terminates the process.
pub fn run() {
    fs::create_dir_all(UNITS_DIR)
        .unwrap_or_else(|e| panic!("\n\nERROR: Could not create '{}': {}\n", UNITS_DIR, e));

    println!("Generating unit icons...");
    for (unit, color, file) in UNIT_SET {
        let path = format!("{}/{}", UNITS_DIR, file);
        unit_image(color, unit)
            .save(&path)
            .unwrap_or_else(|e| panic!("\n\nERROR: Could not write unit '{}': {}\n", path, e));
        println!("  Created: {}", path);
    }
}
