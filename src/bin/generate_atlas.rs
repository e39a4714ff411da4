//! Tileset atlas builder
//!
//! Combines the generated tile sprites into one atlas image. Tiles that
//! have not been generated yet are skipped with a notice.
//!
//! Run with: `cargo run --bin generate_atlas`

use spritegen::generate::atlas;

fn main() {
    atlas::run();
}
