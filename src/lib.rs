//! Spritegen - placeholder sprite assets for the RTS prototype
//!
//! Procedurally draws terrain tiles, unit icons, and a selection circle,
//! and composites the tiles into a single atlas. All output is deterministic
//! PNG written under `assets/sprites/`.

pub mod constants;
pub mod generate;

// Re-export commonly used types for convenience
pub use generate::atlas::{ATLAS_TILE_FILES, build_atlas};
pub use generate::selection::selection_circle_image;
pub use generate::tiles::{TilePattern, tile_image};
pub use generate::units::{UnitType, unit_image};
