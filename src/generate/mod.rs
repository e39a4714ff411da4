//! Asset generation modules
//!
//! Unified interface for generating placeholder sprite assets:
//! - Terrain tiles (grass, forest, stone, gold)
//! - Unit icons (worker, soldier, knight, mage, archer)
//! - Tileset atlas composited from the tile sprites
//! - Selection circle overlay

pub mod atlas;
pub mod selection;
pub mod tiles;
pub mod units;
