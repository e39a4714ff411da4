//! Fixed parameters for sprite generation
//!
//! Canvas sizes, output paths, and the full sprite color palette live here.
//! Output is deterministic: every value is a hard-coded constant.

// =============================================================================
// CANVAS SIZES
// =============================================================================

/// Terrain tiles and the selection circle are drawn on 64x64 canvases.
pub const TILE_SIZE: u32 = 64;
/// Unit icons are drawn on 48x48 canvases.
pub const UNIT_SIZE: u32 = 48;
/// Number of tile slots in the atlas row.
pub const ATLAS_SLOTS: u32 = 4;
/// Atlas packs the tiles left to right in a single row.
pub const ATLAS_WIDTH: u32 = TILE_SIZE * ATLAS_SLOTS;

// =============================================================================
// OUTPUT PATHS
// =============================================================================

pub const SPRITES_DIR: &str = "assets/sprites";
pub const TILES_DIR: &str = "assets/sprites/tiles";
pub const UNITS_DIR: &str = "assets/sprites/units";
pub const ATLAS_FILE: &str = "tileset_atlas.png";
pub const SELECTION_CIRCLE_FILE: &str = "assets/sprites/selection_circle.png";

// =============================================================================
// TILE COLORS
// =============================================================================

pub const GRASS_GREEN: [u8; 4] = [34, 139, 34, 255];
pub const TREE_DARK_GREEN: [u8; 4] = [0, 100, 0, 255];
pub const STONE_GRAY: [u8; 4] = [128, 128, 128, 255];
pub const STONE_DARK_GRAY: [u8; 4] = [96, 96, 96, 255];
pub const MINE_BROWN: [u8; 4] = [139, 90, 0, 255];
pub const GOLD_YELLOW: [u8; 4] = [255, 215, 0, 255];

// =============================================================================
// UNIT BODY COLORS
// =============================================================================

pub const WORKER_TAN: [u8; 4] = [210, 180, 140, 255];
pub const SOLDIER_RED: [u8; 4] = [178, 34, 34, 255];
pub const KNIGHT_BLUE: [u8; 4] = [70, 130, 180, 255];
pub const MAGE_PURPLE: [u8; 4] = [138, 43, 226, 255];
pub const ARCHER_GREEN: [u8; 4] = [34, 139, 34, 255];

// =============================================================================
// UNIT ACCESSORY COLORS
// =============================================================================

pub const TOOL_BROWN: [u8; 4] = [139, 69, 19, 255];
pub const WOOD_BROWN: [u8; 4] = [101, 67, 33, 255];
pub const SHIELD_GRAY: [u8; 4] = [128, 128, 128, 255];
pub const HELMET_SILVER: [u8; 4] = [192, 192, 192, 255];
pub const SWORD_GRAY: [u8; 4] = [160, 160, 160, 255];
pub const ORB_BLUE: [u8; 4] = [0, 191, 255, 255];
pub const OUTLINE_BLACK: [u8; 4] = [0, 0, 0, 255];

// =============================================================================
// SELECTION CIRCLE
// =============================================================================

/// Translucent green ring color.
pub const SELECTION_GREEN: [u8; 4] = [0, 255, 0, 200];
/// Ring outer radius in pixels from the canvas center.
pub const SELECTION_OUTER_RADIUS: f32 = 28.0;
/// 3px stroke grows inward from the outer radius.
pub const SELECTION_INNER_RADIUS: f32 = 25.0;
