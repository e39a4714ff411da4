//! Unified asset generator
//!
//! Consolidates all sprite generation into one binary with subcommands.
//!
//! Usage:
//!   cargo run --bin generate sprites   # Generate tile and unit sprites
//!   cargo run --bin generate tiles     # Generate terrain tiles only
//!   cargo run --bin generate units     # Generate unit icons only
//!   cargo run --bin generate atlas     # Composite tiles into the atlas
//!   cargo run --bin generate circle    # Generate the selection circle
//!   cargo run --bin generate all       # Everything, in dependency order
//!   cargo run --bin generate --help    # Show help

use spritegen::generate;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "sprites" => {
            println!("=== Sprite Generator ===\n");
            generate::tiles::run();
            generate::units::run();
        }
        "tiles" | "tile" => {
            println!("=== Tile Generator ===\n");
            generate::tiles::run();
        }
        "units" | "unit" => {
            println!("=== Unit Generator ===\n");
            generate::units::run();
        }
        "atlas" => {
            println!("=== Tileset Atlas Builder ===\n");
            generate::atlas::run();
        }
        "circle" | "selection" => {
            println!("=== Selection Circle Generator ===\n");
            generate::selection::run();
        }
        "all" => {
            println!("=== Sprite Generator ===\n");
            generate::tiles::run();
            generate::units::run();
            // Atlas reads the tile files written above
            println!("\n=== Tileset Atlas Builder ===\n");
            generate::atlas::run();
            println!("\n=== Selection Circle Generator ===\n");
            generate::selection::run();
        }
        "--help" | "-h" | "help" => {
            print_help();
        }
        other => {
            eprintln!("Error: Unknown command '{}'\n", other);
            print_help();
            std::process::exit(1);
        }
    }
}

fn print_help() {
    println!(
        r#"Sprite Generator - Generate placeholder sprite assets

USAGE:
    cargo run --bin generate <COMMAND>

COMMANDS:
    sprites     Generate terrain tiles and unit icons
                Output: assets/sprites/tiles/*.png, assets/sprites/units/*.png

    tiles       Generate terrain tiles only (grass, forest, stone, gold)

    units       Generate unit icons only (worker, soldier, knight, mage, archer)

    atlas       Composite the terrain tiles into one atlas image
                Output: assets/sprites/tiles/tileset_atlas.png

    circle      Generate the unit selection circle
                Output: assets/sprites/selection_circle.png

    all         Generate everything, atlas after tiles

    help        Show this help message

EXAMPLES:
    cargo run --bin generate all
    cargo run --bin generate sprites
    cargo run --bin generate atlas
"#
    );
}
