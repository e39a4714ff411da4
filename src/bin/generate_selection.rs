//! Selection circle generator
//!
//! Creates the translucent ring drawn under selected units.
//!
//! Run with: `cargo run --bin generate_selection`

use spritegen::generate::selection;

fn main() {
    selection::run();
}
