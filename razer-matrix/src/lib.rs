//! Addressing and frame encoding for the per-key RGB matrix of Razer
//! keyboards driven by the `razerkbd` kernel driver.

pub mod error;

mod colour;
pub use colour::*;

/// Key name to matrix position lookup
mod grid;
pub use grid::*;

/// Built-in grid tables
pub mod layouts;

mod zones;
pub use zones::*;

mod keyboard;
pub use keyboard::*;

mod frame;
pub use frame::*;

mod presets;
pub use presets::*;

mod sink;
pub use sink::*;

pub static VERSION: &str = env!("CARGO_PKG_VERSION");

pub const RED: Colour = Colour(0xff, 0x00, 0x00);
pub const GREEN: Colour = Colour(0x00, 0xff, 0x00);
pub const BLUE: Colour = Colour(0x00, 0x00, 0xff);
pub const CYAN: Colour = Colour(0x00, 0xff, 0xff);
pub const MAGENTA: Colour = Colour(0xff, 0x00, 0xff);
pub const YELLOW: Colour = Colour(0xff, 0xff, 0x00);
pub const WHITE: Colour = Colour(0xff, 0xff, 0xff);
pub const PURPLE: Colour = Colour(0x7f, 0x00, 0xff);
pub const ORANGE: Colour = Colour(0xff, 0x7f, 0x00);
pub const GREY: Colour = Colour(0x7f, 0x7f, 0x7f);
pub const RAINBOW: [Colour; 6] = [RED, YELLOW, GREEN, CYAN, BLUE, MAGENTA];
