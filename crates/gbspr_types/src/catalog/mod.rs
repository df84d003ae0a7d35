//! Built-in palettes selected by name rather than loaded from a file.
//!
//! - [`IconColor`]: named 5-bit icon palettes
//! - [`ItemCategory`]: item classification and its color scheme
//! - [`species`]: fallback palettes for overworld sprites

pub mod icon;
pub mod item;
pub mod species;

pub use icon::{IconColor, IconColors};
pub use item::ItemCategory;
