//! Text asset support for `gbspr-rs`.

mod error;

pub mod anim;
pub mod iconpal;
pub mod pal;

// Re-export unified error type
pub use error::{FileType, SprFileError};

// Re-export main file types
pub use anim::{Animation, AnimationFrame, TickFrame};
pub use iconpal::IconPaletteMap;
pub use pal::{Color, Palette, scale_channel};
