//! This crate provides the text asset formats and fixed tables for the `gbspr-rs` project.
//!
//! # File Formats
//!
//! - **PAL**: 4-color palettes in 5-bit-per-channel `RGB` lines
//! - **ANIM**: frame timing scripts with nested repeat blocks
//! - **ICONPAL**: species to icon color table (`overworld_icon_pals.asm`)
//!
//! # Tables
//!
//! - [`catalog`]: icon colors, item categories and fallback overworld palettes
//! - [`names`]: name reduction for the published sprite tree
//! - [`timing`]: millisecond to centisecond delay encoding
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use gbspr_types::prelude::*;
//!
//! # fn main() -> Result<(), SprFileError> {
//! let palette = Palette::open("gfx/pokemon/abra/normal.pal")?;
//! let anim = Animation::open("gfx/pokemon/abra/anim.asm")?;
//! let durations: Vec<f64> = anim.durations_ms().collect();
//! let delays = TimingEncoder::default().encode(&durations, durations.len());
//! println!("{palette} {delays}");
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use gbspr_types::file::Palette;
//!
//! let palette = Palette::parse("RGB 31, 31, 31\nRGB 0, 0, 0\n");
//! assert_eq!(palette[1].to_rgb(), [0, 0, 0]);
//! ```

pub mod catalog;
pub mod file;
pub mod names;
pub mod timing;

/// `use gbspr_types::prelude::*;` to import commonly used items.
pub mod prelude;
