//! Prelude module for `gbspr_types`.
//!
//! # Examples
//!
//! ```
//! use gbspr_types::prelude::*;
//!
//! let palette = Palette::default();
//! let colors = IconColors::new(IconColor::Red, IconColor::Blue);
//! assert_eq!(palette, Palette::GRAYSCALE);
//! assert_eq!(colors.palette()[3], Color::BLACK);
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	Animation,
	AnimationFrame,
	Color,
	FileType,
	IconPaletteMap,
	Palette,
	SprFileError,
	TickFrame,
};

// Tables
#[doc(inline)]
pub use crate::catalog::{IconColor, IconColors, ItemCategory};

#[doc(inline)]
pub use crate::names::{NameRules, reduce_name};

#[doc(inline)]
pub use crate::timing::{FrameDelays, TimingEncoder};

// Re-export the modules for advanced usage
#[doc(inline)]
pub use crate::{catalog, file};
