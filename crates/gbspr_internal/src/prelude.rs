//! Prelude module for `gbspr_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use gbspr_internal::prelude::*;
//!
//! let palette = Palette::parse("RGB 31,31,31\nRGB 20,20,20\nRGB 10,10,10\nRGB 0,0,0\n");
//! let mapper = PaletteMapper::new(palette, BandingPolicy::TransparentBackground);
//! assert_eq!(mapper.palette(), &palette);
//!
//! let delays = TimingEncoder::new().encode(&[100.0, 50.0], 2);
//! assert_eq!(delays.centiseconds(), &[10, 35]);
//! ```

// Re-export everything from gbspr_render::prelude, which includes gbspr_types
#[doc(inline)]
pub use gbspr_render::prelude::*;

#[doc(inline)]
pub use gbspr_batch::{
	BatchConfig,
	BatchError,
	BatchSummary,
	ItemPaletteMode,
	OutputLayout,
	RomLayout,
	SpriteBatch,
	SpriteManifest,
	SubjectKind,
};

// Re-export the member crates for advanced usage
#[doc(inline)]
pub use gbspr_batch;
#[doc(inline)]
pub use gbspr_render;
#[doc(inline)]
pub use gbspr_types;
