//! Prelude module for `gbspr_render`.
//!
//! Includes the `gbspr_types` prelude, so palettes and timing are in scope too.

#[doc(inline)]
pub use gbspr_types::prelude::*;

#[doc(inline)]
pub use crate::{
	BandingPolicy,
	PaletteMapper,
	RenderError,
	SheetLayout,
	TimedFrame,
	apply_mask,
	open_sheet,
	save_png,
	slice_frames,
	write_gif,
};
