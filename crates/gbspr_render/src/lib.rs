//! Sprite sheet rendering for the `gbspr-rs` project.
//!
//! The pipeline for one sprite is: decode the sheet, cut it into frames
//! ([`slicer`]), recolor every frame by luminance band ([`mapper`]),
//! optionally mask it, then write a static PNG and a timed GIF ([`export`]).
//!
//! # Examples
//!
//! ```no_run
//! use gbspr_render::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let palette = Palette::open("gfx/pokemon/abra/normal.pal")?;
//! let anim = Animation::open("gfx/pokemon/abra/anim.asm")?;
//!
//! let sheet = open_sheet("gfx/pokemon/abra/front.png")?;
//! let frames = PaletteMapper::new(palette, BandingPolicy::TransparentBackground)
//!     .apply_all(&slice_frames(&sheet));
//!
//! let durations = anim.durations_for(frames.len(), 300.0);
//! let delays = TimingEncoder::default().encode(&durations, frames.len());
//!
//! save_png(&frames[0], "out/normal_front.png")?;
//! write_gif(&TimedFrame::zip(frames, &delays)?, "out/normal_front_animated.gif")?;
//! # Ok(())
//! # }
//! ```

mod error;

pub mod export;
pub mod mapper;
pub mod slicer;

/// `use gbspr_render::prelude::*;` to import commonly used items.
pub mod prelude;

pub use error::RenderError;
pub use export::{TimedFrame, save_png, write_gif};
pub use mapper::{BandingPolicy, PaletteMapper, apply_mask, luminance};
pub use slicer::{SheetLayout, open_sheet, slice_frames};
