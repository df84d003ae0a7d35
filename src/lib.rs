#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `gbspr-rs` recolors grayscale 4-shade handheld sprite sheets with their
//! palettes and publishes them as static PNGs and timed, looping GIFs.
//!
//! The work is split across three member crates, all re-exported here:
//!
//! - `gbspr_types`: palette files, animation scripts, icon palette maps,
//!   name normalization and frame timing
//! - `gbspr_render`: sheet slicing, palette mapping and PNG/GIF export
//! - `gbspr_batch`: configuration, discovery, per-category processors and
//!   the sprite manifest
//!
pub use gbspr_internal::*;
