//! Error types for sprite rendering and export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when decoding, recoloring or writing sprites
#[derive(Debug, Error)]
pub enum RenderError {
	/// A sprite sheet or mask could not be opened or decoded
	#[error("Cannot decode image {}: {source}", path.display())]
	Decode {
		/// Path of the image
		path: PathBuf,
		/// Underlying decoder error
		#[source]
		source: image::ImageError,
	},

	/// An output image could not be encoded
	#[error(transparent)]
	Image(#[from] image::ImageError),

	/// An animated GIF could not be encoded
	#[error(transparent)]
	Gif(#[from] gif::EncodingError),

	/// Frame dimensions exceed what the output container can store
	#[error("Frame of {width}x{height} pixels is too large for GIF output")]
	FrameTooLarge {
		/// Frame width in pixels
		width: u32,
		/// Frame height in pixels
		height: u32,
	},

	/// Frame and delay counts differ
	#[error("Frame count mismatch: {frames} frames, {delays} delays")]
	DelayCountMismatch {
		/// Number of frames
		frames: usize,
		/// Number of delays
		delays: usize,
	},

	/// Nothing to write
	#[error("No frames to write")]
	NoFrames,

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
