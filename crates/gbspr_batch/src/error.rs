//! Error types for batch processing.

use gbspr_render::RenderError;
use gbspr_types::file::SprFileError;
use thiserror::Error;

use crate::SubjectKind;

/// Errors that can occur while processing a batch
#[derive(Debug, Error)]
pub enum BatchError {
	/// Configuration could not be loaded
	#[error(transparent)]
	Config(#[from] config::ConfigError),

	/// Palette, animation or icon table could not be read
	#[error(transparent)]
	File(#[from] SprFileError),

	/// Sprite could not be decoded, recolored or written
	#[error(transparent)]
	Render(#[from] RenderError),

	/// Manifest could not be serialized
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// Source sprite does not exist
	#[error("{kind} {name} not found")]
	NotFound {
		/// Kind of subject looked up
		kind: SubjectKind,
		/// Source name
		name: String,
	},

	/// Trainer has no palette file
	#[error("No palette files found for trainer {0}")]
	NoPalette(String),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl BatchError {
	pub(crate) fn not_found(kind: SubjectKind, name: &str) -> Self {
		Self::NotFound {
			kind,
			name: name.to_owned(),
		}
	}
}
