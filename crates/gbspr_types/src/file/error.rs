//! Error types for text asset parsing.

use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Text asset kinds handled by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
	/// `.pal` palette description
	Palette,
	/// `anim.asm` animation script
	Animation,
	/// `overworld_icon_pals.asm` icon color table
	IconPalettes,
}

impl fmt::Display for FileType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Palette => write!(f, "palette"),
			Self::Animation => write!(f, "animation"),
			Self::IconPalettes => write!(f, "icon palette"),
		}
	}
}

/// Errors that can occur when reading text assets.
///
/// A missing file is never reported through this type; every loader
/// substitutes its documented default instead.
#[derive(Debug, Error)]
pub enum SprFileError {
	/// The file exists but could not be read
	#[error("Cannot read {file_type} file {}: {source}", path.display())]
	Read {
		/// Kind of file being read
		file_type: FileType,
		/// Path of the file
		path: PathBuf,
		/// Underlying I/O error
		#[source]
		source: std::io::Error,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl SprFileError {
	pub(crate) fn read(file_type: FileType, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Read {
			file_type,
			path: path.into(),
			source,
		}
	}
}

/// Reads a text asset, mapping `NotFound` to `Ok(None)`.
pub(crate) fn read_optional(
	file_type: FileType,
	path: &std::path::Path,
) -> Result<Option<String>, SprFileError> {
	match std::fs::read(path) {
		Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
		Err(e) => Err(SprFileError::read(file_type, path, e)),
	}
}
