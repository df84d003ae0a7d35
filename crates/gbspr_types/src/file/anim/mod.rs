//! `anim.asm` animation script support.
//!
//! Animation scripts describe how long each frame of a sprite sheet is shown.
//! One instruction per line, everything else is ignored:
//!
//! ```text
//! 	frame 1, 08
//! 	setrepeat 2
//! 	frame 2, 06
//! 	frame 1, 06
//! 	dorepeat 1
//! 	endanim
//! ```
//!
//! Durations are given in ticks (video fields at 59.7275 Hz). Parsing expands
//! the repeat blocks into a flat timeline and converts every duration to
//! milliseconds.
//!
//! # Usage Examples
//!
//! ```no_run
//! use gbspr_types::file::anim::Animation;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let anim = Animation::open("gfx/pokemon/abra/anim.asm")?;
//! for frame in anim.frames() {
//!     println!("{frame}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod frame;
pub mod script;

use std::{fmt, io::Read, path::Path};

use crate::file::{FileType, SprFileError, error::read_optional};

pub use self::frame::{AnimationFrame, TickFrame};
pub use self::script::{Instruction, expand};

/// Expanded animation timeline in milliseconds.
///
/// Never empty: a missing or empty script yields a single
/// [`constants::DEFAULT_FRAME_MS`] frame showing frame 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
	frames: Vec<AnimationFrame>,
}

impl Animation {
	/// Returns the single-frame fallback timeline.
	pub fn fallback() -> Self {
		Self {
			frames: vec![AnimationFrame::new(0, constants::DEFAULT_FRAME_MS)],
		}
	}

	/// Creates a timeline from frames, substituting the fallback when empty.
	pub fn from_frames(frames: Vec<AnimationFrame>) -> Self {
		if frames.is_empty() {
			return Self::fallback();
		}
		Self {
			frames,
		}
	}

	/// Opens an animation script.
	///
	/// A missing file logs a warning and returns [`Animation::fallback`].
	///
	/// # Errors
	///
	/// Returns an error if the file exists but cannot be read.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, SprFileError> {
		let path = path.as_ref();
		match read_optional(FileType::Animation, path)? {
			Some(text) => Ok(Self::parse(&text)),
			None => {
				log::warn!("Animation file {} not found, using default timing", path.display());
				Ok(Self::fallback())
			}
		}
	}

	/// Reads script text from a reader.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, SprFileError> {
		let mut bytes = Vec::new();
		reader.read_to_end(&mut bytes)?;
		Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
	}

	/// Parses script text.
	///
	/// # Examples
	///
	/// ```
	/// use gbspr_types::file::anim::Animation;
	///
	/// let anim = Animation::parse("frame 0, 10\nendanim\n");
	/// assert_eq!(anim.len(), 1);
	/// assert!((anim.frames()[0].duration_ms - 167.42).abs() < 0.01);
	/// ```
	pub fn parse(text: &str) -> Self {
		let frames = expand(text.lines()).into_iter().map(TickFrame::to_animation_frame).collect();
		Self::from_frames(frames)
	}

	/// Returns the expanded frames.
	pub fn frames(&self) -> &[AnimationFrame] {
		&self.frames
	}

	/// Returns the number of expanded frames.
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Returns `true` if the timeline has no frames.
	///
	/// Never the case: every constructor falls back to a single frame.
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Returns the frame durations in timeline order.
	pub fn durations_ms(&self) -> impl Iterator<Item = f64> + '_ {
		self.frames.iter().map(|f| f.duration_ms)
	}

	/// Returns one duration per sheet frame, matched by position.
	///
	/// Sheet frame `i` takes the `i`-th timeline duration; positions past the
	/// end of the timeline use `fallback_ms`.
	pub fn durations_for(&self, frame_count: usize, fallback_ms: f64) -> Vec<f64> {
		(0..frame_count)
			.map(|i| self.frames.get(i).map_or(fallback_ms, |f| f.duration_ms))
			.collect()
	}

	/// Total playback time in milliseconds.
	pub fn total_ms(&self) -> f64 {
		self.durations_ms().sum()
	}
}

impl Default for Animation {
	fn default() -> Self {
		Self::fallback()
	}
}

impl fmt::Display for Animation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Animation({} frames, {:.1} ms)", self.frames.len(), self.total_ms())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_tick_duration() {
		assert!((constants::TICK_MS - 16.742).abs() < 0.001);
		assert!((10.0 * constants::TICK_MS - 167.42).abs() < 0.01);
	}

	#[test]
	fn test_field_rate_matches_clock() {
		let rate = f64::from(constants::CPU_CLOCK_HZ) / f64::from(constants::CYCLES_PER_FIELD);
		assert!((rate - constants::FIELD_RATE_HZ).abs() < 0.0001);
	}

	#[test]
	fn test_parse_converts_ticks() {
		let anim = Animation::parse("frame 0,08\nsetrepeat 2\nframe 1,04\ndorepeat\nendanim");
		let frames = anim.frames();
		assert_eq!(frames.len(), 3);
		assert_eq!(frames.iter().map(|f| f.index).collect::<Vec<_>>(), vec![0, 1, 1]);
		assert!((frames[0].duration_ms - 8.0 * constants::TICK_MS).abs() < 1e-9);
		assert!((frames[2].duration_ms - 4.0 * constants::TICK_MS).abs() < 1e-9);
	}

	#[test]
	fn test_parse_empty_script_falls_back() {
		let anim = Animation::parse("; nothing here\n\n");
		assert_eq!(anim.frames(), &[AnimationFrame::new(0, 300.0)]);
		assert!(!anim.is_empty());
		assert!(!Animation::from_frames(Vec::new()).is_empty());
	}

	#[test]
	fn test_open_missing_file_falls_back() {
		let dir = tempfile::tempdir().unwrap();
		let anim = Animation::open(dir.path().join("anim.asm")).unwrap();
		assert_eq!(anim, Animation::fallback());
		assert_eq!(anim.frames()[0].duration_ms, 300.0);
	}

	#[test]
	fn test_open_reads_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "\tframe 1, 08").unwrap();
		writeln!(file, "\tframe 2, 08").unwrap();
		writeln!(file, "\tendanim").unwrap();
		let anim = Animation::open(file.path()).unwrap();
		assert_eq!(anim.len(), 2);
		assert_eq!(anim.frames()[1].index, 2);
	}

	#[test]
	fn test_durations_for_positional() {
		let anim = Animation::from_frames(vec![
			AnimationFrame::new(3, 100.0),
			AnimationFrame::new(1, 50.0),
		]);
		assert_eq!(anim.durations_for(3, 300.0), vec![100.0, 50.0, 300.0]);
		assert_eq!(anim.durations_for(1, 300.0), vec![100.0]);
		assert!(anim.durations_for(0, 300.0).is_empty());
	}
}
