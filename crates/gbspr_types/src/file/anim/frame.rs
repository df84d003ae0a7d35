//! Timed animation frame types.

use std::fmt;

use super::constants::TICK_MS;

/// Frame reference as written in a script, duration still in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickFrame {
	/// Source frame index
	pub index: u32,
	/// Duration in video fields
	pub ticks: u32,
}

impl TickFrame {
	/// Creates a new tick frame.
	pub const fn new(index: u32, ticks: u32) -> Self {
		Self {
			index,
			ticks,
		}
	}

	/// Converts the tick count to milliseconds.
	pub fn to_animation_frame(self) -> AnimationFrame {
		AnimationFrame::new(self.index, f64::from(self.ticks) * TICK_MS)
	}
}

/// A source frame index paired with a playback duration in milliseconds.
///
/// Durations keep their fractional part; rounding happens only when the
/// timeline is encoded for an output container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
	/// Source frame index
	pub index: u32,
	/// Duration in milliseconds
	pub duration_ms: f64,
}

impl AnimationFrame {
	/// Creates a new animation frame.
	pub const fn new(index: u32, duration_ms: f64) -> Self {
		Self {
			index,
			duration_ms,
		}
	}
}

impl fmt::Display for AnimationFrame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "frame {} for {:.3} ms", self.index, self.duration_ms)
	}
}
