//! Frame delay encoding for animated output.
//!
//! Animated image containers store delays in centiseconds. The encoder turns
//! millisecond durations into centisecond delays, one per output frame, with
//! a floor for smooth playback and a pause appended after the last frame so
//! loops are visibly separated.

use std::fmt;

/// Delay of each output frame in centiseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FrameDelays {
	centiseconds: Vec<u16>,
}

impl FrameDelays {
	/// Returns the delays in centiseconds.
	pub fn centiseconds(&self) -> &[u16] {
		&self.centiseconds
	}

	/// Returns the delays in milliseconds (`centiseconds * 10`).
	pub fn to_millis(&self) -> Vec<u32> {
		self.centiseconds.iter().map(|&cs| u32::from(cs) * 10).collect()
	}

	/// Delay of one frame.
	pub fn get(&self, index: usize) -> Option<u16> {
		self.centiseconds.get(index).copied()
	}

	/// Number of frames.
	pub fn len(&self) -> usize {
		self.centiseconds.len()
	}

	/// Returns `true` if there are no frames.
	pub fn is_empty(&self) -> bool {
		self.centiseconds.is_empty()
	}

	/// Total loop length in centiseconds.
	pub fn total(&self) -> u32 {
		self.centiseconds.iter().map(|&cs| u32::from(cs)).sum()
	}
}

impl fmt::Display for FrameDelays {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?} cs", self.centiseconds)
	}
}

/// Millisecond to centisecond delay encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingEncoder {
	/// Smallest delay emitted, in centiseconds
	pub min_ticks: u16,
	/// Delay used for every frame when no duration is given
	pub fill_ticks: u16,
	/// Extra delay added to the last frame
	pub loop_pause_ticks: u16,
}

impl TimingEncoder {
	/// Default minimum delay (20 ms)
	pub const MIN_TICKS: u16 = 2;

	/// Default fill delay (500 ms)
	pub const FILL_TICKS: u16 = 50;

	/// Default end-of-loop pause (300 ms)
	pub const LOOP_PAUSE_TICKS: u16 = 30;

	/// Creates an encoder with the default constants.
	pub const fn new() -> Self {
		Self {
			min_ticks: Self::MIN_TICKS,
			fill_ticks: Self::FILL_TICKS,
			loop_pause_ticks: Self::LOOP_PAUSE_TICKS,
		}
	}

	/// Converts a single duration, rounding half to even and applying the floor.
	pub fn ticks(&self, duration_ms: f64) -> u16 {
		let ticks = (duration_ms / 10.0).round_ties_even();
		// NaN and negative durations end up at the floor
		ticks.max(f64::from(self.min_ticks)).min(f64::from(u16::MAX)) as u16
	}

	/// Encodes durations into exactly `frame_count` delays.
	///
	/// Missing trailing durations repeat the last encoded value (or
	/// [`Self::fill_ticks`] when none was given), surplus durations are
	/// dropped, and the last delay gets the loop pause added.
	///
	/// # Examples
	///
	/// ```
	/// use gbspr_types::timing::TimingEncoder;
	///
	/// let delays = TimingEncoder::default().encode(&[100.0, 50.0], 2);
	/// assert_eq!(delays.centiseconds(), &[10, 35]);
	/// assert_eq!(delays.to_millis(), vec![100, 350]);
	/// ```
	pub fn encode(&self, durations_ms: &[f64], frame_count: usize) -> FrameDelays {
		let mut centiseconds: Vec<u16> =
			durations_ms.iter().take(frame_count).map(|&ms| self.ticks(ms)).collect();

		let fill = centiseconds.last().copied().unwrap_or(self.fill_ticks);
		centiseconds.resize(frame_count, fill);

		if let Some(last) = centiseconds.last_mut() {
			*last = last.saturating_add(self.loop_pause_ticks);
		}

		FrameDelays {
			centiseconds,
		}
	}
}

impl Default for TimingEncoder {
	fn default() -> Self {
		Self::new()
	}
}
