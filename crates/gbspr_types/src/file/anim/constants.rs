//! Animation timing constants.

/// CPU clock of the handheld in Hz
pub const CPU_CLOCK_HZ: u32 = 4_194_304;

/// CPU cycles spent per video field
pub const CYCLES_PER_FIELD: u32 = 70_224;

/// Video field rate, `4194304 / 70224` rounded to four decimals
pub const FIELD_RATE_HZ: f64 = 59.7275;

/// Duration of one animation tick (one video field) in milliseconds, about 16.742 ms
pub const TICK_MS: f64 = 1000.0 / FIELD_RATE_HZ;

/// Duration of the frame substituted for a missing or empty animation script.
///
/// Fixed value, not derived from [`TICK_MS`].
pub const DEFAULT_FRAME_MS: f64 = 300.0;

/// Upper bound on the frames of an expanded timeline
pub const MAX_EXPANDED_FRAMES: usize = 4096;
