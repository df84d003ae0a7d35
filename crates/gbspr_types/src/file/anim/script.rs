//! Animation script instructions and repeat-block expansion.

use std::sync::LazyLock;

use regex::Regex;

use super::{constants::MAX_EXPANDED_FRAMES, frame::TickFrame};

static FRAME_LINE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"frame\s+(\d+)(?:\s*,\s*|\s+)(\d+)").expect("valid frame pattern")
});

static SETREPEAT_LINE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"setrepeat\s+(\d+)").expect("valid setrepeat pattern"));

/// A single recognized script instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
	/// `frame <index>, <ticks>`: show a frame for a number of ticks
	Frame(TickFrame),

	/// `setrepeat <count>`: open a repeat block
	SetRepeat {
		/// Number of times the block is present after expansion
		count: u32,
	},

	/// `dorepeat`: close the innermost repeat block, any operand is ignored
	DoRepeat,

	/// `endanim`: stop reading the script
	EndAnim,
}

impl Instruction {
	/// Parses one line, returning `None` for blank, unknown or malformed lines.
	///
	/// The line is trimmed first; keywords must start the line.
	///
	/// # Examples
	///
	/// ```
	/// use gbspr_types::file::anim::{Instruction, TickFrame};
	///
	/// assert_eq!(Instruction::parse_line("\tframe 1, 08"), Some(Instruction::Frame(TickFrame::new(1, 8))));
	/// assert_eq!(Instruction::parse_line("dorepeat 1"), Some(Instruction::DoRepeat));
	/// assert_eq!(Instruction::parse_line("; comment"), None);
	/// ```
	pub fn parse_line(line: &str) -> Option<Self> {
		let line = line.trim();
		if line.starts_with("frame") {
			let caps = FRAME_LINE.captures(line)?;
			let index = caps.get(1)?.as_str().parse().ok()?;
			let ticks = caps.get(2)?.as_str().parse().ok()?;
			Some(Self::Frame(TickFrame::new(index, ticks)))
		} else if line.starts_with("setrepeat") {
			let caps = SETREPEAT_LINE.captures(line)?;
			let count = caps.get(1)?.as_str().parse().ok()?;
			Some(Self::SetRepeat {
				count,
			})
		} else if line.starts_with("dorepeat") {
			Some(Self::DoRepeat)
		} else if line.starts_with("endanim") {
			Some(Self::EndAnim)
		} else {
			None
		}
	}
}

/// Open repeat block, alive only while a script is being expanded.
#[derive(Debug, Clone, Copy)]
struct RepeatBlock {
	count: u32,
	start: usize,
}

/// Expands script lines into a flat tick timeline.
///
/// Repeat blocks nest through a stack. Closing a block re-appends everything
/// added since it was opened `count - 1` more times, so the segment appears
/// `count` times in total. A `dorepeat` with no open block is ignored, and
/// blocks still open at the end of the script are dropped without expansion.
///
/// The timeline is cut off at [`MAX_EXPANDED_FRAMES`].
pub fn expand<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<TickFrame> {
	let mut frames = Vec::new();
	let mut stack: Vec<RepeatBlock> = Vec::new();

	for instruction in lines.into_iter().filter_map(Instruction::parse_line) {
		match instruction {
			Instruction::Frame(frame) => {
				if frames.len() >= MAX_EXPANDED_FRAMES {
					log::warn!("Animation longer than {MAX_EXPANDED_FRAMES} frames, truncated");
					break;
				}
				frames.push(frame);
			}
			Instruction::SetRepeat {
				count,
			} => stack.push(RepeatBlock {
				count,
				start: frames.len(),
			}),
			Instruction::DoRepeat => {
				let Some(block) = stack.pop() else {
					log::debug!("dorepeat without open setrepeat, ignored");
					continue;
				};
				let segment = frames.get(block.start..).unwrap_or_default().to_vec();
				let wanted = segment.len().saturating_mul(block.count.saturating_sub(1) as usize);
				let room = MAX_EXPANDED_FRAMES.saturating_sub(frames.len());
				frames.extend(segment.iter().copied().cycle().take(wanted.min(room)));
				if wanted > room {
					log::warn!("Animation longer than {MAX_EXPANDED_FRAMES} frames, truncated");
					break;
				}
			}
			Instruction::EndAnim => break,
		}
	}

	frames
}
