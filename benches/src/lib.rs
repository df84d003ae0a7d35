//! Benchmark helper utilities for gbspr-rs
//!
//! Generates synthetic grayscale sheets and scripts shaped like the real
//! disassembly assets, so the suite runs without a checkout of the ROM tree.

use image::{Rgba, RgbaImage};

/// Grayscale levels used by 4-shade source sprites
pub const SHADES: [u8; 4] = [255, 170, 85, 0];

/// Generates a `size` x `size * frames` sheet cycling through the four shades.
pub fn generate_sheet(size: u32, frames: u32) -> RgbaImage {
	RgbaImage::from_fn(size, size * frames, |x, y| {
		let shade = SHADES[((x / 4 + y / 4) % 4) as usize];
		Rgba([shade, shade, shade, 255])
	})
}

/// Generates a palette file with four colors.
pub fn generate_palette_text() -> String {
	["RGB 31, 31, 31", "RGB 24, 16, 08", "RGB 12, 06, 02", "RGB 00, 00, 00"]
		.iter()
		.map(|line| format!("\t{line}\n"))
		.collect()
}

/// Generates an animation script with `frames` frames and a repeat block.
pub fn generate_anim_script(frames: u32) -> String {
	let mut script = String::from("\tsetrepeat 3\n");
	for i in 0..frames {
		script.push_str(&format!("\tframe {i}, {:02}\n", 4 + i % 8));
	}
	script.push_str("\tdorepeat 1\n\tendanim\n");
	script
}
