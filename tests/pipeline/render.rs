use gbspr_rs::prelude::*;
use image::{Rgba, RgbaImage};

use crate::fixture;

#[test]
fn test_sheet_to_gif() {
	let dir = tempfile::tempdir().unwrap();
	let palette = Palette::parse(fixture::GREEN);
	let anim = Animation::parse("\tframe 0, 10\n\tframe 1, 20\n\tframe 2, 30\n\tendanim\n");

	let sheet = RgbaImage::from_fn(8, 24, |_, y| fixture::gray(if y < 8 { 255 } else { 0 }));
	let frames = PaletteMapper::new(palette, BandingPolicy::TransparentBackground).apply_all(&slice_frames(&sheet));
	assert_eq!(frames.len(), 3);
	assert_eq!(frames[0].get_pixel(0, 0)[3], 0);
	assert_eq!(frames[1].get_pixel(0, 0), &Rgba([82, 82, 82, 255]));

	let delays = TimingEncoder::new().encode(&anim.durations_for(frames.len(), 300.0), frames.len());
	assert_eq!(delays.centiseconds(), &[17, 33, 80]);

	let path = dir.path().join("out/anim.gif");
	write_gif(&TimedFrame::zip(frames, &delays).unwrap(), &path).unwrap();
	assert_eq!(image::image_dimensions(&path).unwrap(), (8, 8));
}

#[test]
fn test_masked_overworld_frame() {
	let palette = Palette::parse(fixture::RED);
	let frame = RgbaImage::from_pixel(16, 16, fixture::gray(255));
	let mask = RgbaImage::from_fn(16, 16, |x, _| fixture::gray(if x == 0 { 255 } else { 0 }));

	let recolored = PaletteMapper::new(palette, BandingPolicy::Opaque).apply(&frame);
	let masked = apply_mask(&recolored, &mask);
	assert_eq!(masked.get_pixel(0, 0)[3], 0);
	assert_eq!(masked.get_pixel(1, 0), &Rgba([255, 0, 0, 255]));
}
