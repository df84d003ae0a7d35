use std::{fs, path::Path};

use gbspr_rs::prelude::*;
use image::{Rgba, RgbaImage};

pub(crate) const RED: &str = "RGB 31, 00, 00\nRGB 20, 20, 20\nRGB 10, 10, 10\nRGB 00, 00, 00\n";
pub(crate) const GREEN: &str = "RGB 00, 31, 00\nRGB 20, 20, 20\nRGB 10, 10, 10\nRGB 00, 00, 00\n";
pub(crate) const BLUE: &str = "RGB 00, 00, 31\nRGB 20, 20, 20\nRGB 10, 10, 10\nRGB 00, 00, 00\n";

pub(crate) fn gray(value: u8) -> Rgba<u8> {
	Rgba([value, value, value, 255])
}

pub(crate) fn write_sheet(path: &Path, width: u32, height: u32, pixel: impl Fn(u32, u32) -> Rgba<u8>) {
	fs::create_dir_all(path.parent().unwrap()).unwrap();
	RgbaImage::from_fn(width, height, pixel).save(path).unwrap();
}

pub(crate) fn write_text(path: &Path, text: &str) {
	fs::create_dir_all(path.parent().unwrap()).unwrap();
	fs::write(path, text).unwrap();
}

/// Writes a pokemon folder with a two-frame 8x16 sheet of light gray.
pub(crate) fn pokemon(rom: &Path, folder: &str, normal: &str) {
	let dir = rom.join("gfx/pokemon").join(folder);
	write_sheet(&dir.join("front.png"), 8, 16, |_, _| gray(200));
	write_text(&dir.join("normal.pal"), normal);
	write_text(&dir.join("anim.asm"), "\tframe 0, 06\n\tframe 1, 06\n\tendanim\n");
}

/// Disassembly tree with forms, collisions and one subject of each other kind.
pub(crate) fn rom(root: &Path) {
	pokemon(root, "abra", RED);
	write_text(&root.join("gfx/pokemon/abra/shiny.pal"), BLUE);
	pokemon(root, "pikachu_plain", RED);
	pokemon(root, "vulpix_alolan", RED);
	pokemon(root, "mr__mime", RED);
	pokemon(root, "dudunsparce_three_segment", GREEN);
	pokemon(root, "dudunsparce_two_segment", BLUE);

	let gfx = root.join("gfx");
	write_sheet(&gfx.join("trainers/red.png"), 8, 8, |_, _| gray(200));
	write_text(&gfx.join("trainers/red.pal"), RED);
	write_sheet(&gfx.join("items/poke_ball.png"), 16, 16, |_, _| gray(100));
	write_sheet(&gfx.join("minis/pikachu.png"), 16, 32, |_, _| gray(0));
	write_sheet(&gfx.join("minis/pikachu_mask.png"), 16, 32, |_, y| gray(if y < 4 { 255 } else { 0 }));
	write_sheet(&gfx.join("icons/pikachu.png"), 16, 32, |_, _| gray(100));
	write_text(&root.join("data/pokemon/overworld_icon_pals.asm"), "\ticonpal RED, AZURE ; PIKACHU\n");
}

/// Batch over a fresh fixture tree under `root`.
pub(crate) fn batch(root: &Path, parallel: bool) -> SpriteBatch {
	rom(&root.join("rom"));
	SpriteBatch::new(BatchConfig {
		rom_path: root.join("rom"),
		output_path: root.join("public"),
		parallel,
		..BatchConfig::default()
	})
	.unwrap()
}
