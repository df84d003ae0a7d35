//! Overworld sprites: `gfx/minis/<name>.png` with `<name>_mask.png`.

use gbspr_render::{BandingPolicy, PaletteMapper, apply_mask, open_sheet, slicer::slice_mini};
use gbspr_types::{
	catalog::species::{EGG, type_palette},
	file::Palette,
	names::mini_species,
};

use super::SpriteBatch;
use crate::{BatchError, SubjectKind, discovery::MASK_SUFFIX};

/// Display time of each frame of a multi-frame overworld sprite
pub const MINI_FRAME_MS: f64 = 800.0;

/// Display time of each half of the breathing loop of a single-frame sprite
pub const BREATHING_FRAME_MS: f64 = 1500.0;

impl SpriteBatch {
	/// Palette of an overworld sprite.
	///
	/// The egg has its own palette. Other sprites use the species'
	/// `normal.pal` when there is one, then a palette picked from the name.
	pub fn mini_palette(&self, name: &str) -> Result<Palette, BatchError> {
		if name == "egg" {
			return Ok(EGG);
		}

		let species = mini_species(name);
		let normal = self.rom.gfx(SubjectKind::Pokemon).join(self.rules.palette_dir(&species)).join("normal.pal");
		if normal.is_file() {
			return Ok(Palette::open(normal)?);
		}
		Ok(type_palette(name))
	}

	/// Renders an overworld sprite to `sprites/minis/<reduced>.png` and
	/// `<reduced>_animated.gif`.
	///
	/// Frames are recolored with all four shades, then cut out with the
	/// mask sheet: frame by frame when both sheets have the same number of
	/// frames, otherwise with the first mask frame.
	pub fn process_mini(&self, name: &str) -> Result<(), BatchError> {
		let gfx = self.rom.gfx(SubjectKind::Mini);
		let sheet_path = gfx.join(format!("{name}.png"));
		if !sheet_path.is_file() {
			return Err(BatchError::not_found(SubjectKind::Mini, name));
		}

		let output_name = self.output_name(SubjectKind::Mini, name);
		log::info!("Processing mini sprite {name} -> {output_name}");

		let mapper = PaletteMapper::new(self.mini_palette(name)?, BandingPolicy::Opaque);
		let raw = slice_mini(&open_sheet(&sheet_path)?);
		let mut frames = mapper.apply_all(&raw);

		let mask_path = gfx.join(format!("{name}{MASK_SUFFIX}.png"));
		if mask_path.is_file() {
			let masks = slice_mini(&open_sheet(&mask_path)?);
			frames = frames
				.iter()
				.enumerate()
				.map(|(i, frame)| {
					let mask = if masks.len() == raw.len() { &masks[i] } else { &masks[0] };
					apply_mask(frame, mask)
				})
				.collect();
		} else {
			log::warn!("No mask found for {name}, using sprite as-is");
		}

		let durations = if frames.len() == 1 {
			frames.push(frames[0].clone());
			vec![BREATHING_FRAME_MS; 2]
		} else {
			vec![MINI_FRAME_MS; frames.len()]
		};

		let out_dir = self.output.sprites(SubjectKind::Mini);
		self.export(
			frames,
			&durations,
			&out_dir.join(format!("{output_name}.png")),
			Some(&out_dir.join(format!("{output_name}_animated.gif"))),
		)
	}
}
