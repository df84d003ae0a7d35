//! Trainer portraits: `gfx/trainers/<name>.png` plus one image per palette.

use gbspr_render::{BandingPolicy, PaletteMapper, open_sheet, save_png, slice_frames};
use gbspr_types::{file::Palette, names::reduce_name};

use super::SpriteBatch;
use crate::{BatchError, SubjectKind, discovery};

impl SpriteBatch {
	/// Renders a trainer with every palette found for it.
	///
	/// `<name>.pal` produces `<reduced>.png`, `<name>_<variant>.pal` produces
	/// `<reduced>_<reduced variant>.png`, all under
	/// `sprites/trainers/<reduced>/`.
	///
	/// # Errors
	///
	/// Returns [`BatchError::NoPalette`] if the trainer has no palette file.
	pub fn process_trainer(&self, name: &str) -> Result<(), BatchError> {
		let gfx = self.rom.gfx(SubjectKind::Trainer);
		let sheet_path = gfx.join(format!("{name}.png"));
		if !sheet_path.is_file() {
			return Err(BatchError::not_found(SubjectKind::Trainer, name));
		}

		let output_name = reduce_name(name);
		log::info!("Processing trainer {name} -> {output_name}");

		let palettes = discovery::trainer_palettes(&gfx, name)?;
		if palettes.is_empty() {
			return Err(BatchError::NoPalette(name.to_owned()));
		}

		let sheet = open_sheet(&sheet_path)?;
		let frames = slice_frames(&sheet);
		let Some(first) = frames.first() else {
			return Err(gbspr_render::RenderError::NoFrames.into());
		};

		let out_dir = self.output.sprites(SubjectKind::Trainer).join(&output_name);
		let prefix = format!("{name}_");
		for palette_name in &palettes {
			let palette = Palette::open(gfx.join(format!("{palette_name}.pal")))?;
			let file_name = match palette_name.strip_prefix(&prefix) {
				Some(variant) => format!("{output_name}_{}.png", reduce_name(variant)),
				None => format!("{output_name}.png"),
			};

			let image = PaletteMapper::new(palette, BandingPolicy::TransparentBackground).apply(first);
			let path = out_dir.join(file_name);
			save_png(&image, &path)?;
			log::debug!("Saved trainer sprite: {}", path.display());
		}
		Ok(())
	}
}
