//! Battle sprites: `gfx/pokemon/<folder>/front.png`.

use gbspr_render::{BandingPolicy, PaletteMapper, open_sheet, slice_frames};
use gbspr_types::file::{Animation, Palette, anim::constants::DEFAULT_FRAME_MS};

use super::SpriteBatch;
use crate::{BatchError, SubjectKind};

/// Palette variants rendered for every pokemon
pub const POKEMON_VARIANTS: [&str; 2] = ["normal", "shiny"];

impl SpriteBatch {
	/// Renders the front sprite of a pokemon folder once per palette variant.
	///
	/// Writes `<variant>_front.png` and `<variant>_front_animated.gif` under
	/// `sprites/pokemon/<output name>/`. Variants without a palette file are
	/// skipped. Frame `i` of the sheet is shown for the `i`-th duration of
	/// `anim.asm`.
	pub fn process_pokemon(&self, folder: &str) -> Result<(), BatchError> {
		let gfx = self.rom.gfx(SubjectKind::Pokemon);
		let source = gfx.join(folder);
		if !source.is_dir() {
			return Err(BatchError::not_found(SubjectKind::Pokemon, folder));
		}

		let output_name = self.output_name(SubjectKind::Pokemon, folder);
		log::info!("Processing {folder} -> {output_name}");
		let out_dir = self.output.sprites(SubjectKind::Pokemon).join(&output_name);
		let palette_dir = gfx.join(self.rules.palette_dir(folder));
		let sheet_path = source.join("front.png");

		for variant in POKEMON_VARIANTS {
			let palette_path = palette_dir.join(format!("{variant}.pal"));
			if !palette_path.is_file() {
				log::debug!("Palette file not found: {}", palette_path.display());
				continue;
			}
			if !sheet_path.is_file() {
				log::warn!("Sprite file not found: {}", sheet_path.display());
				continue;
			}

			let palette = Palette::open(&palette_path)?;
			let sheet = open_sheet(&sheet_path)?;
			let frames = PaletteMapper::new(palette, BandingPolicy::TransparentBackground)
				.apply_all(&slice_frames(&sheet));

			let anim = Animation::open(source.join("anim.asm"))?;
			let durations = anim.durations_for(frames.len(), DEFAULT_FRAME_MS);
			log::debug!("{folder} {variant}: {} frames, {anim}", frames.len());

			self.export(
				frames,
				&durations,
				&out_dir.join(format!("{variant}_front.png")),
				Some(&out_dir.join(format!("{variant}_front_animated.gif"))),
			)?;
		}
		Ok(())
	}
}
