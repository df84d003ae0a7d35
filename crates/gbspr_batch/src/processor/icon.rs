//! Party icons: `gfx/icons/<name>.png`, two stacked 16x16 frames.

use gbspr_render::{BandingPolicy, PaletteMapper, open_sheet, slicer::slice_icon};

use super::SpriteBatch;
use crate::{BatchError, SubjectKind};

/// Display time of each icon frame
pub const ICON_FRAME_MS: f64 = 500.0;

impl SpriteBatch {
	/// Renders an icon to `sprites/icons/<reduced>.png` and
	/// `<reduced>_animated.gif`, colored from `overworld_icon_pals.asm`.
	pub fn process_icon(&self, name: &str) -> Result<(), BatchError> {
		let sheet_path = self.rom.gfx(SubjectKind::Icon).join(format!("{name}.png"));
		if !sheet_path.is_file() {
			return Err(BatchError::not_found(SubjectKind::Icon, name));
		}

		let output_name = self.output_name(SubjectKind::Icon, name);
		let colors = self.icon_colors.colors_for(name);
		log::info!("Processing icon {name} -> {output_name} ({colors})");

		let frames = PaletteMapper::new(colors.palette(), BandingPolicy::Icon)
			.apply_all(&slice_icon(&open_sheet(&sheet_path)?));

		let out_dir = self.output.sprites(SubjectKind::Icon);
		let gif = out_dir.join(format!("{output_name}_animated.gif"));
		let durations = vec![ICON_FRAME_MS; frames.len()];
		let animated = frames.len() > 1;
		self.export(frames, &durations, &out_dir.join(format!("{output_name}.png")), animated.then_some(gif.as_path()))
	}
}
