//! Bag items: `gfx/items/<name>.png`.

use gbspr_render::{BandingPolicy, PaletteMapper, open_sheet, save_png, slice_frames};
use gbspr_types::{
	catalog::{ItemCategory, item::MONOCHROME},
	file::Palette,
	names::reduce_name,
};

use super::SpriteBatch;
use crate::{BatchError, ItemPaletteMode, SubjectKind};

impl SpriteBatch {
	/// Palette an item is rendered with under the current configuration.
	pub fn item_palette(&self, name: &str) -> Palette {
		match self.config.item_palette {
			ItemPaletteMode::Monochrome => MONOCHROME,
			ItemPaletteMode::Category => ItemCategory::classify(name).palette(),
		}
	}

	/// Renders an item to `sprites/items/<reduced>.png`.
	pub fn process_item(&self, name: &str) -> Result<(), BatchError> {
		let sheet_path = self.rom.gfx(SubjectKind::Item).join(format!("{name}.png"));
		if !sheet_path.is_file() {
			return Err(BatchError::not_found(SubjectKind::Item, name));
		}

		let output_name = reduce_name(name);
		log::info!("Processing item {name} -> {output_name}");
		if self.config.item_palette == ItemPaletteMode::Category {
			log::debug!("Item {name} is in category {}", ItemCategory::classify(name));
		}

		let frames = slice_frames(&open_sheet(&sheet_path)?);
		let Some(first) = frames.first() else {
			return Err(gbspr_render::RenderError::NoFrames.into());
		};

		let image = PaletteMapper::new(self.item_palette(name), BandingPolicy::TransparentBackground).apply(first);
		let path = self.output.sprites(SubjectKind::Item).join(format!("{output_name}.png"));
		save_png(&image, &path)?;
		log::debug!("Saved item sprite: {}", path.display());
		Ok(())
	}
}
