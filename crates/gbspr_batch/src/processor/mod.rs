//! Sprite batch driver.
//!
//! [`SpriteBatch`] holds everything shared by the per-kind processors: the
//! configuration, compiled naming rules, the icon color table and the timing
//! encoder. All of it is read-only, so subjects are processed in parallel
//! without locking.

mod icon;
mod item;
mod mini;
mod pokemon;
mod trainer;

use std::{collections::BTreeMap, fmt, path::Path};

use gbspr_render::{TimedFrame, save_png, write_gif};
use gbspr_types::{
	file::IconPaletteMap,
	names::{NameRules, reduce_name},
	timing::TimingEncoder,
};
use image::RgbaImage;
use rayon::prelude::*;

use crate::{BatchConfig, BatchError, OutputLayout, RomLayout, SpriteManifest, SubjectKind, discovery};

pub use self::icon::ICON_FRAME_MS;
pub use self::mini::{BREATHING_FRAME_MS, MINI_FRAME_MS};
pub use self::pokemon::POKEMON_VARIANTS;

/// Subjects processed when no target is given
pub const SMOKE_SUBJECTS: &[(SubjectKind, &str)] = &[
	(SubjectKind::Pokemon, "abra"),
	(SubjectKind::Trainer, "red"),
	(SubjectKind::Item, "poke_ball"),
	(SubjectKind::Mini, "pikachu"),
	(SubjectKind::Icon, "pikachu"),
];

/// Outcome of processing every subject of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
	/// Kind processed
	pub kind: SubjectKind,
	/// Subjects found
	pub total: usize,
	/// Subjects processed without error
	pub processed: usize,
	/// Failed subjects and the reason
	pub failures: Vec<(String, String)>,
}

impl fmt::Display for BatchSummary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Processed {}/{} {} sprites", self.processed, self.total, self.kind)
	}
}

/// Sprite batch processor.
#[derive(Debug, Clone)]
pub struct SpriteBatch {
	config: BatchConfig,
	rules: NameRules,
	icon_colors: IconPaletteMap,
	encoder: TimingEncoder,
	rom: RomLayout,
	output: OutputLayout,
}

impl SpriteBatch {
	/// Creates a processor, loading the icon color table from the source tree.
	///
	/// # Errors
	///
	/// Returns an error if the icon color table exists but cannot be read.
	pub fn new(config: BatchConfig) -> Result<Self, BatchError> {
		let rom = config.rom();
		let icon_colors = IconPaletteMap::open(rom.icon_palette_map())?;
		log::debug!("Loaded {} icon color entries", icon_colors.len());

		Ok(Self {
			rules: config.name_rules(),
			output: config.output(),
			icon_colors,
			encoder: TimingEncoder::default(),
			rom,
			config,
		})
	}

	/// Returns the configuration.
	pub fn config(&self) -> &BatchConfig {
		&self.config
	}

	/// Returns the naming rules.
	pub fn rules(&self) -> &NameRules {
		&self.rules
	}

	/// Returns the source layout.
	pub fn rom(&self) -> &RomLayout {
		&self.rom
	}

	/// Returns the output layout.
	pub fn output(&self) -> &OutputLayout {
		&self.output
	}

	/// Processes one subject.
	///
	/// # Errors
	///
	/// Returns [`BatchError::NotFound`] if the source sprite does not exist,
	/// or the first error hit while decoding, recoloring or writing it.
	pub fn process(&self, kind: SubjectKind, name: &str) -> Result<(), BatchError> {
		match kind {
			SubjectKind::Pokemon => self.process_pokemon(name),
			SubjectKind::Trainer => self.process_trainer(name),
			SubjectKind::Item => self.process_item(name),
			SubjectKind::Mini => self.process_mini(name),
			SubjectKind::Icon => self.process_icon(name),
		}
	}

	/// Lists the source subjects of a kind.
	pub fn discover(&self, kind: SubjectKind) -> Result<Vec<String>, BatchError> {
		let dir = self.rom.gfx(kind);
		let names = match kind {
			SubjectKind::Pokemon => discovery::folders(&dir)?,
			SubjectKind::Mini => discovery::sprite_names(&dir)?,
			SubjectKind::Trainer | SubjectKind::Item | SubjectKind::Icon => discovery::file_stems(&dir, "png")?,
		};
		Ok(names)
	}

	/// Output name a subject is published under.
	pub fn output_name(&self, kind: SubjectKind, name: &str) -> String {
		match kind {
			SubjectKind::Pokemon => self.rules.output_name(name),
			_ => reduce_name(name),
		}
	}

	/// Processes every subject of a kind.
	///
	/// Subjects publishing to the same output name are processed in source
	/// order on one worker, so the last one wins as in a sequential run.
	/// Failures are logged and counted, never propagated.
	pub fn process_kind(&self, kind: SubjectKind) -> Result<BatchSummary, BatchError> {
		let names = self.discover(kind)?;
		let total = names.len();
		log::info!("Found {total} {kind} sprites to process");

		let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
		for name in names {
			groups.entry(self.output_name(kind, &name)).or_default().push(name);
		}
		let groups: Vec<Vec<String>> = groups.into_values().collect();

		let run = |group: &Vec<String>| -> Vec<(String, Result<(), BatchError>)> {
			group.iter().map(|name| (name.clone(), self.process(kind, name))).collect()
		};
		let results: Vec<(String, Result<(), BatchError>)> = if self.config.parallel {
			groups.par_iter().flat_map_iter(run).collect()
		} else {
			groups.iter().flat_map(run).collect()
		};

		let mut failures = Vec::new();
		for (name, result) in results {
			if let Err(e) = result {
				log::warn!("Failed to process {kind} {name}: {e}");
				failures.push((name, e.to_string()));
			}
		}

		let summary = BatchSummary {
			kind,
			total,
			processed: total - failures.len(),
			failures,
		};
		log::info!("{summary}");
		Ok(summary)
	}

	/// Processes every kind, then rebuilds the manifest.
	pub fn process_all(&self) -> Result<Vec<BatchSummary>, BatchError> {
		let summaries = SubjectKind::ALL
			.into_iter()
			.map(|kind| self.process_kind(kind))
			.collect::<Result<Vec<_>, _>>()?;
		self.write_manifest()?;
		Ok(summaries)
	}

	/// Processes a named subject, trying each kind in order.
	///
	/// Returns the kind that succeeded, or `None` if no kind matched.
	pub fn process_target(&self, name: &str) -> Option<SubjectKind> {
		SubjectKind::ALL.into_iter().find(|&kind| match self.process(kind, name) {
			Ok(()) => true,
			Err(e) => {
				log::debug!("{name} is not a {kind}: {e}");
				false
			}
		})
	}

	/// Processes the [`SMOKE_SUBJECTS`].
	pub fn smoke_test(&self) -> Vec<(SubjectKind, &'static str, bool)> {
		SMOKE_SUBJECTS
			.iter()
			.map(|&(kind, name)| {
				let ok = match self.process(kind, name) {
					Ok(()) => true,
					Err(e) => {
						log::warn!("Smoke test {kind} {name} failed: {e}");
						false
					}
				};
				(kind, name, ok)
			})
			.collect()
	}

	/// Rebuilds `sprite_manifest.json` from the output tree.
	pub fn write_manifest(&self) -> Result<SpriteManifest, BatchError> {
		SpriteManifest::rebuild(&self.output)
	}

	/// Writes the first frame as PNG and, when `gif` is given, all frames as
	/// a timed GIF.
	fn export(
		&self,
		frames: Vec<RgbaImage>,
		durations_ms: &[f64],
		png: &Path,
		gif: Option<&Path>,
	) -> Result<(), BatchError> {
		let Some(first) = frames.first() else {
			return Err(gbspr_render::RenderError::NoFrames.into());
		};
		save_png(first, png)?;
		log::debug!("Saved static PNG: {}", png.display());

		if let Some(gif) = gif {
			let delays = self.encoder.encode(durations_ms, frames.len());
			write_gif(&TimedFrame::zip(frames, &delays)?, gif)?;
			log::debug!("Created animated GIF: {} ({delays})", gif.display());
		}
		Ok(())
	}
}
