//! Batch sprite processor
//!
//! Recolors and animates the sprites of a disassembly tree into a web-ready
//! output tree, then indexes the result in `sprite_manifest.json`.
//!
//! # Usage
//!
//! ```bash
//! # Smoke run on a handful of known sprites
//! spr_batch
//!
//! # Process a single subject, trying each category in turn
//! spr_batch abra
//! spr_batch poke_ball
//!
//! # Process a whole category and rebuild the manifest
//! spr_batch --pokemon
//! spr_batch --minis --rom-path ../polishedcrystal
//!
//! # Process everything with settings from a file
//! spr_batch --all --config gbspr.toml --output-path public
//! ```
//!
//! Settings are read from the optional config file, then from `GBSPR_*`
//! environment variables, then from the flags below.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser};
use gbspr_rs::prelude::*;

#[derive(Parser)]
#[command(name = "spr_batch")]
#[command(author = "gbspr-rs")]
#[command(version = "0.1.0")]
#[command(about = "Recolor and animate handheld sprite sheets", long_about = None)]
#[command(group(ArgGroup::new("category").args(["all", "pokemon", "trainers", "items", "minis", "icons"])))]
struct Cli {
	/// Subject to process (tried as pokemon, trainer, item, mini, then icon)
	#[arg(value_name = "TARGET", conflicts_with = "category")]
	target: Option<String>,

	/// Process every category
	#[arg(long)]
	all: bool,

	/// Process all pokemon
	#[arg(long)]
	pokemon: bool,

	/// Process all trainers
	#[arg(long)]
	trainers: bool,

	/// Process all items
	#[arg(long)]
	items: bool,

	/// Process all overworld sprites
	#[arg(long)]
	minis: bool,

	/// Process all party icons
	#[arg(long)]
	icons: bool,

	/// Root of the disassembly tree
	#[arg(short, long, value_name = "DIR")]
	rom_path: Option<PathBuf>,

	/// Root of the output tree
	#[arg(short, long, value_name = "DIR")]
	output_path: Option<PathBuf>,

	/// TOML settings file
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Process subjects one at a time
	#[arg(long)]
	sequential: bool,
}

impl Cli {
	/// Category selected by a category flag.
	fn category(&self) -> Option<SubjectKind> {
		[
			(self.pokemon, SubjectKind::Pokemon),
			(self.trainers, SubjectKind::Trainer),
			(self.items, SubjectKind::Item),
			(self.minis, SubjectKind::Mini),
			(self.icons, SubjectKind::Icon),
		]
		.into_iter()
		.find_map(|(selected, kind)| selected.then_some(kind))
	}

	/// Loads settings and applies the flag overrides.
	fn batch_config(&self) -> Result<BatchConfig> {
		let mut config = BatchConfig::load(self.config.as_deref()).context("Failed to load settings")?;
		if let Some(rom_path) = &self.rom_path {
			config.rom_path = rom_path.clone();
		}
		if let Some(output_path) = &self.output_path {
			config.output_path = output_path.clone();
		}
		if self.sequential {
			config.parallel = false;
		}
		Ok(config)
	}
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let cli = Cli::parse();
	let config = cli.batch_config()?;
	if !config.rom_path.is_dir() {
		bail!("ROM directory not found: {}", config.rom_path.display());
	}
	log::info!("Reading sprites from {}, writing to {}", config.rom_path.display(), config.output_path.display());
	let batch = SpriteBatch::new(config).context("Failed to set up the batch")?;

	if cli.all {
		let summaries = batch.process_all()?;
		print_summaries(&summaries);
	} else if let Some(kind) = cli.category() {
		let summary = batch.process_kind(kind)?;
		print_summaries(std::slice::from_ref(&summary));
		batch.write_manifest()?;
	} else if let Some(target) = &cli.target {
		match batch.process_target(target) {
			Some(kind) => println!("Processed {kind} {target}"),
			None => bail!("Could not find sprite for: {target}"),
		}
	} else {
		run_smoke_test(&batch)?;
	}

	Ok(())
}

fn print_summaries(summaries: &[BatchSummary]) {
	for summary in summaries {
		println!("{summary}");
		for (name, reason) in &summary.failures {
			println!("  {name}: {reason}");
		}
	}
}

fn run_smoke_test(batch: &SpriteBatch) -> Result<()> {
	println!("Testing with sample sprites...");
	let results = batch.smoke_test();
	for (kind, name, ok) in &results {
		println!("  {} {kind} {name}", if *ok { "✓" } else { "✗" });
	}

	batch.write_manifest()?;

	let failed = results.iter().filter(|(_, _, ok)| !ok).count();
	if failed > 0 {
		bail!("{failed} of {} sample sprites failed", results.len());
	}
	println!("Sample run complete. Output in {}", batch.output().root().display());
	Ok(())
}
