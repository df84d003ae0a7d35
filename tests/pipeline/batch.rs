use std::{fs, io::Write};

use gbspr_rs::prelude::*;
use image::Rgba;
use serde_json::Value;

use crate::fixture;

fn manifest(root: &std::path::Path) -> Value {
	serde_json::from_slice(&fs::read(root.join("public/sprite_manifest.json")).unwrap()).unwrap()
}

#[test_log::test]
fn test_process_all_manifest() {
	let dir = tempfile::tempdir().unwrap();
	let batch = fixture::batch(dir.path(), true);

	let summaries = batch.process_all().unwrap();
	assert_eq!(summaries.len(), SubjectKind::ALL.len());
	for summary in &summaries {
		assert!(summary.failures.is_empty(), "{summary}: {:?}", summary.failures);
	}

	let json = manifest(dir.path());
	let pokemon = json["pokemon"].as_object().unwrap();
	let names: Vec<&str> = pokemon.keys().map(String::as_str).collect();
	assert_eq!(names, vec!["abra", "dudunsparce", "mrmime", "pikachu", "vulpix_alolan"]);

	assert_eq!(json["pokemon"]["abra"]["normal_front"]["url"], "sprites/pokemon/abra/normal_front.png");
	assert_eq!(json["pokemon"]["abra"]["normal_front"]["width"], 8);
	assert_eq!(json["pokemon"]["abra"]["normal_front"]["height"], 8);
	assert_eq!(json["pokemon"]["abra"]["shiny_animated"]["url"], "sprites/pokemon/abra/shiny_front_animated.gif");
	assert!(json["pokemon"]["pikachu"]["shiny_front"].is_null());

	assert_eq!(json["trainers"]["red"]["red"]["url"], "sprites/trainers/red/red.png");
	assert_eq!(json["items"]["pokeball"]["icon"]["width"], 16);
	assert_eq!(json["minis"]["pikachu"]["overworld_animated"]["url"], "sprites/minis/pikachu_animated.gif");
	assert_eq!(json["icons"]["pikachu"]["static"]["url"], "sprites/icons/pikachu.png");
	assert_eq!(json["icons"]["pikachu"]["animated"]["height"], 16);
}

#[test]
fn test_parallel_collisions_match_sequential() {
	let parallel = tempfile::tempdir().unwrap();
	let sequential = tempfile::tempdir().unwrap();

	fixture::batch(parallel.path(), true).process_kind(SubjectKind::Pokemon).unwrap();
	fixture::batch(sequential.path(), false).process_kind(SubjectKind::Pokemon).unwrap();

	for root in [parallel.path(), sequential.path()] {
		let front = image::open(root.join("public/sprites/pokemon/dudunsparce/normal_front.png")).unwrap().to_rgba8();
		// the two-segment form sorts last and wins
		assert_eq!(front.get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
	}
}

#[test]
fn test_process_target() {
	let dir = tempfile::tempdir().unwrap();
	let batch = fixture::batch(dir.path(), false);

	assert_eq!(batch.process_target("abra"), Some(SubjectKind::Pokemon));
	assert_eq!(batch.process_target("poke_ball"), Some(SubjectKind::Item));
	assert_eq!(batch.process_target("missingno"), None);

	let out = dir.path().join("public/sprites");
	assert!(out.join("pokemon/abra/shiny_front_animated.gif").is_file());
	assert!(out.join("items/pokeball.png").is_file());
}

#[test_log::test]
fn test_smoke_run_on_fixture() {
	let dir = tempfile::tempdir().unwrap();
	let batch = fixture::batch(dir.path(), false);

	let results = batch.smoke_test();
	assert_eq!(results.len(), 5);
	assert!(results.iter().all(|(_, _, ok)| *ok), "{results:?}");
}

#[test]
fn test_config_file_redirects() {
	let dir = tempfile::tempdir().unwrap();
	fixture::rom(&dir.path().join("rom"));

	let mut file = tempfile::Builder::new().suffix(".toml").tempfile_in(dir.path()).unwrap();
	writeln!(file, "rom_path = {:?}", dir.path().join("rom").display().to_string()).unwrap();
	writeln!(file, "output_path = {:?}", dir.path().join("public").display().to_string()).unwrap();
	writeln!(file, "parallel = false").unwrap();
	writeln!(file, "[output_redirects]").unwrap();
	writeln!(file, "mr__mime = \"mime_jr\"").unwrap();
	writeln!(file, "[palette_redirects]").unwrap();
	writeln!(file, "vulpix_alolan = \"abra\"").unwrap();
	file.flush().unwrap();

	let config = BatchConfig::load(Some(file.path())).unwrap();
	assert!(!config.parallel);
	let batch = SpriteBatch::new(config).unwrap();

	batch.process_pokemon("mr__mime").unwrap();
	batch.process_pokemon("vulpix_alolan").unwrap();

	let out = dir.path().join("public/sprites/pokemon");
	assert!(out.join("mimejr/normal_front.png").is_file());
	assert!(!out.join("mrmime").exists());
	// abra's palettes include a shiny one
	assert!(out.join("vulpix_alolan/shiny_front.png").is_file());
}
