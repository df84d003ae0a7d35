//! Sprite name normalization.
//!
//! Source folders use names such as `pikachu_chuchu` or `mr__mime` while the
//! published sprite tree uses the reduced form shared with the rest of the
//! data extraction (`mrmime`), keeping recognised form suffixes readable
//! (`vulpix_alolan`).

use std::collections::HashMap;

/// Suffix removed entirely when building a folder name
pub const PLAIN_SUFFIX: &str = "_plain";

/// Form suffixes preserved verbatim when building a folder name
pub const FORM_SUFFIXES: &[&str] = &[
	"_alolan",
	"_galarian",
	"_hisuian",
	"_paldean",
	"_paldean_fire",
	"_paldean_water",
	"_paldean_combat",
	"_paldean_blaze",
	"_paldean_aqua",
	"_mega",
	"_mega_x",
	"_mega_y",
	"_gmax",
	"_primal",
	"_origin",
	"_sky",
	"_therian",
	"_black",
	"_white",
	"_attack",
	"_defense",
	"_speed",
	"_plant",
	"_sandy",
	"_trash",
	"_heat",
	"_wash",
	"_frost",
	"_fan",
	"_mow",
	"_zen",
	"_pirouette",
	"_blade",
	"_shield",
	"_10",
	"_50",
	"_complete",
	"_school",
	"_meteor",
	"_dusk",
	"_midnight",
	"_dawn",
	"_dusk_mane",
	"_dawn_wings",
	"_ultra",
	"_crowned",
	"_eternamax",
	"_ice",
	"_shadow",
	"_single_strike",
	"_rapid_strike",
	"_bloodmoon",
	"_hero",
	"_wellspring",
	"_hearthflame",
	"_cornerstone",
	"_terastal",
	"_stellar",
	"_red",
	"_yellow",
	"_green",
	"_blue",
	"_orange",
	"_purple",
	"_pink",
	"_chuchu",
	"_pika",
	"_two_segment",
	"_three_segment",
	"_johto",
];

/// Source folders published under another folder's name
pub const OUTPUT_REDIRECTS: &[(&str, &str)] = &[
	("dudunsparce_two_segment", "dudunsparce"),
	("dudunsparce_three_segment", "dudunsparce"),
	("arbok_johto", "arbok"),
	("unown", "unown_z"),
	("pikachu_chuchu", "pikachu_yellow"),
	("pikachu_pika", "pikachu_red"),
];

/// Markers stripped from overworld sprite names to find the species folder
pub const MINI_FORM_MARKERS: &[&str] = &[
	"_alolan",
	"_galarian",
	"_hisuian",
	"_paldean",
	"_armored",
	"_bloodmoon",
	"_two_segment",
	"_three_segment",
	"_fire",
	"_water",
];

/// Reduces a name to the lowercase, separator-free form.
///
/// # Examples
///
/// ```
/// use gbspr_types::names::reduce_name;
///
/// assert_eq!(reduce_name("Mr. Mime"), "mrmime");
/// assert_eq!(reduce_name("farfetch_d'"), "farfetchd");
/// assert_eq!(reduce_name("<RIVAL>"), "rival");
/// ```
pub fn reduce_name(name: &str) -> String {
	name.to_lowercase()
		.chars()
		.filter(|c| !matches!(c, ' ' | '<' | '>' | '_' | '-' | '\'' | '.'))
		.collect()
}

/// Naming rules for the published sprite tree.
///
/// Built once from defaults or configuration, then shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRules {
	/// Form suffixes, longest first
	form_suffixes: Vec<String>,
	output_redirects: HashMap<String, String>,
	palette_redirects: HashMap<String, String>,
}

impl NameRules {
	/// Creates naming rules.
	///
	/// Suffixes are lowercased, deduplicated and ordered longest first so the
	/// most specific form wins.
	pub fn new<S, O, P>(form_suffixes: S, output_redirects: O, palette_redirects: P) -> Self
	where
		S: IntoIterator,
		S::Item: AsRef<str>,
		O: IntoIterator<Item = (String, String)>,
		P: IntoIterator<Item = (String, String)>,
	{
		let mut form_suffixes: Vec<String> =
			form_suffixes.into_iter().map(|s| s.as_ref().to_lowercase()).collect();
		form_suffixes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
		form_suffixes.dedup();

		Self {
			form_suffixes,
			output_redirects: output_redirects.into_iter().collect(),
			palette_redirects: palette_redirects.into_iter().collect(),
		}
	}

	/// Returns the form suffixes, longest first.
	pub fn form_suffixes(&self) -> &[String] {
		&self.form_suffixes
	}

	/// Adds or replaces output redirects.
	pub fn with_output_redirects(mut self, redirects: impl IntoIterator<Item = (String, String)>) -> Self {
		self.output_redirects.extend(redirects);
		self
	}

	/// Adds or replaces palette directory redirects.
	pub fn with_palette_redirects(mut self, redirects: impl IntoIterator<Item = (String, String)>) -> Self {
		self.palette_redirects.extend(redirects);
		self
	}

	/// Normalizes a folder name, keeping a recognised form suffix.
	///
	/// `_plain` is dropped; `<base><suffix>` becomes `reduce(base) + suffix`;
	/// anything else is reduced whole.
	pub fn reduce_folder_name(&self, name: &str) -> String {
		let lower = name.to_lowercase();
		if let Some(base) = lower.strip_suffix(PLAIN_SUFFIX) {
			return reduce_name(base);
		}

		self.form_suffixes
			.iter()
			.find_map(|suffix| {
				lower.strip_suffix(suffix.as_str()).map(|base| format!("{}{suffix}", reduce_name(base)))
			})
			.unwrap_or_else(|| reduce_name(&lower))
	}

	/// Output folder of a pokemon source folder.
	///
	/// # Examples
	///
	/// ```
	/// use gbspr_types::names::NameRules;
	///
	/// let rules = NameRules::default();
	/// assert_eq!(rules.output_name("pikachu_chuchu"), "pikachu_yellow");
	/// assert_eq!(rules.output_name("mr__mime_galarian"), "mrmime_galarian");
	/// assert_eq!(rules.output_name("nidoran_f"), "nidoranf");
	/// ```
	pub fn output_name(&self, folder: &str) -> String {
		let mapped = self.output_redirects.get(folder).map_or(folder, String::as_str);
		self.reduce_folder_name(mapped)
	}

	/// Folder holding the palettes of a pokemon, after redirects.
	pub fn palette_dir<'a>(&'a self, folder: &'a str) -> &'a str {
		self.palette_redirects.get(folder).map_or(folder, String::as_str)
	}
}

impl Default for NameRules {
	fn default() -> Self {
		Self::new(
			FORM_SUFFIXES,
			OUTPUT_REDIRECTS.iter().map(|&(from, to)| (from.to_owned(), to.to_owned())),
			[],
		)
	}
}

/// Species folder for an overworld sprite name.
///
/// Strips the first [`MINI_FORM_MARKERS`] entry found anywhere in the name.
pub fn mini_species(mini_name: &str) -> String {
	let lower = mini_name.to_lowercase();
	MINI_FORM_MARKERS
		.iter()
		.find(|marker| lower.contains(*marker))
		.map_or_else(|| lower.clone(), |marker| lower.replace(marker, ""))
}
