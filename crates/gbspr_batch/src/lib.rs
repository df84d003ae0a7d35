//! Batch sprite processing for the `gbspr-rs` project.
//!
//! Walks a disassembly tree, renders every sprite category into a web-ready
//! tree and indexes the result in `sprite_manifest.json`:
//!
//! | Kind    | Source                              | Output                                         |
//! |---------|-------------------------------------|------------------------------------------------|
//! | pokemon | `gfx/pokemon/<folder>/front.png`    | `sprites/pokemon/<name>/<variant>_front{.png,_animated.gif}` |
//! | trainer | `gfx/trainers/<name>.png`           | `sprites/trainers/<name>/<name>[_<variant>].png` |
//! | item    | `gfx/items/<name>.png`              | `sprites/items/<name>.png`                     |
//! | mini    | `gfx/minis/<name>.png` + `_mask.png`| `sprites/minis/<name>{.png,_animated.gif}`     |
//! | icon    | `gfx/icons/<name>.png`              | `sprites/icons/<name>{.png,_animated.gif}`     |
//!
//! # Examples
//!
//! ```no_run
//! use gbspr_batch::{BatchConfig, SpriteBatch, SubjectKind};
//!
//! # fn main() -> Result<(), gbspr_batch::BatchError> {
//! let batch = SpriteBatch::new(BatchConfig::load(None)?)?;
//! let summary = batch.process_kind(SubjectKind::Item)?;
//! println!("{summary}");
//! batch.write_manifest()?;
//! # Ok(())
//! # }
//! ```

mod error;
mod layout;
mod settings;

pub mod discovery;
pub mod manifest;
pub mod processor;

pub use error::BatchError;
pub use layout::{OutputLayout, RomLayout, SubjectKind};
pub use manifest::SpriteManifest;
pub use processor::{BatchSummary, SMOKE_SUBJECTS, SpriteBatch};
pub use settings::{BatchConfig, ENV_PREFIX, ItemPaletteMode};
