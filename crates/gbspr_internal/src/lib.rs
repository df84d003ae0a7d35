//! This module is separated into its own crate so the root package stays a thin facade, and should not be used directly.

/// `use gbspr_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export member crates for convenience
pub use gbspr_batch;
pub use gbspr_render;
pub use gbspr_types;

// Re-export commonly used types at crate root
pub use gbspr_batch::{BatchConfig, BatchError, SpriteBatch, SubjectKind};
pub use gbspr_render::{PaletteMapper, RenderError};
pub use gbspr_types::{file::Palette, timing::TimingEncoder};
