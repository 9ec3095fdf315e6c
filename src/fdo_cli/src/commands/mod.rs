pub mod catalog;
pub mod compile;
pub mod decompile;

use std::path::Path;

use anyhow::{Context, Result};
use fdo_catalog::Catalog;

/// The shared `--catalog` handling: an explicit table file, or the
/// embedded default.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_file(path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}
