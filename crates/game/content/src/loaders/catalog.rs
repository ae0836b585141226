//! Description catalog loader.

use std::path::Path;

use crate::catalog::Catalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for description catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON {}: {}", path.display(), e))
    }
}
