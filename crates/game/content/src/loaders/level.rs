//! Level layout loader.

use std::path::Path;

use crate::levels::LevelData;
use crate::loaders::{LoadResult, read_file};

/// Loader for level layouts from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level layout from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing LevelData
    pub fn load(path: &Path) -> LoadResult<LevelData> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<LevelData> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))
    }
}
