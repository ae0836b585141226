//! Content factory for building a playable level from a data directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use game_core::{GameConfig, LevelSpec};

use crate::catalog::Catalog;
use crate::levels::LevelData;
use crate::loaders::{CatalogLoader, ConfigLoader, LevelLoader, LoadResult};

/// Everything the runtime needs to build a session.
#[derive(Debug)]
pub struct Content {
    pub name: String,
    pub config: GameConfig,
    pub level: LevelSpec,
}

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── catalog.ron
/// └── level.ron
/// ```
///
/// Each missing file falls back to the built-in asteroid content.
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Factory that only serves built-in content.
    pub fn builtin() -> Self {
        Self { data_dir: None }
    }

    fn existing(&self, file: &str) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(file))
            .filter(|path| path.is_file())
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match self.existing("config.toml") {
            Some(path) => ConfigLoader::load(&path),
            None => Ok(GameConfig::default()),
        }
    }

    /// Load the description catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        match self.existing("catalog.ron") {
            Some(path) => CatalogLoader::load(&path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Load the level layout from `level.ron`.
    pub fn load_level(&self) -> LoadResult<LevelData> {
        match self.existing("level.ron") {
            Some(path) => LevelLoader::load(&path),
            None => Ok(LevelData::asteroid()),
        }
    }

    /// Loads and resolves all content.
    pub fn load(&self) -> LoadResult<Content> {
        let config = self.load_config()?;
        let catalog = self.load_catalog()?;
        let level = self.load_level()?;
        let name = level.name.clone();
        let level = level
            .resolve(&catalog)
            .with_context(|| format!("Failed to resolve level '{name}'"))?;

        Ok(Content {
            name,
            config,
            level,
        })
    }

    /// Returns the data directory path, if any.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Some(Path::new("/tmp/data")));
        assert_eq!(ContentFactory::builtin().data_dir(), None);
    }

    #[test]
    fn empty_directory_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let content = ContentFactory::new(dir.path()).load().unwrap();

        assert_eq!(content.name, "asteroid");
        assert_eq!(content.config, GameConfig::default());
        assert_eq!(content.level.tiles.len(), 100);
    }

    #[test]
    fn files_override_builtin_content() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "starting_oxygen = 12\n").unwrap();
        fs::write(
            dir.path().join("level.ron"),
            r#"(
                name: "crossing",
                dimensions: (3, 3),
                start: (1, 1),
                tiles: [(0, 0, SpaceRock), (2, 2, Launchpad)],
                encounters: [(0, 0, "Khaleesi"), (1, 0, "Vapebro")],
                treasures: [(0, 0, OreResource)],
                starting_items: [],
            )"#,
        )
        .unwrap();

        let content = ContentFactory::new(dir.path()).load().unwrap();

        assert_eq!(content.name, "crossing");
        assert_eq!(content.config.starting_oxygen, 12);
        assert_eq!(content.level.tiles.len(), 9);
        assert_eq!(content.level.encounters.len(), 2);
        assert!(content.level.starting_items.is_empty());
    }

    #[test]
    fn custom_catalog_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let mut catalog = Catalog::builtin();
        for entry in &mut catalog.tiles {
            entry.icon = '.';
        }
        let text = ron::ser::to_string_pretty(&catalog, ron::ser::PrettyConfig::default()).unwrap();
        fs::write(dir.path().join("catalog.ron"), text).unwrap();

        let content = ContentFactory::new(dir.path()).load().unwrap();

        assert!(content.level.tiles.iter().all(|tile| tile.icon == '.'));
    }

    #[test]
    fn unresolvable_level_names_the_level() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("level.ron"),
            r#"(
                name: "haunted",
                dimensions: (1, 1),
                start: (0, 0),
                encounters: [(0, 0, "Ghost")],
            )"#,
        )
        .unwrap();

        let error = ContentFactory::new(dir.path()).load().unwrap_err();
        assert!(format!("{error:#}").contains("haunted"));
    }
}
