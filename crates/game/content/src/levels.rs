//! Level layouts and their resolution into a [`LevelSpec`].

use std::collections::HashMap;

use game_core::{
    EncounterPlacement, GameConfig, GridDimensions, ItemKind, LevelSpec, Position, TileClass,
    TilePlacement, TreasurePlacement,
};

/// Failure to turn level data into a world-build spec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("catalog has no entry for {0} tiles")]
    MissingTile(TileClass),

    #[error("catalog has no entry for {0} items")]
    MissingItem(ItemKind),

    #[error("unknown encounter '{name}' at ({x}, {y})")]
    UnknownEncounter { name: String, x: i32, y: i32 },

    #[error("tile override at ({x}, {y}) lies outside the {rows}x{cols} grid")]
    TileOutOfBounds { x: i32, y: i32, rows: u32, cols: u32 },
}

fn ground() -> TileClass {
    TileClass::Ground
}

fn starting_health_packs() -> Vec<ItemKind> {
    vec![ItemKind::HealthPack; GameConfig::STARTING_HEALTH_PACKS]
}

/// Level layout as stored in RON files.
///
/// Every cell not listed in `tiles` gets `default_tile`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelData {
    pub name: String,
    /// `(rows, cols)`
    pub dimensions: (u32, u32),
    /// `(x, y)`
    pub start: (i32, i32),
    #[cfg_attr(feature = "serde", serde(default = "ground"))]
    pub default_tile: TileClass,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tiles: Vec<(i32, i32, TileClass)>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub encounters: Vec<(i32, i32, String)>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub treasures: Vec<(i32, i32, ItemKind)>,
    #[cfg_attr(feature = "serde", serde(default = "starting_health_packs"))]
    pub starting_items: Vec<ItemKind>,
}

impl LevelData {
    /// The stock 10x10 asteroid.
    pub fn asteroid() -> Self {
        use ItemKind::{OreResource, ShipPart};
        use TileClass::{Crater, Launchpad, SpaceRock, Wormhole};

        let craters = [
            (1, 0),
            (0, 1),
            (1, 1),
            (7, 1),
            (0, 2),
            (8, 2),
            (3, 4),
            (0, 7),
            (1, 8),
            (1, 9),
        ];
        let rocks = [
            (3, 0),
            (4, 0),
            (4, 1),
            (1, 4),
            (8, 4),
            (9, 4),
            (9, 5),
            (3, 7),
            (4, 8),
            (6, 8),
        ];

        let mut tiles: Vec<(i32, i32, TileClass)> = Vec::new();
        tiles.extend(craters.iter().map(|&(x, y)| (x, y, Crater)));
        tiles.extend(rocks.iter().map(|&(x, y)| (x, y, SpaceRock)));
        tiles.extend([(5, 2), (2, 6), (7, 8)].map(|(x, y)| (x, y, Wormhole)));
        tiles.push((5, 5, Launchpad));

        let encounters = [
            (1, 0, "PCMustard"),
            (3, 0, "Khaleesi"),
            (0, 1, "Vapebro"),
            (4, 1, "PCMustard"),
            (0, 2, "Khaleesi"),
            (8, 2, "Vapebro"),
            (1, 4, "PCMustard"),
            (8, 4, "Khaleesi"),
            (4, 8, "Vapebro"),
            (1, 9, "Khaleesi"),
        ]
        .map(|(x, y, name)| (x, y, name.to_owned()))
        .to_vec();

        let treasures = vec![
            (4, 0, OreResource),
            (1, 1, ShipPart),
            (7, 1, ShipPart),
            (3, 4, OreResource),
            (9, 4, ShipPart),
            (9, 5, OreResource),
            (0, 7, OreResource),
            (3, 7, OreResource),
            (1, 8, ShipPart),
            (6, 8, ShipPart),
        ];

        Self {
            name: "asteroid".to_owned(),
            dimensions: (10, 10),
            start: (6, 5),
            default_tile: ground(),
            tiles,
            encounters,
            treasures,
            starting_items: starting_health_packs(),
        }
    }

    pub fn grid_dimensions(&self) -> GridDimensions {
        GridDimensions::new(self.dimensions.0, self.dimensions.1)
    }

    /// Resolves names and kinds against `catalog` into a world-build spec.
    ///
    /// Tiles are emitted in row-major order; a later override of the same
    /// cell replaces an earlier one.
    pub fn resolve(self, catalog: &crate::Catalog) -> Result<LevelSpec, ResolveError> {
        let dimensions = self.grid_dimensions();

        let mut overrides = HashMap::new();
        for (x, y, class) in self.tiles {
            let position = Position::new(x, y);
            if !dimensions.contains(position) {
                return Err(ResolveError::TileOutOfBounds {
                    x,
                    y,
                    rows: dimensions.rows,
                    cols: dimensions.cols,
                });
            }
            overrides.insert(position, class);
        }

        let mut spec = LevelSpec::new(dimensions, Position::new(self.start.0, self.start.1));

        for position in dimensions.positions() {
            let class = overrides
                .get(&position)
                .copied()
                .unwrap_or(self.default_tile);
            let entry = catalog
                .tile(class)
                .ok_or(ResolveError::MissingTile(class))?;
            spec.tiles.push(TilePlacement::new(
                position,
                class,
                entry.description.clone(),
                entry.icon,
            ));
        }

        for (x, y, name) in self.encounters {
            let encounter = catalog
                .encounter(&name)
                .ok_or_else(|| ResolveError::UnknownEncounter {
                    name: name.clone(),
                    x,
                    y,
                })?;
            spec.encounters
                .push(EncounterPlacement::new(Position::new(x, y), encounter));
        }

        for (x, y, kind) in self.treasures {
            let item = catalog.item(kind).ok_or(ResolveError::MissingItem(kind))?;
            spec.treasures
                .push(TreasurePlacement::new(Position::new(x, y), item));
        }

        for kind in self.starting_items {
            spec.starting_items
                .push(catalog.item(kind).ok_or(ResolveError::MissingItem(kind))?);
        }

        Ok(spec)
    }
}
