//! Fixtures shared by unit tests.

use crate::config::GameConfig;
use crate::env::{LevelSpec, RngOracle};
use crate::state::{GameState, GridDimensions, Item, ItemKind, Position, TileClass};

/// RNG that returns the same value for every seed.
pub struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

pub fn item(kind: ItemKind) -> Item {
    let name = match kind {
        ItemKind::HealthPack => "Health pack",
        ItemKind::OreResource => "Plutonium ore",
        ItemKind::ShipPart => "Ship part",
    };
    Item::new(kind, name, format!("{name} description"))
}

/// All-ground world with an empty inventory.
pub fn open_field(rows: u32, cols: u32, start: Position) -> GameState {
    let mut level = LevelSpec::new(GridDimensions::new(rows, cols), start);
    level.fill_remaining(TileClass::Ground, "dust", '_');
    let (state, _) = GameState::initialize(level, &GameConfig::default(), 0)
        .expect("open field is a valid level");
    state
}
