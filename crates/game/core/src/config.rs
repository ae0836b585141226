/// Game configuration constants and tunable parameters.
///
/// Runtime-tunable values can be overridden from a TOML file through the
/// content loaders; every field falls back to its default when omitted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Health points the player starts with.
    pub starting_health: i32,
    /// Oxygen units the player starts with (one unit per successful move).
    pub starting_oxygen: i32,
    /// Health lost when a hidden encounter attacks.
    pub encounter_damage: i32,
    /// Health restored by one health pack.
    pub health_pack_restore: i32,
    /// Oxygen spent per successful move.
    pub move_oxygen_cost: i32,
    /// Exact count of each launch resource required to repair the ship.
    pub launch_requirement: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    pub const INVENTORY_CAPACITY: usize = 15;
    pub const STARTING_HEALTH_PACKS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_HEALTH: i32 = 100;
    pub const DEFAULT_STARTING_OXYGEN: i32 = 100;
    pub const DEFAULT_ENCOUNTER_DAMAGE: i32 = 10;
    pub const DEFAULT_HEALTH_PACK_RESTORE: i32 = 10;
    pub const DEFAULT_MOVE_OXYGEN_COST: i32 = 1;
    pub const DEFAULT_LAUNCH_REQUIREMENT: u32 = 5;

    pub fn new() -> Self {
        Self {
            starting_health: Self::DEFAULT_STARTING_HEALTH,
            starting_oxygen: Self::DEFAULT_STARTING_OXYGEN,
            encounter_damage: Self::DEFAULT_ENCOUNTER_DAMAGE,
            health_pack_restore: Self::DEFAULT_HEALTH_PACK_RESTORE,
            move_oxygen_cost: Self::DEFAULT_MOVE_OXYGEN_COST,
            launch_requirement: Self::DEFAULT_LAUNCH_REQUIREMENT,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
