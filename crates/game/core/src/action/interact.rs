//! Tile interaction: the behavior each tile variant exhibits when checked.
//!
//! Landmarks resolve at most one pending asset per entry: an encounter first,
//! otherwise a treasure, otherwise nothing. Wormholes teleport to a uniformly
//! drawn cell. The launchpad compares collected launch material against the
//! exact requirement.

use crate::action::ActionTransition;
use crate::config::GameConfig;
use crate::env::{Draw, GameEnv, draw_seed};
use crate::error::{ErrorSeverity, GameError};
use crate::narration::Narration;
use crate::state::{
    Engagement, GameState, GridDimensions, ItemKind, Landmark, PlayerState, Position, Tile,
    TileClass, TileKind,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractError {
    #[error("a {class} tile cannot be engaged with {engagement:?}")]
    UnsupportedEngagement {
        class: TileClass,
        engagement: Engagement,
    },

    #[error("player position {position} is not on the grid")]
    PositionDesync { position: Position },
}

impl GameError for InteractError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            InteractError::UnsupportedEngagement { .. } => ErrorSeverity::Validation,
            InteractError::PositionDesync { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            InteractError::UnsupportedEngagement { .. } => "INTERACT_UNSUPPORTED",
            InteractError::PositionDesync { .. } => "INTERACT_POSITION_DESYNC",
        }
    }
}

/// Outcome of checking a tile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interaction {
    pub narration: Vec<Narration>,
    /// Set when the interaction completes the session objective.
    pub completed: bool,
}

impl Interaction {
    fn narrate(narration: Vec<Narration>) -> Self {
        Self {
            narration,
            completed: false,
        }
    }
}

/// Everything a tile needs besides the player to resolve an interaction.
#[derive(Clone, Copy, Debug)]
pub struct InteractContext<'a> {
    pub env: GameEnv<'a>,
    pub dimensions: GridDimensions,
    pub session_seed: u64,
    pub nonce: u64,
}

impl InteractContext<'_> {
    fn draw(&self, draw: Draw, bound: u32) -> u32 {
        let seed = draw_seed(self.session_seed, self.nonce, draw);
        self.env.rng().below(seed, bound)
    }
}

impl Tile {
    /// Checks whether this tile accepts `engagement`.
    pub fn accepts(&self, engagement: Engagement) -> bool {
        match (self.kind(), engagement) {
            (_, Engagement::Look) => true,
            (TileKind::Landmark(_) | TileKind::Wormhole, Engagement::Enter) => true,
            (TileKind::Launchpad, Engagement::Launch) => true,
            _ => false,
        }
    }

    /// Resolves the player's engagement with this tile.
    ///
    /// Unsupported engagements degrade to looking at the tile; callers that
    /// need them rejected check [`Tile::accepts`] first.
    pub fn interact(
        &mut self,
        player: &mut PlayerState,
        engagement: Engagement,
        ctx: &InteractContext<'_>,
    ) -> Interaction {
        if engagement == Engagement::Look || !self.accepts(engagement) {
            return Interaction::narrate(vec![Narration::Description(
                self.description().to_owned(),
            )]);
        }

        match self.kind_mut() {
            TileKind::Landmark(landmark) => {
                let mut narration = vec![Narration::EnteredLandmark(landmark.kind())];
                narration.extend(resolve_landmark(landmark, player, ctx.env.config()));
                Interaction::narrate(narration)
            }
            TileKind::Wormhole => {
                let destination = Position::new(
                    ctx.draw(Draw::WormholeColumn, ctx.dimensions.cols) as i32,
                    ctx.draw(Draw::WormholeRow, ctx.dimensions.rows) as i32,
                );
                player.relocate(destination);
                Interaction::narrate(vec![Narration::Teleported { destination }])
            }
            TileKind::Launchpad => attempt_launch(player, ctx.env.config()),
            // Ground accepts nothing but Look.
            TileKind::Ground => Interaction::default(),
        }
    }
}

/// Resolves one pending asset on a landmark.
///
/// A treasure rejected by a full inventory goes back onto the landmark.
pub fn resolve_landmark(
    landmark: &mut Landmark,
    player: &mut PlayerState,
    config: &GameConfig,
) -> Vec<Narration> {
    if let Some(encounter) = landmark.take_encounter() {
        player.take_damage(config.encounter_damage);
        return vec![Narration::Attacked {
            encounter: encounter.description,
            damage: config.encounter_damage,
        }];
    }

    let Some(item) = landmark.take_treasure() else {
        return vec![Narration::NothingThere];
    };

    let found = Narration::Found {
        item: item.name().to_owned(),
    };
    match player.add_inventory(item) {
        Ok(()) => vec![found],
        Err(error) => {
            if let Some(item) = error.into_rejected_item() {
                landmark.hide_treasure(item);
            }
            vec![found, Narration::InventoryFull]
        }
    }
}

/// Compares launch material against the exact requirement.
fn attempt_launch(player: &PlayerState, config: &GameConfig) -> Interaction {
    let required = config.launch_requirement;
    let mut narration = Vec::new();

    for kind in [ItemKind::OreResource, ItemKind::ShipPart] {
        let held = player.inventory.count(kind) as u32;
        if held < required {
            narration.push(Narration::Shortfall {
                kind,
                missing: required - held,
            });
        } else if held > required {
            narration.push(Narration::Surplus {
                kind,
                extra: held - required,
            });
        }
    }

    if narration.is_empty() {
        Interaction {
            narration: vec![Narration::Launched],
            completed: true,
        }
    } else {
        Interaction::narrate(narration)
    }
}

/// Checks the tile under the player with the chosen engagement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractAction {
    pub engagement: Engagement,
}

impl InteractAction {
    pub fn new(engagement: Engagement) -> Self {
        Self { engagement }
    }
}

impl ActionTransition for InteractAction {
    type Error = InteractError;
    type Result = Interaction;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let position = state.player.position;
        let tile = state
            .world
            .get(position)
            .ok_or(InteractError::PositionDesync { position })?;

        if tile.accepts(self.engagement) {
            Ok(())
        } else {
            Err(InteractError::UnsupportedEngagement {
                class: tile.class(),
                engagement: self.engagement,
            })
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Interaction, Self::Error> {
        let ctx = InteractContext {
            env: *env,
            dimensions: state.world.dimensions(),
            session_seed: state.game_seed,
            nonce: state.turn.nonce,
        };

        let GameState { world, player, .. } = state;
        let position = player.position;
        let tile = world
            .get_mut(position)
            .ok_or(InteractError::PositionDesync { position })?;

        Ok(tile.interact(player, self.engagement, &ctx))
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let position = state.player.position;
        if state.world.contains(position) {
            Ok(())
        } else {
            Err(InteractError::PositionDesync { position })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::RngOracle;
    use crate::state::{Encounter, LandmarkKind};
    use crate::testing::{FixedRng, item, open_field};

    fn context<'a>(config: &'a GameConfig, rng: &'a dyn RngOracle) -> InteractContext<'a> {
        InteractContext {
            env: GameEnv::new(config, rng),
            dimensions: GridDimensions::new(10, 10),
            session_seed: 1,
            nonce: 0,
        }
    }

    fn crater() -> Tile {
        Tile::from_class(Position::new(1, 1), TileClass::Crater, "A bowl-shaped hole.", 'O')
    }

    fn player() -> PlayerState {
        PlayerState::new(Position::new(1, 1), &GameConfig::default())
    }

    #[test]
    fn encounter_strikes_once() {
        let config = GameConfig::default();
        let rng = FixedRng(0);
        let ctx = context(&config, &rng);
        let mut tile = crater();
        tile.landmark_mut()
            .unwrap()
            .hide_encounter(Encounter::new("PCMustard", "PCMustard, a species of alien"));
        let mut player = player();

        let first = tile.interact(&mut player, Engagement::Enter, &ctx);
        assert_eq!(player.health, 90);
        assert_eq!(
            first.narration,
            vec![
                Narration::EnteredLandmark(LandmarkKind::Crater),
                Narration::Attacked {
                    encounter: "PCMustard, a species of alien".into(),
                    damage: 10,
                },
            ]
        );
        assert!(!tile.landmark().unwrap().has_encounter());

        let second = tile.interact(&mut player, Engagement::Enter, &ctx);
        assert_eq!(player.health, 90);
        assert_eq!(second.narration.last(), Some(&Narration::NothingThere));
        assert!(!second.completed);
    }

    #[test]
    fn encounter_takes_precedence_over_treasure() {
        let config = GameConfig::default();
        let mut landmark = Landmark::new(LandmarkKind::SpaceRock);
        landmark.hide_encounter(Encounter::new("Vapebro", "Vapebro"));
        landmark.hide_treasure(item(ItemKind::ShipPart));
        let mut player = player();

        resolve_landmark(&mut landmark, &mut player, &config);
        assert!(landmark.has_treasure());
        assert!(player.inventory.is_empty());

        let narration = resolve_landmark(&mut landmark, &mut player, &config);
        assert_eq!(
            narration,
            vec![Narration::Found {
                item: "Ship part".into()
            }]
        );
        assert!(!landmark.has_treasure());
        assert_eq!(player.inventory.len(), 1);
        assert_eq!(player.inventory.find(1).unwrap().kind(), ItemKind::ShipPart);
    }

    #[test]
    fn full_inventory_leaves_treasure_on_landmark() {
        let config = GameConfig::default();
        let mut landmark = Landmark::new(LandmarkKind::Crater);
        landmark.hide_treasure(item(ItemKind::OreResource));
        let mut player = player();
        for _ in 0..GameConfig::INVENTORY_CAPACITY {
            player.add_inventory(item(ItemKind::HealthPack)).unwrap();
        }

        let narration = resolve_landmark(&mut landmark, &mut player, &config);

        assert_eq!(narration.last(), Some(&Narration::InventoryFull));
        assert!(landmark.has_treasure());
        assert_eq!(player.inventory.len(), GameConfig::INVENTORY_CAPACITY);
        assert_eq!(player.inventory.count(ItemKind::OreResource), 0);
    }

    #[test]
    fn declined_landmark_only_describes() {
        let config = GameConfig::default();
        let rng = FixedRng(0);
        let ctx = context(&config, &rng);
        let mut tile = crater();
        tile.landmark_mut()
            .unwrap()
            .hide_treasure(item(ItemKind::OreResource));
        let mut player = player();

        let look = tile.interact(&mut player, Engagement::Look, &ctx);

        assert_eq!(
            look.narration,
            vec![Narration::Description("A bowl-shaped hole.".into())]
        );
        assert!(tile.landmark().unwrap().has_treasure());
    }

    #[test]
    fn wormhole_draws_both_coordinates() {
        let config = GameConfig::default();
        let rng = FixedRng(23);
        let ctx = context(&config, &rng);
        let mut tile = Tile::from_class(Position::new(5, 2), TileClass::Wormhole, "rift", '@');
        let mut player = PlayerState::new(Position::new(5, 2), &config);

        let outcome = tile.interact(&mut player, Engagement::Enter, &ctx);

        // 23 % 10 for both axes.
        assert_eq!(player.position, Position::new(3, 3));
        assert_eq!(
            outcome.narration,
            vec![Narration::Teleported {
                destination: Position::new(3, 3)
            }]
        );
    }

    #[test]
    fn wormhole_may_land_in_place() {
        let config = GameConfig::default();
        let rng = FixedRng(2);
        let ctx = context(&config, &rng);
        let mut tile = Tile::from_class(Position::new(2, 2), TileClass::Wormhole, "rift", '@');
        let mut player = PlayerState::new(Position::new(2, 2), &config);

        tile.interact(&mut player, Engagement::Enter, &ctx);

        assert_eq!(player.position, Position::new(2, 2));
    }

    fn launchpad_with(ore: usize, parts: usize) -> (Tile, PlayerState) {
        let config = GameConfig::default();
        let tile = Tile::from_class(Position::new(5, 5), TileClass::Launchpad, "ship", '^');
        let mut player = PlayerState::new(Position::new(5, 5), &config);
        for _ in 0..ore {
            player.add_inventory(item(ItemKind::OreResource)).unwrap();
        }
        for _ in 0..parts {
            player.add_inventory(item(ItemKind::ShipPart)).unwrap();
        }
        (tile, player)
    }

    #[test]
    fn launch_requires_exact_counts() {
        let config = GameConfig::default();
        let rng = FixedRng(0);
        let ctx = context(&config, &rng);

        let (mut tile, mut player) = launchpad_with(5, 5);
        let outcome = tile.interact(&mut player, Engagement::Launch, &ctx);
        assert!(outcome.completed);
        assert_eq!(outcome.narration, vec![Narration::Launched]);

        let (mut tile, mut player) = launchpad_with(4, 5);
        let outcome = tile.interact(&mut player, Engagement::Launch, &ctx);
        assert!(!outcome.completed);
        assert_eq!(
            outcome.narration,
            vec![Narration::Shortfall {
                kind: ItemKind::OreResource,
                missing: 1
            }]
        );

        let (mut tile, mut player) = launchpad_with(6, 5);
        let outcome = tile.interact(&mut player, Engagement::Launch, &ctx);
        assert!(!outcome.completed);
        assert_eq!(
            outcome.narration,
            vec![Narration::Surplus {
                kind: ItemKind::OreResource,
                extra: 1
            }]
        );
    }

    #[test]
    fn launchpad_view_is_not_terminal() {
        let config = GameConfig::default();
        let rng = FixedRng(0);
        let ctx = context(&config, &rng);
        let (mut tile, mut player) = launchpad_with(5, 5);

        let outcome = tile.interact(&mut player, Engagement::Look, &ctx);

        assert!(!outcome.completed);
        assert_eq!(outcome.narration, vec![Narration::Description("ship".into())]);
    }

    #[test]
    fn ground_rejects_enter_during_validation() {
        let state = open_field(2, 2, Position::ORIGIN);
        let config = GameConfig::default();
        let rng = FixedRng(0);
        let env = GameEnv::new(&config, &rng);

        let error = InteractAction::new(Engagement::Enter)
            .pre_validate(&state, &env)
            .unwrap_err();

        assert_eq!(
            error,
            InteractError::UnsupportedEngagement {
                class: TileClass::Ground,
                engagement: Engagement::Enter,
            }
        );
    }
}
