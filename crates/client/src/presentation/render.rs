//! Text rendering for the terminal frontend.
//!
//! Everything here returns plain `String`s so layouts can be asserted in
//! tests without a terminal.
use std::fmt::Write as _;

use game_core::{GameConfig, GameState, Grid, InventoryEntry, Position};

/// Icon drawn over the tile the player stands on.
pub const PLAYER_ICON: char = '&';

const BORDER_WIDTH: usize = 72;

pub const LEGEND: &str = "Legend:\n - You = &\n - Rocket ship = ^\n - Craters = O\n \
                          - Space rocks = #\n - Worm holes = @";

pub const TITLE_ART: &str = r#"                                               *     .--.
                                                    / /  `
                                   +               | |
                                          '         \ \__,
                                      *          +   '--'  *
                                          +   /\
                             +              .'  '.   *
                                    *      /======\      +
                                          ;:.  _   ;
                                          |:. (_)  |
                                          |:.  _   |
                                +         |:. (_)  |          *
                                          ;:.      ;
                                        .' \:.    / `.
                                       / .-'':._.'`-. \
                                       |/    /||\    \|
                                 jgs _..--"""````"""--.._
                               _.-'``                    ``'-._
                             -'                                '-"#;

pub const BLAST_OFF_ART: &str = r#"                                                   ,:
                                                 ,' |
                                                /   :
                                             --'   /
                                             \/ />/
                                             / <//_\
                                          __/   /
                                          )'-. /
                                          ./  :\
                                           /.' '
                                         '/'
                                         +
                                        '
                                      `.
                                  .-"-
                                 (    |
                              . .-'  '.
                             ( (.   )8:
                         .'    / (_  )
                          _. :(.   )8P  `
                      .  (  `-' (  `.   .
                       .  :  (   .a8a)
                      /_`( "a `a. )"'
                  (  (/  .  ' )=='
                 (   (    )  .8"   +
                   (`'8a.( _(   (
                ..-. `8P    ) `  )  +
              -'   (      -ab:  )
            '    _  `    (8P"Ya
          _(    (    )b  -`.  ) +
         ( 8)  ( _.aP" _a   \( \   *
       +  )/    (8P   (88    )  )
          (a:f   "     `"       `"#;

pub const STORY: &str = "MISSION:\nYour rocket ship ran out of fuel and crash landed on a \
mysterious asteroid floating through space. Your sensors have detected a source of plutonium \
ore, which can be used to power your ship, scattered throughout the asteroid's surface. You \
must scavenge the asteroid in search of plutonium ore for fuel, as well as find pieces of your \
rocket ship that broke off during the crash. Be careful, you never know what could be lurking \
in the shadows...";

pub fn border() -> String {
    "=".repeat(BORDER_WIDTH)
}

/// Objective paragraph built from the active launch requirement.
pub fn objective(config: &GameConfig) -> String {
    let required = config.launch_requirement;
    format!(
        "OBJECTIVE:\nYou must search the asteroid for {required} pieces of plutonium ore and \
         {required} pieces of your space ship before you can fix the ship and leave. Once all \
         material is collected, go to your rocket ship to fix it and blast off."
    )
}

/// Time-limit paragraph built from the active vitals.
pub fn time_limit(config: &GameConfig) -> String {
    format!(
        "TIME LIMIT:\nYou are low on oxygen. You can only take {} steps before you run out and \
         suffocated in the coldness of space. You also start with {} health points. You only \
         have {} health packs left that will recover {} health points each. If you run out of \
         health, you will die.",
        config.starting_oxygen / config.move_oxygen_cost.max(1),
        config.starting_health,
        GameConfig::STARTING_HEALTH_PACKS,
        config.health_pack_restore,
    )
}

/// Title screen followed by the mission briefing.
pub fn intro(config: &GameConfig) -> String {
    let padding = " ".repeat(10);
    format!(
        "\n\n{padding}Welcome to Space Escape\n\n{TITLE_ART}\n{border}\n\n{STORY}\n\n\
         {objective}\n\n{time_limit}\n{border}",
        border = border(),
        objective = objective(config),
        time_limit = time_limit(config),
    )
}

/// Bordered grid of tile icons with the player drawn on top.
pub fn map(world: &Grid, player: Position) -> String {
    let mut out = " _".repeat(world.dimensions().cols as usize);
    out.push('\n');

    for row in world.rows() {
        for tile in row {
            out.push('|');
            out.push(if tile.position() == player {
                PLAYER_ICON
            } else {
                tile.icon()
            });
        }
        out.push_str("|\n");
    }
    out
}

/// Title, vitals, map and legend shown before every turn.
pub fn status_panel(state: &GameState) -> String {
    let mut out = border();
    let _ = write!(
        out,
        "\n\nSpace Escape\n\nHealth: {}\tOxygen: {}\n\nMap: \n{}\n{LEGEND}\n{}",
        state.player.health,
        state.player.oxygen,
        map(&state.world, state.player.position),
        border(),
    );
    out
}

/// Numbered choices under a prompt, numbered from 1.
pub fn menu(prompt: &str, choices: &[&str]) -> String {
    let mut out = format!("{prompt}\n");
    for (index, choice) in choices.iter().enumerate() {
        let _ = writeln!(out, "{}: {choice}", index + 1);
    }
    out
}

pub fn inventory(entries: &[InventoryEntry<'_>]) -> String {
    let mut out = format!("{}\n\nYour Inventory: \n\n", border());
    for entry in entries {
        let _ = writeln!(out, "{}: {}", entry.index, entry.name);
    }
    let _ = write!(out, "0: Exit\n{}", border());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GridDimensions, Tile, TileClass};

    fn field(rows: u32, cols: u32) -> Grid {
        let mut builder = Grid::builder(GridDimensions::new(rows, cols)).unwrap();
        for position in GridDimensions::new(rows, cols).positions() {
            let (class, icon) = if position == Position::new(1, 0) {
                (TileClass::Crater, 'O')
            } else {
                (TileClass::Ground, ' ')
            };
            builder
                .set_tile(Tile::from_class(position, class, "tile", icon))
                .unwrap();
        }
        builder.link_all().unwrap()
    }

    #[test]
    fn map_draws_borders_icons_and_player() {
        let rendered = map(&field(2, 3), Position::new(2, 1));
        assert_eq!(rendered, " _ _ _\n| |O| |\n| | |&|\n");
    }

    #[test]
    fn player_hides_the_tile_icon_beneath() {
        let rendered = map(&field(1, 2), Position::new(1, 0));
        assert_eq!(rendered, " _ _\n| |&|\n");
    }

    #[test]
    fn briefing_follows_the_configured_rules() {
        let config = GameConfig {
            starting_oxygen: 40,
            launch_requirement: 3,
            ..GameConfig::default()
        };

        assert!(objective(&config).contains("for 3 pieces of plutonium ore and 3 pieces"));
        assert!(time_limit(&config).contains("only take 40 steps"));
        assert!(time_limit(&config).contains("4 health packs"));
    }

    #[test]
    fn inventory_lists_slots_then_exit() {
        let entries = [
            InventoryEntry {
                index: 1,
                name: "Health pack",
                kind: game_core::ItemKind::HealthPack,
            },
            InventoryEntry {
                index: 2,
                name: "Ship part",
                kind: game_core::ItemKind::ShipPart,
            },
        ];

        let rendered = inventory(&entries);

        assert!(rendered.contains("1: Health pack\n2: Ship part\n0: Exit\n"));
    }

    #[test]
    fn menu_numbers_from_one() {
        assert_eq!(menu("Pick", &["A", "B"]), "Pick\n1: A\n2: B\n");
    }
}
