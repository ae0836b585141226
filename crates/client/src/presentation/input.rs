//! Parsing of raw terminal lines into menu answers.
use game_core::{CardinalDirection, PlayerAction};

/// Main menu entries in display order.
pub const TURN_CHOICES: [&str; 6] = [
    "Go Up",
    "Go Right",
    "Go Down",
    "Go Left",
    "Check Space",
    "View Inventory",
];

/// Maps a 1-based main menu choice onto a player action.
pub fn turn_action(choice: u32) -> Option<PlayerAction> {
    let action = match choice {
        1 => PlayerAction::Move(CardinalDirection::Up),
        2 => PlayerAction::Move(CardinalDirection::Right),
        3 => PlayerAction::Move(CardinalDirection::Down),
        4 => PlayerAction::Move(CardinalDirection::Left),
        5 => PlayerAction::CheckTile,
        6 => PlayerAction::CheckInventory,
        _ => return None,
    };
    Some(action)
}

/// Parses an integer within `[min, max]`.
pub fn parse_in_range(line: &str, min: u32, max: u32) -> Option<u32> {
    line.trim()
        .parse::<u32>()
        .ok()
        .filter(|value| (min..=max).contains(value))
}

/// Parses a yes/no answer; also accepts the menu numbers 1 (yes) and 2 (no).
pub fn parse_confirmation(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "1" => Some(true),
        "n" | "no" | "2" => Some(false),
        _ => None,
    }
}
