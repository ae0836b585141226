//! Line-oriented terminal frontend.
use std::fmt::Display;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

use game_core::{
    Engagement, GameConfig, GameState, GameStatus, InventoryEntry, Item, Narration, PlayerAction,
    Tile, TilePrompt,
};
use runtime::{ActionProvider, ProviderError, ProviderResult};

use super::input::{TURN_CHOICES, parse_confirmation, parse_in_range, turn_action};
use super::render;

const FAREWELL: &str = "Thanks for playing!";

/// Plays the game over any line-based reader and writer pair.
pub struct TerminalFrontend<R, W> {
    input: R,
    output: W,
}

impl TerminalFrontend<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows the title screen and asks whether to start.
    pub fn welcome(&mut self, config: &GameConfig) -> ProviderResult<bool> {
        self.say(render::intro(config))?;
        let choice = self.choose_one("Do you want to play?", &["Start game", "Exit"])?;
        Ok(choice == 1)
    }

    /// Closing lines; a lost session gets its obituary first.
    pub fn farewell(&mut self, status: GameStatus) -> ProviderResult<()> {
        if matches!(status, GameStatus::LostHealth | GameStatus::LostOxygen) {
            self.say("You died.. x_x")?;
        }
        self.say(format_args!("\n\n{}{FAREWELL}\n", " ".repeat(10)))?;
        Ok(())
    }

    fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> ProviderResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ProviderError::InputClosed);
        }
        Ok(line)
    }

    /// Prompts until the answer is an integer within `[min, max]`.
    fn prompt_integer(&mut self, prompt: &str, min: u32, max: u32) -> ProviderResult<u32> {
        loop {
            write!(self.output, "{prompt} ")?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse_in_range(&line, min, max) {
                Some(value) => return Ok(value),
                None => self.say(format_args!("Please enter a number from {min} to {max}."))?,
            }
        }
    }

    /// Numbered menu; returns the 1-based choice.
    fn choose_one(&mut self, prompt: &str, choices: &[&str]) -> ProviderResult<u32> {
        self.say(render::menu(prompt, choices))?;
        self.prompt_integer("Enter your choice:", 1, choices.len() as u32)
    }

    fn confirm(&mut self, question: &str) -> ProviderResult<bool> {
        loop {
            write!(self.output, "{question} (y/n) ")?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse_confirmation(&line) {
                Some(answer) => return Ok(answer),
                None => self.say("Please answer yes or no.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> ActionProvider for TerminalFrontend<R, W> {
    fn next_action(&mut self, state: &GameState) -> ProviderResult<PlayerAction> {
        self.say(render::status_panel(state))?;
        loop {
            let choice = self.choose_one("What do you want to do?", &TURN_CHOICES)?;
            if let Some(action) = turn_action(choice) {
                return Ok(action);
            }
        }
    }

    fn engage(&mut self, _tile: &Tile, prompt: TilePrompt) -> ProviderResult<Engagement> {
        let engagement = match prompt {
            TilePrompt::None => Engagement::Look,
            TilePrompt::Confirm(question) => {
                if self.confirm(question)? {
                    Engagement::Enter
                } else {
                    Engagement::Look
                }
            }
            TilePrompt::LaunchMenu => {
                let choice = self.choose_one(
                    "This is your rocket ship. What do you want to do?",
                    &["Check out the rocket ship", "Fix the rocket ship"],
                )?;
                if choice == 2 {
                    Engagement::Launch
                } else {
                    Engagement::Look
                }
            }
        };
        Ok(engagement)
    }

    fn choose_item(&mut self, entries: &[InventoryEntry<'_>]) -> ProviderResult<Option<usize>> {
        self.say(render::inventory(entries))?;
        let choice = self.prompt_integer("What do you want to do?", 0, entries.len() as u32)?;
        Ok((choice != 0).then_some(choice as usize))
    }

    fn confirm_use(&mut self, item: &Item) -> ProviderResult<bool> {
        let question = format!("Do you want to use the {}?", item.name().to_lowercase());
        self.confirm(&question)
    }

    fn narrate(&mut self, narration: &Narration) -> ProviderResult<()> {
        self.say(narration)?;
        if narration.is_launch() {
            self.say(render::BLAST_OFF_ART)?;
        }
        Ok(())
    }

    fn status_changed(&mut self, status: GameStatus) -> ProviderResult<()> {
        match status {
            GameStatus::LostHealth => self.say("You have no health left...")?,
            GameStatus::LostOxygen => self.say("Your oxygen tank is empty...")?,
            GameStatus::WonByCompletion | GameStatus::Playing => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use game_core::{
        CardinalDirection, GridDimensions, ItemKind, LevelSpec, Position, TileClass, TilePlacement,
    };
    use runtime::Runtime;

    use super::*;

    type Frontend = TerminalFrontend<Cursor<Vec<u8>>, Vec<u8>>;

    fn frontend(input: &str) -> Frontend {
        TerminalFrontend::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(frontend: Frontend) -> String {
        String::from_utf8(frontend.into_output()).unwrap()
    }

    fn pad(position: Position) -> LevelSpec {
        let mut level = LevelSpec::new(GridDimensions::new(1, 2), position);
        level.tiles.push(TilePlacement::new(
            Position::ORIGIN,
            TileClass::Launchpad,
            "Your rocket ship.",
            '^',
        ));
        level.fill_remaining(TileClass::Ground, "Dust.", ' ');
        level
    }

    #[test]
    fn invalid_menu_answers_are_asked_again() {
        let mut frontend = frontend("9\nabc\n2\n");

        let choice = frontend.choose_one("Pick", &["A", "B"]).unwrap();

        assert_eq!(choice, 2);
        let text = output(frontend);
        assert_eq!(text.matches("Please enter a number from 1 to 2.").count(), 2);
    }

    #[test]
    fn end_of_input_closes_the_provider() {
        let mut frontend = frontend("");
        assert!(matches!(
            frontend.confirm("Ready?"),
            Err(ProviderError::InputClosed)
        ));
    }

    #[test]
    fn launch_menu_maps_to_engagements() {
        let runtime = Runtime::builder().level(pad(Position::ORIGIN)).build().unwrap();
        let tile = runtime.state().current_tile().unwrap();
        let mut frontend = frontend("1\n2\n");

        assert_eq!(frontend.engage(tile, TilePrompt::LaunchMenu).unwrap(), Engagement::Look);
        assert_eq!(frontend.engage(tile, TilePrompt::LaunchMenu).unwrap(), Engagement::Launch);
    }

    #[test]
    fn confirm_prompts_enter_only_on_yes() {
        let runtime = Runtime::builder().level(pad(Position::ORIGIN)).build().unwrap();
        let tile = runtime.state().current_tile().unwrap();
        let mut frontend = frontend("sure\nyes\nn\n");

        let question = TilePrompt::Confirm("Do you want to jump in the crater?");
        assert_eq!(frontend.engage(tile, question).unwrap(), Engagement::Enter);
        assert_eq!(frontend.engage(tile, question).unwrap(), Engagement::Look);
        assert!(output(frontend).contains("Please answer yes or no."));
    }

    #[test]
    fn zero_leaves_the_inventory() {
        let entries = [InventoryEntry {
            index: 1,
            name: "Health pack",
            kind: ItemKind::HealthPack,
        }];
        let mut frontend = frontend("2\n0\n1\n");

        assert_eq!(frontend.choose_item(&entries).unwrap(), None);
        assert_eq!(frontend.choose_item(&entries).unwrap(), Some(1));
    }

    #[test]
    fn turn_menu_reads_actions() {
        let runtime = Runtime::builder().level(pad(Position::ORIGIN)).build().unwrap();
        let mut frontend = frontend("7\n2\n");

        let action = frontend.next_action(runtime.state()).unwrap();

        assert_eq!(action, PlayerAction::Move(CardinalDirection::Right));
        let text = output(frontend);
        assert!(text.contains("Health: 100\tOxygen: 100"));
        assert!(text.contains("|&| |"));
    }

    #[test]
    fn terminal_session_walks_back_and_inspects_the_ship() {
        let mut runtime = Runtime::builder()
            .level(pad(Position::new(1, 0)))
            .build()
            .unwrap();
        // Left, check the ship, look at it, then input ends.
        let mut frontend = frontend("4\n5\n1\n");

        let error = runtime.run(&mut frontend).unwrap_err();

        assert!(error.is_input_closed());
        assert_eq!(runtime.state().player.position, Position::ORIGIN);
        assert!(output(frontend).contains("Your rocket ship."));
    }

    #[test]
    fn crater_is_described_before_the_jump_question() {
        let mut level = LevelSpec::new(GridDimensions::new(1, 1), Position::ORIGIN);
        level.tiles.push(TilePlacement::new(
            Position::ORIGIN,
            TileClass::Crater,
            "A deep, dusty crater.",
            'O',
        ));
        let mut runtime = Runtime::builder().level(level).build().unwrap();
        // Check the space, jump in, then input ends.
        let mut frontend = frontend("5\ny\n");

        let error = runtime.run(&mut frontend).unwrap_err();

        assert!(error.is_input_closed());
        let text = output(frontend);
        let described = text.find("A deep, dusty crater.").unwrap();
        let asked = text.find("Do you want to jump in the crater?").unwrap();
        let jumped = text.find("You jumped into the crater...").unwrap();
        assert!(described < asked);
        assert!(asked < jumped);
        assert_eq!(text.matches("A deep, dusty crater.").count(), 1);
    }

    #[test]
    fn launch_narration_shows_the_blast_off() {
        let mut frontend = frontend("");
        frontend.narrate(&Narration::Launched).unwrap();
        frontend.farewell(GameStatus::WonByCompletion).unwrap();

        let text = output(frontend);
        assert!(text.contains("BLASTOFF!"));
        assert!(text.contains(render::BLAST_OFF_ART));
        assert!(text.contains("Thanks for playing!"));
        assert!(!text.contains("You died"));
    }
}
