//! Space Escape binary.
//!
//! ```bash
//! # Built-in asteroid with a fixed seed
//! SPACE_ESCAPE_SEED=7 cargo run -p space-escape
//!
//! # Custom level, catalog and rules
//! SPACE_ESCAPE_DATA_DIR=./data cargo run -p space-escape
//! ```

use anyhow::{Context, Result};
use game_content::ContentFactory;
use game_core::GameStatus;
use runtime::{ProviderError, Runtime};
use space_escape::{ClientConfig, TerminalFrontend, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let session_id = config.session_id_or_timestamp();
    logging::setup_logging(config.log_dir.as_deref(), &session_id)?;

    let factory = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::builtin(),
    };
    let content = factory
        .load()
        .context("failed to load game content")?;
    let seed = config.seed_or_clock();
    tracing::info!(level = %content.name, seed, session = %session_id, "starting Space Escape");

    let mut runtime = Runtime::builder()
        .content(content)
        .seed(seed)
        .build()
        .context("failed to build the asteroid")?;

    let mut frontend = TerminalFrontend::stdio();
    match frontend.welcome(runtime.config()) {
        Ok(true) => {}
        Ok(false) | Err(ProviderError::InputClosed) => {
            frontend.farewell(GameStatus::Playing)?;
            tracing::info!("player left from the title screen");
            return Ok(());
        }
        Err(error) => return Err(error.into()),
    }

    let status = match runtime.run(&mut frontend) {
        Ok(status) => status,
        Err(error) if error.is_input_closed() => {
            tracing::info!(turns = runtime.state().turn.turns, "input closed, leaving session");
            runtime.status()
        }
        Err(error) => return Err(error).context("session aborted"),
    };

    frontend.farewell(status)?;
    tracing::info!(%status, "client shutdown complete");
    Ok(())
}
