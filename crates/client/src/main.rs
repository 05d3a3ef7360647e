//! Quest game client binary.
//!
//! Composition root: reads configuration from the environment, sets up
//! logging, loads content and the save repository, then hands stdin and
//! stdout to the menu frontend.
//!
//! ```bash
//! GAME_SEED=42 SAVE_DATA_DIR=./saves cargo run -p quest-client
//! ```

use std::io;

use anyhow::{Context, Result};
use game_content::ContentFactory;
use quest_client::{App, ClientConfig, Console, Content, logging};
use runtime::FileCharacterRepository;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(&config.session_id)?;

    tracing::info!("Starting quest client");
    tracing::info!("Save directory: {}", config.save_data_dir.display());
    tracing::info!("Data directory: {}", config.game_data_dir.display());
    tracing::info!("Seed: {}", config.seed);

    // 3. Load content
    let factory = ContentFactory::new(&config.game_data_dir);
    let content = Content::load(&factory).with_context(|| {
        format!(
            "Failed to load game data from {}",
            config.game_data_dir.display()
        )
    })?;

    // 4. Open the save repository
    let repository = FileCharacterRepository::new(&config.save_data_dir).with_context(|| {
        format!(
            "Failed to open save directory {}",
            config.save_data_dir.display()
        )
    })?;

    // 5. Run
    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    App::new(console, repository, content, config.seed).run()?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
