//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::dirs;

/// Configuration required to start a play session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `{name}_save.txt` records.
    pub save_data_dir: PathBuf,
    /// Directory holding `quests.txt`, `items.txt` and `config.toml`.
    pub game_data_dir: PathBuf,
    /// Base seed for battle chance rolls.
    pub seed: u64,
    pub session_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            save_data_dir: dirs::save_dir(),
            game_data_dir: PathBuf::from("data"),
            seed: clock_seed(),
            session_id: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SAVE_DATA_DIR` - Directory for save files (default: platform-specific)
    /// - `GAME_DATA_DIR` - Directory for definition files (default: `data`)
    /// - `GAME_SEED` - Seed for battle rolls (default: derived from the clock)
    /// - `GAME_SESSION_ID` - Session identifier for log files (default: auto-generated)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("SAVE_DATA_DIR") {
            config.save_data_dir = dir;
        }

        if let Some(dir) = read_env::<PathBuf>("GAME_DATA_DIR") {
            config.game_data_dir = dir;
        }

        if let Some(seed) = read_env::<u64>("GAME_SEED") {
            config.seed = seed;
        }

        config.session_id = env::var("GAME_SESSION_ID").ok();

        config
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
