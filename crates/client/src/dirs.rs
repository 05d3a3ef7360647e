//! Platform-specific directory utilities
//!
//! Provides consistent directory paths across different operating systems,
//! following platform conventions for cache and data directories.

use std::path::PathBuf;

const APPLICATION: &str = "quest";

/// Get the platform-specific log directory
///
/// - macOS: `~/Library/Caches/quest/logs`
/// - Linux: `~/.cache/quest/logs` (or `$XDG_CACHE_HOME/quest/logs`)
/// - Windows: `%LOCALAPPDATA%\quest\cache\logs`
/// - Fallback: `<temp>/quest/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join(APPLICATION))
        .join("logs")
}

/// Get the platform-specific save directory
///
/// - macOS: `~/Library/Application Support/quest/save_games`
/// - Linux: `~/.local/share/quest/save_games` (or `$XDG_DATA_HOME/quest/save_games`)
/// - Windows: `%APPDATA%\quest\data\save_games`
/// - Fallback: `./data/save_games`
pub fn save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.data_dir().join("save_games"))
        .unwrap_or_else(|| PathBuf::from("data").join("save_games"))
}
