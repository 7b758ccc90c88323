//! Quiz configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::selector::DEFAULT_NUM_OPTIONS;
use crate::storage::{DEFAULT_DATA_FILE, DEFAULT_STATS_FILE};

/// Top-level namematch configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Roster file.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Statistics file.
    #[serde(default = "default_stats_file")]
    pub stats_file: PathBuf,
    /// Options per round in the web flow, and the minimum roster size for
    /// any game. Batch play always offers up to four options.
    #[serde(default = "default_num_options")]
    pub num_options: usize,
    /// Rounds per game.
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    /// People shown on the start screen.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// Require image references to exist on disk when adding people.
    #[serde(default = "default_true")]
    pub verify_images: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}
fn default_stats_file() -> PathBuf {
    PathBuf::from(DEFAULT_STATS_FILE)
}
fn default_num_options() -> usize {
    DEFAULT_NUM_OPTIONS
}
fn default_rounds() -> u32 {
    5
}
fn default_sample_size() -> usize {
    5
}
fn default_true() -> bool {
    true
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            stats_file: default_stats_file(),
            num_options: default_num_options(),
            rounds: default_rounds(),
            sample_size: default_sample_size(),
            verify_images: true,
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `namematch.toml` in the current directory
/// 2. `~/.config/namematch/config.toml`
pub fn load_config() -> Result<QuizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("namematch.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    anyhow::ensure!(config.num_options >= 1, "num_options must be at least 1");
    anyhow::ensure!(config.rounds >= 1, "rounds must be at least 1");

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("namematch"))
}
