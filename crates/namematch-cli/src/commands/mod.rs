//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::Result;

use namematch_core::config::load_config_from;
use namematch_core::storage::JsonFileRepository;
use namematch_core::QuizEngine;

pub mod add;
pub mod init;
pub mod list;
pub mod play;
pub mod remove;
pub mod stats;

/// Global flags that decide where the engine loads its data from.
pub struct EngineArgs {
    pub config: Option<PathBuf>,
    pub data_file: Option<PathBuf>,
    pub stats_file: Option<PathBuf>,
}

/// Load the config, apply path overrides, and open the engine on the JSON
/// files it names.
pub fn open_engine(args: &EngineArgs) -> Result<QuizEngine<JsonFileRepository>> {
    let mut config = load_config_from(args.config.as_deref())?;
    if let Some(path) = &args.data_file {
        config.data_file = path.clone();
    }
    if let Some(path) = &args.stats_file {
        config.stats_file = path.clone();
    }

    tracing::debug!(
        "roster: {}, stats: {}",
        config.data_file.display(),
        config.stats_file.display()
    );
    let repo = JsonFileRepository::new(config.data_file.clone(), config.stats_file.clone());
    Ok(QuizEngine::open(repo, config))
}
