//! Quiz error types.
//!
//! Decode failures on persisted records never show up here: they are logged
//! and replaced by an empty default at load time.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the quiz engine.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The roster is too small for the requested number of options.
    #[error("You need at least {required} people in the database to play the game.")]
    InsufficientData { required: usize, available: usize },

    /// A game must have at least one round.
    #[error("invalid round count: {0}")]
    InvalidRoundCount(u32),

    /// A round must offer at least one option (the target itself).
    #[error("a round needs at least one option")]
    InvalidOptionCount,

    /// The reported score exceeds the number of rounds played.
    #[error("score {score} exceeds total rounds {total}")]
    InvalidScore { score: u32, total: u32 },

    /// A person with the same name (ignoring case) is already registered.
    #[error("{0} already exists in the database.")]
    DuplicateName(String),

    /// The image reference is empty or does not point to an existing file.
    #[error("Image file '{0}' not found.")]
    InvalidImage(String),

    /// Writing a persisted record failed.
    #[error("failed to write {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing a record failed.
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),

    /// A thread panicked while holding the shared engine lock.
    #[error("shared quiz engine lock poisoned")]
    LockPoisoned,
}

impl QuizError {
    /// Returns `true` for errors that should be shown to the player as a
    /// plain message rather than treated as a failure.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            QuizError::InsufficientData { .. }
                | QuizError::DuplicateName(_)
                | QuizError::InvalidImage(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
