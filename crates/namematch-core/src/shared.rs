//! Process-wide engine handle for multi-session front-ends.
//!
//! Sessions stay isolated because each player's [`GameSession`] lives with
//! the caller. The roster and statistics are shared, so every operation runs
//! under one writer lock.

use std::sync::{Arc, Mutex};

use crate::engine::QuizEngine;
use crate::error::{QuizError, Result};
use crate::session::{self, AnswerResult, GameSession, RoundStep};
use crate::statistics::{GameOutcome, Summary};
use crate::traits::QuizRepository;

/// Cloneable, thread-safe handle to a single [`QuizEngine`].
pub struct SharedEngine<R: QuizRepository> {
    inner: Arc<Mutex<QuizEngine<R>>>,
}

impl<R: QuizRepository> Clone for SharedEngine<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: QuizRepository> SharedEngine<R> {
    pub fn new(engine: QuizEngine<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<T>(&self, f: impl FnOnce(&mut QuizEngine<R>) -> Result<T>) -> Result<T> {
        let mut engine = self.inner.lock().map_err(|_| QuizError::LockPoisoned)?;
        f(&mut *engine)
    }

    pub fn start_game(&self, total_rounds: u32) -> Result<GameSession> {
        self.with(|engine| session::start_game(engine, total_rounds))
    }

    pub fn next_round(&self, game: &mut GameSession) -> Result<RoundStep> {
        self.with(|engine| session::next_round(engine, game))
    }

    pub fn check_answer(
        &self,
        game: &mut GameSession,
        target_id: &str,
        selected_id: &str,
    ) -> Result<AnswerResult> {
        self.with(|engine| {
            Ok(session::check_answer(
                engine,
                game,
                target_id,
                selected_id,
            ))
        })
    }

    pub fn record_game(&self, score: u32, total_rounds: u32) -> Result<GameOutcome> {
        self.with(|engine| engine.record_game(score, total_rounds))
    }

    pub fn summarize(&self) -> Result<Summary> {
        self.with(|engine| Ok(engine.summarize()))
    }
}
