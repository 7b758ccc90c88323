//! Stateless request/response game flow.
//!
//! A web front-end keeps a [`GameSession`] in its own session store and
//! passes it into these handlers on every request. The engine itself holds
//! no per-player state. Per-person counters are not touched by this flow.

use serde::{Deserialize, Serialize};

use crate::engine::QuizEngine;
use crate::error::{QuizError, Result};
use crate::evaluator::Feedback;
use crate::model::{Person, Round};
use crate::statistics::{game_accuracy, GameOutcome};
use crate::traits::QuizRepository;

/// Rounds per game when the front-end does not choose.
pub const DEFAULT_TOTAL_ROUNDS: u32 = 5;

/// Per-player progress through one game.
///
/// Invariant: `score <= current_round <= total_rounds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub current_round: u32,
    pub score: u32,
    pub total_rounds: u32,
    /// Last round an answer was accepted for. Each round scores at most once.
    #[serde(default)]
    pub answered_round: u32,
    /// Set once the finished game has been written into the statistics.
    #[serde(default)]
    pub recorded: bool,
}

impl GameSession {
    pub fn new(total_rounds: u32) -> Result<Self> {
        if total_rounds == 0 {
            return Err(QuizError::InvalidRoundCount(total_rounds));
        }
        Ok(Self {
            current_round: 0,
            score: 0,
            total_rounds,
            answered_round: 0,
            recorded: false,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.current_round >= self.total_rounds
    }

    /// Accuracy so far in percent; 0 for a session without rounds.
    pub fn accuracy(&self) -> f64 {
        game_accuracy(self.score.min(self.total_rounds), self.total_rounds).unwrap_or(0.0)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            current_round: 0,
            score: 0,
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            answered_round: 0,
            recorded: false,
        }
    }
}

/// What the start screen shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartScreen {
    pub people: Vec<Person>,
    pub games_played: u32,
    pub best_accuracy: f64,
}

/// A question ready to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub round: Round,
    /// 1-based round number.
    pub number: u32,
    pub total_rounds: u32,
    pub score: u32,
}

/// Result of asking for the next round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RoundStep {
    Question(Question),
    Finished(GameOutcome),
}

/// Response to a submitted answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResult {
    pub feedback: Feedback,
    pub current_round: u32,
    pub total_rounds: u32,
    pub score: u32,
}

/// Start screen: a few random faces plus headline stats.
pub fn start_screen<R: QuizRepository>(engine: &mut QuizEngine<R>) -> StartScreen {
    let count = engine.config().sample_size;
    let people = engine.sample_people(count);
    let stats = engine.stats();
    StartScreen {
        people,
        games_played: stats.games_played,
        best_accuracy: stats.best_accuracy,
    }
}

/// Begin a new game, refusing when the roster cannot fill a round.
pub fn start_game<R: QuizRepository>(
    engine: &QuizEngine<R>,
    total_rounds: u32,
) -> Result<GameSession> {
    engine.ensure_playable()?;
    GameSession::new(total_rounds)
}

/// Advance to the next round, or finish the game.
///
/// A finished game is recorded into the statistics exactly once, however
/// many times this is called afterwards.
pub fn next_round<R: QuizRepository>(
    engine: &mut QuizEngine<R>,
    session: &mut GameSession,
) -> Result<RoundStep> {
    if session.is_finished() {
        if session.recorded {
            return Ok(RoundStep::Finished(GameOutcome {
                score: session.score,
                total_rounds: session.total_rounds,
                accuracy: session.accuracy(),
                new_best: false,
            }));
        }
        let outcome = engine.record_game(session.score, session.total_rounds)?;
        session.recorded = true;
        return Ok(RoundStep::Finished(outcome));
    }

    let round = engine.select_round()?;
    session.current_round += 1;
    Ok(RoundStep::Question(Question {
        round,
        number: session.current_round,
        total_rounds: session.total_rounds,
        score: session.score,
    }))
}

/// Score a submitted answer. Unknown ids resolve to a placeholder name.
///
/// Only the first answer to the current round counts, and nothing is
/// scored once the game has been recorded.
pub fn check_answer<R: QuizRepository>(
    engine: &QuizEngine<R>,
    session: &mut GameSession,
    target_id: &str,
    selected_id: &str,
) -> AnswerResult {
    let feedback = engine.feedback(target_id, selected_id);
    if !session.recorded && session.answered_round < session.current_round {
        session.answered_round = session.current_round;
        if feedback.is_correct {
            session.score += 1;
        }
    }
    AnswerResult {
        feedback,
        current_round: session.current_round,
        total_rounds: session.total_rounds,
        score: session.score,
    }
}
