//! Game-level and person-level statistics.
//!
//! [`StatsAggregator`] owns the aggregate [`Stats`] and folds completed games
//! into them. [`summarize`] joins those aggregates with the per-person
//! recognition rates from the roster.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};
use crate::model::{Person, Stats};

/// Result of folding one completed game into the statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub score: u32,
    pub total_rounds: u32,
    /// This game's accuracy in percent.
    pub accuracy: f64,
    /// Whether this game set a new best accuracy.
    pub new_best: bool,
}

impl GameOutcome {
    /// Short encouragement line for the end-of-game screen.
    pub fn verdict(&self) -> &'static str {
        let score = self.score as f64;
        let total = self.total_rounds as f64;
        if self.score == self.total_rounds {
            "Perfect score! Amazing memory!"
        } else if score >= total * 0.8 {
            "Great job! You're getting good at this!"
        } else if score >= total * 0.6 {
            "Not bad! Keep practicing!"
        } else {
            "Keep practicing! You'll get better with time."
        }
    }
}

/// Accuracy of a single game in percent.
pub fn game_accuracy(score: u32, total_rounds: u32) -> Result<f64> {
    if total_rounds == 0 {
        return Err(QuizError::InvalidRoundCount(total_rounds));
    }
    if score > total_rounds {
        return Err(QuizError::InvalidScore {
            score,
            total: total_rounds,
        });
    }
    Ok(score as f64 / total_rounds as f64 * 100.0)
}

/// Accumulates completed games into [`Stats`].
#[derive(Debug, Clone, Default)]
pub struct StatsAggregator {
    stats: Stats,
}

impl StatsAggregator {
    pub fn new(stats: Stats) -> Self {
        Self { stats }
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Fold one completed game into the running totals.
    ///
    /// Rejects `total_rounds == 0` and `score > total_rounds` without
    /// touching the totals.
    pub fn record_game(&mut self, score: u32, total_rounds: u32) -> Result<GameOutcome> {
        let accuracy = game_accuracy(score, total_rounds)?;

        self.stats.games_played += 1;
        self.stats.correct_answers += u64::from(score);
        self.stats.total_questions += u64::from(total_rounds);

        let new_best = accuracy > self.stats.best_accuracy;
        if new_best {
            self.stats.best_accuracy = accuracy;
        }

        Ok(GameOutcome {
            score,
            total_rounds,
            accuracy,
            new_best,
        })
    }
}

/// One person's line in the statistics summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonAccuracy {
    pub name: String,
    pub times_shown: u32,
    pub times_correct: u32,
    /// `None` when the person has never been shown.
    pub accuracy: Option<f64>,
}

/// Aggregate and per-person statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub games_played: u32,
    pub correct_answers: u64,
    pub total_questions: u64,
    pub best_accuracy: f64,
    pub overall_accuracy: Option<f64>,
    /// Sorted by descending accuracy; never-shown people last.
    pub people: Vec<PersonAccuracy>,
}

/// Build a [`Summary`] from the aggregate stats and the roster.
pub fn summarize(stats: &Stats, roster: &[Person]) -> Summary {
    let mut people: Vec<PersonAccuracy> = roster
        .iter()
        .map(|p| PersonAccuracy {
            name: p.name.clone(),
            times_shown: p.times_shown,
            times_correct: p.times_correct,
            accuracy: p.accuracy(),
        })
        .collect();

    // Stable sort: equal accuracies keep roster order.
    people.sort_by(|a, b| match (a.accuracy, b.accuracy) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    Summary {
        games_played: stats.games_played,
        correct_answers: stats.correct_answers,
        total_questions: stats.total_questions,
        best_accuracy: stats.best_accuracy,
        overall_accuracy: stats.overall_accuracy(),
        people,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn games_accumulate() {
        let mut agg = StatsAggregator::default();
        agg.record_game(3, 5).unwrap();
        agg.record_game(5, 5).unwrap();

        let stats = agg.stats();
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.correct_answers, 8);
        assert_eq!(stats.total_questions, 10);
        assert!((stats.best_accuracy - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_score_keeps_previous_best() {
        let mut agg = StatsAggregator::default();
        agg.record_game(4, 5).unwrap();
        let outcome = agg.record_game(0, 5).unwrap();

        assert_eq!(outcome.accuracy, 0.0);
        assert!(!outcome.new_best);
        assert!((agg.stats().best_accuracy - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn best_accuracy_never_decreases() {
        let mut agg = StatsAggregator::default();
        let mut previous = 0.0;
        for (score, total) in [(1, 4), (3, 4), (0, 2), (2, 3), (1, 1), (0, 7)] {
            agg.record_game(score, total).unwrap();
            assert!(agg.stats().best_accuracy >= previous);
            previous = agg.stats().best_accuracy;
        }
        assert_eq!(previous, 100.0);
    }

    #[test]
    fn invalid_games_leave_stats_untouched() {
        let mut agg = StatsAggregator::default();
        assert!(matches!(
            agg.record_game(0, 0),
            Err(QuizError::InvalidRoundCount(0))
        ));
        assert!(matches!(
            agg.record_game(6, 5),
            Err(QuizError::InvalidScore { score: 6, total: 5 })
        ));
        assert_eq!(agg.stats(), &Stats::default());
    }

    #[test]
    fn verdict_thresholds() {
        let outcome = |score, total_rounds| GameOutcome {
            score,
            total_rounds,
            accuracy: 0.0,
            new_best: false,
        };
        assert_eq!(outcome(5, 5).verdict(), "Perfect score! Amazing memory!");
        assert_eq!(
            outcome(4, 5).verdict(),
            "Great job! You're getting good at this!"
        );
        assert_eq!(outcome(3, 5).verdict(), "Not bad! Keep practicing!");
        assert_eq!(
            outcome(2, 5).verdict(),
            "Keep practicing! You'll get better with time."
        );
    }

    #[test]
    fn summary_orders_by_accuracy_with_unshown_last() {
        let mut a = Person::new("A", "a.jpg");
        let b = Person::new("B", "b.jpg");
        let mut c = Person::new("C", "c.jpg");
        let mut d = Person::new("D", "d.jpg");
        a.times_shown = 4;
        a.times_correct = 1;
        c.times_shown = 2;
        c.times_correct = 2;
        d.times_shown = 4;
        d.times_correct = 1;

        let stats = Stats {
            games_played: 1,
            correct_answers: 4,
            total_questions: 10,
            best_accuracy: 40.0,
        };
        let summary = summarize(&stats, &[a, b, c, d]);

        let names: Vec<&str> = summary.people.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "D", "B"]);
        assert_eq!(summary.people[0].accuracy, Some(100.0));
        assert_eq!(summary.people[3].accuracy, None);
        assert_eq!(summary.overall_accuracy, Some(40.0));
    }
}
