//! Core data model types for namematch.
//!
//! These are the records the engine reads, mutates, and hands to the
//! persistence layer: people on the roster, the rounds built from them,
//! and the aggregate game statistics.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered person the player is quizzed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Stable unique identifier. Empty on legacy records until
    /// [`crate::store::PersonStore::assign_missing_ids`] fills it in.
    #[serde(default)]
    pub id: String,
    /// Display name. Unique on the roster, ignoring case.
    pub name: String,
    /// Opaque reference to the person's photo.
    #[serde(rename = "image_path")]
    pub image: String,
    /// Date the person was registered.
    #[serde(default = "today")]
    pub added_date: NaiveDate,
    /// How many times this person has been the target of a round.
    #[serde(default)]
    pub times_shown: u32,
    /// How many of those rounds were answered correctly.
    #[serde(default)]
    pub times_correct: u32,
}

impl Person {
    /// Create a freshly registered person with zeroed counters.
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: new_person_id(),
            name: name.into(),
            image: image.into(),
            added_date: today(),
            times_shown: 0,
            times_correct: 0,
        }
    }

    /// Case-insensitive name comparison used for uniqueness and removal.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Recognition accuracy in percent, or `None` if never shown.
    pub fn accuracy(&self) -> Option<f64> {
        if self.times_shown == 0 {
            None
        } else {
            Some(self.times_correct as f64 / self.times_shown as f64 * 100.0)
        }
    }
}

pub(crate) fn new_person_id() -> String {
    Uuid::new_v4().to_string()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// One question: a target person plus the shuffled candidate options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    /// The person whose photo is shown.
    pub target: Person,
    /// Candidates in display order. Contains the target exactly once.
    pub options: Vec<Person>,
}

impl Round {
    /// Whether `id` is one of the offered options.
    pub fn offers(&self, id: &str) -> bool {
        self.options.iter().any(|p| p.id == id)
    }

    /// Zero-based position of the target among the options.
    pub fn target_position(&self) -> Option<usize> {
        self.options.iter().position(|p| p.id == self.target.id)
    }
}

/// Aggregate statistics across all completed games.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub correct_answers: u64,
    #[serde(default)]
    pub total_questions: u64,
    /// Best single-game accuracy in percent (0–100).
    #[serde(default)]
    pub best_accuracy: f64,
}

impl Stats {
    /// Lifetime accuracy in percent, or `None` before the first question.
    pub fn overall_accuracy(&self) -> Option<f64> {
        if self.total_questions == 0 {
            None
        } else {
            Some(self.correct_answers as f64 / self.total_questions as f64 * 100.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_match_ignores_case() {
        let p = Person::new("Ada Lovelace", "ada.jpg");
        assert!(p.has_name("ada lovelace"));
        assert!(p.has_name("ADA LOVELACE"));
        assert!(!p.has_name("Ada"));
    }

    #[test]
    fn accuracy_undefined_until_shown() {
        let mut p = Person::new("Grace", "grace.png");
        assert_eq!(p.accuracy(), None);
        p.times_shown = 4;
        p.times_correct = 3;
        assert_eq!(p.accuracy(), Some(75.0));
    }

    #[test]
    fn person_decodes_legacy_record_without_id() {
        let json = r#"{
            "name": "Alan",
            "image_path": "alan.jpg",
            "added_date": "2024-03-01",
            "times_shown": 2,
            "times_correct": 1
        }"#;
        let p: Person = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "Alan");
        assert_eq!(p.image, "alan.jpg");
        assert!(p.id.is_empty());
        assert_eq!(p.added_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn stats_missing_best_accuracy_defaults_to_zero() {
        let json = r#"{"games_played": 3, "correct_answers": 7, "total_questions": 15}"#;
        let stats: Stats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.best_accuracy, 0.0);
    }

    #[test]
    fn overall_accuracy() {
        let stats = Stats {
            games_played: 2,
            correct_answers: 8,
            total_questions: 10,
            best_accuracy: 100.0,
        };
        assert_eq!(stats.overall_accuracy(), Some(80.0));
        assert_eq!(Stats::default().overall_accuracy(), None);
    }
}
