//! Central quiz engine.
//!
//! Owns the roster, the aggregate statistics, and the repository they are
//! persisted through. Construct one per process and hand it (or a
//! [`crate::shared::SharedEngine`]) to the front-end handlers. Every
//! mutating operation is flushed to the repository before it returns.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::QuizConfig;
use crate::error::{QuizError, Result};
use crate::evaluator::{self, Evaluation, Feedback};
use crate::model::{Person, Round, Stats};
use crate::selector;
use crate::statistics::{self, GameOutcome, StatsAggregator, Summary};
use crate::store::{self, PersonStore};
use crate::traits::QuizRepository;

/// The quiz engine service object.
pub struct QuizEngine<R: QuizRepository> {
    repo: R,
    store: PersonStore,
    stats: StatsAggregator,
    config: QuizConfig,
    rng: StdRng,
}

impl<R: QuizRepository> QuizEngine<R> {
    /// Load the roster and statistics from `repo`.
    pub fn open(repo: R, config: QuizConfig) -> Self {
        Self::with_rng(repo, config, StdRng::from_entropy())
    }

    /// Like [`QuizEngine::open`] with a fixed seed, for reproducible games.
    pub fn with_seed(repo: R, config: QuizConfig, seed: u64) -> Self {
        Self::with_rng(repo, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(repo: R, config: QuizConfig, rng: StdRng) -> Self {
        let mut store = PersonStore::new(repo.load_roster());
        let assigned = store.assign_missing_ids();
        if assigned > 0 {
            // Ids handed to clients must survive a restart.
            match repo.save_roster(store.people()) {
                Ok(()) => tracing::info!("assigned ids to {assigned} legacy records"),
                Err(e) => tracing::warn!("could not persist assigned ids: {e}"),
            }
        }
        let stats = StatsAggregator::new(repo.load_stats());
        tracing::debug!("loaded {} people", store.len());
        Self {
            repo,
            store,
            stats,
            config,
            rng,
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// All registered people in registration order.
    pub fn list_people(&self) -> &[Person] {
        self.store.people()
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.store.get(id)
    }

    pub fn stats(&self) -> &Stats {
        self.stats.stats()
    }

    /// Register a new person and persist the roster.
    pub fn add_person(&mut self, name: &str, image: &str) -> Result<Person> {
        store::validate_image(image, self.config.verify_images)?;
        let person = self.store.add(Person::new(name, image))?.clone();
        self.repo.save_roster(self.store.people())?;
        tracing::info!("added {} to the roster", person.name);
        Ok(person)
    }

    /// Remove everyone named `name` (ignoring case). Returns `false` when
    /// nobody matched; the roster is only rewritten when something changed.
    pub fn remove_person(&mut self, name: &str) -> Result<bool> {
        let removed = self.store.remove(name);
        if removed == 0 {
            return Ok(false);
        }
        self.repo.save_roster(self.store.people())?;
        tracing::info!("removed {name} from the roster");
        Ok(true)
    }

    /// Random people for the start screen.
    pub fn sample_people(&mut self, count: usize) -> Vec<Person> {
        selector::sample_people(self.store.people(), count, &mut self.rng)
    }

    /// Fail with [`QuizError::InsufficientData`] unless the roster can fill
    /// a full round.
    pub fn ensure_playable(&self) -> Result<()> {
        let required = self.config.num_options;
        if self.store.len() < required {
            return Err(QuizError::InsufficientData {
                required,
                available: self.store.len(),
            });
        }
        Ok(())
    }

    /// Build one random round with the configured number of options.
    /// Exposure counters are left alone.
    pub fn select_round(&mut self) -> Result<Round> {
        selector::select_round(self.store.people(), self.config.num_options, &mut self.rng)
    }

    /// Start a batch game: pick up to `num_rounds` least-shown targets,
    /// count one exposure for each, and persist the roster.
    pub fn start_batch(&mut self, num_rounds: u32) -> Result<Vec<Round>> {
        self.ensure_playable()?;
        let rounds = selector::select_batch(self.store.people(), num_rounds, &mut self.rng)?;
        for round in &rounds {
            self.store.mark_shown(&round.target.id);
        }
        self.repo.save_roster(self.store.people())?;
        tracing::debug!("dispatched {} rounds", rounds.len());
        Ok(rounds)
    }

    /// Score an answer to a batch round. `selected_id` is `None` when the
    /// player's input did not name an option. A correct answer is credited
    /// to the target and persisted.
    pub fn answer_batch_round(
        &mut self,
        round: &Round,
        selected_id: Option<&str>,
    ) -> Result<Evaluation> {
        let evaluation = match selected_id {
            Some(id) => evaluator::evaluate(round, &round.target.id, id),
            None => Evaluation {
                is_correct: false,
                offered: false,
            },
        };
        if evaluation.is_correct && self.store.mark_correct(&round.target.id) {
            self.repo.save_roster(self.store.people())?;
        }
        Ok(evaluation)
    }

    /// Resolve names for answer feedback, tolerating unknown ids.
    pub fn feedback(&self, target_id: &str, selected_id: &str) -> Feedback {
        Feedback::resolve(self.store.people(), target_id, selected_id)
    }

    /// Fold a completed game into the statistics and persist them.
    pub fn record_game(&mut self, score: u32, total_rounds: u32) -> Result<GameOutcome> {
        let outcome = self.stats.record_game(score, total_rounds)?;
        self.repo.save_stats(self.stats.stats())?;
        tracing::info!(
            "recorded game {score}/{total_rounds} ({:.1}%)",
            outcome.accuracy
        );
        Ok(outcome)
    }

    pub fn summarize(&self) -> Summary {
        statistics::summarize(self.stats.stats(), self.store.people())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryRepository;

    fn test_config() -> QuizConfig {
        QuizConfig {
            verify_images: false,
            ..QuizConfig::default()
        }
    }

    fn engine_with(names: &[&str]) -> QuizEngine<MemoryRepository> {
        let people = names
            .iter()
            .map(|n| Person::new(*n, format!("{n}.jpg")))
            .collect();
        QuizEngine::with_seed(MemoryRepository::with_roster(people), test_config(), 42)
    }

    #[test]
    fn add_persists_and_rejects_duplicates() {
        let mut engine = engine_with(&[]);
        engine.add_person("Ada", "ada.jpg").unwrap();
        assert_eq!(engine.repository().roster_saves(), 1);
        assert_eq!(engine.repository().load_roster().len(), 1);

        let err = engine.add_person("ada", "ada2.jpg").unwrap_err();
        assert!(matches!(err, QuizError::DuplicateName(_)));
        assert_eq!(engine.repository().roster_saves(), 1);
    }

    #[test]
    fn add_checks_image_on_disk_when_configured() {
        let config = QuizConfig::default();
        let mut engine = QuizEngine::with_seed(MemoryRepository::new(), config, 1);
        let err = engine.add_person("Ada", "/no/such/ada.jpg").unwrap_err();
        assert!(matches!(err, QuizError::InvalidImage(_)));
        assert!(engine.list_people().is_empty());
    }

    #[test]
    fn remove_only_saves_on_change() {
        let mut engine = engine_with(&["Ada", "Grace"]);
        assert!(!engine.remove_person("Alan").unwrap());
        assert_eq!(engine.repository().roster_saves(), 0);
        assert!(engine.remove_person("GRACE").unwrap());
        assert_eq!(engine.repository().roster_saves(), 1);
        assert_eq!(engine.list_people().len(), 1);
    }

    #[test]
    fn batch_marks_each_target_shown_once() {
        let mut engine = engine_with(&["A", "B", "C", "D", "E", "F"]);
        let rounds = engine.start_batch(3).unwrap();
        assert_eq!(rounds.len(), 3);

        let shown: u32 = engine.list_people().iter().map(|p| p.times_shown).sum();
        assert_eq!(shown, 3);
        for round in &rounds {
            assert_eq!(engine.person(&round.target.id).unwrap().times_shown, 1);
        }

        // The next game prefers the people not yet shown.
        let next = engine.start_batch(3).unwrap();
        for round in &next {
            assert_eq!(engine.person(&round.target.id).unwrap().times_shown, 1);
        }
        assert!(engine.list_people().iter().all(|p| p.times_shown == 1));
    }

    #[test]
    fn batch_requires_full_round() {
        let mut engine = engine_with(&["A", "B", "C"]);
        let err = engine.start_batch(5).unwrap_err();
        assert!(matches!(
            err,
            QuizError::InsufficientData {
                required: 4,
                available: 3
            }
        ));
        assert_eq!(engine.repository().roster_saves(), 0);
    }

    #[test]
    fn correct_batch_answer_is_credited() {
        let mut engine = engine_with(&["A", "B", "C", "D"]);
        let rounds = engine.start_batch(2).unwrap();

        let first = &rounds[0];
        let eval = engine
            .answer_batch_round(first, Some(first.target.id.as_str()))
            .unwrap();
        assert!(eval.is_correct);

        let second = &rounds[1];
        let wrong = second
            .options
            .iter()
            .find(|p| p.id != second.target.id)
            .unwrap();
        assert!(!engine.answer_batch_round(second, Some(wrong.id.as_str())).unwrap().is_correct);
        assert!(!engine.answer_batch_round(second, None).unwrap().is_correct);

        let a = engine.person(&first.target.id).unwrap();
        assert_eq!((a.times_shown, a.times_correct), (1, 1));
        let b = engine.person(&second.target.id).unwrap();
        assert_eq!((b.times_shown, b.times_correct), (1, 0));
    }

    #[test]
    fn record_game_persists_immediately() {
        let mut engine = engine_with(&[]);
        engine.record_game(3, 5).unwrap();
        engine.record_game(5, 5).unwrap();
        assert_eq!(engine.repository().stats_saves(), 2);

        let stored = engine.repository().load_stats();
        assert_eq!(stored.games_played, 2);
        assert_eq!(stored.correct_answers, 8);
        assert_eq!(stored.total_questions, 10);
        assert_eq!(stored.best_accuracy, 100.0);
    }

    #[test]
    fn rejected_game_is_not_persisted() {
        let mut engine = engine_with(&[]);
        assert!(engine.record_game(0, 0).is_err());
        assert_eq!(engine.repository().stats_saves(), 0);
    }

    #[test]
    fn legacy_ids_are_persisted_on_open() {
        let mut legacy = Person::new("Alan", "alan.jpg");
        legacy.id.clear();
        let engine = QuizEngine::with_seed(
            MemoryRepository::with_roster(vec![legacy]),
            test_config(),
            5,
        );
        let id = engine.list_people()[0].id.clone();
        assert!(!id.is_empty());
        assert_eq!(engine.repository().roster_saves(), 1);
        assert_eq!(engine.repository().load_roster()[0].id, id);
    }

    #[test]
    fn clean_roster_is_not_rewritten_on_open() {
        let engine = engine_with(&["Ada", "Grace"]);
        assert_eq!(engine.repository().roster_saves(), 0);
    }

    #[test]
    fn feedback_resolves_names() {
        let engine = engine_with(&["Ada", "Grace"]);
        let ada = engine.list_people()[0].id.clone();
        let fb = engine.feedback(&ada, "bogus");
        assert_eq!(fb.correct_name, "Ada");
        assert_eq!(fb.selected_name, "Unknown");
    }
}
