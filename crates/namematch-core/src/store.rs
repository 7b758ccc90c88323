//! In-memory roster.

use std::path::Path;

use crate::error::{QuizError, Result};
use crate::model::{new_person_id, Person};

/// The roster of registered people, in registration order.
#[derive(Debug, Clone, Default)]
pub struct PersonStore {
    people: Vec<Person>,
}

impl PersonStore {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Give every person loaded without an id a fresh one. Returns how many
    /// were assigned; the caller persists the roster when this is non-zero.
    pub fn assign_missing_ids(&mut self) -> usize {
        let mut assigned = 0;
        for person in self.people.iter_mut().filter(|p| p.id.is_empty()) {
            person.id = new_person_id();
            assigned += 1;
        }
        assigned
    }

    /// Register a new person. Names must be unique ignoring case.
    pub fn add(&mut self, person: Person) -> Result<&Person> {
        if self.people.iter().any(|p| p.has_name(&person.name)) {
            return Err(QuizError::DuplicateName(person.name));
        }
        self.people.push(person);
        Ok(&self.people[self.people.len() - 1])
    }

    /// Remove everyone whose name matches ignoring case. Returns how many
    /// entries were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.people.len();
        self.people.retain(|p| !p.has_name(name));
        before - self.people.len()
    }

    /// Count one exposure for `id`. Returns `false` if the id is unknown.
    pub fn mark_shown(&mut self, id: &str) -> bool {
        match self.people.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.times_shown += 1;
                true
            }
            None => false,
        }
    }

    /// Count one correct answer for `id`, keeping `times_correct` at or
    /// below `times_shown`. Returns `false` if nothing was counted.
    pub fn mark_correct(&mut self, id: &str) -> bool {
        match self.people.iter_mut().find(|p| p.id == id) {
            Some(p) if p.times_correct < p.times_shown => {
                p.times_correct += 1;
                true
            }
            Some(p) => {
                tracing::warn!(
                    "ignoring correct answer for {} without a matching exposure",
                    p.name
                );
                false
            }
            None => false,
        }
    }
}

/// Check an image reference before registration.
///
/// The reference must be non-blank; with `require_file` it must also name an
/// existing path.
pub fn validate_image(image: &str, require_file: bool) -> Result<()> {
    if image.trim().is_empty() || (require_file && !Path::new(image).exists()) {
        return Err(QuizError::InvalidImage(image.to_string()));
    }
    Ok(())
}
