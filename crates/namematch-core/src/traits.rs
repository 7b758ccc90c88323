//! Persistence trait the engine loads from and flushes to.
//!
//! Implemented by [`crate::storage::JsonFileRepository`] for real use and
//! [`crate::storage::MemoryRepository`] for tests.

use crate::error::Result;
use crate::model::{Person, Stats};

/// Storage collaborator for the roster and the aggregate statistics.
///
/// Loads never fail: an unreadable or malformed record is logged and replaced
/// by an empty roster or zeroed [`Stats`]. Saves rewrite the whole record.
pub trait QuizRepository: Send {
    /// Read the full roster in stored order.
    fn load_roster(&self) -> Vec<Person>;

    /// Replace the stored roster.
    fn save_roster(&self, people: &[Person]) -> Result<()>;

    /// Read the aggregate statistics.
    fn load_stats(&self) -> Stats;

    /// Replace the stored statistics.
    fn save_stats(&self, stats: &Stats) -> Result<()>;
}
