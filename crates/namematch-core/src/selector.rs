//! Round selection.
//!
//! A round is one target drawn uniformly from the roster plus distinct
//! distractors drawn without replacement from everyone else, shuffled so the
//! target's position is uniform. Batch mode picks targets by lowest exposure
//! instead of at random.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{QuizError, Result};
use crate::model::{Person, Round};

/// Options per round when the caller does not specify.
pub const DEFAULT_NUM_OPTIONS: usize = 4;

/// Build a single round with `num_options` distinct options.
pub fn select_round<R: Rng + ?Sized>(
    roster: &[Person],
    num_options: usize,
    rng: &mut R,
) -> Result<Round> {
    if num_options == 0 {
        return Err(QuizError::InvalidOptionCount);
    }
    if roster.len() < num_options {
        return Err(QuizError::InsufficientData {
            required: num_options,
            available: roster.len(),
        });
    }

    let target = roster
        .choose(rng)
        .ok_or(QuizError::InsufficientData {
            required: num_options,
            available: 0,
        })?;
    Ok(build_round(roster, target, num_options, rng))
}

/// Build up to `num_rounds` rounds, one per target, favouring the people
/// shown least often.
///
/// Targets are the first `min(num_rounds, roster.len())` entries of the
/// roster ordered by ascending `times_shown` (stable, so ties keep roster
/// order). Each round offers `min(DEFAULT_NUM_OPTIONS, roster.len())` options.
/// Exposure counters are not touched here.
pub fn select_batch<R: Rng + ?Sized>(
    roster: &[Person],
    num_rounds: u32,
    rng: &mut R,
) -> Result<Vec<Round>> {
    if num_rounds == 0 {
        return Err(QuizError::InvalidRoundCount(num_rounds));
    }
    if roster.is_empty() {
        return Err(QuizError::InsufficientData {
            required: 1,
            available: 0,
        });
    }

    let num_options = DEFAULT_NUM_OPTIONS.min(roster.len());
    let mut by_exposure: Vec<&Person> = roster.iter().collect();
    by_exposure.sort_by_key(|p| p.times_shown);

    let rounds = by_exposure
        .into_iter()
        .take(num_rounds as usize)
        .map(|target| build_round(roster, target, num_options, rng))
        .collect();
    Ok(rounds)
}

/// Return `count` distinct random people, or the whole roster if it is not
/// larger than `count`.
pub fn sample_people<R: Rng + ?Sized>(roster: &[Person], count: usize, rng: &mut R) -> Vec<Person> {
    if roster.len() <= count {
        return roster.to_vec();
    }
    roster.choose_multiple(rng, count).cloned().collect()
}

/// Assemble a round around `target`. The caller guarantees that the roster
/// holds at least `num_options` people including the target.
fn build_round<R: Rng + ?Sized>(
    roster: &[Person],
    target: &Person,
    num_options: usize,
    rng: &mut R,
) -> Round {
    let others: Vec<&Person> = roster.iter().filter(|p| p.id != target.id).collect();

    let mut options: Vec<Person> = Vec::with_capacity(num_options);
    options.push(target.clone());
    options.extend(
        others
            .choose_multiple(rng, num_options.saturating_sub(1))
            .map(|p| (*p).clone()),
    );
    options.shuffle(rng);

    Round {
        target: target.clone(),
        options,
    }
}
