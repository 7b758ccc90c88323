//! Answer evaluation.
//!
//! Correctness is a plain id comparison. Nothing here fails on ids that are
//! missing from the roster: names resolve to [`UNKNOWN_NAME`] instead.

use serde::{Deserialize, Serialize};

use crate::model::{Person, Round};

/// Display name used when an id cannot be resolved against the roster.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Outcome of scoring one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub is_correct: bool,
    /// Whether the selected id was among the round's options.
    pub offered: bool,
}

/// Score an answer for `round`.
pub fn evaluate(round: &Round, target_id: &str, selected_id: &str) -> Evaluation {
    Evaluation {
        is_correct: selected_id == target_id,
        offered: round.offers(selected_id),
    }
}

/// Score an answer when the round itself is no longer available, as in the
/// stateless web flow where the client posts both ids back.
pub fn evaluate_ids(target_id: &str, selected_id: &str) -> bool {
    selected_id == target_id
}

/// Map a 1-based option number typed by the player to the chosen person.
///
/// Returns `None` for anything that is not a number within range.
pub fn parse_choice<'a>(round: &'a Round, input: &str) -> Option<&'a Person> {
    let n: usize = input.trim().parse().ok()?;
    n.checked_sub(1).and_then(|idx| round.options.get(idx))
}

/// Names to show the player after an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub is_correct: bool,
    pub selected_name: String,
    pub correct_name: String,
}

impl Feedback {
    pub fn resolve(roster: &[Person], target_id: &str, selected_id: &str) -> Self {
        Self {
            is_correct: evaluate_ids(target_id, selected_id),
            selected_name: display_name(roster, selected_id),
            correct_name: display_name(roster, target_id),
        }
    }
}

fn display_name(roster: &[Person], id: &str) -> String {
    roster
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round() -> Round {
        let people: Vec<Person> = ["Ada", "Grace", "Alan"]
            .iter()
            .map(|n| Person::new(*n, "x.jpg"))
            .collect();
        Round {
            target: people[1].clone(),
            options: people,
        }
    }

    #[test]
    fn correct_iff_ids_match() {
        let r = round();
        let target = r.target.id.clone();
        let other = r.options[0].id.clone();

        assert!(evaluate(&r, &target, &target).is_correct);
        assert!(!evaluate(&r, &target, &other).is_correct);
    }

    #[test]
    fn ids_outside_the_roster_still_compare() {
        let r = round();
        let eval = evaluate(&r, "ghost", "ghost");
        assert!(eval.is_correct);
        assert!(!eval.offered);
        assert!(!evaluate(&r, "ghost", "phantom").is_correct);
    }

    #[test]
    fn choice_parsing() {
        let r = round();
        assert_eq!(parse_choice(&r, "1").map(|p| p.name.as_str()), Some("Ada"));
        assert_eq!(parse_choice(&r, " 3\n").map(|p| p.name.as_str()), Some("Alan"));
        assert!(parse_choice(&r, "0").is_none());
        assert!(parse_choice(&r, "4").is_none());
        assert!(parse_choice(&r, "two").is_none());
        assert!(parse_choice(&r, "-1").is_none());
    }

    #[test]
    fn feedback_uses_placeholder_for_unknown_ids() {
        let r = round();
        let roster = r.options.clone();
        let fb = Feedback::resolve(&roster, &r.target.id, "stale-id");
        assert!(!fb.is_correct);
        assert_eq!(fb.selected_name, UNKNOWN_NAME);
        assert_eq!(fb.correct_name, "Grace");
    }
}
