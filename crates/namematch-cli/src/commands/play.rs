//! The `namematch play` command.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use namematch_core::evaluator::parse_choice;
use namematch_core::{QuizEngine, QuizRepository};

use super::{open_engine, EngineArgs};

pub fn execute(args: &EngineArgs, rounds: Option<u32>) -> Result<()> {
    let mut engine = open_engine(args)?;
    let num_rounds = rounds.unwrap_or(engine.config().rounds);
    anyhow::ensure!(num_rounds >= 1, "rounds must be at least 1");

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_game(&mut engine, num_rounds, &mut stdin.lock(), &mut stdout.lock())
}

/// Run one batch game, reading answers from `input` and writing the
/// transcript to `out`.
pub fn play_game<R, I, O>(
    engine: &mut QuizEngine<R>,
    num_rounds: u32,
    input: &mut I,
    out: &mut O,
) -> Result<()>
where
    R: QuizRepository,
    I: BufRead,
    O: Write,
{
    let rounds = match engine.start_batch(num_rounds) {
        Ok(rounds) => rounds,
        Err(e) if e.is_user_facing() => {
            writeln!(out, "{e}")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let total = rounds.len() as u32;

    writeln!(out, "\n===== Name Match Memory Game =====")?;
    writeln!(out, "Match the face to the correct name!")?;
    writeln!(out, "You'll play {total} rounds.\n")?;

    let mut score = 0u32;
    let mut line = String::new();

    for (number, round) in rounds.iter().enumerate() {
        writeln!(out, "\nRound {}/{total}", number + 1)?;
        writeln!(out, "Who is this person? (Image: {})", round.target.image)?;
        for (idx, option) in round.options.iter().enumerate() {
            writeln!(out, "{}. {}", idx + 1, option.name)?;
        }
        write!(
            out,
            "\nEnter the number of your answer (1-{}): ",
            round.options.len()
        )?;
        out.flush()?;

        line.clear();
        if let Err(e) = input.read_line(&mut line) {
            tracing::warn!("could not read answer: {e}");
            line.clear();
        }

        match parse_choice(round, &line) {
            Some(choice) => {
                let evaluation = engine.answer_batch_round(round, Some(choice.id.as_str()))?;
                if evaluation.is_correct {
                    score += 1;
                    writeln!(out, "\u{2713} Correct! Well done!")?;
                } else {
                    writeln!(
                        out,
                        "\u{2717} Incorrect. The correct answer is: {}",
                        round.target.name
                    )?;
                }
            }
            None => {
                engine.answer_batch_round(round, None)?;
                writeln!(
                    out,
                    "Invalid input. The correct answer is: {}",
                    round.target.name
                )?;
            }
        }
    }

    let outcome = engine.record_game(score, total)?;

    writeln!(out, "\n===== Game Over =====")?;
    writeln!(out, "Your final score: {score}/{total}")?;
    writeln!(out, "Accuracy: {:.1}%", outcome.accuracy)?;
    writeln!(out, "{}", outcome.verdict())?;
    if outcome.new_best && engine.stats().games_played > 1 {
        writeln!(out, "New best accuracy!")?;
    }

    Ok(())
}
