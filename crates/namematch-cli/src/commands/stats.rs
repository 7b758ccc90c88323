//! The `namematch stats` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use namematch_core::statistics::Summary;

use super::{open_engine, EngineArgs};

pub fn execute(args: &EngineArgs, format: &str) -> Result<()> {
    let engine = open_engine(args)?;
    let summary = engine.summarize();

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        "text" => print_text(&summary),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}

fn print_text(summary: &Summary) {
    println!("\n===== Game Statistics =====");
    println!("Games played: {}", summary.games_played);
    println!("Total questions: {}", summary.total_questions);
    println!("Correct answers: {}", summary.correct_answers);
    if let Some(accuracy) = summary.overall_accuracy {
        println!("Overall accuracy: {accuracy:.1}%");
    }
    println!("Best accuracy: {:.1}%", summary.best_accuracy);

    if summary.people.is_empty() {
        return;
    }

    println!("\n===== Individual Statistics =====");
    let mut table = Table::new();
    table.set_header(vec!["Name", "Shown", "Correct", "Accuracy"]);
    for person in &summary.people {
        let accuracy = person
            .accuracy
            .map(|a| format!("{a:.1}%"))
            .unwrap_or_else(|| "N/A".to_string());
        table.add_row(vec![
            Cell::new(&person.name),
            Cell::new(person.times_shown),
            Cell::new(person.times_correct),
            Cell::new(accuracy),
        ]);
    }
    println!("{table}");
}
