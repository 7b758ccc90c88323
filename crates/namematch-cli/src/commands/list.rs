//! The `namematch list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use super::{open_engine, EngineArgs};

pub fn execute(args: &EngineArgs) -> Result<()> {
    let engine = open_engine(args)?;
    let people = engine.list_people();

    if people.is_empty() {
        println!("No people in the database yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Name", "Image Path", "Added Date", "Shown", "Correct"]);
    for person in people {
        table.add_row(vec![
            Cell::new(&person.name),
            Cell::new(&person.image),
            Cell::new(person.added_date.format("%Y-%m-%d")),
            Cell::new(person.times_shown),
            Cell::new(person.times_correct),
        ]);
    }

    println!("{table}");
    Ok(())
}
