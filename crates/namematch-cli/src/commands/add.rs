//! The `namematch add` command.

use anyhow::Result;

use super::{open_engine, EngineArgs};

pub fn execute(args: &EngineArgs, name: &str, image_path: &str) -> Result<()> {
    let mut engine = open_engine(args)?;
    let person = engine.add_person(name, image_path)?;
    println!("Added {} to the database.", person.name);
    Ok(())
}
