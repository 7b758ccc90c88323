//! The `namematch remove` command.

use anyhow::Result;

use super::{open_engine, EngineArgs};

pub fn execute(args: &EngineArgs, name: &str) -> Result<()> {
    let mut engine = open_engine(args)?;
    if engine.remove_person(name)? {
        println!("Removed {name} from the database.");
    } else {
        println!("{name} not found in the database.");
    }
    Ok(())
}
