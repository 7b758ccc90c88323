//! The `namematch init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("namematch.toml");
    if path.exists() {
        println!("namematch.toml already exists, skipping.");
        return Ok(());
    }

    std::fs::write(path, SAMPLE_CONFIG)?;
    println!("Created namematch.toml");

    println!("\nNext steps:");
    println!("  1. Add people: namematch add \"Ada Lovelace\" photos/ada.jpg");
    println!("  2. Add at least four people, then run: namematch play");
    println!("  3. Check your progress: namematch stats");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# namematch configuration

data_file = "people_data.json"
stats_file = "game_stats.json"

# Options per round in the web flow, and the minimum roster size to play.
# Batch play (`namematch play`) always offers up to 4 options.
num_options = 4
# Rounds per game
rounds = 5
# People shown on the start screen
sample_size = 5
# Require image files to exist when adding people
verify_images = true
"#;
