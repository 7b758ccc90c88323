//! namematch CLI — match faces to names from the command line.

use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, Subcommand};

mod commands;

use commands::EngineArgs;

#[derive(Parser)]
#[command(name = "namematch", version, about = "Face-to-name memory quiz")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Roster file (overrides config)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Statistics file (overrides config)
    #[arg(long, global = true)]
    stats_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new person
    Add {
        /// Person's name
        name: String,

        /// Path to the person's image
        image_path: String,
    },

    /// Remove a person
    Remove {
        /// Person's name to remove
        name: String,
    },

    /// List all people
    List,

    /// Play the name matching game
    Play {
        /// Number of rounds to play (default from config, 5)
        #[arg(short, long)]
        rounds: Option<u32>,
    },

    /// Show game statistics
    Stats {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    let cli = Cli::parse();

    let directive = if cli.verbose {
        "namematch=debug"
    } else {
        "namematch=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().expect("static directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let engine_args = EngineArgs {
        config: cli.config,
        data_file: cli.data_file,
        stats_file: cli.stats_file,
    };

    let result = match cli.command {
        Some(Commands::Add { name, image_path }) => {
            commands::add::execute(&engine_args, &name, &image_path)
        }
        Some(Commands::Remove { name }) => commands::remove::execute(&engine_args, &name),
        Some(Commands::List) => commands::list::execute(&engine_args),
        Some(Commands::Play { rounds }) => commands::play::execute(&engine_args, rounds),
        Some(Commands::Stats { format }) => commands::stats::execute(&engine_args, &format),
        Some(Commands::Init) => commands::init::execute(),
        None => Cli::command().print_help().map_err(Into::into),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
