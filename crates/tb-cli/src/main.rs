//! Command-line frontend for Tractor Beam, a text adventure aboard a Martian ship.

mod commands;
mod display;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use commands::play::PlayArgs;

#[derive(Parser)]
#[command(
    name = "tractorbeam",
    about = "Tractor Beam: escape from a Martian ship",
    version,
    propagate_version = true,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    play: PlayArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (the default)
    Play(PlayArgs),

    /// Validate a location definition and report diagnostics
    Check {
        /// Location definition file (default: the built-in ship)
        #[arg(short, long)]
        locations: Option<PathBuf>,
    },

    /// Export the loaded location graph as JSON
    Export {
        /// Location definition file (default: the built-in ship)
        #[arg(short, long)]
        locations: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Log to stderr so events never interleave with the story on stdout.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> miette::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play(args)) => commands::play::run(&args)?,
        Some(Commands::Check { locations }) => commands::check::run(locations.as_deref())?,
        Some(Commands::Export { locations, output }) => {
            commands::export::run(locations.as_deref(), output.as_deref())?
        }
        None => commands::play::run(&cli.play)?,
    }

    Ok(())
}
