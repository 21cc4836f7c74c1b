//! Terminal frontend for the Ten Chord ear-training quiz.

mod commands;
mod logging;
mod render;
mod shell;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tenchord",
    about = "Ten Chord: name the notes of ten chords, scored like bowling",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game on stdin
    Play {
        /// RNG seed for a reproducible chord sequence
        #[arg(short, long)]
        seed: Option<u64>,

        /// Quiz the same chord in every frame (e.g. "A Maj")
        #[arg(short, long)]
        chord: Option<String>,

        /// Restrict random chords to these kinds (e.g. maj,min,7)
        #[arg(short, long = "kind", value_delimiter = ',')]
        kinds: Vec<String>,

        /// Write a JSON summary of the game to this file on exit
        #[arg(long)]
        summary: Option<PathBuf>,
    },

    /// Show the notes of a chord
    Chord {
        /// Chord name, e.g. "C# min7" or "Bb"
        name: String,
    },

    /// List the supported chord kinds
    Kinds,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("warning: {e}");
    }

    let result = match cli.command {
        Commands::Play {
            seed,
            chord,
            kinds,
            summary,
        } => commands::play::run(seed, chord.as_deref(), &kinds, summary.as_deref()),
        Commands::Chord { name } => commands::chord::run(&name),
        Commands::Kinds => commands::kinds::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
