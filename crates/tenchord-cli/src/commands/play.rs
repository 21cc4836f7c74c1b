use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use tracing::info;

use tenchord_core::{ChordKind, Game, QuizConfig};

use crate::shell::QuizShell;

pub fn run(
    seed: Option<u64>,
    chord: Option<&str>,
    kinds: &[String],
    summary: Option<&Path>,
) -> Result<(), String> {
    let config = build_config(seed, chord, kinds)?;
    let game = Game::new(&config).map_err(|e| format!("failed to start game: {e}"))?;
    let mut shell = QuizShell::new(game);

    println!("  {} Ten Chord", "Starting".bold());
    match seed {
        Some(seed) => println!("  Seed: {seed}"),
        None => println!("  Seed: random"),
    }
    println!("  Name the notes of each chord. Type 'help' for commands, 'quit' to exit.\n");
    println!("{}\n", shell.intro());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match shell.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if shell.is_done() {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.yellow());
            }
        }
    }

    if let Some(path) = summary {
        write_summary(shell.game(), path)?;
        println!("  Summary written to {}", path.display());
    }
    Ok(())
}

fn build_config(
    seed: Option<u64>,
    chord: Option<&str>,
    kinds: &[String],
) -> Result<QuizConfig, String> {
    let mut config = QuizConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(chord) = chord {
        config = config.with_fixed_chord(chord);
    }
    let kinds = kinds
        .iter()
        .map(|code| {
            ChordKind::parse(code).ok_or_else(|| format!("unknown chord kind: \"{code}\""))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(config.with_kinds(&kinds))
}

fn write_summary(game: &Game, path: &Path) -> Result<(), String> {
    let json = serde_json::to_string_pretty(&game.summary())
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    std::fs::write(path, json).map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
    info!(path = %path.display(), "summary written");
    Ok(())
}
