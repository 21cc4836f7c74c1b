use colored::Colorize;

use tenchord_core::Chord;
use tenchord_core::note::join_notes;

pub fn run(name: &str) -> Result<(), String> {
    let chord = Chord::parse(name).map_err(|e| e.to_string())?;
    println!("  {}: {}", chord.name().bold(), join_notes(chord.notes()));
    Ok(())
}
