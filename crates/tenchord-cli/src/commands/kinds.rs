use comfy_table::{ContentArrangement, Table};

use tenchord_core::{Chord, ChordKind, Note};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Code", "Kind", "Example"]);

    for kind in ChordKind::ALL {
        let example = Chord::from_parts(Note::C, kind);
        let notes: Vec<&str> = example.notes().iter().map(|n| n.name()).collect();
        table.add_row(vec![
            kind.code().to_string(),
            kind.description().to_string(),
            format!("{}: {}", example.name(), notes.join(" ")),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} chord kinds", ChordKind::ALL.len());

    Ok(())
}
