//! Text rendering of frames and the score board.

use comfy_table::{CellAlignment, ContentArrangement, Table};

use tenchord_core::frame::REGULAR_FRAMES;
use tenchord_core::note::join_notes;
use tenchord_core::{Frame, FrameCard, Game, ScoreCard};

/// The board as a table: one column per regular frame, rows for chord,
/// marks, and running total.
pub fn board(card: &ScoreCard) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![String::new()];
    header.extend((1..=REGULAR_FRAMES).map(|n| n.to_string()));
    table.set_header(header);

    table.add_row(row(card, "Chord", |c| c.chord.clone()));
    table.add_row(row(card, "Rolls", |c| c.marks.join(" ")));
    table.add_row(row(card, "Score", |c| {
        c.running_total.map(|t| t.to_string()).unwrap_or_default()
    }));
    for col in 1..=REGULAR_FRAMES {
        if let Some(column) = table.column_mut(col) {
            column.set_cell_alignment(CellAlignment::Center);
        }
    }

    format!("{table}\n  Total: {}", card.final_score)
}

fn row(card: &ScoreCard, label: &str, cell: impl Fn(&FrameCard) -> String) -> Vec<String> {
    let mut cells = vec![label.to_string()];
    cells.extend((0..REGULAR_FRAMES).map(|i| card.frames.get(i).map(&cell).unwrap_or_default()));
    cells
}

/// Heading for a frame: number, chord, and attempts.
pub fn frame_heading(game: &Game, frame: &Frame) -> String {
    let label = if frame.is_bonus() {
        format!("Bonus frame {}", frame.index() - REGULAR_FRAMES + 1)
    } else {
        format!("Frame {} of {REGULAR_FRAMES}", frame.number())
    };
    let max = game.engine().max_attempts(frame.index());
    format!(
        "{label}: {} (attempt {} of {max})",
        frame.chord(),
        frame.attempts_used()
    )
}

/// Full view of a frame, including its last guess.
pub fn frame_view(game: &Game, frame: &Frame) -> String {
    let mut lines = vec![frame_heading(game, frame)];
    if let Some(guess) = frame.last_guess() {
        lines.push(format!("  Last guess: {}", join_notes(guess)));
    }
    if let Some(correct) = frame.correct_notes() {
        lines.push(format!("  Correct:    {}", join_notes(correct)));
    }
    if let Some(score) = frame.score() {
        lines.push(format!("  Score:      {}", score.total()));
    }
    if game.current_index() == frame.index() && !game.can_guess() {
        lines.push(format!("  Notes:      {}", join_notes(frame.target_notes())));
    }
    lines.join("\n")
}
