//! Frames: one chord to guess, one bowling frame to score.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chord::Chord;
use crate::note::Note;
use crate::score::Score;

/// Index of the tenth, final regular frame.
pub const TENTH_FRAME: usize = 9;

/// Index of the last bonus frame.
pub const LAST_BONUS_FRAME: usize = 11;

/// Number of frames that count towards the final score.
pub const REGULAR_FRAMES: usize = TENTH_FRAME + 1;

/// Maximum guesses for the frame at `index`.
///
/// `tenth_is_spare` matters only for the first bonus frame, which gets a
/// single roll when frame 9 closed with a spare.
pub fn max_attempts(index: usize, tenth_is_spare: bool) -> u32 {
    match index {
        TENTH_FRAME => 3,
        10 if tenth_is_spare => 1,
        LAST_BONUS_FRAME => 1,
        _ => 2,
    }
}

/// Where a frame stands in its guessing lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameState {
    /// No guesses yet.
    Fresh,
    /// Guessed at least once, more guesses allowed.
    PartiallyGuessed,
    /// Out of attempts, struck out, or followed by a later frame; no more
    /// guesses.
    Resolved,
}

impl fmt::Display for FrameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fresh => write!(f, "fresh"),
            Self::PartiallyGuessed => write!(f, "in progress"),
            Self::Resolved => write!(f, "resolved"),
        }
    }
}

/// One guessing round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    index: usize,
    chord: Chord,
    last_guess: Option<Vec<Note>>,
    correct_notes: Option<Vec<Note>>,
    attempts_used: u32,
    score: Option<Score>,
}

impl Frame {
    pub(crate) fn new(index: usize, chord: Chord) -> Self {
        Self {
            index,
            chord,
            last_guess: None,
            correct_notes: None,
            attempts_used: 0,
            score: None,
        }
    }

    /// Position in the sequence, 0-based.
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based frame number for display.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Whether this is one of the bonus frames after the tenth.
    pub fn is_bonus(&self) -> bool {
        self.index > TENTH_FRAME
    }

    /// The chord to guess.
    pub fn chord(&self) -> &Chord {
        &self.chord
    }

    /// The notes a perfect guess contains.
    pub fn target_notes(&self) -> &[Note] {
        self.chord.notes()
    }

    /// The most recent guess.
    pub fn last_guess(&self) -> Option<&[Note]> {
        self.last_guess.as_deref()
    }

    /// Notes of the most recent guess that belong to the chord.
    pub fn correct_notes(&self) -> Option<&[Note]> {
        self.correct_notes.as_deref()
    }

    /// Guesses evaluated so far.
    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// The score ledger, if the frame has been scored.
    pub fn score(&self) -> Option<&Score> {
        self.score.as_ref()
    }

    /// The score ledger, created on first access.
    pub(crate) fn score_mut(&mut self) -> &mut Score {
        self.score.get_or_insert_with(Score::new)
    }

    pub(crate) fn is_strike(&self) -> bool {
        self.score.as_ref().is_some_and(Score::is_strike)
    }

    pub(crate) fn is_spare(&self) -> bool {
        self.score.as_ref().is_some_and(Score::is_spare)
    }

    /// Record an evaluated guess and its roll.
    pub(crate) fn record_guess(&mut self, guess: Vec<Note>, correct: Vec<Note>, roll: u8) {
        self.attempts_used += 1;
        self.last_guess = Some(guess);
        self.correct_notes = Some(correct);
        self.score_mut().record_roll(roll);
    }
}
