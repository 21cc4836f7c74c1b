//! Error types for the quiz engine.

use thiserror::Error;

/// Result type for quiz operations.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that can occur while building chords or scoring guesses.
///
/// All of them are rejected before any state changes, so the engine stays
/// consistent after an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// No frame exists at the requested index.
    #[error("frame not found: {0}")]
    NotFound(usize),

    /// The frame is resolved and accepts no more guesses.
    #[error("frame {index} accepts no more guesses")]
    GuessNotAllowed {
        /// Index of the rejected frame.
        index: usize,
    },

    /// Tried to move past a frame that still takes guesses.
    #[error("frame {index} is still in progress")]
    FrameInProgress {
        /// Index of the unfinished frame.
        index: usize,
    },

    /// A guess was submitted without any notes.
    #[error("guess contains no notes")]
    EmptyGuess,

    /// The sequence already ends in a terminal frame.
    #[error("no further frames can be created")]
    SequenceComplete,

    /// A note name could not be parsed.
    #[error("unknown note: {0}")]
    UnknownNote(String),

    /// A chord name could not be parsed.
    #[error("unknown chord: {0}")]
    UnknownChord(String),

    /// A chord was constructed without notes.
    #[error("chord has no notes")]
    EmptyChord,
}
