//! Chord ear-training quiz scored like ten-pin bowling.
//!
//! Each frame asks the player to name the notes of a chord. A guess is
//! converted into a roll worth up to ten points, and strikes and spares
//! collect bonus from later rolls exactly as in bowling. Provides note and
//! chord parsing, a random chord generator, the frame sequence, the scoring
//! engine, a score board model, and an interactive game session.

pub mod chord;
pub mod config;
pub mod error;
pub mod event;
pub mod frame;
pub mod game;
pub mod note;
pub mod score;
pub mod scorecard;
pub mod scoring;
pub mod sequence;

pub use chord::{Chord, ChordGenerator, ChordKind, FixedChords, RandomChords};
pub use config::QuizConfig;
pub use error::{QuizError, QuizResult};
pub use event::{EventLog, QuizEvent, QuizEventKind};
pub use frame::{Frame, FrameState};
pub use game::{Game, GameSummary};
pub use note::Note;
pub use score::Score;
pub use scorecard::{FrameCard, ScoreCard};
pub use scoring::{GuessOutcome, PERFECT_GAME, ScoringEngine};
pub use sequence::FrameSequence;
