//! Quiz session management.
//!
//! `Game` ties the scoring engine to a chord generator and tracks which
//! frame the player is looking at, the way a UI controller would: guess on
//! the current frame, move forward (creating frames as needed), step back
//! to review, and detect the end of the game.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chord::ChordGenerator;
use crate::config::QuizConfig;
use crate::error::{QuizError, QuizResult};
use crate::event::QuizEvent;
use crate::frame::{Frame, TENTH_FRAME};
use crate::note::{Note, parse_notes};
use crate::scorecard::ScoreCard;
use crate::scoring::{GuessOutcome, ScoringEngine};
use crate::sequence::FrameSequence;

/// An interactive quiz.
pub struct Game {
    engine: ScoringEngine,
    generator: Box<dyn ChordGenerator>,
    current: usize,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("frames", &self.engine.sequence().len())
            .field("current", &self.current)
            .field("final_score", &self.engine.final_score())
            .finish()
    }
}

impl Game {
    /// Start a game with the first frame already created.
    pub fn new(config: &QuizConfig) -> QuizResult<Self> {
        Self::with_generator(config.generator()?)
    }

    /// Start a game drawing chords from `generator`.
    pub fn with_generator(generator: Box<dyn ChordGenerator>) -> QuizResult<Self> {
        let mut game = Self {
            engine: ScoringEngine::new(),
            generator,
            current: 0,
            started_at: Utc::now(),
            finished_at: None,
        };
        game.engine.create_next(game.generator.as_mut(), None)?;
        Ok(game)
    }

    /// The scoring engine.
    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// All frames created so far.
    pub fn sequence(&self) -> &FrameSequence {
        self.engine.sequence()
    }

    /// The frame being shown.
    pub fn current(&self) -> &Frame {
        &self.sequence().frames()[self.current]
    }

    /// Index of the frame being shown.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Whether the frame at `index` is finished from the player's view.
    ///
    /// A spare in the tenth frame hands its remaining roll to the bonus
    /// frame, so it counts as finished even though an attempt is left.
    fn frame_done(&self, index: usize) -> bool {
        let tenth_spare = index == TENTH_FRAME && self.engine.is_spare(index).unwrap_or(false);
        tenth_spare || !self.engine.can_guess(index)
    }

    /// Whether the current frame takes another guess.
    pub fn can_guess(&self) -> bool {
        !self.frame_done(self.current)
    }

    /// Score a guess on the current frame.
    pub fn guess(&mut self, notes: &[Note]) -> QuizResult<GuessOutcome> {
        if self.frame_done(self.current) {
            return Err(QuizError::GuessNotAllowed {
                index: self.current,
            });
        }
        let outcome = self.engine.evaluate(self.current, notes)?;
        if self.finished_at.is_none() && self.is_over() {
            self.finished_at = Some(Utc::now());
            info!(final_score = self.final_score(), "game over");
        }
        Ok(outcome)
    }

    /// Parse note names and score them on the current frame.
    pub fn guess_names<S: AsRef<str>>(&mut self, names: &[S]) -> QuizResult<GuessOutcome> {
        let notes = parse_notes(names)?;
        self.guess(&notes)
    }

    /// Whether [`Game::advance`] would succeed.
    pub fn can_advance(&self) -> bool {
        let sequence = self.sequence();
        if self.current + 1 < sequence.len() {
            return true;
        }
        self.frame_done(self.current) && !sequence.is_last(self.current())
    }

    /// Show the next frame, creating it if the current one is the newest.
    pub fn advance(&mut self) -> QuizResult<&Frame> {
        if self.current + 1 < self.sequence().len() {
            self.current += 1;
            return Ok(self.current());
        }
        if !self.frame_done(self.current) {
            return Err(QuizError::FrameInProgress {
                index: self.current,
            });
        }
        self.engine.create_next(self.generator.as_mut(), None)?;
        self.current += 1;
        Ok(self.current())
    }

    /// Whether a previous frame exists.
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Show the previous frame. `None` on the first frame.
    pub fn go_back(&mut self) -> Option<&Frame> {
        let prev = self.sequence().prev(self.current())?.index();
        self.current = prev;
        Some(self.current())
    }

    /// Whether the newest frame is terminal and takes no more guesses.
    pub fn is_over(&self) -> bool {
        let sequence = self.sequence();
        sequence
            .last()
            .is_some_and(|last| sequence.is_last(last) && self.frame_done(last.index()))
    }

    /// Sum of the ten regular frames.
    pub fn final_score(&self) -> i32 {
        self.engine.final_score()
    }

    /// The board for display.
    pub fn score_card(&self) -> ScoreCard {
        ScoreCard::from_sequence(self.sequence())
    }

    /// Take pending change notifications.
    pub fn drain_events(&mut self) -> Vec<QuizEvent> {
        self.engine.sequence_mut().drain_events()
    }

    /// Discard every frame and start over.
    pub fn reset(&mut self) -> QuizResult<()> {
        self.engine.sequence_mut().reset();
        self.current = 0;
        self.started_at = Utc::now();
        self.finished_at = None;
        self.engine.create_next(self.generator.as_mut(), None)?;
        Ok(())
    }

    /// A serializable snapshot of the game.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            started_at: self.started_at,
            finished_at: self.finished_at,
            over: self.is_over(),
            final_score: self.final_score(),
            card: self.score_card(),
            frames: self.sequence().frames().to_vec(),
        }
    }
}

/// Snapshot of a game for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// When the game started.
    pub started_at: DateTime<Utc>,
    /// When the last guess finished it.
    pub finished_at: Option<DateTime<Utc>>,
    /// Whether the game is finished.
    pub over: bool,
    /// Sum of the ten regular frames.
    pub final_score: i32,
    /// The board.
    pub card: ScoreCard,
    /// Every frame with its guesses and score.
    pub frames: Vec<Frame>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::FixedChords;
    use crate::event::QuizEventKind;

    const FULL: [&str; 3] = ["A", "C#", "E"];

    fn game() -> Game {
        Game::new(&QuizConfig::default().with_fixed_chord("A Maj")).unwrap()
    }

    #[test]
    fn starts_on_first_frame() {
        let g = game();
        assert_eq!(g.current_index(), 0);
        assert_eq!(g.current().chord().name(), "A Maj");
        assert!(g.can_guess());
        assert!(!g.can_go_back());
        assert!(!g.can_advance());
        assert!(!g.is_over());
    }

    #[test]
    fn cannot_advance_mid_frame() {
        let mut g = game();
        g.guess_names(&["A"]).unwrap();
        assert_eq!(
            g.advance().unwrap_err(),
            QuizError::FrameInProgress { index: 0 }
        );
        g.guess_names(&["A"]).unwrap();
        assert!(g.can_advance());
        assert_eq!(g.advance().unwrap().index(), 1);
    }

    #[test]
    fn back_and_forth() {
        let mut g = game();
        g.guess_names(&FULL).unwrap();
        g.advance().unwrap();
        assert!(g.can_go_back());
        assert_eq!(g.go_back().map(Frame::index), Some(0));
        assert!(g.go_back().is_none(), "no frame before the first");
        assert_eq!(g.current_index(), 0);

        // forward again reuses the existing frame
        assert_eq!(g.advance().unwrap().index(), 1);
        assert_eq!(g.sequence().len(), 2);
    }

    #[test]
    fn bad_note_rejected() {
        let mut g = game();
        assert_eq!(
            g.guess_names(&["A", "Z"]).unwrap_err(),
            QuizError::UnknownNote("Z".into())
        );
        assert_eq!(g.current().attempts_used(), 0);
    }

    #[test]
    fn perfect_game_flow() {
        let mut g = game();
        for frame in 0..12 {
            assert_eq!(g.current_index(), frame);
            let outcome = g.guess_names(&FULL).unwrap();
            assert!(outcome.strike);
            if frame < 11 {
                assert!(!g.is_over());
                g.advance().unwrap();
            }
        }
        assert!(g.is_over());
        assert!(!g.can_advance());
        assert_eq!(g.advance().unwrap_err(), QuizError::SequenceComplete);
        assert_eq!(g.final_score(), 300);

        let summary = g.summary();
        assert!(summary.over);
        assert!(summary.finished_at.is_some());
        assert_eq!(summary.frames.len(), 12);
        assert_eq!(summary.card.final_score, 300);
    }

    #[test]
    fn tenth_spare_moves_to_bonus_frame() {
        let mut g = game();
        for _ in 0..9 {
            g.guess_names(&FULL).unwrap();
            g.advance().unwrap();
        }
        g.guess_names(&["A"]).unwrap();
        g.guess_names(&FULL).unwrap();
        assert!(!g.can_guess(), "spare hands its last roll to the bonus frame");
        assert!(g.guess_names(&FULL).is_err());
        assert!(!g.is_over());

        g.advance().unwrap();
        assert_eq!(g.engine().max_attempts(10), 1);
        g.guess_names(&["A", "C#"]).unwrap();
        assert!(g.is_over());
        assert_eq!(g.engine().total(9).unwrap(), 17);
    }

    #[test]
    fn open_tenth_ends_after_three_guesses() {
        let mut g = game();
        for _ in 0..9 {
            g.guess_names(&["B"]).unwrap();
            g.guess_names(&["B"]).unwrap();
            g.advance().unwrap();
        }
        for _ in 0..2 {
            g.guess_names(&["A"]).unwrap();
            assert!(!g.is_over());
        }
        g.guess_names(&["A", "E"]).unwrap();
        assert!(g.is_over());
        assert_eq!(g.final_score(), 7);
    }

    #[test]
    fn reset_starts_over() {
        let mut g = game();
        g.guess_names(&FULL).unwrap();
        g.advance().unwrap();
        g.drain_events();
        g.reset().unwrap();
        assert_eq!(g.sequence().len(), 1);
        assert_eq!(g.current_index(), 0);
        assert_eq!(g.final_score(), 0);

        let kinds: Vec<_> = g.drain_events().into_iter().map(|e| e.kind).collect();
        assert_eq!(kinds[0], QuizEventKind::SequenceReset);
        assert!(matches!(
            kinds[1],
            QuizEventKind::FrameCreated { index: 0, .. }
        ));
    }

    #[test]
    fn random_chords_from_generator() {
        let g = Game::with_generator(Box::new(FixedChords::named("D min").unwrap())).unwrap();
        assert_eq!(g.current().chord().name(), "D min");
    }

    #[test]
    fn summary_serializes() {
        let mut g = game();
        g.guess_names(&["A", "C", "E"]).unwrap();
        let json = serde_json::to_string(&g.summary()).unwrap();
        assert!(json.contains("\"final_score\":7"));
        let back: GameSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.frames[0].correct_notes(), Some(&[Note::A, Note::E][..]));
    }
}
