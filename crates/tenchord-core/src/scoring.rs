//! Guess evaluation and bowling-style bonus propagation.
//!
//! Each evaluated guess appends a cumulative roll to its frame's score and
//! then pays the roll's points backwards: a strike collects the next two
//! rolls, a spare the next one. Frames 10 and 11 exist only to pay frame 9
//! and never collect bonus themselves.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chord::ChordGenerator;
use crate::error::{QuizError, QuizResult};
use crate::event::QuizEventKind;
use crate::frame::{Frame, FrameState, TENTH_FRAME};
use crate::note::Note;
use crate::score::{MAX_ROLL, Score};
use crate::sequence::FrameSequence;

/// Rolls a strike collects as bonus.
const STRIKE_BONUS_ROLLS: usize = 2;

/// Highest possible final score.
pub const PERFECT_GAME: i32 = 300;

/// Roll score for `correct` hits out of `target` notes: `correct / target`
/// scaled to 10 and rounded half up, capped at 10.
pub fn roll_for(correct: usize, target: usize) -> u8 {
    if target == 0 {
        return 0;
    }
    let scaled = (20 * correct + target) / (2 * target);
    scaled.min(usize::from(MAX_ROLL)) as u8
}

/// What a single evaluated guess did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    /// Index of the guessed frame.
    pub index: usize,
    /// Guessed notes that belong to the chord, in guess order.
    pub correct: Vec<Note>,
    /// Points earned by this roll alone.
    pub points: i32,
    /// Cumulative frame score after the roll, before bonus.
    pub frame_score: i32,
    /// Attempt number of this roll, 1-based.
    pub attempt: u32,
    /// The frame is now a strike.
    pub strike: bool,
    /// The frame is now a spare.
    pub spare: bool,
    /// The frame accepts no more guesses.
    pub resolved: bool,
}

/// Scores guesses against the frames it owns.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    sequence: FrameSequence,
}

impl ScoringEngine {
    /// An engine with no frames.
    pub fn new() -> Self {
        Self::default()
    }

    /// The frames being scored.
    pub fn sequence(&self) -> &FrameSequence {
        &self.sequence
    }

    /// Mutable access to the frames, for creation, reset, and draining
    /// notifications.
    pub fn sequence_mut(&mut self) -> &mut FrameSequence {
        &mut self.sequence
    }

    /// Append a frame. See [`FrameSequence::create_next`].
    pub fn create_next(
        &mut self,
        generator: &mut dyn ChordGenerator,
        chord_name: Option<&str>,
    ) -> QuizResult<&Frame> {
        self.sequence.create_next(generator, chord_name)
    }

    /// Maximum guesses for the frame at `index`.
    pub fn max_attempts(&self, index: usize) -> u32 {
        self.sequence.max_attempts(index)
    }

    /// Whether the frame at `index` exists and accepts another guess.
    ///
    /// A strike closes the frame even if attempts remain, and so does
    /// creating the next frame.
    pub fn can_guess(&self, index: usize) -> bool {
        self.sequence.state(index).is_ok_and(|s| s != FrameState::Resolved)
    }

    /// Score `guess` against the frame at `index` and propagate bonus.
    ///
    /// Nothing changes when the guess is rejected.
    pub fn evaluate(&mut self, index: usize, guess: &[Note]) -> QuizResult<GuessOutcome> {
        let frame = self.sequence.get(index)?;
        if !self.can_guess(index) {
            debug!(index, "guess rejected, frame resolved");
            return Err(QuizError::GuessNotAllowed { index });
        }
        if guess.is_empty() {
            return Err(QuizError::EmptyGuess);
        }

        let correct: Vec<Note> = guess
            .iter()
            .copied()
            .filter(|n| frame.chord().contains(*n))
            .collect();
        let roll = roll_for(correct.len(), frame.target_notes().len());

        let frame = self.sequence.get_mut(index)?;
        frame.record_guess(guess.to_vec(), correct.clone(), roll);
        let attempt = frame.attempts_used();
        let score = frame.score_mut();
        let points = score.roll_score().unwrap_or(0);
        let (frame_score, total) = (score.base_total(), score.total());
        let (strike, spare) = (score.is_strike(), score.is_spare());

        debug!(index, attempt, roll, points, total, "guess evaluated");
        self.sequence.notify(QuizEventKind::GuessEvaluated {
            index,
            points,
            total,
        });
        self.award_bonus(index);

        Ok(GuessOutcome {
            index,
            correct,
            points,
            frame_score,
            attempt,
            strike,
            spare,
            resolved: !self.can_guess(index),
        })
    }

    fn award_bonus(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        let Ok(frame) = self.sequence.get(index) else {
            return;
        };
        let Some(points) = frame.score().and_then(Score::roll_score) else {
            return;
        };
        let attempt = frame.attempts_used() as usize;

        self.award_strike_bonus(index, attempt, points);
        if attempt == 1 {
            self.award_spare_bonus(index, points);
        }
    }

    /// Walk back over consecutive strikes while the current roll is still
    /// one of the two that follow them. Bonus frames count as a step but
    /// are never paid.
    fn award_strike_bonus(&mut self, from: usize, attempt: usize, points: i32) {
        let mut rolls_since = attempt;
        let mut cursor = from;
        while rolls_since <= STRIKE_BONUS_ROLLS && cursor > 0 {
            cursor -= 1;
            let is_strike = self.sequence.get(cursor).is_ok_and(Frame::is_strike);
            if !is_strike {
                break;
            }
            if cursor <= TENTH_FRAME {
                self.credit(from, cursor, points);
            }
            rolls_since += 1;
        }
    }

    fn award_spare_bonus(&mut self, from: usize, points: i32) {
        let to = from - 1;
        if to <= TENTH_FRAME && self.sequence.get(to).is_ok_and(Frame::is_spare) {
            self.credit(from, to, points);
        }
    }

    fn credit(&mut self, from: usize, to: usize, points: i32) {
        let Ok(frame) = self.sequence.get_mut(to) else {
            return;
        };
        let score = frame.score_mut();
        score.add_bonus(points);
        debug!(from, to, points, total = score.total(), "bonus awarded");
        self.sequence
            .notify(QuizEventKind::BonusAwarded { from, to, points });
    }

    /// The score of the frame at `index`, if it has been scored.
    pub fn score(&self, index: usize) -> QuizResult<Option<&Score>> {
        Ok(self.sequence.get(index)?.score())
    }

    /// Cumulative rolls of the frame at `index`.
    pub fn rolls(&self, index: usize) -> QuizResult<&[u8]> {
        Ok(self.score(index)?.map(Score::rolls).unwrap_or_default())
    }

    /// Total of the frame at `index`, bonus included.
    pub fn total(&self, index: usize) -> QuizResult<i32> {
        Ok(self.score(index)?.map_or(0, Score::total))
    }

    /// Bonus collected by the frame at `index`.
    pub fn bonus(&self, index: usize) -> QuizResult<i32> {
        Ok(self.score(index)?.map_or(0, Score::bonus))
    }

    /// Whether the frame at `index` is a strike.
    pub fn is_strike(&self, index: usize) -> QuizResult<bool> {
        Ok(self.sequence.get(index)?.is_strike())
    }

    /// Whether the frame at `index` is a spare.
    pub fn is_spare(&self, index: usize) -> QuizResult<bool> {
        Ok(self.sequence.get(index)?.is_spare())
    }

    /// Sum of the ten regular frames' totals.
    pub fn final_score(&self) -> i32 {
        self.sequence
            .iter()
            .filter(|f| !f.is_bonus())
            .map(|f| f.score().map_or(0, Score::total))
            .sum()
    }
}
