//! Display model of the score board.
//!
//! One card per regular frame. The bonus frames have no card of their own:
//! their marks are appended to the tenth frame's card, whose total already
//! includes the bonus they paid.

use serde::{Deserialize, Serialize};

use crate::frame::{Frame, REGULAR_FRAMES, TENTH_FRAME};
use crate::score::{MAX_ROLL, Score};
use crate::sequence::FrameSequence;

/// Mark shown for a strike.
pub const STRIKE_MARK: &str = "X";

/// Mark shown for a spare.
pub const SPARE_MARK: &str = "/";

/// One frame's box on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameCard {
    /// Index of the regular frame this card shows.
    pub index: usize,
    /// Chord name.
    pub chord: String,
    /// One mark per roll, bonus-frame rolls included on the tenth card.
    pub marks: Vec<String>,
    /// Frame total with bonus, once scored.
    pub total: Option<i32>,
    /// Sum of totals up to and including this frame, once scored.
    pub running_total: Option<i32>,
}

/// The whole board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Cards for the frames created so far, at most ten.
    pub frames: Vec<FrameCard>,
    /// Sum of all regular frame totals.
    pub final_score: i32,
}

impl ScoreCard {
    /// Build the board for the current state of `sequence`.
    pub fn from_sequence(sequence: &FrameSequence) -> Self {
        let mut frames: Vec<FrameCard> = Vec::with_capacity(REGULAR_FRAMES);
        let mut running = 0;

        for frame in sequence {
            if frame.is_bonus() {
                if let Some(tenth) = frames.get_mut(TENTH_FRAME) {
                    tenth.marks.extend(marks(frame));
                }
                continue;
            }

            let total = frame.score().map(Score::total);
            if let Some(total) = total {
                running += total;
            }
            frames.push(FrameCard {
                index: frame.index(),
                chord: frame.chord().name().to_string(),
                marks: marks(frame),
                total,
                running_total: total.map(|_| running),
            });
        }

        Self {
            frames,
            final_score: running,
        }
    }
}

/// Marks for each roll of a frame: `X` for a perfect first roll, `/` for a
/// second roll that completes the frame, otherwise the roll's points.
pub fn marks(frame: &Frame) -> Vec<String> {
    let Some(score) = frame.score() else {
        return Vec::new();
    };
    let perfect = MAX_ROLL;
    score
        .rolls()
        .iter()
        .enumerate()
        .map(|(n, roll)| match n {
            0 if *roll == perfect => STRIKE_MARK.to_string(),
            1 if *roll == perfect => SPARE_MARK.to_string(),
            _ => score.roll_points(n).unwrap_or(0).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::FixedChords;
    use crate::note::Note::{A, CSharp, E};
    use crate::scoring::ScoringEngine;

    fn play(frames: &[&[&[crate::note::Note]]]) -> ScoringEngine {
        let mut chords = FixedChords::named("A Maj").unwrap();
        let mut engine = ScoringEngine::new();
        for guesses in frames {
            let index = engine.create_next(&mut chords, None).unwrap().index();
            for guess in *guesses {
                engine.evaluate(index, guess).unwrap();
            }
        }
        engine
    }

    #[test]
    fn strike_spare_and_open_marks() {
        let engine = play(&[
            &[&[A, CSharp, E]],
            &[&[A, CSharp], &[A, CSharp, E]],
            &[&[A], &[A, CSharp]],
            &[],
        ]);
        let card = ScoreCard::from_sequence(engine.sequence());
        assert_eq!(card.frames.len(), 4);
        assert_eq!(card.frames[0].marks, vec!["X"]);
        assert_eq!(card.frames[1].marks, vec!["7", "/"]);
        assert_eq!(card.frames[2].marks, vec!["3", "4"]);
        assert!(card.frames[3].marks.is_empty());

        assert_eq!(card.frames[0].total, Some(20));
        assert_eq!(card.frames[1].total, Some(13));
        assert_eq!(card.frames[2].total, Some(7));
        assert_eq!(card.frames[3].total, None);

        assert_eq!(card.frames[1].running_total, Some(33));
        assert_eq!(card.frames[2].running_total, Some(40));
        assert_eq!(card.frames[3].running_total, None);
        assert_eq!(card.final_score, 40);
        assert_eq!(card.final_score, engine.final_score());
    }

    #[test]
    fn bonus_marks_fold_into_tenth() {
        let strike: &[&[crate::note::Note]] = &[&[A, CSharp, E]];
        let engine = play(&[strike; 12]);
        let card = ScoreCard::from_sequence(engine.sequence());
        assert_eq!(card.frames.len(), 10);
        assert_eq!(card.frames[9].marks, vec!["X", "X", "X"]);
        assert_eq!(card.frames[9].total, Some(30));
        assert_eq!(card.frames[9].running_total, Some(300));
        assert_eq!(card.final_score, 300);
    }

    #[test]
    fn empty_board() {
        let card = ScoreCard::from_sequence(&FrameSequence::new());
        assert!(card.frames.is_empty());
        assert_eq!(card.final_score, 0);
    }
}
