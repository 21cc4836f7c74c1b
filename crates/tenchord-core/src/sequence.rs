//! Ordered storage and traversal of frames.
//!
//! Frames are appended one at a time and never removed short of a reset, so
//! a frame's index is always its position in the underlying vector and
//! neighbours are plain index arithmetic.

use tracing::info;

use crate::chord::ChordGenerator;
use crate::error::{QuizError, QuizResult};
use crate::event::{EventLog, QuizEvent, QuizEventKind};
use crate::frame::{Frame, FrameState, LAST_BONUS_FRAME, TENTH_FRAME, max_attempts};

/// The frames of one game, in order.
#[derive(Debug, Clone, Default)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    events: EventLog,
}

impl FrameSequence {
    /// An empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame for `chord_name`, or for a random chord when `None`.
    ///
    /// Fails with [`QuizError::SequenceComplete`] once the last frame is
    /// terminal, which also caps the sequence at twelve frames.
    pub fn create_next(
        &mut self,
        generator: &mut dyn ChordGenerator,
        chord_name: Option<&str>,
    ) -> QuizResult<&Frame> {
        if self.frames.last().is_some_and(|last| self.is_last(last)) {
            return Err(QuizError::SequenceComplete);
        }

        let chord = match chord_name {
            Some(name) => generator.build(name)?,
            None => generator.random(),
        };
        let index = self.frames.len();
        info!(index, chord = chord.name(), "frame created");
        self.events.push(QuizEventKind::FrameCreated {
            index,
            chord: chord.name().to_string(),
        });
        self.frames.push(Frame::new(index, chord));
        Ok(&self.frames[index])
    }

    /// The frame at `index`.
    pub fn get(&self, index: usize) -> QuizResult<&Frame> {
        self.frames.get(index).ok_or(QuizError::NotFound(index))
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> QuizResult<&mut Frame> {
        self.frames.get_mut(index).ok_or(QuizError::NotFound(index))
    }

    /// The frame before `frame`, if any.
    pub fn prev(&self, frame: &Frame) -> Option<&Frame> {
        frame.index().checked_sub(1).and_then(|i| self.frames.get(i))
    }

    /// The frame after `frame`, if created yet.
    pub fn next(&self, frame: &Frame) -> Option<&Frame> {
        self.frames.get(frame.index() + 1)
    }

    /// The first frame, if any.
    pub fn first(&self) -> Option<&Frame> {
        self.frames.first()
    }

    /// The most recently created frame, if any.
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Whether `frame` opens the game.
    pub fn is_first(&self, frame: &Frame) -> bool {
        frame.index() == 0
    }

    /// Whether no frame may follow `frame`.
    ///
    /// The tenth frame ends the game unless it was a strike or spare. The
    /// first bonus frame ends it unless it was a strike, and always after a
    /// spare in the tenth, whose single bonus roll it carries. The second
    /// bonus frame is always last.
    pub fn is_last(&self, frame: &Frame) -> bool {
        match frame.index() {
            TENTH_FRAME => !frame.is_strike() && !frame.is_spare(),
            10 => !frame.is_strike() || self.tenth_is_spare(),
            LAST_BONUS_FRAME => true,
            _ => false,
        }
    }

    /// Maximum guesses for the frame at `index`.
    pub fn max_attempts(&self, index: usize) -> u32 {
        max_attempts(index, self.tenth_is_spare())
    }

    /// Lifecycle state of the frame at `index`.
    ///
    /// A frame with a successor is resolved: its rolls already fed the
    /// bonus of earlier frames and fixed the attempt limits of later ones.
    pub fn state(&self, index: usize) -> QuizResult<FrameState> {
        let frame = self.get(index)?;
        let exhausted = frame.attempts_used() >= self.max_attempts(index);
        let superseded = index + 1 < self.frames.len();
        Ok(if exhausted || superseded || frame.is_strike() {
            FrameState::Resolved
        } else if frame.attempts_used() == 0 {
            FrameState::Fresh
        } else {
            FrameState::PartiallyGuessed
        })
    }

    fn tenth_is_spare(&self) -> bool {
        self.frames.get(TENTH_FRAME).is_some_and(Frame::is_spare)
    }

    /// All frames in order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Iterate over the frames in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Number of frames created.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frame exists.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Remove every frame.
    pub fn reset(&mut self) {
        info!(frames = self.frames.len(), "sequence reset");
        self.frames.clear();
        self.events.push(QuizEventKind::SequenceReset);
    }

    pub(crate) fn notify(&mut self, kind: QuizEventKind) {
        self.events.push(kind);
    }

    /// Pending change notifications.
    pub fn events(&self) -> &[QuizEvent] {
        self.events.events()
    }

    /// Take every pending change notification.
    pub fn drain_events(&mut self) -> Vec<QuizEvent> {
        self.events.drain()
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
