//! Change notifications for display layers.
//!
//! The frame sequence records what changed; a UI drains the log after each
//! operation and redraws the affected frames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizEventKind {
    /// A frame was appended to the sequence.
    FrameCreated {
        /// Index of the new frame.
        index: usize,
        /// Name of its chord.
        chord: String,
    },
    /// A guess was scored.
    GuessEvaluated {
        /// Index of the guessed frame.
        index: usize,
        /// Points earned by this roll alone.
        points: i32,
        /// Frame total after the roll.
        total: i32,
    },
    /// A later roll paid bonus into an earlier frame.
    BonusAwarded {
        /// Frame whose roll paid the bonus.
        from: usize,
        /// Frame that received it.
        to: usize,
        /// Points awarded.
        points: i32,
    },
    /// Every frame was cleared.
    SequenceReset,
}

impl QuizEventKind {
    /// Whether the event touches the frame at `index`.
    pub fn involves(&self, index: usize) -> bool {
        match self {
            Self::FrameCreated { index: i, .. } | Self::GuessEvaluated { index: i, .. } => {
                *i == index
            }
            Self::BonusAwarded { from, to, .. } => *from == index || *to == index,
            Self::SequenceReset => true,
        }
    }
}

/// A recorded change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizEvent {
    /// When it happened.
    pub at: DateTime<Utc>,
    /// What happened.
    pub kind: QuizEventKind,
}

impl QuizEvent {
    /// Stamp `kind` with the current time.
    pub fn now(kind: QuizEventKind) -> Self {
        Self { at: Utc::now(), kind }
    }
}

/// Pending change notifications.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<QuizEvent>,
}

impl EventLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event.
    pub fn push(&mut self, kind: QuizEventKind) {
        self.events.push(QuizEvent::now(kind));
    }

    /// Events not yet drained.
    pub fn events(&self) -> &[QuizEvent] {
        &self.events
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<QuizEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
