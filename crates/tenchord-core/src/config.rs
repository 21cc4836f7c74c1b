//! Configuration for a quiz session.

use crate::chord::{ChordGenerator, ChordKind, FixedChords, RandomChords};
use crate::error::QuizResult;

/// Configuration for a game.
#[derive(Debug, Clone, Default)]
pub struct QuizConfig {
    /// RNG seed for reproducible chords. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Use this chord for every frame instead of random ones.
    pub fixed_chord: Option<String>,
    /// Chord kinds to draw from. Empty means every kind.
    pub kinds: Vec<ChordKind>,
}

impl QuizConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Quiz the same chord in every frame.
    pub fn with_fixed_chord(mut self, name: impl Into<String>) -> Self {
        self.fixed_chord = Some(name.into());
        self
    }

    /// Restrict the chord kinds drawn at random.
    pub fn with_kinds(mut self, kinds: &[ChordKind]) -> Self {
        self.kinds = kinds.to_vec();
        self
    }

    /// Build the chord generator this configuration describes.
    pub fn generator(&self) -> QuizResult<Box<dyn ChordGenerator>> {
        if let Some(name) = &self.fixed_chord {
            return Ok(Box::new(FixedChords::named(name)?));
        }
        let chords = match self.seed {
            Some(seed) => RandomChords::from_seed(seed),
            None => RandomChords::from_entropy(),
        };
        Ok(Box::new(chords.with_kinds(&self.kinds)))
    }
}
