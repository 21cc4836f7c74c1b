//! Chords and chord generation.
//!
//! A [`Chord`] is the target of one frame: a display name and the ordered
//! set of notes the player has to find. Frames get their chords from a
//! [`ChordGenerator`], either by name or at random.

use std::fmt;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{QuizError, QuizResult};
use crate::note::Note;

/// Chord quality, defined by its intervals above the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordKind {
    /// Major triad.
    Major,
    /// Minor triad.
    Minor,
    /// Diminished triad.
    Diminished,
    /// Augmented triad.
    Augmented,
    /// Dominant seventh.
    Dominant7,
    /// Major seventh.
    Major7,
    /// Minor seventh.
    Minor7,
    /// Suspended second.
    Sus2,
    /// Suspended fourth.
    Sus4,
}

impl ChordKind {
    /// Every supported kind.
    pub const ALL: [ChordKind; 9] = [
        ChordKind::Major,
        ChordKind::Minor,
        ChordKind::Diminished,
        ChordKind::Augmented,
        ChordKind::Dominant7,
        ChordKind::Major7,
        ChordKind::Minor7,
        ChordKind::Sus2,
        ChordKind::Sus4,
    ];

    /// Semitone intervals above the root, root included.
    pub fn intervals(self) -> &'static [i32] {
        match self {
            Self::Major => &[0, 4, 7],
            Self::Minor => &[0, 3, 7],
            Self::Diminished => &[0, 3, 6],
            Self::Augmented => &[0, 4, 8],
            Self::Dominant7 => &[0, 4, 7, 10],
            Self::Major7 => &[0, 4, 7, 11],
            Self::Minor7 => &[0, 3, 7, 10],
            Self::Sus2 => &[0, 2, 7],
            Self::Sus4 => &[0, 5, 7],
        }
    }

    /// Short code used in chord names, e.g. `Maj` in `A Maj`.
    pub fn code(self) -> &'static str {
        match self {
            Self::Major => "Maj",
            Self::Minor => "min",
            Self::Diminished => "dim",
            Self::Augmented => "aug",
            Self::Dominant7 => "7",
            Self::Major7 => "Maj7",
            Self::Minor7 => "min7",
            Self::Sus2 => "sus2",
            Self::Sus4 => "sus4",
        }
    }

    /// Human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Major => "major triad",
            Self::Minor => "minor triad",
            Self::Diminished => "diminished triad",
            Self::Augmented => "augmented triad",
            Self::Dominant7 => "dominant seventh",
            Self::Major7 => "major seventh",
            Self::Minor7 => "minor seventh",
            Self::Sus2 => "suspended second",
            Self::Sus4 => "suspended fourth",
        }
    }

    /// Parse a kind code. Single-letter `M`/`m` are case-sensitive, the rest
    /// are not. An empty code is a major triad.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "" | "M" => return Some(Self::Major),
            "m" | "-" => return Some(Self::Minor),
            "M7" => return Some(Self::Major7),
            "m7" | "-7" => return Some(Self::Minor7),
            "°" => return Some(Self::Diminished),
            "+" => return Some(Self::Augmented),
            _ => {}
        }
        match code.to_lowercase().as_str() {
            "maj" | "major" => Some(Self::Major),
            "min" | "minor" => Some(Self::Minor),
            "dim" => Some(Self::Diminished),
            "aug" => Some(Self::Augmented),
            "7" | "dom7" => Some(Self::Dominant7),
            "maj7" => Some(Self::Major7),
            "min7" => Some(Self::Minor7),
            "sus2" => Some(Self::Sus2),
            "sus4" | "sus" => Some(Self::Sus4),
            _ => None,
        }
    }
}

impl fmt::Display for ChordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A named chord and its target notes, root first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    name: String,
    notes: Vec<Note>,
}

impl Chord {
    /// Create a chord from an explicit note set.
    pub fn new(name: impl Into<String>, notes: Vec<Note>) -> QuizResult<Self> {
        if notes.is_empty() {
            return Err(QuizError::EmptyChord);
        }
        Ok(Self {
            name: name.into(),
            notes,
        })
    }

    /// Build the chord of `kind` rooted at `root`.
    pub fn from_parts(root: Note, kind: ChordKind) -> Self {
        Self {
            name: format!("{root} {}", kind.code()),
            notes: kind.intervals().iter().map(|i| root.transpose(*i)).collect(),
        }
    }

    /// Parse a chord name such as `A Maj`, `C# min7`, `Bb`, `Am`, or `G7`.
    pub fn parse(name: &str) -> QuizResult<Self> {
        let unknown = || QuizError::UnknownChord(name.to_string());
        let mut words = name.split_whitespace();
        let first = words.next().ok_or_else(unknown)?;
        let second = words.next();
        if words.next().is_some() {
            return Err(unknown());
        }

        let (root, glued) = Note::split_prefix(first).ok_or_else(unknown)?;
        let code = match (glued, second) {
            (glued, None) => glued,
            ("", Some(code)) => code,
            _ => return Err(unknown()),
        };
        let kind = ChordKind::parse(code).ok_or_else(unknown)?;
        Ok(Self::from_parts(root, kind))
    }

    /// Display name, e.g. `A Maj`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Target notes, root first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Whether `note` belongs to the chord.
    pub fn contains(&self, note: Note) -> bool {
        self.notes.contains(&note)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Source of chords for new frames.
pub trait ChordGenerator {
    /// Produce a chord for a frame created without an explicit chord.
    fn random(&mut self) -> Chord;

    /// Build the chord with the given name.
    fn build(&self, name: &str) -> QuizResult<Chord> {
        Chord::parse(name)
    }
}

/// Random root and kind drawn from a seeded RNG.
#[derive(Debug, Clone)]
pub struct RandomChords {
    rng: StdRng,
    kinds: Vec<ChordKind>,
}

impl RandomChords {
    /// Create a generator seeded for reproducible quizzes.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            kinds: ChordKind::ALL.to_vec(),
        }
    }

    /// Restrict the kinds drawn. An empty list keeps every kind.
    pub fn with_kinds(mut self, kinds: &[ChordKind]) -> Self {
        if !kinds.is_empty() {
            self.kinds = kinds.to_vec();
        }
        self
    }
}

impl ChordGenerator for RandomChords {
    fn random(&mut self) -> Chord {
        let root = Note::ALL[self.rng.random_range(0..Note::ALL.len())];
        let kind = self.kinds[self.rng.random_range(0..self.kinds.len())];
        Chord::from_parts(root, kind)
    }
}

/// Always hands out the same chord.
#[derive(Debug, Clone)]
pub struct FixedChords {
    chord: Chord,
}

impl FixedChords {
    /// Use `chord` for every random request.
    pub fn new(chord: Chord) -> Self {
        Self { chord }
    }

    /// Parse `name` and use it for every random request.
    pub fn named(name: &str) -> QuizResult<Self> {
        Chord::parse(name).map(Self::new)
    }
}

impl ChordGenerator for FixedChords {
    fn random(&mut self) -> Chord {
        self.chord.clone()
    }
}
