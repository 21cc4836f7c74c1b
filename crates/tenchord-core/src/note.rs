//! Pitch classes.
//!
//! Notes are the twelve pitch classes of equal temperament. Names parse
//! with any number of sharps or flats (`C#`, `Db`, `B#`) and always display
//! with sharps, so enharmonic spellings compare equal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, QuizResult};

/// One of the twelve pitch classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Note {
    /// C.
    C,
    /// C sharp / D flat.
    #[serde(rename = "C#")]
    CSharp,
    /// D.
    D,
    /// D sharp / E flat.
    #[serde(rename = "D#")]
    DSharp,
    /// E.
    E,
    /// F.
    F,
    /// F sharp / G flat.
    #[serde(rename = "F#")]
    FSharp,
    /// G.
    G,
    /// G sharp / A flat.
    #[serde(rename = "G#")]
    GSharp,
    /// A.
    A,
    /// A sharp / B flat.
    #[serde(rename = "A#")]
    ASharp,
    /// B.
    B,
}

impl Note {
    /// All pitch classes in ascending order from C.
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::CSharp,
        Note::D,
        Note::DSharp,
        Note::E,
        Note::F,
        Note::FSharp,
        Note::G,
        Note::GSharp,
        Note::A,
        Note::ASharp,
        Note::B,
    ];

    /// Semitones above C (0-11).
    pub fn semitone(self) -> u8 {
        self as u8
    }

    /// The pitch class a number of semitones above C, wrapping at the octave.
    pub fn from_semitone(semitone: i32) -> Self {
        Self::ALL[semitone.rem_euclid(12) as usize]
    }

    /// The pitch class `interval` semitones above this one.
    pub fn transpose(self, interval: i32) -> Self {
        Self::from_semitone(i32::from(self.semitone()) + interval)
    }

    /// Display name using sharps.
    pub fn name(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::CSharp => "C#",
            Self::D => "D",
            Self::DSharp => "D#",
            Self::E => "E",
            Self::F => "F",
            Self::FSharp => "F#",
            Self::G => "G",
            Self::GSharp => "G#",
            Self::A => "A",
            Self::ASharp => "A#",
            Self::B => "B",
        }
    }

    /// Split a leading note name off `s`, returning the note and the rest.
    ///
    /// Used by chord symbols like `C#m7`, where the root is glued to the kind.
    pub(crate) fn split_prefix(s: &str) -> Option<(Self, &str)> {
        let mut chars = s.char_indices();
        let (_, letter) = chars.next()?;
        let base: i32 = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };

        let mut offset = 0;
        let mut end = letter.len_utf8();
        for (i, c) in chars {
            match c {
                '#' | '♯' => offset += 1,
                // A lone lowercase "b" after the letter reads as flat; "b" is
                // never a chord-kind prefix.
                'b' | '♭' => offset -= 1,
                _ => break,
            }
            end = i + c.len_utf8();
        }
        Some((Self::from_semitone(base + offset), &s[end..]))
    }
}

impl FromStr for Note {
    type Err = QuizError;

    fn from_str(s: &str) -> QuizResult<Self> {
        let trimmed = s.trim();
        match Self::split_prefix(trimmed) {
            Some((note, "")) => Ok(note),
            _ => Err(QuizError::UnknownNote(s.to_string())),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a list of note names.
pub fn parse_notes<S: AsRef<str>>(names: &[S]) -> QuizResult<Vec<Note>> {
    names.iter().map(|n| n.as_ref().parse()).collect()
}

/// Join notes for display, e.g. `A, C#, E`.
pub fn join_notes(notes: &[Note]) -> String {
    notes
        .iter()
        .map(|n| n.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_naturals_and_sharps() {
        assert_eq!("A".parse::<Note>().unwrap(), Note::A);
        assert_eq!("C#".parse::<Note>().unwrap(), Note::CSharp);
        assert_eq!("f#".parse::<Note>().unwrap(), Note::FSharp);
    }

    #[test]
    fn flats_are_enharmonic() {
        assert_eq!("Db".parse::<Note>().unwrap(), Note::CSharp);
        assert_eq!("Bb".parse::<Note>().unwrap(), Note::ASharp);
        assert_eq!("Cb".parse::<Note>().unwrap(), Note::B);
        assert_eq!("B#".parse::<Note>().unwrap(), Note::C);
    }

    #[test]
    fn rejects_garbage() {
        assert!("H".parse::<Note>().is_err());
        assert!("".parse::<Note>().is_err());
        assert!("C#x".parse::<Note>().is_err());
    }

    #[test]
    fn transpose_wraps() {
        assert_eq!(Note::A.transpose(4), Note::CSharp);
        assert_eq!(Note::B.transpose(1), Note::C);
        assert_eq!(Note::C.transpose(-1), Note::B);
    }

    #[test]
    fn split_prefix_leaves_kind() {
        assert_eq!(Note::split_prefix("C#m7"), Some((Note::CSharp, "m7")));
        assert_eq!(Note::split_prefix("Bbmaj7"), Some((Note::ASharp, "maj7")));
        assert_eq!(Note::split_prefix("G7"), Some((Note::G, "7")));
    }

    #[test]
    fn display_and_join() {
        assert_eq!(Note::GSharp.to_string(), "G#");
        assert_eq!(join_notes(&[Note::A, Note::CSharp, Note::E]), "A, C#, E");
    }

    #[test]
    fn parse_list() {
        let notes = parse_notes(&["A", "C", "E"]).unwrap();
        assert_eq!(notes, vec![Note::A, Note::C, Note::E]);
        assert_eq!(
            parse_notes(&["A", "X"]),
            Err(QuizError::UnknownNote("X".to_string()))
        );
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&Note::CSharp).unwrap();
        assert_eq!(json, "\"C#\"");
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Note::CSharp);
    }
}
