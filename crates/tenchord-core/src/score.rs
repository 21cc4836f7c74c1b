//! Per-frame score ledger.
//!
//! Rolls are cumulative: each entry is the frame's score after that guess,
//! so a later roll supersedes an earlier one instead of adding to it. The
//! points a single roll earned are the difference between consecutive
//! entries.

use serde::{Deserialize, Serialize};

/// Points for a perfect roll.
pub const MAX_ROLL: u8 = 10;

/// The rolls and bonus of one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    rolls: Vec<u8>,
    bonus: i32,
    total: i32,
}

impl Score {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cumulative frame scores, one per evaluated guess.
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Number of rolls taken.
    pub fn roll_count(&self) -> usize {
        self.rolls.len()
    }

    /// Frame score before bonus: the last roll, or 0.
    pub fn base_total(&self) -> i32 {
        self.rolls.last().map_or(0, |r| i32::from(*r))
    }

    /// Bonus received from later frames.
    pub fn bonus(&self) -> i32 {
        self.bonus
    }

    /// Base total plus bonus.
    pub fn total(&self) -> i32 {
        self.total
    }

    /// Perfect on the first roll.
    pub fn is_strike(&self) -> bool {
        self.rolls.len() == 1 && self.base_total() == i32::from(MAX_ROLL)
    }

    /// Perfect after exactly two rolls.
    pub fn is_spare(&self) -> bool {
        self.rolls.len() == 2 && self.base_total() == i32::from(MAX_ROLL)
    }

    /// Points earned by the latest roll alone. `None` before the first roll.
    ///
    /// Negative when the latest guess scored below the previous one.
    pub fn roll_score(&self) -> Option<i32> {
        self.roll_points(self.rolls.len().checked_sub(1)?)
    }

    /// Points earned by roll `n` (0-based) alone.
    pub fn roll_points(&self, n: usize) -> Option<i32> {
        let current = i32::from(*self.rolls.get(n)?);
        let previous = match n {
            0 => 0,
            _ => i32::from(self.rolls[n - 1]),
        };
        Some(current - previous)
    }

    /// Append a roll, capped at [`MAX_ROLL`].
    pub fn record_roll(&mut self, roll: u8) {
        self.rolls.push(roll.min(MAX_ROLL));
        self.recompute();
    }

    /// Add bonus points from a later roll.
    pub fn add_bonus(&mut self, points: i32) {
        self.bonus += points;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.total = self.base_total() + self.bonus;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_score() {
        let s = Score::new();
        assert!(s.rolls().is_empty());
        assert_eq!(s.base_total(), 0);
        assert_eq!(s.total(), 0);
        assert_eq!(s.bonus(), 0);
        assert_eq!(s.roll_score(), None);
        assert!(!s.is_strike());
        assert!(!s.is_spare());
    }

    #[test]
    fn rolls_supersede() {
        let mut s = Score::new();
        s.record_roll(3);
        assert_eq!(s.rolls(), &[3]);
        assert_eq!(s.total(), 3);
        assert_eq!(s.roll_score(), Some(3));

        s.record_roll(7);
        assert_eq!(s.rolls(), &[3, 7]);
        assert_eq!(s.base_total(), 7);
        assert_eq!(s.total(), 7);
        assert_eq!(s.roll_score(), Some(4));
    }

    #[test]
    fn worse_second_roll_is_negative() {
        let mut s = Score::new();
        s.record_roll(7);
        s.record_roll(3);
        assert_eq!(s.roll_score(), Some(-4));
        assert_eq!(s.total(), 3);
    }

    #[test]
    fn strike_and_spare() {
        let mut strike = Score::new();
        strike.record_roll(10);
        assert!(strike.is_strike());
        assert!(!strike.is_spare());

        let mut spare = Score::new();
        spare.record_roll(7);
        spare.record_roll(10);
        assert!(spare.is_spare());
        assert!(!spare.is_strike());

        spare.record_roll(10);
        assert!(!spare.is_spare(), "a third roll is neither");
    }

    #[test]
    fn bonus_adds_to_total() {
        let mut s = Score::new();
        s.record_roll(10);
        s.add_bonus(7);
        s.add_bonus(3);
        assert_eq!(s.bonus(), 10);
        assert_eq!(s.total(), 20);
    }

    #[test]
    fn third_roll_points() {
        let mut s = Score::new();
        s.record_roll(3);
        s.record_roll(7);
        s.record_roll(8);
        assert_eq!(s.roll_score(), Some(1));
        assert_eq!(s.roll_points(0), Some(3));
        assert_eq!(s.roll_points(1), Some(4));
        assert_eq!(s.roll_points(3), None);
    }

    #[test]
    fn roll_capped() {
        let mut s = Score::new();
        s.record_roll(13);
        assert_eq!(s.rolls(), &[10]);
    }
}
