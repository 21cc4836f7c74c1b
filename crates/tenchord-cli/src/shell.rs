//! Line-oriented command interpreter around a [`Game`].

use tracing::debug;

use tenchord_core::note::join_notes;
use tenchord_core::{Game, GuessOutcome, QuizError, QuizEvent, QuizEventKind};

use crate::render;

const HELP: &str = "\
Commands:
  guess <notes>   Name the chord's notes, e.g. 'guess A C# E' (alias: g)
  next            Go to the next frame (alias: n)
  prev            Go back to the previous frame (alias: p)
  board           Show the score board (alias: b)
  show            Show the current frame
  new             Start a new game
  help            Show this help
  quit            Leave (alias: q)";

/// Interactive quiz session driven by text commands.
pub struct QuizShell {
    game: Game,
    done: bool,
}

impl QuizShell {
    /// Wrap a freshly started game.
    pub fn new(game: Game) -> Self {
        Self { game, done: false }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Whether the player asked to leave.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Text shown when the session starts.
    pub fn intro(&self) -> String {
        render::frame_view(&self.game, self.game.current())
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> Result<String, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        let response = match cmd.as_str() {
            "guess" | "g" => self.do_guess(rest),
            "next" | "n" => self.do_next(),
            "prev" | "p" => self.do_prev(),
            "board" | "b" => Ok(render::board(&self.game.score_card())),
            "show" => Ok(render::frame_view(&self.game, self.game.current())),
            "new" => self.do_new(),
            "help" | "h" | "?" => Ok(HELP.to_string()),
            "quit" | "q" => {
                self.done = true;
                Ok("Goodbye!".to_string())
            }
            _ => Err(format!("unknown command: {cmd} (type 'help')")),
        };
        self.take_events();
        response
    }

    /// Drain pending change notifications, logging each one.
    fn take_events(&mut self) -> Vec<QuizEvent> {
        let events = self.game.drain_events();
        for event in &events {
            debug!(at = %event.at, kind = ?event.kind, "quiz event");
        }
        events
    }

    fn do_guess(&mut self, rest: &str) -> Result<String, String> {
        let names: Vec<&str> = rest
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .collect();
        if names.is_empty() {
            return Err("usage: guess <note> [note...]".into());
        }
        if self.game.is_over() {
            return Err("the game is over, type 'new' to play again".into());
        }

        let outcome = self.game.guess_names(&names).map_err(|e| match e {
            QuizError::GuessNotAllowed { .. } => {
                "this frame is finished, type 'next' to continue".to_string()
            }
            other => other.to_string(),
        })?;
        let events = self.take_events();
        Ok(self.describe(&outcome, &events))
    }

    fn describe(&self, outcome: &GuessOutcome, events: &[QuizEvent]) -> String {
        let frame = self.game.current();
        let mut lines = Vec::new();

        let hits = if outcome.correct.is_empty() {
            "none".to_string()
        } else {
            join_notes(&outcome.correct)
        };
        lines.push(format!(
            "Correct: {hits} ({} of {}), frame score {}",
            outcome.correct.len(),
            frame.target_notes().len(),
            outcome.frame_score
        ));
        if outcome.strike {
            lines.push("Strike!".to_string());
        } else if outcome.spare {
            lines.push("Spare!".to_string());
        } else if outcome.resolved {
            lines.push(format!(
                "The notes were: {}",
                join_notes(frame.target_notes())
            ));
        }
        for event in events {
            if let QuizEventKind::BonusAwarded { to, points, .. } = event.kind {
                lines.push(format!("Frame {} collects {points} bonus.", to + 1));
            }
        }
        lines.push(render::board(&self.game.score_card()));

        if self.game.is_over() {
            lines.push(format!("Game over! Final score: {}", self.game.final_score()));
        } else if self.game.can_guess() {
            let max = self.game.engine().max_attempts(frame.index());
            lines.push(format!("Try again (attempt {} of {max}).", outcome.attempt + 1));
        } else {
            lines.push("Type 'next' for the next frame.".to_string());
        }
        lines.join("\n")
    }

    fn do_next(&mut self) -> Result<String, String> {
        if self.game.is_over() && !self.game.can_advance() {
            return Err("the game is over, type 'new' to play again".into());
        }
        self.game.advance().map_err(|e| match e {
            QuizError::FrameInProgress { .. } => "finish this frame first".to_string(),
            other => other.to_string(),
        })?;
        Ok(render::frame_view(&self.game, self.game.current()))
    }

    fn do_prev(&mut self) -> Result<String, String> {
        if self.game.go_back().is_none() {
            return Err("already at the first frame".into());
        }
        Ok(render::frame_view(&self.game, self.game.current()))
    }

    fn do_new(&mut self) -> Result<String, String> {
        self.game.reset().map_err(|e| e.to_string())?;
        Ok(format!("New game.\n{}", self.intro()))
    }
}
