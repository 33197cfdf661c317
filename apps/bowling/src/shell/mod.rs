//! Line-oriented driver for a single game.
//!
//! Reads one throw per line, re-prompts on anything the game rejects, and
//! reports the running score after every accepted throw. Generic over the
//! reader and writer so sessions can be scripted in tests and in `--throws`
//! mode.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::config::ShellConfig;
use crate::domain::Game;
use crate::error::AppError;
use crate::errors::domain::DomainError;

pub const BANNER: &str = "Game start!";
pub const NOT_A_NUMBER: &str = "Please enter a number.";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Throw(i32),
    Quit,
    NotANumber(String),
}

pub fn parse_line(line: &str, quit_word: &str) -> Command {
    let text = line.trim();
    if text == quit_word {
        return Command::Quit;
    }
    match text.parse::<i32>() {
        Ok(pins) => Command::Throw(pins),
        Err(_) => Command::NotANumber(text.to_string()),
    }
}

/// How a session went.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub final_score: u16,
    /// True when the tenth frame closed; false on quit or end of input.
    pub completed: bool,
    pub accepted: u32,
    pub rejected: u32,
}

pub struct Shell<R, W> {
    config: ShellConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: ShellConfig, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    /// Drive `game` until it finishes, the quit word is entered, or input runs out.
    pub fn run(&mut self, game: &mut Game) -> Result<SessionSummary, AppError> {
        writeln!(self.output, "{BANNER}")?;

        let mut summary = SessionSummary::default();
        let mut line = String::new();

        while game.can_continue() {
            if self.config.show_prompt {
                write!(self.output, "{}", self.config.prompt)?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!(frame = game.active_frame_number(), "input closed");
                break;
            }

            match parse_line(&line, &self.config.quit_word) {
                Command::Quit => {
                    info!(frame = game.active_frame_number(), "game ended early");
                    break;
                }
                Command::NotANumber(text) => {
                    warn!(input = %text, "input is not a number");
                    summary.rejected += 1;
                    writeln!(self.output, "{NOT_A_NUMBER}")?;
                }
                Command::Throw(pins) => match game.record_throw(pins) {
                    Ok(()) => {
                        summary.accepted += 1;
                        writeln!(self.output, "Current score: {}", game.current_score())?;
                    }
                    Err(err @ DomainError::InvalidScore { .. }) => {
                        warn!(%err, "throw rejected");
                        summary.rejected += 1;
                        writeln!(self.output, "{err}")?;
                    }
                    Err(err) => return Err(err.into()),
                },
            }
        }

        summary.final_score = game.current_score();
        summary.completed = !game.can_continue();
        info!(
            score = summary.final_score,
            completed = summary.completed,
            accepted = summary.accepted,
            rejected = summary.rejected,
            "session finished"
        );
        writeln!(
            self.output,
            "Game over. Final score: {}. Thanks for playing!",
            summary.final_score
        )?;
        self.output.flush()?;

        Ok(summary)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
