//! Runtime configuration for the shell and binary.

use clap::ValueEnum;

use crate::error::AppError;

pub const DEFAULT_QUIT_WORD: &str = "quit";
pub const DEFAULT_PROMPT: &str = "Pins knocked down: ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Input line that ends the game early.
    pub quit_word: String,
    pub prompt: String,
    /// Print the prompt before each read; off when throws come from a script.
    pub show_prompt: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            quit_word: DEFAULT_QUIT_WORD.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            show_prompt: true,
        }
    }
}

impl ShellConfig {
    /// The quit word must be non-empty and must not parse as a throw.
    pub fn with_quit_word(mut self, quit_word: impl Into<String>) -> Result<Self, AppError> {
        let quit_word = quit_word.into().trim().to_string();
        if quit_word.is_empty() {
            return Err(AppError::config("quit word must not be empty"));
        }
        if quit_word.parse::<i64>().is_ok() {
            return Err(AppError::config(format!(
                "quit word {quit_word:?} would shadow a throw"
            )));
        }
        self.quit_word = quit_word;
        Ok(self)
    }

    pub fn with_show_prompt(mut self, show_prompt: bool) -> Self {
        self.show_prompt = show_prompt;
        self
    }
}
