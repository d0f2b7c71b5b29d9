//! Tab Completion Engine
//!
//! Provides completions for:
//! - Command keywords (e.g., he → help)
//! - Section names after `cd` (e.g., cd pro → cd projects)
//! - File names after `cat` (e.g., cat re → cat resume.txt)

use termfolio_core::builtins;
use termfolio_core::Section;

/// Completion state that tracks cycling through results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionState {
    /// The original input text when Tab was first pressed.
    pub original: String,
    /// All matching completions.
    pub completions: Vec<String>,
    /// Current index into completions (cycles on repeated Tab).
    pub index: usize,
}

impl CompletionState {
    fn new(original: &str, completions: Vec<String>) -> Option<Self> {
        if completions.is_empty() || (completions.len() == 1 && completions[0] == original) {
            return None;
        }
        Some(Self {
            original: original.to_string(),
            completions,
            index: 0,
        })
    }

    /// Advance to the next completion, cycling around.
    pub fn next(&mut self) -> &str {
        if self.completions.is_empty() {
            return &self.original;
        }
        self.index = (self.index + 1) % self.completions.len();
        &self.completions[self.index]
    }

    /// Get the current completion.
    pub fn current(&self) -> &str {
        if self.completions.is_empty() {
            &self.original
        } else {
            &self.completions[self.index]
        }
    }

    /// How many completions are available.
    pub fn len(&self) -> usize {
        self.completions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completions.is_empty()
    }

    /// The completed word of each candidate, for the "N matches" hint.
    pub fn labels(&self) -> Vec<&str> {
        self.completions
            .iter()
            .map(|c| c.rsplit_once(' ').map(|(_, r)| r).unwrap_or(c))
            .collect()
    }
}

/// Generate completions for the given input.
pub fn complete(input: &str) -> Option<CompletionState> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.split_once(char::is_whitespace) {
        None => complete_keyword(trimmed),
        Some((cmd, rest)) => {
            let partial = rest.trim_start();
            if partial.contains(char::is_whitespace) {
                return None;
            }
            match cmd.to_lowercase().as_str() {
                "cd" => complete_argument(trimmed, cmd, partial, Section::all().iter().map(|s| s.name())),
                "cat" => complete_argument(trimmed, cmd, partial, builtins::file_names()),
                _ => None,
            }
        }
    }
}

/// Complete the command keyword: `ab` → `about`.
fn complete_keyword(input: &str) -> Option<CompletionState> {
    let partial = input.to_lowercase();
    let matches: Vec<String> = builtins::command_names()
        .filter(|name| name.starts_with(&partial))
        .map(str::to_string)
        .collect();
    CompletionState::new(input, matches)
}

/// Complete the single argument of `cd` / `cat`.
fn complete_argument<'a>(
    input: &str,
    cmd: &str,
    partial: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<CompletionState> {
    let partial = partial.to_lowercase();
    let matches: Vec<String> = candidates
        .filter(|c| c.starts_with(&partial))
        .map(|c| format!("{} {}", cmd, c))
        .collect();
    CompletionState::new(input, matches)
}
