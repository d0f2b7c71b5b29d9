//! Typed-out intro banner.
//!
//! Characters appear one at a time with a random per-character delay. The
//! only promise is that the full text is eventually shown; `finish` shows
//! it immediately.

use crate::config::IntroConfig;
use rand::Rng;
use std::time::{Duration, Instant};

pub const INTRO_TEXT: &str = "Hello. I'm Saurav Singh.
Cloud Engineer & DevOps Specialist.
AWS | GCP | Azure | Terraform | Kubernetes

Type 'help' to see available commands or 'about' to learn more about me.";

#[derive(Debug, Clone)]
pub struct Typewriter {
    text: &'static str,
    /// Byte offset of the revealed prefix; always on a char boundary.
    revealed: usize,
    next_due: Instant,
    min_char: Duration,
    max_char: Duration,
}

impl Typewriter {
    pub fn new(text: &'static str, config: &IntroConfig, now: Instant) -> Self {
        let mut tw = Self {
            text,
            revealed: 0,
            next_due: now + Duration::from_millis(config.start_delay_ms),
            min_char: Duration::from_millis(config.min_char_ms),
            max_char: Duration::from_millis(config.max_char_ms.max(config.min_char_ms)),
        };
        if !config.enabled {
            tw.finish();
        }
        tw
    }

    /// Reveal every character that has come due by `now`. Returns `true`
    /// if anything new became visible.
    pub fn tick<R: Rng>(&mut self, now: Instant, rng: &mut R) -> bool {
        let start = self.revealed;
        while !self.is_complete() && self.next_due <= now {
            self.advance_one();
            let delay = if self.min_char == self.max_char {
                self.min_char
            } else {
                rng.gen_range(self.min_char..=self.max_char)
            };
            self.next_due += delay;
        }
        self.revealed != start
    }

    fn advance_one(&mut self) {
        if let Some(c) = self.text[self.revealed..].chars().next() {
            self.revealed += c.len_utf8();
        }
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.revealed]
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.text.len()
    }

    pub fn finish(&mut self) {
        self.revealed = self.text.len();
    }

    pub fn text(&self) -> &'static str {
        self.text
    }
}
