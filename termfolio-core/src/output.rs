//! Display-ready command output.
//!
//! Canned responses are plain text. A few commands (`help`, `ls`, the `cd`
//! confirmation) return a structured fragment so the renderer can colour
//! individual spans.

use serde::{Deserialize, Serialize};

/// Semantic colour role of a span. The bridge maps tones to theme colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Plain,
    Heading,
    /// Command names and section names.
    Command,
    Info,
    Highlight,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// One rendered line of a fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn styled(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            spans: vec![Span::new(text, tone)],
        }
    }

    pub fn push(mut self, text: impl Into<String>, tone: Tone) -> Self {
        self.spans.push(Span::new(text, tone));
        self
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// What a command prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    Text(String),
    /// A single error line (unknown command, bad argument...).
    Error(String),
    Fragment(Vec<Line>),
}

impl Output {
    pub fn text(s: impl Into<String>) -> Self {
        Output::Text(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        Output::Error(s.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Output::Error(_))
    }

    /// Flatten to plain text, one `\n` between fragment lines.
    pub fn plain_text(&self) -> String {
        match self {
            Output::Text(s) | Output::Error(s) => s.clone(),
            Output::Fragment(lines) => lines
                .iter()
                .map(Line::text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Convert into styled lines regardless of the variant.
    pub fn to_lines(&self) -> Vec<Line> {
        match self {
            Output::Text(s) => s.lines().map(|l| Line::styled(l, Tone::Plain)).collect(),
            Output::Error(s) => s.lines().map(|l| Line::styled(l, Tone::Error)).collect(),
            Output::Fragment(lines) => lines.clone(),
        }
    }
}
