//! Terminal renderer: converts transcript entries and page lines into
//! styled rows, and maps `Tone`s onto the active color theme.

use crate::helpers::{char_width, display_width};

use crossterm::style::Color;
use termfolio_core::transcript::Transcript;
use termfolio_core::{Line, Span, Tone};

// ════════════════════════════════════════════════════════════════════
// Theme System
// ════════════════════════════════════════════════════════════════════

/// A named terminal color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    Default,
    Cyberpunk,
    Solarized,
    Monokai,
}

impl ThemeName {
    pub fn all() -> &'static [ThemeName] {
        &[ThemeName::Default, ThemeName::Cyberpunk, ThemeName::Solarized, ThemeName::Monokai]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeName::Default => "Default",
            ThemeName::Cyberpunk => "Cyberpunk",
            ThemeName::Solarized => "Solarized",
            ThemeName::Monokai => "Monokai",
        }
    }

    pub fn from_str(s: &str) -> Option<ThemeName> {
        match s.to_lowercase().as_str() {
            "default" => Some(ThemeName::Default),
            "cyberpunk" | "cyber" => Some(ThemeName::Cyberpunk),
            "solarized" | "solar" => Some(ThemeName::Solarized),
            "monokai" | "mono" => Some(ThemeName::Monokai),
            _ => None,
        }
    }

    /// The next theme in `all()` order, wrapping around.
    pub fn cycle(&self) -> ThemeName {
        let all = Self::all();
        let idx = all.iter().position(|t| t == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

/// Colors for each output tone plus the chrome around the panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub plain: Color,
    pub heading: Color,
    pub command: Color,
    pub info: Color,
    pub highlight: Color,
    pub error: Color,
    pub prompt: Color,
    pub muted: Color,
    pub bar_fg: Color,
    pub bar_bg: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

pub fn palette_for(theme: ThemeName) -> Palette {
    match theme {
        ThemeName::Default => Palette {
            plain:     rgb(0xd1, 0xd5, 0xdb),
            heading:   rgb(0xf9, 0xfa, 0xfb),
            command:   rgb(0x4a, 0xde, 0x80),   // green-400
            info:      rgb(0x60, 0xa5, 0xfa),   // blue-400
            highlight: rgb(0xfa, 0xcc, 0x15),   // yellow-400
            error:     rgb(0xf8, 0x71, 0x71),   // red-400
            prompt:    rgb(0x4a, 0xde, 0x80),
            muted:     rgb(0x6b, 0x72, 0x80),
            bar_fg:    rgb(0xe5, 0xe7, 0xeb),
            bar_bg:    rgb(0x1f, 0x29, 0x37),
        },
        ThemeName::Cyberpunk => Palette {
            plain:     rgb(0x00, 0xff, 0xd9),   // neon cyan
            heading:   rgb(0xff, 0x00, 0xcc),   // magenta
            command:   rgb(0x00, 0xff, 0x73),   // neon green
            info:      rgb(0x33, 0x66, 0xff),   // deep blue
            highlight: rgb(0xff, 0xd9, 0x00),   // electric yellow
            error:     rgb(0xff, 0x26, 0x66),   // hot pink
            prompt:    rgb(0xff, 0x00, 0xcc),
            muted:     rgb(0x59, 0x4d, 0x73),
            bar_fg:    rgb(0x00, 0xff, 0xd9),
            bar_bg:    rgb(0x0d, 0x05, 0x1a),
        },
        ThemeName::Solarized => Palette {
            plain:     rgb(0x83, 0x94, 0x96),   // base0
            heading:   rgb(0x93, 0xa1, 0xa1),   // base1
            command:   rgb(0x85, 0x99, 0x00),   // green
            info:      rgb(0x26, 0x8b, 0xd2),   // blue
            highlight: rgb(0xb5, 0x89, 0x00),   // yellow
            error:     rgb(0xdc, 0x32, 0x2f),   // red
            prompt:    rgb(0x2a, 0xa1, 0x98),   // cyan
            muted:     rgb(0x58, 0x6e, 0x75),   // base01
            bar_fg:    rgb(0xee, 0xe8, 0xd5),   // base2
            bar_bg:    rgb(0x07, 0x36, 0x42),   // base02
        },
        ThemeName::Monokai => Palette {
            plain:     rgb(0xf8, 0xf8, 0xf2),
            heading:   rgb(0xae, 0x81, 0xff),
            command:   rgb(0xa6, 0xe2, 0x2e),
            info:      rgb(0x66, 0xd9, 0xef),
            highlight: rgb(0xe6, 0xdb, 0x74),
            error:     rgb(0xf9, 0x26, 0x72),
            prompt:    rgb(0xa6, 0xe2, 0x2e),
            muted:     rgb(0x75, 0x71, 0x5e),
            bar_fg:    rgb(0xf8, 0xf8, 0xf2),
            bar_bg:    rgb(0x27, 0x28, 0x22),
        },
    }
}

/// Color for a tone under the given theme.
pub fn tone_color(tone: Tone, theme: ThemeName) -> Color {
    let p = palette_for(theme);
    match tone {
        Tone::Plain => p.plain,
        Tone::Heading => p.heading,
        Tone::Command => p.command,
        Tone::Info => p.info,
        Tone::Highlight => p.highlight,
        Tone::Error => p.error,
    }
}

// ════════════════════════════════════════════════════════════════════
// Transcript → Lines
// ════════════════════════════════════════════════════════════════════

/// Flatten the transcript into display lines: each entry is its prompt
/// echo followed by its output.
pub fn transcript_lines(transcript: &Transcript, prompt: &str) -> Vec<Line> {
    let mut lines = Vec::with_capacity(transcript.len() * 4);
    for entry in transcript.entries() {
        lines.push(prompt_line(prompt, &entry.input));
        lines.extend(entry.output.to_lines());
    }
    lines
}

/// `$ input` as a styled line.
pub fn prompt_line(prompt: &str, input: &str) -> Line {
    Line::styled(format!("{} ", prompt), Tone::Command).push(input, Tone::Plain)
}

/// The typed-out intro as lines. The first line is the greeting.
pub fn intro_lines(visible: &str) -> Vec<Line> {
    visible
        .split('\n')
        .enumerate()
        .map(|(i, row)| {
            let tone = if i == 0 { Tone::Heading } else { Tone::Highlight };
            Line::styled(row, tone)
        })
        .collect()
}

// ════════════════════════════════════════════════════════════════════
// Clipping
// ════════════════════════════════════════════════════════════════════

/// Cut a line to at most `width` cells, splitting a span if needed. A wide
/// char that would straddle the edge is dropped.
pub fn clip_line(line: &Line, width: usize) -> Vec<Span> {
    let mut out = Vec::with_capacity(line.spans.len());
    let mut left = width;
    for span in &line.spans {
        if left == 0 {
            break;
        }
        let n = display_width(&span.text);
        if n <= left {
            out.push(span.clone());
            left -= n;
        } else {
            let mut text = String::new();
            for c in span.text.chars() {
                let w = char_width(c);
                if w > left {
                    break;
                }
                text.push(c);
                left -= w;
            }
            out.push(Span::new(text, span.tone));
            left = 0;
        }
    }
    out
}
