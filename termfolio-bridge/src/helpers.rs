//! Shared utility functions.
//!
//! Zero UI dependencies. Used by the status bar and the input row.
//! Widths are terminal cells, not chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// ────────────────────────────────────────────────────────────────
// Formatting
// ────────────────────────────────────────────────────────────────

pub fn format_duration_short(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else {
        let h = secs / 3600;
        let m = (secs % 3600) / 60;
        format!("{}h {}m", h, m)
    }
}

// ────────────────────────────────────────────────────────────────
// Cell widths
// ────────────────────────────────────────────────────────────────

/// Terminal cells taken by `s`. CJK and emoji count as two.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Terminal cells taken by `c`. Control characters count as zero.
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Cut `s` to at most `max` cells, ending in `…` when something was cut.
pub fn truncate_width(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = char_width(c);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// `s` cut or space-padded to exactly `width` cells.
pub fn fit_width(s: &str, width: usize) -> String {
    let mut out = truncate_width(s, width);
    let used = display_width(&out);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

/// The slice of an input line that fits in `width` cells while keeping
/// the cursor visible. `cursor` is a char index. Returns the visible text
/// and the cursor column within it, in cells.
pub fn input_window(value: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let chars: Vec<char> = value.chars().collect();
    let cursor = cursor.min(chars.len());

    // The cursor itself needs a cell, or two when it sits on a wide char.
    let mut used = chars.get(cursor).map_or(1, |&c| char_width(c).max(1));
    let mut start = cursor;
    while start > 0 && used + char_width(chars[start - 1]) <= width {
        start -= 1;
        used += char_width(chars[start]);
    }

    let mut visible = String::new();
    let mut shown = 0;
    for &c in &chars[start..] {
        let w = char_width(c);
        if shown + w > width {
            break;
        }
        visible.push(c);
        shown += w;
    }
    let col = chars[start..cursor].iter().map(|&c| char_width(c)).sum();
    (visible, col)
}
