//! View / UI rendering.
//!
//! Screen layout, top to bottom: the portfolio page, a divider naming the
//! current section, the transcript pane (newest at the bottom), the input
//! row and the status bar.

use crate::app::{AppState, TermfolioApp};
use crate::helpers::{display_width, fit_width, format_duration_short, input_window, truncate_width};
use crate::renderer::{self, palette_for, tone_color};

use termfolio_core::Line;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType, SetTitle};
use crossterm::queue;

use std::io::{self, Write};
use std::time::Instant;

// ────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────

/// Row assignment for a terminal of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u16,
    pub page_rows: u16,
    pub divider_row: u16,
    pub transcript_top: u16,
    pub transcript_rows: u16,
    pub input_row: u16,
    pub status_row: u16,
}

impl Layout {
    pub fn compute(width: u16, height: u16) -> Self {
        // divider + input + status
        let avail = height.saturating_sub(3);
        let two_fifths = u16::try_from(u32::from(avail) * 2 / 5).unwrap_or(avail);
        let transcript_rows = two_fifths.max(1).min(avail);
        let page_rows = avail - transcript_rows;

        Self {
            width,
            page_rows,
            divider_row: page_rows,
            transcript_top: page_rows + 1,
            transcript_rows,
            input_row: page_rows + 1 + transcript_rows,
            status_row: page_rows + 2 + transcript_rows,
        }
    }
}

// ────────────────────────────────────────────────────────────────
// Title & text
// ────────────────────────────────────────────────────────────────

pub fn title(app: &TermfolioApp) -> String {
    format!("termfolio /// #{}", app.page.current_section())
}

/// The transcript pane's content: the intro banner, then every entry.
/// Only the last `rows` lines are returned.
pub fn transcript_view(app: &TermfolioApp, rows: usize) -> Vec<Line> {
    let mut lines = renderer::intro_lines(app.intro.visible());
    if app.state == AppState::Active {
        lines.push(Line::blank());
        lines.extend(renderer::transcript_lines(app.engine.transcript(), &app.prompt));
    }
    let skip = lines.len().saturating_sub(rows);
    lines.split_off(skip)
}

pub fn status_text(app: &TermfolioApp, now: Instant) -> String {
    let uptime = format_duration_short(now.saturating_duration_since(app.boot_instant).as_secs());

    let tab_hint = match &app.tab_state {
        Some(state) => format!("  │  Tab {}/{}", state.index + 1, state.len()),
        None => String::new(),
    };

    let notice = match &app.notice {
        Some((text, _)) => format!("  │  {}", text),
        None => String::new(),
    };

    format!(
        " {} cmd  │  ⏱ {}  │  #{}  │  🎨 {}{}{}  │  termfolio v{}",
        app.session_cmd_count,
        uptime,
        app.page.current_section(),
        app.theme_name.label(),
        tab_hint,
        notice,
        env!("CARGO_PKG_VERSION"),
    )
}

/// The status bar fitted to exactly `width` cells.
pub fn status_bar(app: &TermfolioApp, now: Instant, width: usize) -> String {
    fit_width(&status_text(app, now), width)
}

// ────────────────────────────────────────────────────────────────
// Draw
// ────────────────────────────────────────────────────────────────

pub fn draw<W: Write>(out: &mut W, app: &TermfolioApp, now: Instant) -> io::Result<()> {
    let layout = app.layout();
    let width = usize::from(layout.width);
    let palette = palette_for(app.theme_name);

    queue!(out, Hide, SetTitle(title(app)))?;

    // ── Page ──
    let visible = app.page.visible_lines();
    for row in 0..layout.page_rows {
        let line = visible.get(usize::from(row));
        draw_line(out, row, line, width, app)?;
    }

    // ── Divider ──
    let label = format!(" #{} ", app.page.current_section());
    let rule = "─".repeat(width.saturating_sub(display_width(&label) + 2));
    queue!(
        out,
        MoveTo(0, layout.divider_row),
        Clear(ClearType::CurrentLine),
        SetForegroundColor(palette.muted),
        Print(truncate_width(&format!("──{}{}", label, rule), width)),
    )?;

    // ── Transcript ──
    let lines = transcript_view(app, usize::from(layout.transcript_rows));
    for row in 0..layout.transcript_rows {
        let line = lines.get(usize::from(row));
        draw_line(out, layout.transcript_top + row, line, width, app)?;
    }

    // ── Input ──
    let prompt = format!("{} ", app.prompt);
    let prompt_len = display_width(&prompt);
    let input = app.engine.input();
    let (shown, cursor_col) = input_window(
        input.value(),
        input.cursor(),
        width.saturating_sub(prompt_len).max(1),
    );
    queue!(
        out,
        MoveTo(0, layout.input_row),
        Clear(ClearType::CurrentLine),
        SetForegroundColor(palette.prompt),
        Print(&prompt),
        SetForegroundColor(palette.plain),
        Print(&shown),
    )?;

    // ── Status bar ──
    queue!(
        out,
        MoveTo(0, layout.status_row),
        SetBackgroundColor(palette.bar_bg),
        SetForegroundColor(palette.bar_fg),
        Print(status_bar(app, now, width)),
        ResetColor,
    )?;

    let cursor_x = (prompt_len + cursor_col).min(width.saturating_sub(1));
    queue!(out, MoveTo(cursor_x as u16, layout.input_row), Show)?;
    out.flush()
}

fn draw_line<W: Write>(
    out: &mut W,
    row: u16,
    line: Option<&Line>,
    width: usize,
    app: &TermfolioApp,
) -> io::Result<()> {
    queue!(out, MoveTo(0, row), Clear(ClearType::CurrentLine))?;
    let Some(line) = line else {
        return Ok(());
    };
    for span in renderer::clip_line(line, width) {
        queue!(
            out,
            SetForegroundColor(tone_color(span.tone, app.theme_name)),
            Print(span.text),
        )?;
    }
    queue!(out, ResetColor)
}
