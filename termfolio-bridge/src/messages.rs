//! Message enum and notice helpers.

use crate::app::TermfolioApp;

use std::time::Instant;

// ────────────────────────────────────────────────────────────────
// Message enum
// ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    // ── Input line editing ──
    InsertChar(char),
    InsertText(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // ── Commands ──
    InputSent,
    HistoryUp,
    HistoryDown,
    TabComplete,
    ClearScreen,

    // ── Page ──
    PageUp,
    PageDown,
    Resized(u16, u16),

    // ── Appearance ──
    CycleTheme,

    // ── Lifecycle ──
    Tick,
    Quit,
}

/// What the event loop should do after a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

// ────────────────────────────────────────────────────────────────
// Notices
// ────────────────────────────────────────────────────────────────

/// How long a status-bar notice stays up.
pub const NOTICE_TTL_MS: u64 = 4000;

/// Show a transient hint in the status bar.
pub fn set_notice(app: &mut TermfolioApp, text: impl Into<String>, now: Instant) {
    app.notice = Some((text.into(), now));
}

/// Drop the notice once it has been up long enough.
pub fn expire_notice(app: &mut TermfolioApp, now: Instant) -> bool {
    let expired = matches!(
        &app.notice,
        Some((_, since)) if now.saturating_duration_since(*since).as_millis() >= u128::from(NOTICE_TTL_MS)
    );
    if expired {
        app.notice = None;
    }
    expired
}
