//! Keyboard dispatch.
//!
//! Ctrl+C / Ctrl+D / Esc quit, Ctrl+L clears the transcript, Up/Down walk
//! the command history, Tab completes, PgUp/PgDn scroll the page, F2
//! switches theme. While the intro is still typing, any key finishes it
//! first.

use crate::messages::Message;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a terminal event to a message. Returns `None` for events we ignore
/// (key releases, mouse, focus).
pub fn map_event(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
        Event::Paste(text) => {
            // Flatten so a paste never submits.
            let flat = text.replace(['\r', '\n'], " ");
            Some(Message::InsertText(flat))
        }
        Event::Resize(w, h) => Some(Message::Resized(*w, *h)),
        _ => None,
    }
}

pub fn map_key(key: &KeyEvent) -> Option<Message> {
    let modifiers = key.modifiers;

    // ── Ctrl combos ──
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(Message::Quit),
            KeyCode::Char('l') => Some(Message::ClearScreen),
            KeyCode::Char('a') => Some(Message::CursorHome),
            KeyCode::Char('e') => Some(Message::CursorEnd),
            _ => None,
        };
    }

    // ── Bare keys ──
    match key.code {
        KeyCode::Esc => Some(Message::Quit),
        KeyCode::Enter => Some(Message::InputSent),
        KeyCode::Up => Some(Message::HistoryUp),
        KeyCode::Down => Some(Message::HistoryDown),
        KeyCode::Tab => Some(Message::TabComplete),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Delete => Some(Message::Delete),
        KeyCode::Left => Some(Message::CursorLeft),
        KeyCode::Right => Some(Message::CursorRight),
        KeyCode::Home => Some(Message::CursorHome),
        KeyCode::End => Some(Message::CursorEnd),
        KeyCode::PageUp => Some(Message::PageUp),
        KeyCode::PageDown => Some(Message::PageDown),
        KeyCode::F(2) => Some(Message::CycleTheme),
        KeyCode::Char(c) => Some(Message::InsertChar(c)),
        _ => None,
    }
}
