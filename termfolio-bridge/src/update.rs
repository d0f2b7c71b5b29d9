//! Update logic: the central message handler.
//!
//! Every key first finishes the intro if it is still typing, then is
//! handled normally, so visitors can start typing straight away.

use crate::app::{AppState, TermfolioApp};
use crate::completer;
use crate::messages::{expire_notice, set_notice, Flow, Message};

use termfolio_core::input::Motion;
use termfolio_core::Submission;

use std::time::Instant;

pub fn update(app: &mut TermfolioApp, message: Message, now: Instant) -> Flow {
    if app.state == AppState::Intro && !matches!(message, Message::Tick | Message::Resized(..)) {
        app.intro.finish();
        app.state = AppState::Active;
        app.dirty = true;
    }

    match message {
        // ────────────────────────────────────────────────────
        // Input editing
        // ────────────────────────────────────────────────────

        Message::InsertChar(c) => {
            app.engine.insert_char(c);
            edited(app);
        }

        Message::InsertText(text) => {
            app.engine.insert_str(&text);
            edited(app);
        }

        Message::Backspace => {
            app.engine.backspace();
            edited(app);
        }

        Message::Delete => {
            app.engine.delete();
            edited(app);
        }

        Message::CursorLeft => {
            app.engine.move_cursor(Motion::Left);
            edited(app);
        }

        Message::CursorRight => {
            app.engine.move_cursor(Motion::Right);
            edited(app);
        }

        Message::CursorHome => {
            app.engine.move_cursor(Motion::Home);
            edited(app);
        }

        Message::CursorEnd => {
            app.engine.move_cursor(Motion::End);
            edited(app);
        }

        // ────────────────────────────────────────────────────
        // Submit
        // ────────────────────────────────────────────────────

        Message::InputSent => {
            app.tab_state = None;
            match app.engine.submit(now) {
                Submission::Empty => {}
                Submission::Appended { navigate } => {
                    app.session_cmd_count += 1;
                    if let Some((section, _)) = navigate {
                        set_notice(app, format!("→ #{}", section), now);
                    }
                }
                Submission::Cleared => {
                    app.session_cmd_count += 1;
                }
            }
            app.dirty = true;
        }

        // ────────────────────────────────────────────────────
        // History navigation
        // ────────────────────────────────────────────────────

        Message::HistoryUp => {
            if app.engine.history_up() {
                app.tab_state = None;
                app.dirty = true;
            }
        }

        Message::HistoryDown => {
            if app.engine.history_down() {
                app.tab_state = None;
                app.dirty = true;
            }
        }

        // ────────────────────────────────────────────────────
        // Tab Completion
        // ────────────────────────────────────────────────────

        Message::TabComplete => {
            if app.engine.input().value().trim().is_empty() {
                return Flow::Continue;
            }

            if let Some(ref mut state) = app.tab_state {
                let next = state.next().to_string();
                app.engine.set_input(next);
            } else if let Some(state) = completer::complete(app.engine.input().value()) {
                let first = state.current().to_string();
                let hint = (state.len() > 1)
                    .then(|| format!("{} matches: {}", state.len(), state.labels().join("  ")));
                app.engine.set_input(first);
                app.tab_state = Some(state);
                if let Some(hint) = hint {
                    set_notice(app, hint, now);
                }
            }
            app.dirty = true;
        }

        // ────────────────────────────────────────────────────
        // Screen clear
        // ────────────────────────────────────────────────────

        Message::ClearScreen => {
            app.engine.clear_transcript();
            app.tab_state = None;
            app.dirty = true;
        }

        // ────────────────────────────────────────────────────
        // Page
        // ────────────────────────────────────────────────────

        Message::PageUp => {
            app.page.page_up();
            app.dirty = true;
        }

        Message::PageDown => {
            app.page.page_down();
            app.dirty = true;
        }

        Message::Resized(width, height) => {
            app.width = width;
            app.height = height;
            let layout = app.layout();
            app.page.resize(layout.width, layout.page_rows);
            app.dirty = true;
        }

        // ────────────────────────────────────────────────────
        // Theme
        // ────────────────────────────────────────────────────

        Message::CycleTheme => {
            app.theme_name = app.theme_name.cycle();
            tracing::debug!(theme = app.theme_name.label(), "theme switched");
            set_notice(app, format!("🎨 {}", app.theme_name.label()), now);
            app.dirty = true;
        }

        // ────────────────────────────────────────────────────
        // Frame tick
        // ────────────────────────────────────────────────────

        Message::Tick => {
            if app.state == AppState::Intro {
                if app.intro.tick(now, &mut app.rng) {
                    app.dirty = true;
                }
                if app.intro.is_complete() {
                    app.state = AppState::Active;
                }
            }

            if app.engine.run_due(now, &mut app.page) > 0 {
                app.dirty = true;
            }
            if app.page.is_scrolling() {
                app.page.tick(now);
                app.dirty = true;
            }
            if expire_notice(app, now) {
                app.dirty = true;
            }
        }

        Message::Quit => {
            tracing::info!(commands = app.session_cmd_count, "quit requested");
            return Flow::Quit;
        }
    }

    Flow::Continue
}

/// Any edit ends a Tab cycle.
fn edited(app: &mut TermfolioApp) {
    app.tab_state = None;
    app.dirty = true;
}
