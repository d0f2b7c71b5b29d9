//! Termfolio Bridge library target.
//!
//! Exposes the UI modules for integration tests. The binary entry point
//! is in `main.rs`.

pub mod app;
pub mod completer;
pub mod helpers;
pub mod keyboard;
pub mod messages;
pub mod page_view;
pub mod renderer;
pub mod update;
pub mod util;
pub mod view_ui;
