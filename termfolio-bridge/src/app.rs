//! Application state and boot logic.

use crate::completer::CompletionState;
use crate::messages::NOTICE_TTL_MS;
use crate::page_view::PageView;
use crate::renderer::ThemeName;
use crate::view_ui::Layout;

use termfolio_core::intro::{Typewriter, INTRO_TEXT};
use termfolio_core::{Config, TermfolioEngine};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Tick interval while the intro types or the page glides (~60 FPS).
pub const FRAME: Duration = Duration::from_millis(16);
/// Longest sleep between ticks, so the uptime keeps moving.
pub const IDLE_REDRAW: Duration = Duration::from_secs(1);

// ────────────────────────────────────────────────────────────────
// App State
// ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// The banner is still typing out.
    Intro,
    Active,
}

// ────────────────────────────────────────────────────────────────
// TermfolioApp
// ────────────────────────────────────────────────────────────────

pub struct TermfolioApp {
    pub engine: TermfolioEngine,
    pub page: PageView,
    pub intro: Typewriter,
    pub rng: StdRng,

    /// Active color theme
    pub theme_name: ThemeName,
    pub prompt: String,

    /// Tab completion state (active while cycling through completions)
    pub tab_state: Option<CompletionState>,

    /// Transient status bar hint and when it was set.
    pub notice: Option<(String, Instant)>,

    /// Status bar data
    pub session_cmd_count: usize,
    pub boot_instant: Instant,

    pub width: u16,
    pub height: u16,
    pub state: AppState,
    /// Set whenever something visible changed.
    pub dirty: bool,
}

impl TermfolioApp {
    pub fn layout(&self) -> Layout {
        Layout::compute(self.width, self.height)
    }

    /// How long the event loop may sleep before the next `Tick` is due.
    pub fn next_wake(&self, now: Instant) -> Duration {
        if self.state == AppState::Intro || self.page.is_scrolling() {
            return FRAME;
        }
        let notice_expiry = self
            .notice
            .as_ref()
            .map(|(_, since)| *since + Duration::from_millis(NOTICE_TTL_MS));
        [self.engine.next_due(), notice_expiry]
            .into_iter()
            .flatten()
            .min()
            .map_or(IDLE_REDRAW, |at| at.saturating_duration_since(now).min(IDLE_REDRAW))
    }
}

// ────────────────────────────────────────────────────────────────
// Boot
// ────────────────────────────────────────────────────────────────

pub fn boot(config: &Config, width: u16, height: u16, now: Instant) -> TermfolioApp {
    boot_with_rng(config, width, height, now, StdRng::from_entropy())
}

/// Boot with a caller-supplied RNG so intro timing is reproducible.
pub fn boot_with_rng(
    config: &Config,
    width: u16,
    height: u16,
    now: Instant,
    rng: StdRng,
) -> TermfolioApp {
    let theme_name = ThemeName::from_str(&config.theme).unwrap_or_else(|| {
        tracing::warn!("Unknown theme '{}', falling back to default", config.theme);
        ThemeName::Default
    });

    let layout = Layout::compute(width, height);
    let intro = Typewriter::new(INTRO_TEXT, &config.intro, now);
    let state = if intro.is_complete() {
        AppState::Active
    } else {
        AppState::Intro
    };

    tracing::info!(
        theme = theme_name.label(),
        width,
        height,
        scroll_delay_ms = config.scroll_delay_ms,
        "termfolio booted"
    );

    TermfolioApp {
        engine: TermfolioEngine::new(config),
        page: PageView::new(layout.width, layout.page_rows),
        intro,
        rng,
        theme_name,
        prompt: config.prompt.clone(),
        tab_state: None,
        notice: None,
        session_cmd_count: 0,
        boot_instant: now,
        width,
        height,
        state,
        dirty: true,
    }
}
