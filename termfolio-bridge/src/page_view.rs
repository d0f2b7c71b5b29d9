//! Scrollable viewport over the portfolio page.
//!
//! Navigation scrolls smoothly: the offset eases from where it is to the
//! target anchor over `SCROLL_DURATION` using an exponential ease-out.
//! The animation clock starts on the first `tick` after the request, so
//! `scroll_into_view` needs no time source of its own.

use termfolio_core::page::Page;
use termfolio_core::{Line, Section, SectionAnchors};

use std::time::{Duration, Instant};

pub const SCROLL_DURATION: Duration = Duration::from_millis(1200);

/// Exponential ease-out, clamped to 1.0.
pub fn ease_out_expo(t: f32) -> f32 {
    (1.001 - 2f32.powf(-10.0 * t)).min(1.0)
}

#[derive(Debug, Clone)]
struct Glide {
    section: Section,
    from: f32,
    to: f32,
    started: Option<Instant>,
}

pub struct PageView {
    page: Page,
    offset: f32,
    viewport: usize,
    glide: Option<Glide>,
}

impl PageView {
    pub fn new(width: u16, viewport: u16) -> Self {
        Self {
            page: Page::build(usize::from(width)),
            offset: 0.0,
            viewport: usize::from(viewport).max(1),
            glide: None,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// First visible line.
    pub fn offset(&self) -> usize {
        self.offset.round() as usize
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    pub fn max_offset(&self) -> usize {
        self.page.len().saturating_sub(self.viewport)
    }

    pub fn is_scrolling(&self) -> bool {
        self.glide.is_some()
    }

    /// The section under the top of the viewport.
    pub fn current_section(&self) -> Section {
        self.page.section_at(self.offset())
    }

    pub fn visible_lines(&self) -> &[Line] {
        let lines = self.page.lines();
        let start = self.offset().min(lines.len());
        let end = (start + self.viewport).min(lines.len());
        &lines[start..end]
    }

    /// Manual scroll. Cancels any glide in flight.
    pub fn scroll_by(&mut self, delta: isize) {
        self.glide = None;
        let target = self.offset() as isize + delta;
        self.offset = target.clamp(0, self.max_offset() as isize) as f32;
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.step() as isize));
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.step() as isize);
    }

    fn step(&self) -> usize {
        self.viewport.saturating_sub(2).max(1)
    }

    /// Re-lay the page for a new terminal size, keeping the current
    /// section at the top.
    pub fn resize(&mut self, width: u16, viewport: u16) {
        let section = self.current_section();
        let glide_to = self.glide.as_ref().map(|g| g.section);

        if usize::from(width) != self.page.width() {
            self.page = Page::build(usize::from(width));
        }
        self.viewport = usize::from(viewport).max(1);
        self.glide = None;
        self.offset = self.clamped_anchor(section);

        if let Some(target) = glide_to {
            self.scroll_into_view(target);
        }
    }

    /// Where the glide in flight is headed.
    pub fn target(&self) -> Option<Section> {
        self.glide.as_ref().map(|g| g.section)
    }

    fn clamped_anchor(&self, section: Section) -> f32 {
        let line = self.page.anchor(section).unwrap_or(0);
        line.min(self.max_offset()) as f32
    }

    /// Advance the glide. Returns `true` while the offset is still moving.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(glide) = self.glide.as_mut() else {
            return false;
        };
        let started = *glide.started.get_or_insert(now);
        let t = now.saturating_duration_since(started).as_secs_f32() / SCROLL_DURATION.as_secs_f32();
        let eased = ease_out_expo(t);
        self.offset = glide.from + (glide.to - glide.from) * eased;

        if t >= 1.0 {
            self.offset = glide.to;
            self.glide = None;
            return false;
        }
        true
    }
}

impl SectionAnchors for PageView {
    fn scroll_into_view(&mut self, section: Section) -> bool {
        if self.page.anchor(section).is_none() {
            return false;
        }
        let to = self.clamped_anchor(section);
        tracing::debug!(%section, from = self.offset, to, "page glide");
        self.glide = Some(Glide {
            section,
            from: self.offset,
            to,
            started: None,
        });
        true
    }
}
