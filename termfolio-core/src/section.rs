//! Named page sections and the anchor collaborator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scrollable region of the portfolio page. Order matches page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Certifications,
    Contact,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::About,
            Section::Experience,
            Section::Projects,
            Section::Skills,
            Section::Certifications,
            Section::Contact,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Certifications => "certifications",
            Section::Contact => "contact",
        }
    }

    /// Case-insensitive lookup against the allow-list.
    pub fn from_name(s: &str) -> Option<Section> {
        let lower = s.to_lowercase();
        Section::all().iter().copied().find(|sec| sec.name() == lower)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whatever hosts the page. The dispatcher only ever asks it to scroll.
pub trait SectionAnchors {
    /// Bring `section` into view. Returns `false` when the host has no
    /// element for that section.
    fn scroll_into_view(&mut self, section: Section) -> bool;
}
