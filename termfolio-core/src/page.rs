//! The portfolio page as a flat list of styled lines with section anchors.
//!
//! The page is laid out once per terminal width. Each `Section` owns a
//! contiguous run of lines starting at its anchor.

use crate::content::{self, CONTACT};
use crate::output::{Line, Tone};
use crate::section::Section;

use unicode_width::UnicodeWidthStr;

/// Cells in a skill bar.
pub const SKILL_BAR_WIDTH: usize = 20;

/// Narrowest width we lay out for; anything smaller is treated as this.
const MIN_WIDTH: usize = 20;

#[derive(Debug, Clone)]
pub struct Page {
    lines: Vec<Line>,
    anchors: Vec<(Section, usize)>,
    width: usize,
}

impl Page {
    pub fn build(width: usize) -> Self {
        let width = width.max(MIN_WIDTH);
        let mut b = PageBuilder {
            lines: Vec::new(),
            anchors: Vec::new(),
            width,
        };

        for section in Section::all() {
            b.anchor(*section);
            match section {
                Section::Home => home(&mut b),
                Section::About => about(&mut b),
                Section::Experience => experience(&mut b),
                Section::Projects => projects(&mut b),
                Section::Skills => skills(&mut b),
                Section::Certifications => certifications(&mut b),
                Section::Contact => contact(&mut b),
            }
            b.blank();
        }

        Page {
            lines: b.lines,
            anchors: b.anchors,
            width,
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// First line of `section`.
    pub fn anchor(&self, section: Section) -> Option<usize> {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, line)| *line)
    }

    /// The section that contains `line`.
    pub fn section_at(&self, line: usize) -> Section {
        self.anchors
            .iter()
            .take_while(|(_, start)| *start <= line)
            .last()
            .map(|(s, _)| *s)
            .unwrap_or(Section::Home)
    }
}

/// `level` percent of `width` cells, rounded to the nearest cell.
pub fn skill_bar(level: u8, width: usize) -> String {
    let level = usize::from(level.min(100));
    let filled = (level * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

struct PageBuilder {
    lines: Vec<Line>,
    anchors: Vec<(Section, usize)>,
    width: usize,
}

impl PageBuilder {
    fn anchor(&mut self, section: Section) {
        self.anchors.push((section, self.lines.len()));
    }

    fn line(&mut self, line: Line) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::blank());
    }

    fn heading(&mut self, title: &str) {
        let rule = "─".repeat(self.width.saturating_sub(title.width() + 4).min(40));
        self.line(
            Line::styled("── ", Tone::Info)
                .push(title, Tone::Heading)
                .push(format!(" {}", rule), Tone::Info),
        );
        self.blank();
    }

    /// Word-wrap `text` with `indent` spaces in front of every line.
    fn paragraph(&mut self, text: &str, indent: usize, tone: Tone) {
        let avail = self.width.saturating_sub(indent).max(10);
        let pad = " ".repeat(indent);
        for row in textwrap::wrap(text, avail) {
            self.line(Line::styled(format!("{}{}", pad, row), tone));
        }
    }

    fn bullets(&mut self, marker: &str, items: &[&str], tone: Tone) {
        let indent = 2 + marker.width() + 1;
        let avail = self.width.saturating_sub(indent).max(10);
        for item in items {
            for (i, row) in textwrap::wrap(item, avail).into_iter().enumerate() {
                let lead = if i == 0 {
                    format!("  {} ", marker)
                } else {
                    " ".repeat(indent)
                };
                self.line(Line::styled(lead, Tone::Command).push(row.into_owned(), tone));
            }
        }
    }
}

fn home(b: &mut PageBuilder) {
    b.blank();
    b.line(Line::styled(format!("  {}", content::NAME), Tone::Heading));
    b.line(Line::styled(format!("  {}", content::TITLE), Tone::Highlight));
    b.line(Line::styled(format!("  {}", content::TAGLINE), Tone::Plain));
    b.blank();
    b.line(
        Line::styled("  Type ", Tone::Info)
            .push("help", Tone::Command)
            .push(" below, or ", Tone::Info)
            .push("cd <section>", Tone::Command)
            .push(" to jump around. PgUp/PgDn scrolls.", Tone::Info),
    );
}

fn about(b: &mut PageBuilder) {
    b.heading("About Me");
    for (title, text) in content::ABOUT {
        b.line(Line::styled(format!("  {}", title), Tone::Highlight));
        b.paragraph(text, 2, Tone::Plain);
        b.blank();
    }
    b.bullets("◆", content::FOCUS_AREAS, Tone::Plain);
    b.blank();

    b.line(Line::styled("  Education", Tone::Highlight));
    for edu in content::EDUCATION {
        b.line(Line::styled(format!("  {}", edu.degree), Tone::Command));
        b.line(Line::styled(
            format!("    {} · {}", edu.institution, edu.score),
            Tone::Plain,
        ));
    }
}

fn experience(b: &mut PageBuilder) {
    b.heading("Experience");
    for (i, job) in content::EXPERIENCE.iter().enumerate() {
        if i > 0 {
            b.blank();
        }
        b.line(Line::styled(format!("  {}", job.company), Tone::Command));
        b.line(Line::styled(format!("  {}", job.position), Tone::Heading));
        b.line(Line::styled(
            format!("  {} · {}", job.duration, job.location),
            Tone::Info,
        ));
        b.paragraph(job.description, 2, Tone::Plain);
        b.bullets("•", job.responsibilities, Tone::Plain);
        b.paragraph(&format!("Tech: {}", job.technologies.join(", ")), 2, Tone::Highlight);
    }
}

fn projects(b: &mut PageBuilder) {
    b.heading("Projects");
    for (i, project) in content::PROJECTS.iter().enumerate() {
        if i > 0 {
            b.blank();
        }
        b.line(
            Line::styled(format!("  {}", project.title), Tone::Command)
                .push(format!("  [{}]", project.category), Tone::Info),
        );
        b.paragraph(project.description, 2, Tone::Plain);
        b.bullets("•", project.details, Tone::Plain);
        b.paragraph(&project.technologies.join(" · "), 2, Tone::Highlight);
    }
}

fn skills(b: &mut PageBuilder) {
    b.heading("Skills");
    let name_width = content::SKILL_CATEGORIES
        .iter()
        .flat_map(|c| c.skills.iter())
        .map(|s| s.name.width())
        .max()
        .unwrap_or(0);

    for (i, category) in content::SKILL_CATEGORIES.iter().enumerate() {
        if i > 0 {
            b.blank();
        }
        b.line(Line::styled(format!("  {}", category.name), Tone::Highlight));
        for skill in category.skills {
            b.line(
                Line::styled(
                    format!(
                        "    {}{} ",
                        skill.name,
                        " ".repeat(name_width.saturating_sub(skill.name.width()))
                    ),
                    Tone::Plain,
                )
                .push(skill_bar(skill.level, SKILL_BAR_WIDTH), Tone::Command)
                .push(format!(" {:>3}%", skill.level), Tone::Info),
            );
        }
    }
}

fn certifications(b: &mut PageBuilder) {
    b.heading("Certifications");
    for (i, cert) in content::CERTIFICATIONS.iter().enumerate() {
        if i > 0 {
            b.blank();
        }
        b.line(
            Line::styled("  ✓ ", Tone::Command).push(cert.name, Tone::Heading),
        );
        b.line(Line::styled(
            format!(
                "    {} · issued {} · expires {}",
                cert.provider, cert.issue_date, cert.expiry_date
            ),
            Tone::Info,
        ));
        b.line(Line::styled(
            format!("    Credential ID: {}", cert.credential_id),
            Tone::Plain,
        ));
        b.paragraph(cert.description, 4, Tone::Plain);
    }
}

fn contact(b: &mut PageBuilder) {
    b.heading("Get In Touch");
    let rows = [
        ("Email", CONTACT.email),
        ("Phone", CONTACT.phone),
        ("Website", CONTACT.website),
        ("GitHub", CONTACT.github),
        ("LinkedIn", CONTACT.linkedin),
    ];
    for (label, value) in rows {
        b.line(
            Line::styled(format!("  {:<9}", format!("{}:", label)), Tone::Command)
                .push(value, Tone::Plain),
        );
    }
    b.blank();
    b.line(
        Line::styled("  Checking availability for ", Tone::Plain)
            .push(content::NAME, Tone::Highlight)
            .push("...", Tone::Plain),
    );
    b.bullets("✓", content::AVAILABILITY, Tone::Command);
    b.blank();
    b.line(
        Line::styled("  STATUS: ", Tone::Heading).push("Ready for new opportunities", Tone::Highlight),
    );
    b.line(
        Line::styled("  RESPONSE TIME: ", Tone::Heading)
            .push("Usually within 24 hours", Tone::Highlight),
    );
}
