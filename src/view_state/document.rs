//! The portfolio laid out as terminal rows.
//!
//! `Document` is pure layout: it word-wraps every section at the viewport
//! width and records where each section, card and clickable row ended up.
//! Styling, the typewriter text and scroll-dependent shifts are applied by
//! the renderer on top of these rows, so the layout only changes when the
//! viewport or the content does.

use super::hit_test::text_width;
use super::mount::PageLayout;
use super::parallax::MAX_CARD_SHIFT;
use super::registry::LayoutMeasure;
use super::reveal::CardId;
use super::tracker::NavBar;
use super::types::{Extent, Viewport};
use crate::model::{Portfolio, SectionId};
use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Blank columns on either side of document text.
pub const SIDE_MARGIN: u16 = 2;

/// Indent of card rows, leaving room for the parallax shift in both directions.
pub const CARD_INDENT: u16 = MAX_CARD_SHIFT + SIDE_MARGIN;

const HERO_BUTTON: &str = "[ View My Work ]";
const CONTACT_BLURB: &str =
    "I'm always open to discussing new opportunities and interesting projects.";

/// Presentation role of a row, mapped to a style by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRole {
    /// Empty spacing row.
    Blank,
    /// Hero greeting.
    Title,
    /// The reserved headline row filled in by the typewriter.
    Typewriter,
    /// Section or footer column heading.
    Heading,
    /// Line under a section heading.
    Subtitle,
    /// Card title.
    CardTitle,
    /// Company or degree line.
    Accent,
    /// Regular text.
    Body,
    /// Dates, tech lists and other secondary text.
    Muted,
    /// Clickable button.
    Button,
    /// Link text (external, or a footer quick link).
    Link,
    /// Horizontal separator.
    Rule,
}

/// One laid-out row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Text, already wrapped to fit.
    pub text: String,
    /// Leading blank columns.
    pub indent: u16,
    /// Presentation role.
    pub role: RowRole,
    /// Card the row belongs to, if any.
    pub card: Option<CardId>,
}

impl Row {
    fn blank() -> Self {
        Self {
            text: String::new(),
            indent: 0,
            role: RowRole::Blank,
            card: None,
        }
    }
}

/// A clickable document region that scrolls to a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotspot {
    /// Document row.
    pub row: u32,
    /// Screen columns.
    pub columns: Range<u16>,
    /// Section to scroll to.
    pub target: SectionId,
}

/// The laid-out page.
///
/// # Invariants
/// - Sections appear in `SectionId::ALL` order, contiguous, starting at row 0.
/// - Every section is at least one viewport tall.
/// - The footer follows the last section and is not a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    rows: Vec<Row>,
    sections: Vec<(SectionId, Extent)>,
    cards: Vec<(CardId, Extent)>,
    hotspots: Vec<Hotspot>,
    footer: Extent,
    viewport: Viewport,
}

impl Document {
    /// Lay out `portfolio` for `viewport`.
    pub fn build(portfolio: &Portfolio, viewport: Viewport, nav_bar: NavBar) -> Self {
        let width = text_width(viewport);
        let min_height = u32::from(viewport.height.max(1));
        let nav_height = nav_bar.height_for(viewport);
        let mut page = Builder::new(width);
        let mut sections = Vec::with_capacity(SectionId::ALL.len());

        for id in SectionId::ALL {
            let top = page.len();
            match id {
                SectionId::About => {
                    let mut hero = Builder::new(width);
                    hero.hero(portfolio);
                    let content = u32::from(nav_height) + hero.len();
                    let padding = min_height.saturating_sub(content) / 2;
                    page.blanks(u32::from(nav_height) + padding);
                    page.append(hero);
                }
                other => {
                    page.section_header(other);
                    page.section_body(other, portfolio);
                }
            }
            page.blank();
            page.blanks(min_height.saturating_sub(page.len() - top));
            sections.push((id, Extent::new(top, page.len() - top)));
        }

        let footer_top = page.len();
        page.footer(portfolio);
        let footer = Extent::new(footer_top, page.len() - footer_top);

        Self {
            rows: page.rows,
            sections,
            cards: page.cards,
            hotspots: page.hotspots,
            footer,
            viewport,
        }
    }

    /// Total height in rows.
    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Row at document position `index`.
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows.get(index as usize)
    }

    /// All rows in document order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Section extents in document order.
    pub fn sections(&self) -> &[(SectionId, Extent)] {
        &self.sections
    }

    /// Clickable rows.
    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    /// Hotspot target at a document row and screen column.
    pub fn hotspot_at(&self, row: u32, column: u16) -> Option<SectionId> {
        self.hotspots
            .iter()
            .find(|h| h.row == row && h.columns.contains(&column))
            .map(|h| h.target)
    }

    /// Footer extent.
    pub fn footer(&self) -> Extent {
        self.footer
    }

    /// Viewport the document was laid out for.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl LayoutMeasure for Document {
    fn region(&self, id: SectionId) -> Option<Extent> {
        self.sections.as_slice().region(id)
    }
}

impl PageLayout for Document {
    fn cards(&self) -> &[(CardId, Extent)] {
        &self.cards
    }
}

/// Heading and subtitle shown at the top of a section.
pub fn section_heading(id: SectionId) -> (&'static str, &'static str) {
    match id {
        SectionId::About => ("About", "Introduction"),
        SectionId::Experience => ("Work Experience", "My professional journey and achievements"),
        SectionId::Projects => ("Featured Projects", "Some of my recent work and side projects"),
        SectionId::Education => ("Education", "My academic background and achievements"),
        SectionId::Skills => ("Skills & Technologies", "Tools and technologies I work with"),
    }
}

/// Greedy word wrap by display width.
///
/// Words wider than `width` are split between characters. Explicit newlines
/// start a new line; an empty paragraph yields one empty line.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let first = lines.len();
        let mut line = String::new();
        let mut line_width = 0usize;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if word_width > width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if line_width + ch_width > width && !line.is_empty() {
                        lines.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(ch);
                    line_width += ch_width;
                }
                continue;
            }

            let separator = usize::from(!line.is_empty());
            if line_width + separator + word_width > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if !line.is_empty() {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }

        if !line.is_empty() || lines.len() == first {
            lines.push(line);
        }
    }

    lines
}

/// Longest prefix of `text` that fits in `width` display columns.
pub fn truncate_to_width(text: &str, width: u16) -> String {
    let width = usize::from(width);
    let mut used = 0usize;
    text.chars()
        .take_while(|ch| {
            used += ch.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

/// Accumulates rows, card extents and hotspots.
struct Builder {
    width: u16,
    rows: Vec<Row>,
    cards: Vec<(CardId, Extent)>,
    hotspots: Vec<Hotspot>,
}

impl Builder {
    fn new(width: u16) -> Self {
        Self {
            width,
            rows: Vec::new(),
            cards: Vec::new(),
            hotspots: Vec::new(),
        }
    }

    fn len(&self) -> u32 {
        self.rows.len() as u32
    }

    fn inner_width(&self) -> u16 {
        self.width.saturating_sub(2 * SIDE_MARGIN).max(1)
    }

    fn card_width(&self) -> u16 {
        self.width.saturating_sub(2 * CARD_INDENT).max(1)
    }

    fn centred_indent(&self, text: &str) -> u16 {
        let text_width = text.width() as u16;
        SIDE_MARGIN + self.inner_width().saturating_sub(text_width) / 2
    }

    fn push(&mut self, text: impl Into<String>, indent: u16, role: RowRole, card: Option<CardId>) {
        self.rows.push(Row {
            text: text.into(),
            indent,
            role,
            card,
        });
    }

    fn blank(&mut self) {
        self.rows.push(Row::blank());
    }

    fn blanks(&mut self, count: u32) {
        for _ in 0..count {
            self.blank();
        }
    }

    fn centred(&mut self, text: &str, role: RowRole) {
        for line in wrap_text(text, self.inner_width()) {
            let indent = self.centred_indent(&line);
            self.push(line, indent, role, None);
        }
    }

    fn paragraph(&mut self, text: &str, indent: u16, width: u16, role: RowRole, card: Option<CardId>) {
        for line in wrap_text(text, width) {
            self.push(line, indent, role, card);
        }
    }

    /// Single-row link at `indent` that scrolls to `target`.
    fn hotspot(&mut self, text: String, indent: u16, role: RowRole, target: SectionId) {
        let end = indent.saturating_add(text.width() as u16);
        self.hotspots.push(Hotspot {
            row: self.len(),
            columns: indent..end,
            target,
        });
        self.push(text, indent, role, None);
    }

    fn card(&mut self, id: CardId, build: impl FnOnce(&mut Self, u16, u16)) {
        let top = self.len();
        let (indent, width) = (CARD_INDENT, self.card_width());
        build(self, indent, width);
        self.cards.push((id, Extent::new(top, self.len() - top)));
        self.blank();
    }

    fn append(&mut self, other: Builder) {
        let base = self.len();
        self.rows.extend(other.rows);
        self.cards.extend(
            other
                .cards
                .into_iter()
                .map(|(id, e)| (id, Extent::new(e.top + base, e.height))),
        );
        self.hotspots
            .extend(other.hotspots.into_iter().map(|h| Hotspot { row: h.row + base, ..h }));
    }

    fn hero(&mut self, portfolio: &Portfolio) {
        let profile = &portfolio.profile;
        self.centred(&format!("Hi, I'm {}", profile.name), RowRole::Title);
        self.blank();

        // One reserved row: the typewriter never changes layout. The last
        // column is kept for the cursor.
        let headline = truncate_to_width(&profile.headline, self.inner_width().saturating_sub(1));
        let indent = self.centred_indent(&headline);
        self.push(headline, indent, RowRole::Typewriter, None);
        self.blank();

        self.centred(&profile.summary, RowRole::Body);
        self.blank();

        let indent = self.centred_indent(HERO_BUTTON);
        self.hotspot(HERO_BUTTON.to_string(), indent, RowRole::Button, SectionId::Experience);
        if let Some(resume) = &profile.resume {
            self.centred(&format!("Resume: {}", resume), RowRole::Muted);
        }
    }

    fn section_header(&mut self, id: SectionId) {
        let (heading, subtitle) = section_heading(id);
        self.blank();
        self.centred(heading, RowRole::Heading);
        self.centred(subtitle, RowRole::Subtitle);
        self.blank();
    }

    fn section_body(&mut self, id: SectionId, portfolio: &Portfolio) {
        let card_count = match id {
            SectionId::About => 0,
            SectionId::Experience => portfolio.experience.len(),
            SectionId::Projects => portfolio.projects.len(),
            SectionId::Education => portfolio.education.len(),
            SectionId::Skills => portfolio.skills.len(),
        };
        if card_count == 0 {
            self.centred("Nothing here yet.", RowRole::Muted);
            return;
        }

        match id {
            SectionId::About => {}
            SectionId::Experience => {
                for (i, job) in portfolio.experience.iter().enumerate() {
                    let card = CardId::new(id, i);
                    self.card(card, |b, indent, width| {
                        b.paragraph(&job.title, indent, width, RowRole::CardTitle, Some(card));
                        b.paragraph(&job.company, indent, width, RowRole::Accent, Some(card));
                        b.paragraph(&job.period, indent, width, RowRole::Muted, Some(card));
                        b.paragraph(&job.description, indent, width, RowRole::Body, Some(card));
                    });
                }
            }
            SectionId::Projects => {
                for (i, project) in portfolio.projects.iter().enumerate() {
                    let card = CardId::new(id, i);
                    self.card(card, |b, indent, width| {
                        b.paragraph(&project.title, indent, width, RowRole::CardTitle, Some(card));
                        b.paragraph(&project.description, indent, width, RowRole::Body, Some(card));
                        if !project.tech.is_empty() {
                            let tech = project.tech.join(" · ");
                            b.paragraph(&tech, indent, width, RowRole::Muted, Some(card));
                        }
                        if let Some(link) = &project.link {
                            b.paragraph(&format!("↗ {}", link), indent, width, RowRole::Link, Some(card));
                        }
                    });
                }
            }
            SectionId::Education => {
                for (i, school) in portfolio.education.iter().enumerate() {
                    let card = CardId::new(id, i);
                    self.card(card, |b, indent, width| {
                        b.paragraph(&school.institution, indent, width, RowRole::CardTitle, Some(card));
                        b.paragraph(&school.degree, indent, width, RowRole::Accent, Some(card));
                        let period = match &school.gpa {
                            Some(gpa) => format!("{} · GPA: {}", school.period, gpa),
                            None => school.period.clone(),
                        };
                        b.paragraph(&period, indent, width, RowRole::Muted, Some(card));
                        b.paragraph(&school.description, indent, width, RowRole::Body, Some(card));
                    });
                }
            }
            SectionId::Skills => {
                for (i, group) in portfolio.skills.iter().enumerate() {
                    let card = CardId::new(id, i);
                    self.card(card, |b, indent, width| {
                        let title = format!("{} {}", group.icon, group.category);
                        b.paragraph(&title, indent, width, RowRole::CardTitle, Some(card));
                        b.paragraph(&group.skills.join(" · "), indent, width, RowRole::Body, Some(card));
                    });
                }
            }
        }
    }

    fn footer(&mut self, portfolio: &Portfolio) {
        let contact = &portfolio.contact;
        let width = self.inner_width();
        let rule = "─".repeat(usize::from(width));
        self.push(rule, SIDE_MARGIN, RowRole::Rule, None);
        self.blank();

        self.push("Get In Touch", SIDE_MARGIN, RowRole::Heading, None);
        self.paragraph(CONTACT_BLURB, SIDE_MARGIN, width, RowRole::Body, None);
        self.paragraph(&format!("✉ {}", contact.email), SIDE_MARGIN, width, RowRole::Link, None);
        if let Some(linkedin) = &contact.linkedin {
            self.paragraph(&format!("in {}", linkedin), SIDE_MARGIN, width, RowRole::Link, None);
        }
        self.blank();

        self.push("Quick Links", SIDE_MARGIN, RowRole::Heading, None);
        for id in SectionId::ALL {
            self.hotspot(format!("› {}", id.label()), SIDE_MARGIN, RowRole::Link, id);
        }
        self.blank();

        self.push("Contact Info", SIDE_MARGIN, RowRole::Heading, None);
        if let Some(location) = &contact.location {
            self.paragraph(&format!("📍 {}", location), SIDE_MARGIN, width, RowRole::Body, None);
        }
        self.paragraph(&format!("📧 {}", contact.email), SIDE_MARGIN, width, RowRole::Body, None);
        if let Some(phone) = &contact.phone {
            self.paragraph(&format!("📞 {}", phone), SIDE_MARGIN, width, RowRole::Body, None);
        }
        self.blank();

        self.centred(&contact.copyright, RowRole::Muted);
        self.blank();
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
