//! Navigation controls: the top nav bar and the right-edge section indicator.
//!
//! Both are drawn from the geometry in `view_state::hit_test`, which the
//! mouse handler resolves clicks with.

use super::constants::INDICATOR_MARKER;
use super::styles::PageStyles;
use crate::model::SectionId;
use crate::view_state::hit_test::{
    indicator_columns, indicator_items, nav_bar_items, nav_brand_columns, NAV_BRAND,
};
use crate::view_state::{NavBar, Viewport};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

/// Top navigation bar. Renders nothing on narrow viewports.
#[derive(Debug, Clone, Copy)]
pub struct NavBarWidget<'a> {
    nav_bar: NavBar,
    active: Option<SectionId>,
    styles: &'a PageStyles,
}

impl<'a> NavBarWidget<'a> {
    /// Nav bar highlighting `active`.
    pub fn new(nav_bar: NavBar, active: Option<SectionId>, styles: &'a PageStyles) -> Self {
        Self {
            nav_bar,
            active,
            styles,
        }
    }
}

impl Widget for NavBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let viewport = Viewport::new(area.width, area.height);
        let height = self.nav_bar.height_for(viewport).min(area.height);
        if height == 0 {
            return;
        }

        let bar = Rect {
            height,
            ..area
        };
        Clear.render(bar, buf);
        buf.set_style(bar, self.styles.nav_bar());

        let mut spans = Vec::new();
        let mut column = 0;
        if let Some(brand) = nav_brand_columns(area.width) {
            spans.push(Span::raw(" ".repeat(usize::from(brand.start))));
            spans.push(Span::styled(NAV_BRAND, self.styles.nav_brand()));
            column = brand.end;
        }
        for item in nav_bar_items(area.width) {
            spans.push(Span::raw(" ".repeat(usize::from(item.columns.start - column))));
            spans.push(Span::styled(
                format!(" {} ", item.label),
                self.styles.nav_item(Some(item.id) == self.active),
            ));
            column = item.columns.end;
        }

        Paragraph::new(Line::from(spans))
            .style(self.styles.nav_bar())
            .render(bar, buf);
    }
}

/// Right-edge section indicator. Renders nothing when hidden.
#[derive(Debug, Clone, Copy)]
pub struct SectionIndicator<'a> {
    active: Option<SectionId>,
    styles: &'a PageStyles,
}

impl<'a> SectionIndicator<'a> {
    /// Indicator highlighting `active`.
    pub fn new(active: Option<SectionId>, styles: &'a PageStyles) -> Self {
        Self { active, styles }
    }
}

impl Widget for SectionIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let viewport = Viewport::new(area.width, area.height);
        let columns = indicator_columns(viewport);

        for item in indicator_items(viewport) {
            let active = Some(item.id) == self.active;
            let marker = if active { INDICATOR_MARKER } else { " " };
            let cell = Rect {
                x: area.x + columns.start,
                y: area.y + item.row,
                width: columns.end - columns.start,
                height: 1,
            };
            let line = Line::from(vec![
                Span::styled(marker, self.styles.nav_item(active)),
                Span::styled(item.id.icon(), self.styles.nav_item(active)),
                Span::styled(" ", Style::default()),
            ]);
            line.render(cell, buf);
        }
    }
}
