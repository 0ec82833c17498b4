//! Document renderer.
//!
//! Turns the rows of the laid-out [`Document`](crate::view_state::Document)
//! visible at the current scroll offset into styled lines. Everything that
//! changes between frames without a relayout is applied here: the typewriter
//! prefix, the dimming of unrevealed cards and the scroll-driven card shift.

use super::constants::TYPEWRITER_CURSOR;
use super::styles::PageStyles;
use crate::model::SectionId;
use crate::state::AppState;
use crate::view_state::parallax::card_shift;
use crate::view_state::{Row, RowRole, ScrollHost, TypewriterState, ViewMount};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the visible part of the document into `area`.
pub fn render_page(frame: &mut Frame, area: Rect, state: &AppState, styles: &PageStyles) {
    let lines = page_lines(state, styles, area.height);
    frame.render_widget(Paragraph::new(lines), area);
}

/// Styled lines for the `height` rows starting at the scroll offset.
///
/// Rows past the end of the document are omitted.
pub fn page_lines(state: &AppState, styles: &PageStyles, height: u16) -> Vec<Line<'static>> {
    let document = state.document();
    let offset = state.scroller().scroll_offset();
    let wide = state.nav_bar().is_visible(document.viewport());
    let view = state.view();

    (0..u32::from(height))
        .filter_map(|screen_row| document.row(offset.saturating_add(screen_row)))
        .map(|row| render_row(row, view, styles, offset, wide))
        .collect()
}

fn render_row(
    row: &Row,
    view: Option<&ViewMount>,
    styles: &PageStyles,
    offset: u32,
    wide: bool,
) -> Line<'static> {
    let mut style = styles.row(row.role);
    let mut indent = i32::from(row.indent);

    if let Some(card) = row.card {
        if matches!(card.section, SectionId::Experience | SectionId::Education) {
            indent += i32::from(card_shift(offset, card.index, wide));
        }
        if view.is_some_and(|v| !v.reveal().contains(card)) {
            style = style.add_modifier(styles.unrevealed());
        }
    }

    let padding = " ".repeat(indent.max(0) as usize);

    if row.role == RowRole::Typewriter {
        if let Some(typewriter) = view.map(ViewMount::typewriter) {
            // The row holds the headline as it fits the layout.
            let fitted = row.text.chars().count();
            let shown: String = typewriter.visible_text().chars().take(fitted).collect();
            let mut spans = vec![Span::raw(padding), Span::styled(shown, style)];
            if typewriter.state() != TypewriterState::Done {
                spans.push(Span::styled(TYPEWRITER_CURSOR, styles.cursor()));
            }
            return Line::from(spans);
        }
    }

    Line::from(vec![Span::raw(padding), Span::styled(row.text.clone(), style)])
}
