//! Frame composition.
//!
//! Draws the page back to front: document text, background orbs, the side
//! indicator, the nav bar overlay and finally the help overlay.

use crate::state::AppState;
use crate::view::{
    background::Orbs,
    help::render_help_overlay,
    nav::{NavBarWidget, SectionIndicator},
    page::render_page,
    styles::PageStyles,
};
use crate::view_state::hit_test::text_width;
use crate::view_state::{PointerPosition, Viewport};
use ratatui::{layout::Rect, Frame};

/// Render one full frame for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &PageStyles) {
    let area = frame.area();
    if area.is_empty() {
        return;
    }

    let viewport = Viewport::new(area.width, area.height);
    let page_area = Rect {
        width: text_width(viewport).min(area.width),
        ..area
    };
    render_page(frame, page_area, state, styles);
    frame.render_widget(Orbs::new(orb_pointer(state), styles), area);

    let active = state.active_section();
    frame.render_widget(SectionIndicator::new(active, styles), area);
    frame.render_widget(NavBarWidget::new(state.nav_bar(), active, styles), area);

    if state.help_visible {
        render_help_overlay(frame, state.help_scroll_offset, styles);
    }
}

/// Pointer the orbs drift with: the tracked pointer when parallax is on.
fn orb_pointer(state: &AppState) -> PointerPosition {
    match state.view() {
        Some(view) if state.pointer_parallax() => view.tracker().pointer(),
        _ => PointerPosition::default(),
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
