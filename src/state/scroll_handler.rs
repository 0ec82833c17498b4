//! Keyboard navigation action handler.
//!
//! Maps a navigation `KeyAction` onto AppState scroll operations. Line and
//! page scrolling move the document directly; section actions go through the
//! tracker's scroll-to-section command.

use crate::model::KeyAction;
use crate::state::AppState;
use crate::view_state::ScrollHost;

/// Handle a navigation action.
///
/// Page scrolling moves by the part of the viewport not covered by the nav
/// bar, at least one row. Non-navigation actions are ignored.
///
/// Returns true if the action changed the scroll position or issued a
/// section command.
pub fn handle_scroll_action(state: &mut AppState, action: KeyAction) -> bool {
    match action {
        KeyAction::ScrollUp => state.scroll_by(-1),
        KeyAction::ScrollDown => state.scroll_by(1),
        KeyAction::PageUp => {
            let page = page_rows(state);
            state.scroll_by(-page)
        }
        KeyAction::PageDown => {
            let page = page_rows(state);
            state.scroll_by(page)
        }
        KeyAction::ScrollToTop => state.scroll_to(0),
        KeyAction::ScrollToBottom => state.scroll_to(u32::MAX),
        KeyAction::NextSection => state.next_section(),
        KeyAction::PrevSection => state.previous_section(),
        KeyAction::JumpToSection(index) => state.scroll_to_section(index),
        KeyAction::Quit | KeyAction::Help => false,
    }
}

fn page_rows(state: &AppState) -> i32 {
    let viewport = state.scroller().viewport();
    let covered = state.nav_bar().height_for(viewport);
    i32::from(viewport.height.saturating_sub(covered).max(1))
}
