//! Mouse event handler.
//!
//! Functions that transform AppState in response to mouse events. Click
//! geometry comes from `view_state::hit_test`, the same functions the
//! renderer lays controls out with.

use crate::state::AppState;
use crate::view_state::hit_test::{hit_test, ClickTarget};
use crate::view_state::ScrollHost;
use tracing::debug;

/// Rows scrolled per mouse wheel notch.
pub const WHEEL_STEP: i32 = 3;

/// Lines the help overlay can scroll past its first line.
const HELP_SCROLL_LIMIT: u16 = 40;

/// Determine what a left click at screen cell (`column`, `row`) hit.
pub fn detect_click(state: &AppState, column: u16, row: u16) -> Option<ClickTarget> {
    hit_test(
        column,
        row,
        state.document(),
        state.nav_bar(),
        state.scroller().scroll_offset(),
    )
}

/// Handle a left click.
///
/// A click on a nav bar entry, indicator entry or document hotspot scrolls
/// to its section. Clicks elsewhere are ignored. While the help overlay is
/// open, any click closes it instead.
///
/// Returns true if the state changed.
pub fn handle_mouse_click(state: &mut AppState, column: u16, row: u16) -> bool {
    if state.help_visible {
        state.help_visible = false;
        return true;
    }

    match detect_click(state, column, row) {
        Some(target) => {
            debug!(?target, column, row, "Navigation click");
            state.scroll_to_section_id(target.section())
        }
        None => false,
    }
}

/// Handle a wheel notch. Scrolls the help overlay when it is open.
///
/// Returns true if anything moved.
pub fn handle_mouse_scroll(state: &mut AppState, is_scroll_up: bool) -> bool {
    if state.help_visible {
        let before = state.help_scroll_offset;
        state.help_scroll_offset = if is_scroll_up {
            before.saturating_sub(1)
        } else {
            before.saturating_add(1).min(HELP_SCROLL_LIMIT)
        };
        return state.help_scroll_offset != before;
    }

    let delta = if is_scroll_up { -WHEEL_STEP } else { WHEEL_STEP };
    state.scroll_by(delta)
}

/// Handle pointer movement. Returns true if a redraw is needed.
pub fn handle_mouse_move(state: &mut AppState, column: u16, row: u16) -> bool {
    state.pointer_moved(column, row)
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
