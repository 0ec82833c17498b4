//! Rendering and timing constants for the TUI.
//!
//! Centralized location for the numeric values the shell is tuned with.

use std::time::Duration;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Event poll timeout while something is animating (about 60 frames/s).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Event poll timeout when nothing is animating.
pub const IDLE_INTERVAL: Duration = Duration::from_millis(500);

/// Cursor drawn after the typewriter's revealed text.
pub const TYPEWRITER_CURSOR: &str = "▌";

/// Marker drawn before the active side indicator entry.
pub const INDICATOR_MARKER: &str = "▸";
