//! UI state machine (pure).
//!
//! All state transitions are testable without a terminal.

pub mod app_state;
pub mod mouse_handler;
pub mod scroll_handler;

// Re-export for convenience
pub use app_state::{AppState, StateOptions};
pub use mouse_handler::{handle_mouse_click, handle_mouse_move, handle_mouse_scroll};
pub use scroll_handler::handle_scroll_action;
