//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the page up by one row. Default: k/↑
    ScrollUp,
    /// Scroll the page down by one row. Default: j/↓
    ScrollDown,
    /// Scroll up by one viewport height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one viewport height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the top of the page. Default: g/Home
    ScrollToTop,
    /// Jump to the bottom of the page (footer). Default: G/End
    ScrollToBottom,

    // Section navigation
    /// Smooth-scroll to the section after the active one. Default: Tab
    NextSection,
    /// Smooth-scroll to the section before the active one. Default: Shift+Tab
    PrevSection,
    /// Smooth-scroll to a section by 0-based index. Default: 1-5
    JumpToSection(usize),

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}
