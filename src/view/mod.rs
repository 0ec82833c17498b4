//! TUI rendering and terminal management (impure shell)

pub mod background;
pub mod constants;
mod help;
mod layout;
pub mod nav;
pub mod page;
mod styles;

pub use help::render_help_overlay;
pub use layout::render_layout;
pub use styles::{ColorConfig, PageStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, KeyAction, Portfolio, SectionId};
use crate::state::{
    handle_mouse_click, handle_mouse_move, handle_mouse_scroll, handle_scroll_action, AppState,
    StateOptions,
};
use crate::view_state::Viewport;
use constants::{FRAME_INTERVAL, IDLE_INTERVAL};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: PageStyles,
    /// When animations were last advanced.
    last_tick: Instant,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create the application on the already prepared terminal.
    ///
    /// Lays the portfolio out for the current terminal size and mounts the
    /// page view.
    pub fn new(
        portfolio: Portfolio,
        options: StateOptions,
        key_bindings: KeyBindings,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        let size = terminal.size()?;
        let viewport = Viewport::new(size.width.max(1), size.height.max(1));

        let now = Instant::now();
        let mut app_state = AppState::new(portfolio, viewport, options);
        app_state.mount(now);

        Ok(Self {
            terminal,
            app_state,
            key_bindings,
            styles: PageStyles::new(colors),
            last_tick: now,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Polls at frame rate while a
    /// scroll or the typewriter is animating and at the idle interval
    /// otherwise; redraws only after input or a visible state change.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = if self.app_state.is_animating() {
                FRAME_INTERVAL
            } else {
                IDLE_INTERVAL
            };

            let mut redraw = false;
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        redraw = true;
                    }
                    Event::Mouse(mouse) => {
                        redraw = self.handle_mouse(mouse);
                    }
                    Event::Resize(width, height) => {
                        self.handle_resize(width, height);
                        redraw = true;
                    }
                    _ => {}
                }
            }

            redraw |= self.tick(Instant::now());
            if redraw {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Scroll to the section the user asked to start at.
    pub fn start_at(&mut self, section: SectionId) {
        info!(%section, "Starting at section");
        self.app_state.scroll_to_section_id(section);
    }

    /// Advance animations if a frame interval has passed since the last
    /// advance. Returns true if anything visible changed.
    fn tick(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) < FRAME_INTERVAL {
            return false;
        }
        self.last_tick = now;
        self.app_state.tick(now)
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Escape closes help overlay if visible (before key binding dispatch)
        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "Key action");

        if self.app_state.help_visible {
            // While help is open, line keys scroll the overlay.
            match action {
                KeyAction::Quit => return true,
                KeyAction::Help => self.app_state.toggle_help(),
                KeyAction::ScrollUp => {
                    handle_mouse_scroll(&mut self.app_state, true);
                }
                KeyAction::ScrollDown => {
                    handle_mouse_scroll(&mut self.app_state, false);
                }
                _ => {}
            }
            return false;
        }

        match action {
            KeyAction::Quit => true,
            KeyAction::Help => {
                self.app_state.toggle_help();
                false
            }
            navigation => {
                handle_scroll_action(&mut self.app_state, navigation);
                false
            }
        }
    }

    /// Handle a single mouse event
    ///
    /// Returns true if a redraw is needed.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::ScrollUp => handle_mouse_scroll(&mut self.app_state, true),
            MouseEventKind::ScrollDown => handle_mouse_scroll(&mut self.app_state, false),
            MouseEventKind::Down(MouseButton::Left) => {
                handle_mouse_click(&mut self.app_state, mouse.column, mouse.row)
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                handle_mouse_move(&mut self.app_state, mouse.column, mouse.row)
            }
            _ => false,
        }
    }

    /// Handle a terminal resize event
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        // Guard against zero-sized resize events
        self.app_state
            .relayout(Viewport::new(width.max(1), height.max(1)));
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            render_layout(frame, state, styles);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing and benchmarking within the crate.
// They are gated with cfg to ensure they're not accessible from outside the crate.
//
// DO NOT use these in production code.

#[cfg(any(test, feature = "bench-internals"))]
#[allow(dead_code)] // Not all helpers used in every context (tests vs benchmarks)
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Relays `app_state` out for the terminal's size, matching `new`.
    ///
    /// **WARNING**: This is for testing only. Do not use in production code.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        mut app_state: AppState,
        key_bindings: KeyBindings,
        colors: ColorConfig,
    ) -> Self {
        if let Ok(size) = terminal.size() {
            app_state.relayout(Viewport::new(size.width.max(1), size.height.max(1)));
        }

        Self {
            terminal,
            app_state,
            key_bindings,
            styles: PageStyles::new(colors),
            last_tick: Instant::now(),
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Handle a single mouse event (test-only accessor)
    ///
    /// Returns true if a redraw is needed.
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) -> bool {
        self.handle_mouse(mouse)
    }

    /// Handle a resize event (test-only accessor)
    pub(crate) fn handle_resize_test(&mut self, width: u16, height: u16) {
        self.handle_resize(width, height)
    }

    /// Advance animations to `now` (test-only accessor)
    pub(crate) fn tick_test(&mut self, now: Instant) -> bool {
        self.tick(now)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

// ===== Benchmark Helpers =====
//
// Public wrappers for benchmarks when bench-internals feature is enabled.
// These delegate to the pub(crate) test helpers above.

#[cfg(feature = "bench-internals")]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for benchmarking (benchmark-only constructor)
    pub fn new_for_bench(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        colors: ColorConfig,
    ) -> Self {
        Self::new_for_test(terminal, app_state, key_bindings, colors)
    }

    /// Handle a single keyboard event (benchmark-only accessor)
    pub fn handle_key_bench(&mut self, key: KeyEvent) -> bool {
        self.handle_key_test(key)
    }

    /// Handle a single mouse event (benchmark-only accessor)
    pub fn handle_mouse_bench(&mut self, mouse: MouseEvent) -> bool {
        self.handle_mouse_test(mouse)
    }

    /// Render a single frame (benchmark-only accessor)
    pub fn render_bench(&mut self) -> Result<(), TuiError> {
        self.render_test()
    }
}

/// Raw mode, alternate screen and mouse capture for the lifetime of the
/// guard.
///
/// Dropping the guard restores the terminal, so an error or panic unwinding
/// out of the event loop still leaves the shell usable.
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        Ok(guard)
    }

    /// Restore the terminal, reporting failures.
    fn release(mut self) -> io::Result<()> {
        self.active = false;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = restore_terminal();
        }
    }
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal setup,
/// runs the event loop, and restores the terminal on every exit path.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_app(
    portfolio: Portfolio,
    options: StateOptions,
    key_bindings: KeyBindings,
    colors: ColorConfig,
    initial_section: Option<SectionId>,
) -> Result<(), TuiError> {
    let guard = TerminalGuard::acquire()?;

    let result = TuiApp::new(portfolio, options, key_bindings, colors).and_then(|mut app| {
        if let Some(section) = initial_section {
            app.start_at(section);
        }
        app.run()
    });

    guard.release()?;
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::hit_test::nav_bar_items;
    use crate::view_state::ScrollHost;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn create_test_app() -> TuiApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let options = StateOptions {
            smooth_scroll: false,
            ..StateOptions::default()
        };
        let mut app_state =
            AppState::new(Portfolio::default(), Viewport::new(80, 24), options);
        app_state.mount(Instant::now());
        TuiApp::new_for_test(
            terminal,
            app_state,
            KeyBindings::default(),
            ColorConfig::new(false),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn screen_text(app: &TuiApp<TestBackend>) -> String {
        let buffer = app.terminal().backend().buffer();
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn tui_error_from_app_error() {
        let app_err: AppError = io::Error::other("gone").into();
        let tui_err: TuiError = app_err.into();
        assert!(matches!(tui_err, TuiError::App(_)));
    }

    #[test]
    fn new_for_test_relays_out_to_terminal_size() {
        let app = create_test_app();
        assert_eq!(app.app_state().document().viewport(), Viewport::new(100, 30));
    }

    #[test]
    fn handle_key_q_returns_true() {
        let mut app = create_test_app();
        assert!(app.handle_key_test(key(KeyCode::Char('q'))), "'q' should trigger quit");
    }

    #[test]
    fn handle_key_ctrl_c_returns_true() {
        let mut app = create_test_app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key_test(ctrl_c), "Ctrl+C should trigger quit");
    }

    #[test]
    fn handle_key_other_returns_false() {
        let mut app = create_test_app();
        assert!(!app.handle_key_test(key(KeyCode::Char('z'))));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = create_test_app();
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert!(!app.handle_key_test(release));
    }

    #[test]
    fn handle_key_j_scrolls_page() {
        let mut app = create_test_app();
        app.handle_key_test(key(KeyCode::Char('j')));
        assert_eq!(app.app_state().scroller().scroll_offset(), 1);
    }

    #[test]
    fn digit_keys_jump_to_sections() {
        let mut app = create_test_app();
        app.handle_key_test(key(KeyCode::Char('3')));
        assert_eq!(app.app_state().active_section(), Some(SectionId::Projects));
        app.handle_key_test(key(KeyCode::Tab));
        assert_eq!(app.app_state().active_section(), Some(SectionId::Education));
    }

    #[test]
    fn configured_key_bindings_drive_the_app() {
        let overrides = [("x".to_string(), "quit".to_string())].into_iter().collect();
        let mut app = create_test_app();
        app.key_bindings = KeyBindings::with_overrides(&overrides).expect("valid binding");

        assert!(app.handle_key_test(key(KeyCode::Char('x'))));
    }

    #[test]
    fn help_toggle_and_escape() {
        let mut app = create_test_app();
        app.handle_key_test(key(KeyCode::Char('?')));
        assert!(app.app_state().help_visible);
        app.handle_key_test(key(KeyCode::Esc));
        assert!(!app.app_state().help_visible);
    }

    #[test]
    fn line_keys_scroll_help_instead_of_page() {
        let mut app = create_test_app();
        app.handle_key_test(key(KeyCode::Char('?')));
        app.handle_key_test(key(KeyCode::Char('j')));
        assert_eq!(app.app_state().help_scroll_offset, 1);
        assert_eq!(app.app_state().scroller().scroll_offset(), 0);
    }

    #[test]
    fn quit_works_while_help_is_open() {
        let mut app = create_test_app();
        app.handle_key_test(key(KeyCode::Char('?')));
        assert!(app.handle_key_test(key(KeyCode::Char('q'))));
    }

    #[test]
    fn clicking_nav_entry_navigates() {
        let mut app = create_test_app();
        let skills = nav_bar_items(100)
            .into_iter()
            .find(|i| i.id == SectionId::Skills)
            .expect("skills entry");
        let click = mouse(MouseEventKind::Down(MouseButton::Left), skills.columns.start, 0);
        assert!(app.handle_mouse_test(click));
        assert_eq!(app.app_state().active_section(), Some(SectionId::Skills));
    }

    #[test]
    fn wheel_scrolls_document() {
        let mut app = create_test_app();
        assert!(app.handle_mouse_test(mouse(MouseEventKind::ScrollDown, 10, 10)));
        assert_eq!(
            app.app_state().scroller().scroll_offset(),
            crate::state::mouse_handler::WHEEL_STEP as u32
        );
    }

    #[test]
    fn pointer_move_requests_redraw_with_parallax() {
        let mut app = create_test_app();
        assert!(app.handle_mouse_test(mouse(MouseEventKind::Moved, 10, 10)));
        assert!(!app.handle_mouse_test(mouse(MouseEventKind::Moved, 10, 10)));
    }

    #[test]
    fn resize_relays_out_document() {
        let mut app = create_test_app();
        app.handle_resize_test(60, 20);
        assert_eq!(app.app_state().document().viewport(), Viewport::new(60, 20));

        app.handle_resize_test(0, 0);
        assert_eq!(app.app_state().document().viewport(), Viewport::new(1, 1));
    }

    #[test]
    fn tick_is_rate_limited_to_frame_interval() {
        let mut app = create_test_app();
        let start = app.last_tick;
        assert!(!app.tick_test(start));
        // After the default typewriter delay the headline starts revealing.
        assert!(app.tick_test(start + Duration::from_secs(3)));
    }

    #[test]
    fn draw_renders_page() {
        let mut app = create_test_app();
        app.render_test().expect("draw");
        let text = screen_text(&app);
        assert!(text.contains("About"));
        assert!(text.contains("Hi, I'm"));
    }
}
