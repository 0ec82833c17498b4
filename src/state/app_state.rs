//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. Transitions are
//! plain methods with no terminal access, so every behaviour here is testable
//! without a backend.

use crate::model::{Portfolio, SectionId};
use crate::view_state::{
    Document, ListenerRegistry, MountOptions, NavBar, Observation, ScrollHost, Scroller,
    ViewMount, Viewport,
};
use std::time::Instant;
use tracing::debug;

/// Behaviour switches fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateOptions {
    /// Options handed to every mount.
    pub mount: MountOptions,
    /// Animate section jumps.
    pub smooth_scroll: bool,
    /// Let background orbs follow the pointer.
    pub pointer_parallax: bool,
}

impl Default for StateOptions {
    fn default() -> Self {
        Self {
            mount: MountOptions::default(),
            smooth_scroll: true,
            pointer_parallax: true,
        }
    }
}

/// Application state.
///
/// # State Machine
///
/// - **Mounted**: `mount` is `Some`; scroll, pointer and timer observations
///   reach the tracker, typewriter and reveal set.
/// - **Unmounted**: `mount` is `None`; observations are dropped and no view
///   state exists to mutate.
///
/// The document and scroller live outside the mount: they are the host page
/// the view is mounted into.
#[derive(Debug)]
pub struct AppState {
    /// Content being displayed.
    portfolio: Portfolio,

    /// Current layout of `portfolio` for the terminal size.
    document: Document,

    /// Scroll offset and smooth-scroll animation.
    scroller: Scroller,

    /// Registry the mount's listeners are counted in.
    listeners: ListenerRegistry,

    /// The mounted view, if any.
    mount: Option<ViewMount>,

    options: StateOptions,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// First visible line of the help overlay.
    pub help_scroll_offset: u16,
}

impl AppState {
    /// Lay out `portfolio` for `viewport`. The view starts unmounted.
    pub fn new(portfolio: Portfolio, viewport: Viewport, options: StateOptions) -> Self {
        let document = Document::build(&portfolio, viewport, options.mount.nav_bar);
        let mut scroller = Scroller::new(viewport, options.smooth_scroll);
        scroller.set_layout(viewport, document.height());

        Self {
            portfolio,
            document,
            scroller,
            listeners: ListenerRegistry::new(),
            mount: None,
            options,
            help_visible: false,
            help_scroll_offset: 0,
        }
    }

    /// Mount the view: register listeners and start the typewriter clock.
    ///
    /// Remounting replaces the previous mount, restarting the typewriter.
    pub fn mount(&mut self, now: Instant) {
        self.mount = None;
        let mut mount = ViewMount::mount(
            &self.listeners,
            &self.portfolio.profile.headline,
            self.options.mount,
            now,
        );
        mount.layout_changed(&self.document, &self.scroller);
        self.mount = Some(mount);
    }

    /// Unmount the view, deregistering its listeners.
    pub fn unmount(&mut self) {
        if let Some(mount) = self.mount.take() {
            mount.unmount();
        }
    }

    /// Whether a view is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    /// Re-lay out for a new terminal size, then run a scroll observation.
    pub fn relayout(&mut self, viewport: Viewport) {
        debug!(width = viewport.width, height = viewport.height, "Relayout");
        self.document = Document::build(&self.portfolio, viewport, self.options.mount.nav_bar);
        self.scroller.set_layout(viewport, self.document.height());
        if let Some(mount) = self.mount.as_mut() {
            mount.layout_changed(&self.document, &self.scroller);
        }
    }

    /// Deliver an observation to the mounted view. Returns true if visible
    /// state changed; always false when unmounted.
    pub fn observe(&mut self, observation: Observation) -> bool {
        match self.mount.as_mut() {
            Some(mount) => mount.observe(observation, &self.document, &self.scroller),
            None => false,
        }
    }

    /// Scroll by `delta` rows immediately.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let moved = self.scroller.scroll_by(delta);
        if moved {
            self.observe(Observation::Scroll);
        }
        moved
    }

    /// Jump to `offset` immediately.
    pub fn scroll_to(&mut self, offset: u32) -> bool {
        let moved = self.scroller.scroll_to(offset);
        if moved {
            self.observe(Observation::Scroll);
        }
        moved
    }

    /// Issue a scroll-to-section command through the mounted tracker.
    ///
    /// Returns true if a command was issued. Without smooth scrolling the
    /// offset changes at once and the scroll observation runs here; otherwise
    /// it runs on each animation frame in [`AppState::tick`].
    pub fn scroll_to_section(&mut self, index: usize) -> bool {
        self.navigate(|mount, scroller| mount.tracker().scroll_to_section(index, scroller))
    }

    /// `scroll_to_section` by identifier.
    pub fn scroll_to_section_id(&mut self, id: SectionId) -> bool {
        self.navigate(|mount, scroller| mount.tracker().scroll_to_section_id(id, scroller))
    }

    /// Scroll to the section after the active one.
    pub fn next_section(&mut self) -> bool {
        self.navigate(|mount, scroller| mount.tracker().next_section(scroller))
    }

    /// Scroll to the section before the active one.
    pub fn previous_section(&mut self) -> bool {
        self.navigate(|mount, scroller| mount.tracker().previous_section(scroller))
    }

    fn navigate(&mut self, command: impl FnOnce(&ViewMount, &mut Scroller) -> bool) -> bool {
        let Some(mount) = self.mount.as_ref() else {
            return false;
        };
        let before = self.scroller.scroll_offset();
        let issued = command(mount, &mut self.scroller);
        if self.scroller.scroll_offset() != before {
            self.observe(Observation::Scroll);
        }
        issued
    }

    /// Advance animations to `now`: one smooth-scroll frame plus a timer
    /// tick. Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if self.scroller.step() {
            self.observe(Observation::Scroll);
            changed = true;
        }
        changed |= self.observe(Observation::Tick(now));
        changed
    }

    /// Pointer moved to screen cell (`x`, `y`).
    ///
    /// The tracker always records the position; a redraw is only needed when
    /// the background follows the pointer.
    pub fn pointer_moved(&mut self, x: u16, y: u16) -> bool {
        let changed = self.observe(Observation::PointerMove { x, y });
        changed && self.options.pointer_parallax
    }

    /// Whether the event loop should keep ticking at frame rate.
    pub fn is_animating(&self) -> bool {
        self.scroller.is_animating() || self.mount.as_ref().is_some_and(|m| m.is_animating())
    }

    /// Toggle the help overlay, resetting its scroll.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
        self.help_scroll_offset = 0;
    }

    /// Content being displayed.
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Current layout.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Scroll host.
    pub fn scroller(&self) -> &Scroller {
        &self.scroller
    }

    /// The mounted view, if any.
    pub fn view(&self) -> Option<&ViewMount> {
        self.mount.as_ref()
    }

    /// Listener registry (for leak checks).
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Nav bar geometry.
    pub fn nav_bar(&self) -> NavBar {
        self.options.mount.nav_bar
    }

    /// Whether background orbs follow the pointer.
    pub fn pointer_parallax(&self) -> bool {
        self.options.pointer_parallax
    }

    /// Active section, when mounted.
    pub fn active_section(&self) -> Option<SectionId> {
        self.mount.as_ref().and_then(|m| m.tracker().active_section())
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
