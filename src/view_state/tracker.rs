//! Active-section tracking and section navigation.
//!
//! The tracker owns the section registry, the active section index and the
//! last pointer position. It never touches the terminal: scroll position,
//! viewport size and the smooth-scroll command come through [`ScrollHost`],
//! geometry through [`LayoutMeasure`].

use super::registry::{LayoutMeasure, SectionRegistry};
use super::types::{PointerPosition, Viewport};
use crate::model::SectionId;
use tracing::debug;

/// Host platform scroll primitives.
pub trait ScrollHost {
    /// Current scroll offset in document rows.
    fn scroll_offset(&self) -> u32;

    /// Current viewport size.
    fn viewport(&self) -> Viewport;

    /// Smoothly scroll so that `offset` becomes the top visible row.
    fn smooth_scroll_to(&mut self, offset: u32);
}

/// Fixed navigation bar geometry.
///
/// The bar is hidden on narrow viewports, so it only covers content (and
/// only offsets scroll targets) when the viewport is at least `narrow_width`
/// columns wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavBar {
    /// Bar height in rows when shown.
    pub height: u16,
    /// Viewports narrower than this hide the bar.
    pub narrow_width: u16,
}

impl NavBar {
    /// Create nav bar geometry.
    pub fn new(height: u16, narrow_width: u16) -> Self {
        Self {
            height,
            narrow_width,
        }
    }

    /// Whether the bar is shown for `viewport`.
    pub fn is_visible(&self, viewport: Viewport) -> bool {
        viewport.width >= self.narrow_width
    }

    /// Rows the bar covers for `viewport` (0 when hidden).
    pub fn height_for(&self, viewport: Viewport) -> u16 {
        if self.is_visible(viewport) {
            self.height
        } else {
            0
        }
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new(1, 80)
    }
}

/// Scroll-driven active section tracker and navigation controller.
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    registry: SectionRegistry,
    active: usize,
    pointer: PointerPosition,
    nav_bar: NavBar,
}

impl ViewportTracker {
    /// Create a tracker. The active index starts at 0.
    pub fn new(registry: SectionRegistry, nav_bar: NavBar) -> Self {
        Self {
            registry,
            active: 0,
            pointer: PointerPosition::default(),
            nav_bar,
        }
    }

    /// Re-measure the registry after a layout change.
    pub fn refresh(&mut self, measure: &(impl LayoutMeasure + ?Sized)) {
        self.registry.refresh(measure);
        debug!(sections = self.registry.len(), "Section registry refreshed");
    }

    /// Scroll observation.
    ///
    /// Activates the first section containing the viewport midpoint. When no
    /// section contains it (a gap, or the footer below the last section) the
    /// previous index is kept.
    ///
    /// Returns true if the active index changed.
    pub fn on_scroll(&mut self, host: &impl ScrollHost) -> bool {
        let midpoint = host.viewport().midpoint(host.scroll_offset());
        match self.registry.section_at(midpoint) {
            Some(index) if index != self.active => {
                debug!(from = self.active, to = index, midpoint, "Active section changed");
                self.active = index;
                true
            }
            _ => false,
        }
    }

    /// Pointer observation. Always records the position.
    pub fn on_pointer_move(&mut self, x: u16, y: u16) {
        self.pointer = PointerPosition::new(x, y);
    }

    /// Smooth-scroll so section `index` starts just below the nav bar.
    ///
    /// No-op when `index` is not in the registry. Returns true if a scroll
    /// command was issued.
    pub fn scroll_to_section(&self, index: usize, host: &mut impl ScrollHost) -> bool {
        let Some(section) = self.registry.get(index) else {
            debug!(index, "Scroll to unknown section ignored");
            return false;
        };

        let nav_height = u32::from(self.nav_bar.height_for(host.viewport()));
        let target = section.extent.top.saturating_sub(nav_height);
        debug!(section = %section.id, target, "Scrolling to section");
        host.smooth_scroll_to(target);
        true
    }

    /// `scroll_to_section` by identifier.
    pub fn scroll_to_section_id(&self, id: SectionId, host: &mut impl ScrollHost) -> bool {
        match self.registry.position(id) {
            Some(index) => self.scroll_to_section(index, host),
            None => false,
        }
    }

    /// Scroll to the section after the active one. No-op on the last.
    pub fn next_section(&self, host: &mut impl ScrollHost) -> bool {
        self.scroll_to_section(self.active.saturating_add(1), host)
    }

    /// Scroll to the section before the active one. No-op on the first.
    pub fn previous_section(&self, host: &mut impl ScrollHost) -> bool {
        match self.active.checked_sub(1) {
            Some(index) => self.scroll_to_section(index, host),
            None => false,
        }
    }

    /// Index of the active section.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Identifier of the active section, if the registry has one at that index.
    pub fn active_section(&self) -> Option<SectionId> {
        self.registry.get(self.active).map(|s| s.id)
    }

    /// Last observed pointer position.
    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    /// Nav bar geometry.
    pub fn nav_bar(&self) -> NavBar {
        self.nav_bar
    }

    /// The registry as of the last refresh.
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
