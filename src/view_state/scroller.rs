//! Document scroll position with ease-out smooth scrolling.
//!
//! The terminal has no native smooth scroll, so `Scroller` plays the host's
//! part: it owns the offset, clamps it to the document, and walks towards a
//! smooth-scroll target a fraction of the remaining distance per frame.

use super::tracker::ScrollHost;
use super::types::Viewport;

/// Fraction of the remaining distance covered per animation frame.
pub const SMOOTH_SPEED: f64 = 0.35;

/// Scroll position, viewport and smooth-scroll animation state.
///
/// # Invariants
/// - `offset <= max_offset()` after every public method.
/// - An active target is always within `[0, max_offset()]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scroller {
    offset: u32,
    target: Option<u32>,
    viewport: Viewport,
    document_height: u32,
    smooth: bool,
}

impl Scroller {
    /// Scroller at the top of an empty document.
    pub fn new(viewport: Viewport, smooth: bool) -> Self {
        Self {
            offset: 0,
            target: None,
            viewport,
            document_height: 0,
            smooth,
        }
    }

    /// Largest valid offset: `max(0, document_height - viewport_height)`.
    pub fn max_offset(&self) -> u32 {
        self.document_height
            .saturating_sub(u32::from(self.viewport.height))
    }

    /// Update geometry after a resize or relayout, re-clamping the offset.
    pub fn set_layout(&mut self, viewport: Viewport, document_height: u32) {
        self.viewport = viewport;
        self.document_height = document_height;
        let max = self.max_offset();
        self.offset = self.offset.min(max);
        self.target = self.target.map(|t| t.min(max));
    }

    /// Jump to `offset` immediately, cancelling any animation.
    ///
    /// Returns true if the offset changed.
    pub fn scroll_to(&mut self, offset: u32) -> bool {
        self.target = None;
        let clamped = offset.min(self.max_offset());
        let changed = clamped != self.offset;
        self.offset = clamped;
        changed
    }

    /// Scroll by a signed number of rows, cancelling any animation.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let next = if delta.is_negative() {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta.unsigned_abs())
        };
        self.scroll_to(next)
    }

    /// Advance the smooth-scroll animation by one frame.
    ///
    /// Returns true if the offset changed.
    pub fn step(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        let remaining = target.abs_diff(self.offset);
        let stride =
            ((f64::from(remaining) * SMOOTH_SPEED).ceil() as u32).clamp(1, remaining.max(1));
        if target > self.offset {
            self.offset += stride.min(remaining);
        } else {
            self.offset -= stride.min(remaining);
        }

        if self.offset == target {
            self.target = None;
        }
        remaining > 0
    }

    /// Whether a smooth scroll is in flight.
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Pending smooth-scroll target, if any.
    pub fn target(&self) -> Option<u32> {
        self.target
    }

    /// Total document height in rows.
    pub fn document_height(&self) -> u32 {
        self.document_height
    }
}

impl ScrollHost for Scroller {
    fn scroll_offset(&self) -> u32 {
        self.offset
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn smooth_scroll_to(&mut self, offset: u32) {
        let clamped = offset.min(self.max_offset());
        if self.smooth {
            self.target = (clamped != self.offset).then_some(clamped);
        } else {
            self.scroll_to(clamped);
        }
    }
}
