//! Core view-state newtypes

/// Vertical extent of a region in document rows.
///
/// The interval is half-open: `[top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    /// First row of the region.
    pub top: u32,
    /// Number of rows the region occupies.
    pub height: u32,
}

impl Extent {
    /// Create a new extent.
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    /// One past the last row of the region.
    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }

    /// Whether `row` lies within `[top, bottom)`.
    pub fn contains(&self, row: u32) -> bool {
        self.top <= row && row < self.bottom()
    }
}

/// Viewport dimensions in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Width in terminal columns.
    pub width: u16,
    /// Height in terminal rows.
    pub height: u16,
}

impl Viewport {
    /// Create new viewport dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Row at the vertical middle of the viewport for a given scroll offset.
    pub fn midpoint(&self, scroll_offset: u32) -> u32 {
        scroll_offset.saturating_add(u32::from(self.height) / 2)
    }
}

/// Last observed pointer position in terminal cells.
///
/// No invariant beyond "last observed value".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl PointerPosition {
    /// Create a pointer position.
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}
