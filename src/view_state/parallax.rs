//! Cosmetic offsets derived from pointer position and scroll offset.

use super::types::{PointerPosition, Viewport};

/// Largest horizontal shift applied to a card, in columns.
pub const MAX_CARD_SHIFT: u16 = 4;

/// Card shift per scrolled row.
const CARD_SHIFT_FACTOR: f64 = 0.05;

/// A decorative background orb that drifts with the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    /// Horizontal anchor as a fraction of viewport width.
    pub anchor_x: f64,
    /// Vertical anchor as a fraction of viewport height.
    pub anchor_y: f64,
    /// Cells moved per cell of pointer movement (negative drifts opposite).
    pub factor: f64,
    /// Radius in columns.
    pub radius: u16,
}

/// The three background orbs, back to front.
pub const ORBS: [Orb; 3] = [
    Orb {
        anchor_x: 0.80,
        anchor_y: 0.10,
        factor: 0.2,
        radius: 6,
    },
    Orb {
        anchor_x: 0.10,
        anchor_y: 0.60,
        factor: -0.1,
        radius: 9,
    },
    Orb {
        anchor_x: 0.05,
        anchor_y: 0.30,
        factor: 0.15,
        radius: 4,
    },
];

impl Orb {
    /// Centre cell of the orb for a pointer position, clamped to the viewport.
    pub fn centre(&self, viewport: Viewport, pointer: PointerPosition) -> (u16, u16) {
        let x = f64::from(viewport.width) * self.anchor_x + f64::from(pointer.x) * self.factor;
        let y = f64::from(viewport.height) * self.anchor_y + f64::from(pointer.y) * self.factor;
        (
            clamp_cell(x, viewport.width),
            clamp_cell(y, viewport.height),
        )
    }
}

fn clamp_cell(value: f64, limit: u16) -> u16 {
    let max = f64::from(limit.saturating_sub(1));
    value.round().clamp(0.0, max) as u16
}

/// Horizontal shift of the `index`-th experience/education card.
///
/// Even cards drift right, odd cards left, proportional to the scroll
/// offset and capped at [`MAX_CARD_SHIFT`]. Narrow viewports never shift.
pub fn card_shift(scroll_offset: u32, index: usize, wide: bool) -> i16 {
    if !wide {
        return 0;
    }
    let magnitude = (f64::from(scroll_offset) * CARD_SHIFT_FACTOR)
        .floor()
        .min(f64::from(MAX_CARD_SHIFT)) as i16;
    if index % 2 == 0 {
        magnitude
    } else {
        -magnitude
    }
}
