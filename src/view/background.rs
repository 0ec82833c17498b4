//! Decorative background orbs.
//!
//! Each orb tints the background of the cells inside an ellipse around its
//! centre. Terminal cells are about twice as tall as wide, so the vertical
//! radius is half the horizontal one. Only cells without a background of
//! their own are tinted, so buttons and the nav bar keep their colors.

use super::styles::PageStyles;
use crate::view_state::parallax::ORBS;
use crate::view_state::{PointerPosition, Viewport};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// Background orbs for a pointer position.
#[derive(Debug, Clone, Copy)]
pub struct Orbs<'a> {
    pointer: PointerPosition,
    styles: &'a PageStyles,
}

impl<'a> Orbs<'a> {
    /// Orbs drifted by `pointer`. Pass the default position to keep them
    /// on their anchors.
    pub fn new(pointer: PointerPosition, styles: &'a PageStyles) -> Self {
        Self { pointer, styles }
    }
}

impl Widget for Orbs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let viewport = Viewport::new(area.width, area.height);
        if area.is_empty() {
            return;
        }

        for (index, orb) in ORBS.iter().enumerate() {
            let Some(color) = self.styles.orb(index) else {
                continue;
            };
            let (cx, cy) = orb.centre(viewport, self.pointer);
            let rx = f64::from(orb.radius.max(1));
            let ry = (rx / 2.0).max(1.0);

            for y in 0..area.height {
                for x in 0..area.width {
                    let dx = (f64::from(x) - f64::from(cx)) / rx;
                    let dy = (f64::from(y) - f64::from(cy)) / ry;
                    if dx * dx + dy * dy > 1.0 {
                        continue;
                    }
                    if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                        if cell.bg == Color::Reset {
                            cell.set_bg(color);
                        }
                    }
                }
            }
        }
    }
}
