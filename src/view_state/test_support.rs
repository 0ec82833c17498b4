//! Fakes for the host and layout seams.

use super::mount::PageLayout;
use super::registry::LayoutMeasure;
use super::reveal::CardId;
use super::tracker::ScrollHost;
use super::types::{Extent, Viewport};
use crate::model::SectionId;

/// ScrollHost that records smooth-scroll commands instead of scrolling.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub offset: u32,
    pub viewport: Viewport,
    pub commands: Vec<u32>,
}

impl RecordingHost {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            offset: 0,
            viewport: Viewport::new(width, height),
            commands: Vec::new(),
        }
    }

    pub fn at(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }
}

impl ScrollHost for RecordingHost {
    fn scroll_offset(&self) -> u32 {
        self.offset
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn smooth_scroll_to(&mut self, offset: u32) {
        self.commands.push(offset);
    }
}

/// Page geometry from fixed tables.
#[derive(Debug, Clone, Default)]
pub struct FixedPage {
    pub sections: Vec<(SectionId, Extent)>,
    pub cards: Vec<(CardId, Extent)>,
}

impl LayoutMeasure for FixedPage {
    fn region(&self, id: SectionId) -> Option<Extent> {
        self.sections.region(id)
    }
}

impl PageLayout for FixedPage {
    fn cards(&self) -> &[(CardId, Extent)] {
        &self.cards
    }
}
