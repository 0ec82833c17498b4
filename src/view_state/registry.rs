//! Section registry and the layout-measurement seam.

use super::types::Extent;
use crate::model::SectionId;

/// Injected layout-measurement capability.
///
/// Reports the current extent of a named region. Implemented by the rendered
/// document in production and by fixed tables in tests, which keeps the
/// tracker independent of how the page is drawn.
pub trait LayoutMeasure {
    /// Current extent of `id`, or `None` if the region is not rendered.
    fn region(&self, id: SectionId) -> Option<Extent>;
}

impl LayoutMeasure for [(SectionId, Extent)] {
    fn region(&self, id: SectionId) -> Option<Extent> {
        self.iter()
            .find(|(region, _)| *region == id)
            .map(|(_, extent)| *extent)
    }
}

impl<const N: usize> LayoutMeasure for [(SectionId, Extent); N] {
    fn region(&self, id: SectionId) -> Option<Extent> {
        self.as_slice().region(id)
    }
}

impl LayoutMeasure for Vec<(SectionId, Extent)> {
    fn region(&self, id: SectionId) -> Option<Extent> {
        self.as_slice().region(id)
    }
}

/// One registered section: identifier plus last measured extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    /// Stable identifier.
    pub id: SectionId,
    /// Extent as of the last `refresh`.
    pub extent: Extent,
}

/// Ordered sequence of section descriptors.
///
/// # Invariants
/// - Order matches document order (the order `tracked` was given in).
/// - Extents are only as fresh as the last `refresh`; call it after every
///   layout change.
/// - Sections the measurer does not report are absent, so lookups for them
///   fail like a missing DOM node would.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionRegistry {
    tracked: Vec<SectionId>,
    sections: Vec<SectionDescriptor>,
}

impl SectionRegistry {
    /// Registry tracking `tracked` in the given order. Empty until refreshed.
    pub fn new(tracked: impl IntoIterator<Item = SectionId>) -> Self {
        Self {
            tracked: tracked.into_iter().collect(),
            sections: Vec::new(),
        }
    }

    /// Registry tracking every section in document order.
    pub fn all() -> Self {
        Self::new(SectionId::ALL)
    }

    /// Registry built directly from descriptors, already measured.
    pub fn from_descriptors(sections: Vec<SectionDescriptor>) -> Self {
        Self {
            tracked: sections.iter().map(|s| s.id).collect(),
            sections,
        }
    }

    /// Re-measure every tracked section.
    pub fn refresh(&mut self, measure: &(impl LayoutMeasure + ?Sized)) {
        self.sections = self
            .tracked
            .iter()
            .filter_map(|&id| {
                measure
                    .region(id)
                    .map(|extent| SectionDescriptor { id, extent })
            })
            .collect();
    }

    /// Number of measured sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether no section has been measured.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Descriptor at `index`.
    pub fn get(&self, index: usize) -> Option<&SectionDescriptor> {
        self.sections.get(index)
    }

    /// Registry index of `id`.
    pub fn position(&self, id: SectionId) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Index of the first section whose extent contains `row`.
    pub fn section_at(&self, row: u32) -> Option<usize> {
        self.sections.iter().position(|s| s.extent.contains(row))
    }

    /// Descriptors in document order.
    pub fn iter(&self) -> impl Iterator<Item = &SectionDescriptor> {
        self.sections.iter()
    }
}
