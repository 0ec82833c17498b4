//! Sticky reveal-on-scroll bookkeeping for cards.

use super::types::{Extent, Viewport};
use crate::model::SectionId;
use std::collections::HashSet;

/// Identifies one card within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId {
    /// Section the card lives in.
    pub section: SectionId,
    /// Position within the section.
    pub index: usize,
}

impl CardId {
    /// Create a card id.
    pub fn new(section: SectionId, index: usize) -> Self {
        Self { section, index }
    }
}

/// Cards that have scrolled into view at least once.
///
/// Membership only grows for the lifetime of the mount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: HashSet<CardId>,
}

impl RevealSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal every card whose top is more than `threshold` rows above the
    /// viewport bottom (cards above the viewport included).
    ///
    /// Returns true if any card was newly revealed.
    pub fn observe<'a>(
        &mut self,
        cards: impl IntoIterator<Item = &'a (CardId, Extent)>,
        scroll_offset: u32,
        viewport: Viewport,
        threshold: u16,
    ) -> bool {
        let cutoff = i64::from(viewport.height) - i64::from(threshold);
        let mut changed = false;
        for (id, extent) in cards {
            let relative_top = i64::from(extent.top) - i64::from(scroll_offset);
            if relative_top < cutoff {
                changed |= self.revealed.insert(*id);
            }
        }
        changed
    }

    /// Whether `id` has been revealed.
    pub fn contains(&self, id: CardId) -> bool {
        self.revealed.contains(&id)
    }

    /// Number of revealed cards.
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    /// Whether nothing has been revealed yet.
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<(CardId, Extent)> {
        vec![
            (CardId::new(SectionId::Experience, 0), Extent::new(10, 5)),
            (CardId::new(SectionId::Experience, 1), Extent::new(30, 5)),
        ]
    }

    #[test]
    fn card_within_cutoff_is_revealed() {
        let mut set = RevealSet::new();
        // cutoff = 20 - 4 = 16 → card at 10 qualifies, card at 30 does not
        assert!(set.observe(&cards(), 0, Viewport::new(80, 20), 4));
        assert!(set.contains(CardId::new(SectionId::Experience, 0)));
        assert!(!set.contains(CardId::new(SectionId::Experience, 1)));
    }

    #[test]
    fn card_exactly_at_cutoff_stays_hidden() {
        let mut set = RevealSet::new();
        set.observe(&cards(), 14, Viewport::new(80, 20), 4);
        // relative top of second card = 16, not < 16
        assert!(!set.contains(CardId::new(SectionId::Experience, 1)));
    }

    #[test]
    fn reveal_is_sticky() {
        let mut set = RevealSet::new();
        set.observe(&cards(), 30, Viewport::new(80, 20), 4);
        assert_eq!(set.len(), 2);

        assert!(!set.observe(&cards(), 0, Viewport::new(80, 20), 4));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn threshold_larger_than_viewport_reveals_only_cards_above() {
        let mut set = RevealSet::new();
        set.observe(&cards(), 20, Viewport::new(80, 5), 10);
        assert!(set.contains(CardId::new(SectionId::Experience, 0)));
        assert!(!set.contains(CardId::new(SectionId::Experience, 1)));
    }
}
