//! Mounted view: tracker, typewriter and reveal state plus their listeners.
//!
//! Mounting registers one listener per [`ObservationKind`]; unmounting (or
//! dropping) the [`ViewMount`] releases them. All view state lives inside the
//! mount, so once it is gone no observation can mutate anything.

use super::listeners::{Listener, ListenerRegistry, ObservationKind};
use super::registry::{LayoutMeasure, SectionRegistry};
use super::reveal::{CardId, RevealSet};
use super::tracker::{NavBar, ScrollHost, ViewportTracker};
use super::typewriter::Typewriter;
use super::types::Extent;
use std::time::{Duration, Instant};
use tracing::debug;

/// Rendered page geometry: section extents plus card extents.
pub trait PageLayout: LayoutMeasure {
    /// Every card with its extent, in document order.
    fn cards(&self) -> &[(CardId, Extent)];
}

/// Settings fixed for the lifetime of a mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountOptions {
    /// Delay before the typewriter starts.
    pub reveal_delay: Duration,
    /// Time per revealed character.
    pub reveal_interval: Duration,
    /// Rows above the viewport bottom a card must reach to be revealed.
    pub reveal_threshold: u16,
    /// Navigation bar geometry.
    pub nav_bar: NavBar,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(2000),
            reveal_interval: Duration::from_millis(50),
            reveal_threshold: 4,
            nav_bar: NavBar::default(),
        }
    }
}

/// A single observation delivered by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// The scroll offset (or the layout under it) changed.
    Scroll,
    /// The pointer moved to a cell.
    PointerMove {
        /// Column.
        x: u16,
        /// Row.
        y: u16,
    },
    /// Animation timer tick.
    Tick(Instant),
}

impl Observation {
    /// Listener kind that receives this observation.
    pub fn kind(&self) -> ObservationKind {
        match self {
            Observation::Scroll => ObservationKind::Scroll,
            Observation::PointerMove { .. } => ObservationKind::PointerMove,
            Observation::Tick(_) => ObservationKind::Tick,
        }
    }
}

/// State owned by a mounted page view.
#[derive(Debug)]
pub struct ViewMount {
    tracker: ViewportTracker,
    typewriter: Typewriter,
    reveal: RevealSet,
    reveal_threshold: u16,
    mounted_at: Instant,
    _listeners: [Listener; 3],
}

impl ViewMount {
    /// Mount: register listeners and start the typewriter clock at `now`.
    pub fn mount(
        listeners: &ListenerRegistry,
        headline: &str,
        options: MountOptions,
        now: Instant,
    ) -> Self {
        debug!(?options, "Mounting page view");
        Self {
            tracker: ViewportTracker::new(SectionRegistry::all(), options.nav_bar),
            typewriter: Typewriter::new(headline, options.reveal_delay, options.reveal_interval),
            reveal: RevealSet::new(),
            reveal_threshold: options.reveal_threshold,
            mounted_at: now,
            _listeners: [
                listeners.listen(ObservationKind::Scroll),
                listeners.listen(ObservationKind::PointerMove),
                listeners.listen(ObservationKind::Tick),
            ],
        }
    }

    /// Re-measure after a layout change, then treat it as a scroll.
    pub fn layout_changed(&mut self, page: &impl PageLayout, host: &impl ScrollHost) -> bool {
        self.tracker.refresh(page);
        self.observe(Observation::Scroll, page, host)
    }

    /// Deliver one observation. Returns true if visible state changed.
    pub fn observe(
        &mut self,
        observation: Observation,
        page: &impl PageLayout,
        host: &impl ScrollHost,
    ) -> bool {
        match observation {
            Observation::Scroll => {
                let active_changed = self.tracker.on_scroll(host);
                let revealed = self.reveal.observe(
                    page.cards(),
                    host.scroll_offset(),
                    host.viewport(),
                    self.reveal_threshold,
                );
                active_changed || revealed
            }
            Observation::PointerMove { x, y } => {
                let changed = self.tracker.pointer().x != x || self.tracker.pointer().y != y;
                self.tracker.on_pointer_move(x, y);
                changed
            }
            Observation::Tick(now) => self
                .typewriter
                .advance(now.saturating_duration_since(self.mounted_at)),
        }
    }

    /// Unmount, deregistering every listener.
    pub fn unmount(self) {
        debug!("Unmounting page view");
    }

    /// Tracker (active section, pointer, registry, navigation commands).
    pub fn tracker(&self) -> &ViewportTracker {
        &self.tracker
    }

    /// Headline typewriter.
    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    /// Cards revealed so far.
    pub fn reveal(&self) -> &RevealSet {
        &self.reveal
    }

    /// Whether timer ticks are still needed.
    pub fn is_animating(&self) -> bool {
        self.typewriter.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionId;
    use crate::view_state::test_support::{FixedPage, RecordingHost};

    fn page() -> FixedPage {
        FixedPage {
            sections: vec![
                (SectionId::About, Extent::new(0, 20)),
                (SectionId::Experience, Extent::new(20, 20)),
            ],
            cards: vec![(CardId::new(SectionId::Experience, 0), Extent::new(24, 6))],
        }
    }

    fn options() -> MountOptions {
        MountOptions {
            reveal_delay: Duration::from_millis(100),
            reveal_interval: Duration::from_millis(10),
            reveal_threshold: 2,
            nav_bar: NavBar::new(1, 80),
        }
    }

    #[test]
    fn mount_registers_one_listener_per_kind() {
        let listeners = ListenerRegistry::new();
        let _mount = ViewMount::mount(&listeners, "Hi", options(), Instant::now());

        assert!(listeners.is_listening(ObservationKind::Scroll));
        assert!(listeners.is_listening(ObservationKind::PointerMove));
        assert!(listeners.is_listening(ObservationKind::Tick));
        assert_eq!(listeners.listener_count(), 3);
    }

    #[test]
    fn unmount_deregisters_every_listener() {
        let listeners = ListenerRegistry::new();
        let mount = ViewMount::mount(&listeners, "Hi", options(), Instant::now());
        mount.unmount();
        assert_eq!(listeners.listener_count(), 0);
    }

    #[test]
    fn dropping_mount_deregisters_every_listener() {
        let listeners = ListenerRegistry::new();
        {
            let _mount = ViewMount::mount(&listeners, "Hi", options(), Instant::now());
        }
        assert_eq!(listeners.listener_count(), 0);
    }

    #[test]
    fn scroll_observation_updates_active_section_and_reveals_cards() {
        let listeners = ListenerRegistry::new();
        let mut mount = ViewMount::mount(&listeners, "Hi", options(), Instant::now());
        let page = page();
        mount.layout_changed(&page, &RecordingHost::new(100, 20).at(0));
        assert_eq!(mount.tracker().active_index(), 0);
        assert!(mount.reveal().is_empty());

        let changed = mount.observe(Observation::Scroll, &page, &RecordingHost::new(100, 20).at(20));
        assert!(changed);
        assert_eq!(mount.tracker().active_index(), 1);
        assert!(mount.reveal().contains(CardId::new(SectionId::Experience, 0)));
    }

    #[test]
    fn pointer_observation_records_position() {
        let listeners = ListenerRegistry::new();
        let mut mount = ViewMount::mount(&listeners, "Hi", options(), Instant::now());
        let host = RecordingHost::new(100, 20);

        assert!(mount.observe(Observation::PointerMove { x: 5, y: 6 }, &page(), &host));
        assert!(!mount.observe(Observation::PointerMove { x: 5, y: 6 }, &page(), &host));
        assert_eq!(mount.tracker().pointer().x, 5);
    }

    #[test]
    fn tick_observation_drives_typewriter_from_mount_time() {
        let listeners = ListenerRegistry::new();
        let start = Instant::now();
        let mut mount = ViewMount::mount(&listeners, "Hello", options(), start);
        let host = RecordingHost::new(100, 20);

        mount.observe(Observation::Tick(start + Duration::from_millis(99)), &page(), &host);
        assert_eq!(mount.typewriter().visible_text(), "");

        mount.observe(Observation::Tick(start + Duration::from_millis(130)), &page(), &host);
        assert_eq!(mount.typewriter().visible_text(), "Hel");
        assert!(mount.is_animating());

        mount.observe(Observation::Tick(start + Duration::from_secs(5)), &page(), &host);
        assert!(!mount.is_animating());
    }

    #[test]
    fn observation_kinds_match_listener_kinds() {
        assert_eq!(Observation::Scroll.kind(), ObservationKind::Scroll);
        assert_eq!(
            Observation::PointerMove { x: 0, y: 0 }.kind(),
            ObservationKind::PointerMove
        );
        assert_eq!(Observation::Tick(Instant::now()).kind(), ObservationKind::Tick);
    }
}
