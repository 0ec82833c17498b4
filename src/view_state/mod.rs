//! View-state layer - section tracking, scrolling, and animation state
//!
//! Everything here is independent of the terminal: geometry arrives through
//! `LayoutMeasure`/`PageLayout`, scrolling through `ScrollHost`.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (Extent, Viewport, PointerPosition)
//! - `document`: Document - the portfolio laid out as rows
//! - `hit_test`: Nav bar and indicator geometry, click resolution
//! - `registry`: SectionRegistry and the LayoutMeasure seam
//! - `tracker`: ViewportTracker - active section, pointer, scroll-to-section
//! - `typewriter`: Typewriter - delayed character reveal
//! - `scroller`: Scroller - clamped scroll offset with smooth scrolling
//! - `parallax`: Pointer- and scroll-driven cosmetic offsets
//! - `reveal`: RevealSet - sticky reveal-on-scroll for cards
//! - `listeners`: ListenerRegistry - scoped observer registration
//! - `mount`: ViewMount - everything a mounted page view owns

pub mod document;
pub mod listeners;
pub mod mount;
pub mod parallax;
pub mod registry;
pub mod reveal;
pub mod scroller;
pub mod tracker;
pub mod types;
pub mod typewriter;

#[cfg(test)]
pub(crate) mod test_support;

pub use document::{Document, Hotspot, Row, RowRole};
pub use hit_test::{ClickTarget, IndicatorItem, NavItem};
pub use listeners::{Listener, ListenerRegistry, ObservationKind};
pub use mount::{MountOptions, Observation, PageLayout, ViewMount};
pub use registry::{LayoutMeasure, SectionDescriptor, SectionRegistry};
pub use reveal::{CardId, RevealSet};
pub use scroller::Scroller;
pub use tracker::{NavBar, ScrollHost, ViewportTracker};
pub use types::{Extent, PointerPosition, Viewport};
pub use typewriter::{Typewriter, TypewriterState};
