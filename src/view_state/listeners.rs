//! Scoped observer registration.
//!
//! A [`Listener`] is the handle returned by [`ListenerRegistry::listen`];
//! dropping it deregisters the observer. The registry is single-threaded
//! (`Rc`), matching the event loop that owns it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Kinds of observation a mounted view subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservationKind {
    /// Scroll offset changes.
    Scroll,
    /// Pointer movement.
    PointerMove,
    /// Animation timer ticks.
    Tick,
}

type Counts = RefCell<HashMap<ObservationKind, usize>>;

/// Live listener counts per observation kind.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    counts: Rc<Counts>,
}

impl ListenerRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `kind`; it stays registered until dropped.
    pub fn listen(&self, kind: ObservationKind) -> Listener {
        *self.counts.borrow_mut().entry(kind).or_insert(0) += 1;
        debug!(?kind, "Listener registered");
        Listener {
            kind,
            counts: Rc::downgrade(&self.counts),
        }
    }

    /// Whether at least one listener for `kind` is registered.
    pub fn is_listening(&self, kind: ObservationKind) -> bool {
        self.counts.borrow().get(&kind).is_some_and(|&n| n > 0)
    }

    /// Total registered listeners across all kinds.
    pub fn listener_count(&self) -> usize {
        self.counts.borrow().values().sum()
    }
}

/// Registration handle. Deregisters on drop.
#[derive(Debug)]
pub struct Listener {
    kind: ObservationKind,
    counts: Weak<Counts>,
}

impl Listener {
    /// Kind this listener observes.
    pub fn kind(&self) -> ObservationKind {
        self.kind
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let Some(counts) = self.counts.upgrade() else {
            return;
        };
        let mut counts = counts.borrow_mut();
        if let Some(n) = counts.get_mut(&self.kind) {
            *n = n.saturating_sub(1);
            if *n == 0 {
                counts.remove(&self.kind);
            }
        }
        debug!(kind = ?self.kind, "Listener deregistered");
    }
}
