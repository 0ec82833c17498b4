//! Delayed character-by-character text reveal.
//!
//! Driven by elapsed time since mount rather than by counting timer callbacks,
//! so a late or coalesced tick never reveals the wrong amount.

use std::time::Duration;

/// Phase of the reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TypewriterState {
    /// Waiting for the start delay to elapse. Nothing is shown.
    Idle,
    /// Revealing; the cursor is shown after the revealed prefix.
    Revealing,
    /// Every character is revealed.
    Done,
}

/// Reveals `full_text` one character per `interval`, starting after `delay`.
///
/// # Invariants
/// - `state` only moves Idle → Revealing → Done.
/// - `revealed` never decreases and never exceeds the character count.
/// - After `delay + k * interval`, exactly `min(k, len)` characters are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    full_text: String,
    char_count: usize,
    delay: Duration,
    interval: Duration,
    state: TypewriterState,
    revealed: usize,
}

impl Typewriter {
    /// Create an idle typewriter.
    pub fn new(full_text: impl Into<String>, delay: Duration, interval: Duration) -> Self {
        let full_text = full_text.into();
        let char_count = full_text.chars().count();
        Self {
            full_text,
            char_count,
            delay,
            interval,
            state: TypewriterState::Idle,
            revealed: 0,
        }
    }

    /// Advance to `elapsed` since mount.
    ///
    /// Returns true if the visible output changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.state == TypewriterState::Done || elapsed < self.delay {
            return false;
        }

        let since_start = elapsed - self.delay;
        let ticks = if self.interval.is_zero() {
            self.char_count
        } else {
            usize::try_from(since_start.as_nanos() / self.interval.as_nanos())
                .unwrap_or(usize::MAX)
        };
        let target = ticks.min(self.char_count).max(self.revealed);

        let next_state = if target == self.char_count {
            TypewriterState::Done
        } else {
            TypewriterState::Revealing
        };
        let changed = target != self.revealed || next_state != self.state;
        self.revealed = target;
        self.state = next_state;
        changed
    }

    /// Current phase.
    pub fn state(&self) -> TypewriterState {
        self.state
    }

    /// Number of characters revealed so far.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Revealed prefix of the text.
    pub fn visible_text(&self) -> &str {
        let end = self
            .full_text
            .char_indices()
            .nth(self.revealed)
            .map_or(self.full_text.len(), |(byte, _)| byte);
        &self.full_text[..end]
    }

    /// The whole text being revealed.
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Whether the reveal still needs timer ticks.
    pub fn is_animating(&self) -> bool {
        self.state != TypewriterState::Done
    }
}
