//! Scroll-reveal trigger.
//!
//! The features grid stays hidden until the section is first seen. The
//! browser side feeds intersection ratios into a [`RevealLatch`]; once the
//! latch flips it never goes back.

use std::time::Duration;

/// Visible fraction of the section that triggers the reveal.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Gap between consecutive cards entering.
pub const STAGGER_STEP: Duration = Duration::from_millis(200);

/// One-way visibility flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed an observed intersection ratio.
    ///
    /// Returns `true` only for the observation that flips the latch.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.revealed || visible_ratio < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Flip without an observation (used when the observer is unavailable).
    /// Returns `true` if this call flipped it.
    pub fn force(&mut self) -> bool {
        let flipped = !self.revealed;
        self.revealed = true;
        flipped
    }
}

/// Entrance delay of the card at `index`.
pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_STEP * index as u32
}

/// Delay of the card at `index` as a CSS time, e.g. `"0.4s"`.
pub fn stagger_css(index: usize) -> String {
    format!("{:.1}s", stagger_delay(index).as_secs_f64())
}

/// Inline style setting the entrance delay read by `.reveal-card.revealed`.
///
/// Only the entrance animation is delayed; hover transitions are not.
pub fn stagger_style(index: usize) -> String {
    format!("--stagger-delay: {};", stagger_css(index))
}
