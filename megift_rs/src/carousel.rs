//! Screen carousel for the phone mockup.
//!
//! Pure index bookkeeping; the landing page drives [`Carousel::advance`] from
//! an interval timer and [`Carousel::select`] from the indicator dots.

use crate::catalog::ImagePosition;

/// Position in a fixed-length list of screens, wrapping at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    /// Carousel over `len` screens, starting at the first.
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.len > 0 && index == self.current
    }

    /// Move to the next screen, wrapping to zero after the last. Returns the new index.
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    /// Jump straight to `index`. Out-of-range indices are ignored.
    ///
    /// Returns whether the selection was applied.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = index;
        true
    }

    /// How the screen at `index` should be drawn right now.
    pub fn placement(&self, index: usize, position: ImagePosition) -> ScreenPlacement {
        if self.is_current(index) {
            ScreenPlacement::Visible
        } else {
            ScreenPlacement::Hidden {
                offset_px: position.hidden_offset_px(),
            }
        }
    }
}

/// Render state of one screen in the mockup.
///
/// All screens stay mounted; only the current one is opaque and in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPlacement {
    Visible,
    Hidden { offset_px: i32 },
}

impl ScreenPlacement {
    /// Inline style driving the CSS transition between states.
    pub fn style(&self) -> String {
        match self {
            ScreenPlacement::Visible => "opacity: 1; transform: translateY(0px);".to_string(),
            ScreenPlacement::Hidden { offset_px } => {
                format!("opacity: 0; transform: translateY({offset_px}px);")
            }
        }
    }
}
