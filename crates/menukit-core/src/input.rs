//! Pointer button state and click edge detection.

use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left (primary) mouse button
    #[default]
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

/// What a [`PressLatch`] saw on one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonEdge {
    /// Button is up.
    Released,
    /// Button is down and no click has been reported for this press yet.
    PressedEdge,
    /// Button is down and this press already produced a click.
    Held,
}

/// Turns a polled "is the button down" flag into single click reports.
///
/// A latch fires at most once per press: after [`fire`](Self::fire) every
/// poll returns [`ButtonEdge::Held`] until the button is seen released. A
/// press that never fires (it landed off-target) stays on
/// [`ButtonEdge::PressedEdge`], so dragging onto a target while holding the
/// button still reports one click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressLatch {
    fired: bool,
}

impl PressLatch {
    /// Create a released latch.
    #[must_use]
    pub const fn new() -> Self {
        Self { fired: false }
    }

    /// Record the current button state and classify it.
    pub fn observe(&mut self, pressed: bool) -> ButtonEdge {
        if !pressed {
            self.fired = false;
            ButtonEdge::Released
        } else if self.fired {
            ButtonEdge::Held
        } else {
            ButtonEdge::PressedEdge
        }
    }

    /// Mark the current press as consumed.
    pub fn fire(&mut self) {
        self.fired = true;
    }

    /// Whether the current press already produced a click.
    #[must_use]
    pub const fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mouse_button_default_is_left() {
        assert_eq!(MouseButton::default(), MouseButton::Left);
    }

    #[test]
    fn test_latch_starts_released() {
        let latch = PressLatch::new();
        assert!(!latch.has_fired());
        assert_eq!(latch, PressLatch::default());
    }

    #[test]
    fn test_latch_press_fire_hold_release() {
        let mut latch = PressLatch::new();
        assert_eq!(latch.observe(true), ButtonEdge::PressedEdge);
        latch.fire();
        assert_eq!(latch.observe(true), ButtonEdge::Held);
        assert_eq!(latch.observe(true), ButtonEdge::Held);
        assert_eq!(latch.observe(false), ButtonEdge::Released);
        assert!(!latch.has_fired());
        assert_eq!(latch.observe(true), ButtonEdge::PressedEdge);
    }

    #[test]
    fn test_unfired_press_stays_on_edge() {
        let mut latch = PressLatch::new();
        assert_eq!(latch.observe(true), ButtonEdge::PressedEdge);
        assert_eq!(latch.observe(true), ButtonEdge::PressedEdge);
    }

    proptest! {
        #[test]
        fn prop_fire_on_every_edge_yields_one_edge_per_press(
            polls in proptest::collection::vec(any::<bool>(), 0..64)
        ) {
            let mut latch = PressLatch::new();
            let mut edges = 0usize;
            let mut presses = 0usize;
            let mut previous = false;
            for pressed in polls {
                if pressed && !previous {
                    presses += 1;
                }
                previous = pressed;
                if latch.observe(pressed) == ButtonEdge::PressedEdge {
                    latch.fire();
                    edges += 1;
                }
            }
            prop_assert_eq!(edges, presses);
        }
    }
}
