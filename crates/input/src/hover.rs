//! Hover-to-confirm buttons.
//!
//! Keeping the pointer on a button runs a countdown of whole seconds. The
//! button fires once more than [`HOVER_CONFIRM_SECS`] seconds have passed.
//! Moving off the button, or onto another one, starts over.

use crate::types::{Button, HOVER_CONFIRM_SECS};

#[derive(Debug, Clone, Default)]
pub struct HoverConfirm {
    target: Option<Button>,
    held_ms: u64,
}

impl HoverConfirm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `elapsed_ms` with the pointer over `hovered`.
    ///
    /// Any change of `hovered` restarts the countdown, including a move
    /// straight from one button onto a neighbouring one.
    ///
    /// Returns the button that fired, if any.
    pub fn update(&mut self, hovered: Option<Button>, elapsed_ms: u32) -> Option<Button> {
        if hovered != self.target {
            self.target = hovered;
            self.held_ms = 0;
            return None;
        }

        let button = self.target?;
        self.held_ms += elapsed_ms as u64;
        if self.held_ms / 1000 > HOVER_CONFIRM_SECS {
            self.reset();
            return Some(button);
        }
        None
    }

    /// Button under countdown and the digit to show (3, 2, 1, 0)
    pub fn countdown(&self) -> Option<(Button, u64)> {
        self.target
            .map(|b| (b, HOVER_CONFIRM_SECS.saturating_sub(self.held_ms / 1000)))
    }

    pub fn reset(&mut self) {
        self.target = None;
        self.held_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_runs_three_to_zero() {
        let mut h = HoverConfirm::new();
        assert_eq!(h.update(Some(Button::Pause), 16), None);
        assert_eq!(h.countdown(), Some((Button::Pause, 3)));

        let mut seen = vec![3];
        for _ in 0..3 {
            assert_eq!(h.update(Some(Button::Pause), 1000), None);
            if let Some((_, n)) = h.countdown() {
                seen.push(n);
            }
        }
        assert_eq!(seen, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_fires_after_more_than_three_seconds() {
        let mut h = HoverConfirm::new();
        h.update(Some(Button::Exit), 0);
        assert_eq!(h.update(Some(Button::Exit), 3999), None);
        assert_eq!(h.update(Some(Button::Exit), 1), Some(Button::Exit));
        assert_eq!(h.countdown(), None);
    }

    #[test]
    fn test_leaving_restarts() {
        let mut h = HoverConfirm::new();
        h.update(Some(Button::Continue), 0);
        h.update(Some(Button::Continue), 3500);
        assert_eq!(h.update(None, 16), None);
        assert_eq!(h.countdown(), None);

        h.update(Some(Button::Continue), 0);
        assert_eq!(h.countdown(), Some((Button::Continue, 3)));
    }

    #[test]
    fn test_switching_buttons_restarts() {
        let mut h = HoverConfirm::new();
        h.update(Some(Button::Pause), 0);
        h.update(Some(Button::Pause), 3900);
        assert_eq!(h.update(Some(Button::Exit), 500), None);
        assert_eq!(h.countdown(), Some((Button::Exit, 3)));
    }

    #[test]
    fn test_fired_button_needs_a_fresh_hover() {
        let mut h = HoverConfirm::new();
        h.update(Some(Button::Unpause), 0);
        assert_eq!(h.update(Some(Button::Unpause), 4000), Some(Button::Unpause));
        // Still hovering: countdown starts again rather than firing every frame.
        assert_eq!(h.update(Some(Button::Unpause), 16), None);
        assert_eq!(h.countdown(), Some((Button::Unpause, 3)));
    }
}
