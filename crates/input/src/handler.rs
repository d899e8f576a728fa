//! Key auto-repeat for movement and soft drop.
//!
//! Holding Left, Right or Down repeats the action after an initial delay.
//! Supports terminals that do not emit key release events by using a timeout.
//! Time only advances through [`InputHandler::update`], so the handler is
//! deterministic under test.

use arrayvec::ArrayVec;

use crate::types::{GameAction, KEY_REPEAT_DELAY_MS, KEY_REPEAT_INTERVAL_MS};

/// Direction for horizontal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
    None,
}

impl HorizontalDirection {
    fn action(self) -> Option<GameAction> {
        match self {
            HorizontalDirection::Left => Some(GameAction::MoveLeft),
            HorizontalDirection::Right => Some(GameAction::MoveRight),
            HorizontalDirection::None => None,
        }
    }
}

/// Tracks held keys and emits repeats.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: HorizontalDirection,
    down_held: bool,
    /// Time since the last press of a repeatable key.
    idle_ms: u32,
    horizontal_delay_timer: u32,
    down_delay_timer: u32,
    horizontal_repeat_accumulator: u32,
    down_repeat_accumulator: u32,
    repeat_delay: u32,
    repeat_interval: u32,
    key_release_timeout_ms: u32,
}

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that triggers repeats.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(KEY_REPEAT_DELAY_MS, KEY_REPEAT_INTERVAL_MS)
    }

    /// Zero intervals are raised to 1ms.
    pub fn with_config(repeat_delay: u32, repeat_interval: u32) -> Self {
        Self {
            horizontal: HorizontalDirection::None,
            down_held: false,
            idle_ms: 0,
            horizontal_delay_timer: 0,
            down_delay_timer: 0,
            horizontal_repeat_accumulator: 0,
            down_repeat_accumulator: 0,
            repeat_delay,
            repeat_interval: repeat_interval.max(1),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Register a key press that mapped to `action`.
    ///
    /// Returns the action to apply right away. Presses of an already held
    /// repeatable key return `None` (the handler generates those repeats);
    /// other actions pass straight through.
    pub fn handle_key_press(&mut self, action: GameAction) -> Option<GameAction> {
        if !action.repeats() {
            return Some(action);
        }

        match action {
            GameAction::MoveLeft | GameAction::MoveRight => {
                self.idle_ms = 0;
                let dir = if action == GameAction::MoveLeft {
                    HorizontalDirection::Left
                } else {
                    HorizontalDirection::Right
                };
                if self.horizontal == dir {
                    None
                } else {
                    self.horizontal = dir;
                    self.horizontal_delay_timer = 0;
                    self.horizontal_repeat_accumulator = 0;
                    Some(action)
                }
            }
            GameAction::SoftDrop => {
                self.idle_ms = 0;
                if self.down_held {
                    None
                } else {
                    self.down_held = true;
                    self.down_delay_timer = 0;
                    self.down_repeat_accumulator = 0;
                    Some(action)
                }
            }
            _ => None,
        }
    }

    pub fn handle_key_release(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft if self.horizontal == HorizontalDirection::Left => {
                self.release_horizontal();
            }
            GameAction::MoveRight if self.horizontal == HorizontalDirection::Right => {
                self.release_horizontal();
            }
            GameAction::SoftDrop => self.release_down(),
            _ => {}
        }
    }

    /// Advance time and collect the repeats that became due.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 32> {
        let mut actions = ArrayVec::<GameAction, 32>::new();

        // Auto-release when terminal does not emit release events.
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms > self.key_release_timeout_ms {
            self.release_horizontal();
            self.release_down();
        }

        if let Some(action) = self.horizontal.action() {
            let prev = self.horizontal_delay_timer;
            self.horizontal_delay_timer = prev.saturating_add(elapsed_ms);

            if self.horizontal_delay_timer >= self.repeat_delay {
                let excess = if prev < self.repeat_delay {
                    self.horizontal_delay_timer - self.repeat_delay
                } else {
                    elapsed_ms
                };
                self.horizontal_repeat_accumulator += excess;

                while self.horizontal_repeat_accumulator >= self.repeat_interval {
                    let _ = actions.try_push(action);
                    self.horizontal_repeat_accumulator -= self.repeat_interval;
                }
            }
        }

        if self.down_held {
            let prev = self.down_delay_timer;
            self.down_delay_timer = prev.saturating_add(elapsed_ms);

            if self.down_delay_timer >= self.repeat_delay {
                let excess = if prev < self.repeat_delay {
                    self.down_delay_timer - self.repeat_delay
                } else {
                    elapsed_ms
                };
                self.down_repeat_accumulator += excess;
                while self.down_repeat_accumulator >= self.repeat_interval {
                    let _ = actions.try_push(GameAction::SoftDrop);
                    self.down_repeat_accumulator -= self.repeat_interval;
                }
            }
        }

        actions
    }

    pub fn reset(&mut self) {
        self.release_horizontal();
        self.release_down();
        self.idle_ms = 0;
    }

    fn release_horizontal(&mut self) {
        self.horizontal = HorizontalDirection::None;
        self.horizontal_delay_timer = 0;
        self.horizontal_repeat_accumulator = 0;
    }

    fn release_down(&mut self) {
        self.down_held = false;
        self.down_delay_timer = 0;
        self.down_repeat_accumulator = 0;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_repeats_after_delay() {
        let mut ih = InputHandler::with_config(100, 25).with_key_release_timeout_ms(10_000);

        assert_eq!(
            ih.handle_key_press(GameAction::MoveLeft),
            Some(GameAction::MoveLeft)
        );

        // Before the delay expires: no repeats.
        assert!(ih.update(99).is_empty());

        // Exactly at the delay: still no repeats.
        assert!(ih.update(1).is_empty());

        // First interval after the delay: one repeat.
        assert_eq!(ih.update(25).as_slice(), &[GameAction::MoveLeft]);

        // Another interval: one repeat again.
        assert_eq!(ih.update(25).as_slice(), &[GameAction::MoveLeft]);
    }

    #[test]
    fn test_default_timing_is_250_then_25() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(10_000);
        ih.handle_key_press(GameAction::MoveRight);

        assert!(ih.update(250).is_empty());
        assert_eq!(ih.update(50).len(), 2);
    }

    #[test]
    fn test_held_press_is_swallowed() {
        let mut ih = InputHandler::new();
        assert!(ih.handle_key_press(GameAction::SoftDrop).is_some());
        assert_eq!(ih.handle_key_press(GameAction::SoftDrop), None);
    }

    #[test]
    fn test_direction_switch_fires_immediately() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(10_000);
        ih.handle_key_press(GameAction::MoveLeft);
        ih.update(300);
        assert_eq!(
            ih.handle_key_press(GameAction::MoveRight),
            Some(GameAction::MoveRight)
        );
        // Delay starts over for the new direction.
        assert!(ih.update(200).is_empty());
    }

    #[test]
    fn test_non_repeatable_actions_pass_through() {
        let mut ih = InputHandler::new();
        for action in [
            GameAction::Rotate,
            GameAction::HardDrop,
            GameAction::TogglePause,
            GameAction::Restart,
            GameAction::Quit,
        ] {
            assert_eq!(ih.handle_key_press(action), Some(action));
            assert_eq!(ih.handle_key_press(action), Some(action));
        }
        assert!(ih.update(1000).is_empty());
    }

    #[test]
    fn test_release_stops_repeats() {
        let mut ih = InputHandler::with_config(100, 25).with_key_release_timeout_ms(10_000);
        ih.handle_key_press(GameAction::MoveLeft);
        ih.handle_key_press(GameAction::SoftDrop);
        assert!(!ih.update(150).is_empty());

        ih.handle_key_release(GameAction::MoveRight);
        assert!(ih.update(25).contains(&GameAction::MoveLeft));

        ih.handle_key_release(GameAction::MoveLeft);
        ih.handle_key_release(GameAction::SoftDrop);
        assert!(ih.update(200).is_empty());
    }

    #[test]
    fn test_auto_release_triggers_after_timeout_without_key_release_events() {
        let mut ih = InputHandler::with_config(100, 25).with_key_release_timeout_ms(50);

        assert_eq!(
            ih.handle_key_press(GameAction::MoveLeft),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(ih.horizontal, HorizontalDirection::Left);

        let actions = ih.update(51);
        assert!(actions.is_empty());
        assert_eq!(ih.horizontal, HorizontalDirection::None);
    }

    #[test]
    fn test_non_movement_key_does_not_extend_auto_release_timeout() {
        let mut ih = InputHandler::with_config(100, 25).with_key_release_timeout_ms(50);

        ih.handle_key_press(GameAction::MoveLeft);
        assert!(ih.update(40).is_empty());
        assert_eq!(ih.handle_key_press(GameAction::Rotate), Some(GameAction::Rotate));

        // The stale movement key should still auto-release.
        assert!(ih.update(11).is_empty());
        assert_eq!(ih.horizontal, HorizontalDirection::None);
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        let ih = InputHandler::new();
        assert!(ih.key_release_timeout_ms() > 0);
    }

    #[test]
    fn test_reset_clears_held_state_and_stops_repeats() {
        let mut ih = InputHandler::with_config(100, 25).with_key_release_timeout_ms(10_000);

        ih.handle_key_press(GameAction::MoveLeft);
        assert!(!ih.update(200).is_empty(), "expected repeats before reset");

        ih.reset();
        assert!(ih.update(200).is_empty(), "reset should stop repeats");
    }
}
