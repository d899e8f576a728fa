//! Pointer swipes across the next-stone box.
//!
//! A swipe is judged by two points only: where the pointer entered the box and
//! where it was first seen outside again. Horizontal travel wins over vertical.

use crate::types::{GameAction, Rect, SWIPE_THRESHOLD_CELLS};

/// Terminal columns per board cell
const CHARS_PER_CELL: u16 = 2;

#[derive(Debug, Clone)]
pub struct SwipeDetector {
    area: Rect,
    threshold_x: i32,
    threshold_y: i32,
    entered_at: Option<(u16, u16)>,
}

impl SwipeDetector {
    /// Thresholds in terminal columns and rows; travel must exceed them.
    pub fn new(area: Rect, threshold_x: u16, threshold_y: u16) -> Self {
        Self {
            area,
            threshold_x: threshold_x as i32,
            threshold_y: threshold_y as i32,
            entered_at: None,
        }
    }

    /// Threshold of [`SWIPE_THRESHOLD_CELLS`] board cells in each direction
    pub fn with_default_threshold(area: Rect) -> Self {
        Self::new(
            area,
            SWIPE_THRESHOLD_CELLS * CHARS_PER_CELL,
            SWIPE_THRESHOLD_CELLS,
        )
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Follow a relayout. A moved box drops any swipe in progress.
    pub fn set_area(&mut self, area: Rect) {
        if area != self.area {
            self.area = area;
            self.entered_at = None;
        }
    }

    pub fn in_progress(&self) -> bool {
        self.entered_at.is_some()
    }

    /// Feed the current pointer position; returns the gesture once the pointer
    /// leaves the box.
    pub fn pointer_moved(&mut self, x: u16, y: u16) -> Option<GameAction> {
        let inside = self.area.contains(x, y);
        match self.entered_at {
            None if inside => {
                self.entered_at = Some((x, y));
                None
            }
            Some(enter) if !inside => {
                self.entered_at = None;
                self.classify(enter, (x, y))
            }
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.entered_at = None;
    }

    fn classify(&self, enter: (u16, u16), leave: (u16, u16)) -> Option<GameAction> {
        let dx = enter.0 as i32 - leave.0 as i32;
        let dy = enter.1 as i32 - leave.1 as i32;

        if dx > self.threshold_x {
            Some(GameAction::MoveLeft)
        } else if dx < -self.threshold_x {
            Some(GameAction::MoveRight)
        } else if dy > self.threshold_y {
            Some(GameAction::Rotate)
        } else if dy < -self.threshold_y {
            Some(GameAction::HardDrop)
        } else {
            None
        }
    }
}
