//! Core types module - shared data structures and constants
//!
//! This module defines the plain data shared by the game core, the input
//! layer and the terminal front end. Nothing here has behaviour beyond small
//! conversions, so every crate in the workspace can depend on it.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 22 playable rows (indexed 0-21)
//! - A 23rd "floor" row sits below the playfield. It is always filled and
//!   only exists so that falling stones have something to land on.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_FPS` | 120 | Render loop frame cap |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 50 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Fastest gravity |
//! | `KEY_REPEAT_DELAY_MS` | 250 | Held key: delay before the first repeat |
//! | `KEY_REPEAT_INTERVAL_MS` | 25 | Held key: interval between repeats |
//! | `HOVER_CONFIRM_SECS` | 3 | Hover countdown before a button fires |

/// Board width in cells (10 columns)
pub const BOARD_COLS: u8 = 10;

/// Playable board height in cells (22 rows, floor row excluded)
pub const BOARD_ROWS: u8 = 22;

/// Render loop frame cap
pub const MAX_FPS: u32 = 120;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level gained
pub const DROP_STEP_MS: u32 = 50;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed per level (level N ends once `lines >= N * LINES_PER_LEVEL`)
pub const LINES_PER_LEVEL: u32 = 6;

/// Held key: delay before auto-repeat starts
pub const KEY_REPEAT_DELAY_MS: u32 = 250;

/// Held key: interval between auto-repeats
pub const KEY_REPEAT_INTERVAL_MS: u32 = 25;

/// Whole seconds a button has to be hovered before it fires.
///
/// The countdown shows 3, 2, 1, 0 and the button fires once more than this
/// many seconds have passed.
pub const HOVER_CONFIRM_SECS: u64 = 3;

/// Swipe distance in board cells needed to register a gesture
pub const SWIPE_THRESHOLD_CELLS: u16 = 5;

/// Line clear scoring table
///
/// Base points for clearing N lines at once, multiplied by the current level:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Clears of more than 4 rows reuse the 4-line entry.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// A board cell: 0 is empty, 1-7 are piece colours.
pub type Cell = u8;

/// Empty board cell
pub const EMPTY: Cell = 0;

/// Value stored in the floor row below the playfield.
///
/// Distinct from every piece colour so renderers can skip it.
pub const FLOOR: Cell = 8;

/// The seven stone kinds
///
/// The discriminant is the colour index written into the board when a stone
/// of that kind settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T = 1,
    S = 2,
    Z = 3,
    J = 4,
    L = 5,
    I = 6,
    O = 7,
}

impl PieceKind {
    /// All kinds in catalogue order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::I,
        PieceKind::O,
    ];

    /// Colour index used on the board
    pub fn color(self) -> Cell {
        self as Cell
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::I => "i",
            PieceKind::O => "o",
        }
    }
}

/// Discrete player commands
///
/// Every command maps to exactly one game state machine operation, except
/// `Quit`, which ends the process and never touches game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move stone one cell left
    MoveLeft,
    /// Move stone one cell right
    MoveRight,
    /// Drop stone one cell (1 point if it did not lock)
    SoftDrop,
    /// Rotate stone clockwise, no wall kicks
    Rotate,
    /// Drop stone until it locks
    HardDrop,
    /// Pause or resume
    TogglePause,
    /// Start a fresh game after game over
    Restart,
    /// Leave the game
    Quit,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::TogglePause => "togglePause",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }

    /// Whether holding the key should auto-repeat this action
    pub fn repeats(&self) -> bool {
        matches!(
            self,
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::SoftDrop
        )
    }
}

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Playing,
    Paused,
    GameOver,
}

/// On-screen buttons confirmed by hovering the pointer over them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Side panel, while playing
    Pause,
    /// Side panel, while playing
    Exit,
    /// Centre of the board, while paused
    Unpause,
    /// Centre of the board, after game over
    Continue,
}

impl Button {
    /// Action fired once the hover countdown runs out
    pub fn action(self) -> GameAction {
        match self {
            Button::Pause | Button::Unpause => GameAction::TogglePause,
            Button::Exit => GameAction::Quit,
            Button::Continue => GameAction::Restart,
        }
    }

    /// Resting label
    pub fn label(self) -> &'static str {
        match self {
            Button::Pause => "Pause",
            Button::Exit => "Exit",
            Button::Unpause => "Unpause",
            Button::Continue => "Continue",
        }
    }

    /// Label prefix shown next to the countdown digit
    pub fn countdown_label(self) -> &'static str {
        match self {
            Button::Pause => "Pausing in",
            Button::Exit => "Exiting in",
            Button::Unpause => "Unpausing in",
            Button::Continue => "Continuing in",
        }
    }
}

/// Axis-aligned rectangle in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point lies inside (right and bottom edges exclusive)
    ///
    /// ```
    /// use stonefall_types::Rect;
    ///
    /// let r = Rect::new(2, 2, 3, 2);
    /// assert!(r.contains(2, 2));
    /// assert!(r.contains(4, 3));
    /// assert!(!r.contains(5, 3));
    /// assert!(!r.contains(1, 2));
    /// ```
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }
}

/// Core-side event recorded when a stone locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    pub level_up: bool,
}
