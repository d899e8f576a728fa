//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen arrangement, left to right: the framed board, then a side panel with
//! the next-stone box, the counters and the Pause/Exit buttons. While paused or
//! after game over the board and panel are hidden and a message with a single
//! centred button is shown instead.

use crate::core::{GameSnapshot, Shape};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb, SQUARE_CORNERS};
use crate::types::{Button, Cell as BoardCell, Phase, Rect};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Per-frame pointer state drawn on top of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlay {
    pub pointer: Option<(u16, u16)>,
    /// Button being hovered and the countdown digit to show on it
    pub countdown: Option<(Button, u64)>,
}

/// Screen rectangles, shared by drawing and pointer hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Board including its one-character frame
    pub board: Rect,
    pub panel_x: u16,
    /// Next-stone box; also the swipe area
    pub preview: Rect,
    pub pause: Rect,
    pub exit: Rect,
    /// Unpause / Continue
    pub centre_button: Rect,
    /// First message row while paused or after game over
    pub message_y: u16,
}

impl Layout {
    /// The button under (x, y) among those shown in `phase`
    pub fn button_at(&self, x: u16, y: u16, phase: Phase) -> Option<Button> {
        match phase {
            Phase::Playing if self.pause.contains(x, y) => Some(Button::Pause),
            Phase::Playing if self.exit.contains(x, y) => Some(Button::Exit),
            Phase::Paused if self.centre_button.contains(x, y) => Some(Button::Unpause),
            Phase::GameOver if self.centre_button.contains(x, y) => Some(Button::Continue),
            _ => None,
        }
    }

    pub fn button_rect(&self, button: Button) -> Rect {
        match button {
            Button::Pause => self.pause,
            Button::Exit => self.exit,
            Button::Unpause | Button::Continue => self.centre_button,
        }
    }
}

const PANEL_GAP: u16 = 2;
const PANEL_W: u16 = 18;
const PREVIEW_W: u16 = 12;
const PREVIEW_H: u16 = 6;
const BUTTON_W: u16 = 18;
const BUTTON_H: u16 = 3;

const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);
/// Checkerboard and button fill
const GRID: Rgb = Rgb::new(35, 35, 35);
const POINTER: Rgb = Rgb::new(255, 0, 255);
const COUNTDOWN: Rgb = Rgb::new(255, 85, 85);

/// Stone colours by board cell value
const PALETTE: [Rgb; 7] = [
    Rgb::new(255, 85, 85),
    Rgb::new(100, 200, 115),
    Rgb::new(120, 108, 245),
    Rgb::new(255, 140, 50),
    Rgb::new(50, 120, 52),
    Rgb::new(146, 202, 73),
    Rgb::new(150, 161, 218),
];

fn palette(cell: BoardCell) -> Option<Rgb> {
    PALETTE.get((cell as usize).checked_sub(1)?).copied()
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Where everything goes for a `cols x rows` board in `viewport`.
    ///
    /// Board and panel are centred together horizontally, the board frame
    /// vertically.
    pub fn layout(&self, cols: u8, rows: u8, viewport: Viewport) -> Layout {
        let frame_w = (cols as u16) * self.cell_w + 2;
        let frame_h = (rows as u16) * self.cell_h + 2;
        let total_w = frame_w + PANEL_GAP + PANEL_W;

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        let panel_x = start_x + frame_w + PANEL_GAP;

        let message_y = start_y + (frame_h / 2).saturating_sub(2);

        Layout {
            board: Rect::new(start_x, start_y, frame_w, frame_h),
            panel_x,
            preview: Rect::new(panel_x, start_y + 1, PREVIEW_W, PREVIEW_H),
            pause: Rect::new(panel_x, start_y + 14, BUTTON_W, BUTTON_H),
            exit: Rect::new(panel_x, start_y + 18, BUTTON_W, BUTTON_H),
            centre_button: Rect::new(
                start_x + frame_w.saturating_sub(BUTTON_W) / 2,
                message_y + 4,
                BUTTON_W,
                BUTTON_H,
            ),
            message_y,
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        overlay: &Overlay,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(snap.cols, snap.rows, viewport);
        let text = CellStyle::new(WHITE, BLACK).bold();

        match snap.phase {
            Phase::Playing => {
                self.draw_board(fb, snap, &layout);
                self.draw_side_panel(fb, snap, &layout, overlay);
            }
            Phase::Paused => {
                draw_centered(fb, layout.board, layout.message_y, "Paused", text);
                draw_button(fb, layout.centre_button, Button::Unpause, overlay);
            }
            Phase::GameOver => {
                draw_centered(fb, layout.board, layout.message_y, "Game Over!", text);

                let label = "Your score: ";
                let digits = decimal_width(snap.score);
                let w = label.len() as u16 + digits;
                let x = layout.board.x + layout.board.width.saturating_sub(w) / 2;
                fb.put_str(x, layout.message_y + 2, label, text);
                fb.put_u32(x + label.len() as u16, layout.message_y + 2, snap.score, text);

                draw_button(fb, layout.centre_button, Button::Continue, overlay);
            }
        }

        if let Some((px, py)) = overlay.pointer {
            if let Some(under) = fb.get(px, py) {
                let style = CellStyle::new(POINTER, under.style.bg).bold();
                fb.put_char(px, py, '●', style);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, overlay: &Overlay, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, viewport, &mut fb);
        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let frame = layout.board;
        fb.draw_frame(frame, SQUARE_CORNERS, CellStyle::new(WHITE, BLACK));

        // Checkerboard background and settled cells.
        for y in 0..snap.rows as u16 {
            for x in 0..snap.cols as u16 {
                match palette(snap.cell(x as usize, y as usize)) {
                    Some(color) => self.draw_block(fb, frame, x, y, color),
                    None => {
                        let bg = if x % 2 == y % 2 { GRID } else { BLACK };
                        self.fill_cell_rect(fb, frame, x, y, ' ', CellStyle::new(WHITE, bg));
                    }
                }
            }
        }

        // Active stone.
        if let Some(active) = snap.active {
            for (cx, cy, c) in active.shape.filled() {
                let x = active.x + cx;
                let y = active.y + cy;
                if x < 0 || y < 0 || x >= snap.cols as i32 || y >= snap.rows as i32 {
                    continue;
                }
                if let Some(color) = palette(c) {
                    self.draw_block(fb, frame, x as u16, y as u16, color);
                }
            }
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Rect, x: u16, y: u16, color: Rgb) {
        self.fill_cell_rect(fb, frame, x, y, '█', CellStyle::new(color, GRID));
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Rect,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        layout: &Layout,
        overlay: &Overlay,
    ) {
        let x = layout.panel_x;
        if x >= fb.width() {
            return;
        }

        let label = CellStyle::new(WHITE, BLACK).bold();
        let y = layout.board.y;

        fb.put_str(x, y, "Next:", label);
        fb.draw_box(layout.preview, CellStyle::new(WHITE, GRID));
        self.draw_preview(fb, layout.preview, &snap.next_shape);

        for (dy, name, value) in [
            (8, "Score: ", snap.score),
            (10, "Level: ", snap.level),
            (12, "Lines: ", snap.lines),
        ] {
            fb.put_str(x, y + dy, name, label);
            fb.put_u32(x + name.len() as u16, y + dy, value, label);
        }

        draw_button(fb, layout.pause, Button::Pause, overlay);
        draw_button(fb, layout.exit, Button::Exit, overlay);
    }

    /// Next stone centred in the preview box
    fn draw_preview(&self, fb: &mut FrameBuffer, area: Rect, shape: &Shape) {
        let w = shape.width() as u16 * self.cell_w;
        let h = shape.height() as u16 * self.cell_h;
        let ox = area.x + area.width.saturating_sub(w) / 2;
        let oy = area.y + area.height.saturating_sub(h) / 2;

        for (cx, cy, c) in shape.filled() {
            if let Some(color) = palette(c) {
                fb.fill_rect(
                    ox + cx as u16 * self.cell_w,
                    oy + cy as u16 * self.cell_h,
                    self.cell_w,
                    self.cell_h,
                    '█',
                    CellStyle::new(color, GRID),
                );
            }
        }
    }
}

/// Boxed button; shows the countdown digit while it is being hovered.
fn draw_button(fb: &mut FrameBuffer, rect: Rect, button: Button, overlay: &Overlay) {
    let style = CellStyle::new(WHITE, GRID);
    fb.draw_box(rect, style);

    let mid_y = rect.y + rect.height / 2;
    match overlay.countdown {
        Some((b, secs)) if b == button => {
            let label = button.countdown_label();
            let w = label.len() as u16 + 1 + decimal_width(secs as u32);
            let x = rect.x + rect.width.saturating_sub(w) / 2;
            fb.put_str(x, mid_y, label, style);
            fb.put_u32(
                x + label.len() as u16 + 1,
                mid_y,
                secs as u32,
                CellStyle::new(COUNTDOWN, GRID).bold(),
            );
        }
        _ => {
            let label = button.label();
            let x = rect.x + rect.width.saturating_sub(label.len() as u16) / 2;
            fb.put_str(x, mid_y, label, style);
        }
    }
}

fn draw_centered(fb: &mut FrameBuffer, area: Rect, y: u16, text: &str, style: CellStyle) {
    let w = text.chars().count() as u16;
    let x = area.x + area.width.saturating_sub(w) / 2;
    fb.put_str(x, y, text, style);
}

fn decimal_width(mut n: u32) -> u16 {
    let mut w = 1;
    while n >= 10 {
        n /= 10;
        w += 1;
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{get_shape, ActiveSnapshot};
    use crate::types::PieceKind;

    fn playing_snapshot() -> GameSnapshot {
        GameSnapshot {
            next: PieceKind::I,
            next_shape: get_shape(PieceKind::I),
            ..GameSnapshot::default()
        }
    }

    fn contains_text(fb: &FrameBuffer, needle: &str) -> bool {
        (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
    }

    #[test]
    fn layout_places_panel_right_of_board() {
        let view = GameView::default();
        let l = view.layout(10, 22, Viewport::new(42, 24));
        assert_eq!(l.board, Rect::new(0, 0, 22, 24));
        assert_eq!(l.panel_x, 24);
        assert_eq!(l.preview, Rect::new(24, 1, 12, 6));
        assert_eq!(l.pause, Rect::new(24, 14, 18, 3));
        assert_eq!(l.exit, Rect::new(24, 18, 18, 3));
        assert_eq!(l.message_y, 10);
        assert_eq!(l.centre_button, Rect::new(2, 14, 18, 3));
    }

    #[test]
    fn layout_centres_in_large_viewport() {
        let view = GameView::default();
        let l = view.layout(10, 22, Viewport::new(82, 30));
        assert_eq!(l.board.x, 20);
        assert_eq!(l.board.y, 3);
    }

    #[test]
    fn button_hit_test_depends_on_phase() {
        let view = GameView::default();
        let l = view.layout(10, 22, Viewport::new(42, 24));
        assert_eq!(l.button_at(25, 15, Phase::Playing), Some(Button::Pause));
        assert_eq!(l.button_at(25, 19, Phase::Playing), Some(Button::Exit));
        assert_eq!(l.button_at(25, 15, Phase::Paused), None);
        assert_eq!(l.button_at(5, 15, Phase::Paused), Some(Button::Unpause));
        assert_eq!(l.button_at(5, 15, Phase::GameOver), Some(Button::Continue));
        assert_eq!(l.button_at(5, 15, Phase::Playing), None);
        assert_eq!(l.button_rect(Button::Continue), l.centre_button);
    }

    #[test]
    fn checkerboard_alternates_background() {
        let fb = GameView::default().render(
            &playing_snapshot(),
            &Overlay::default(),
            Viewport::new(42, 24),
        );
        assert_eq!(fb.get(1, 1).unwrap().style.bg, GRID);
        assert_eq!(fb.get(3, 1).unwrap().style.bg, BLACK);
        assert_eq!(fb.get(3, 2).unwrap().style.bg, GRID);
    }

    #[test]
    fn active_stone_uses_palette() {
        let mut snap = playing_snapshot();
        snap.active = Some(ActiveSnapshot {
            kind: PieceKind::T,
            shape: get_shape(PieceKind::T),
            x: 0,
            y: 0,
        });
        let fb = GameView::default().render(&snap, &Overlay::default(), Viewport::new(42, 24));
        let c = fb.get(1, 1).unwrap();
        assert_eq!(c.ch, '█');
        assert_eq!(c.style.fg, Rgb::new(255, 85, 85));
        // Second row of the T only has its middle cell.
        assert_eq!(fb.get(1, 2).unwrap().ch, ' ');
        assert_eq!(fb.get(3, 2).unwrap().ch, '█');
    }

    #[test]
    fn preview_shows_next_stone() {
        let fb = GameView::default().render(
            &playing_snapshot(),
            &Overlay::default(),
            Viewport::new(42, 24),
        );
        // I is 8 columns wide and one row tall, centred in the 12x6 box.
        for x in 26..34 {
            assert_eq!(fb.get(x, 3).unwrap().ch, '█', "x={}", x);
        }
        assert_eq!(fb.get(25, 3).unwrap().ch, ' ');
    }

    #[test]
    fn countdown_replaces_button_label() {
        let overlay = Overlay {
            pointer: None,
            countdown: Some((Button::Exit, 2)),
        };
        let fb = GameView::default().render(&playing_snapshot(), &overlay, Viewport::new(42, 24));
        assert!(fb.row_text(15).contains("Pause"));
        assert!(fb.row_text(19).contains("Exiting in 2"));
    }

    #[test]
    fn pointer_marker_keeps_background() {
        let overlay = Overlay {
            pointer: Some((1, 1)),
            countdown: None,
        };
        let fb = GameView::default().render(&playing_snapshot(), &overlay, Viewport::new(42, 24));
        let c = fb.get(1, 1).unwrap();
        assert_eq!(c.ch, '●');
        assert_eq!(c.style.fg, POINTER);
        assert_eq!(c.style.bg, GRID);
    }

    #[test]
    fn decimal_width_counts_digits() {
        assert_eq!(decimal_width(0), 1);
        assert_eq!(decimal_width(9), 1);
        assert_eq!(decimal_width(10), 2);
        assert_eq!(decimal_width(u32::MAX), 10);
    }
}
