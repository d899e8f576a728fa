//! Framebuffer and style types for terminal rendering.

use crate::types::Rect;

pub const ROUNDED_CORNERS: [char; 4] = ['╭', '╮', '╰', '╯'];
pub const SQUARE_CORNERS: [char; 4] = ['┌', '┐', '└', '┘'];

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Write a number in decimal without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for i in 0..len {
            self.put_char(
                x.saturating_add(i as u16),
                y,
                digits[len - 1 - i] as char,
                style,
            );
        }
        len as u16
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Filled box with a rounded single-line border.
    pub fn draw_box(&mut self, rect: Rect, style: CellStyle) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        self.fill_rect(rect.x, rect.y, rect.width, rect.height, ' ', style);
        self.draw_frame(rect, ROUNDED_CORNERS, style);
    }

    /// Single-line border around `rect`; `corners` run top-left, top-right,
    /// bottom-left, bottom-right. Rects narrower than 2 cells are skipped.
    pub fn draw_frame(&mut self, rect: Rect, corners: [char; 4], style: CellStyle) {
        let Rect {
            x,
            y,
            width: w,
            height: h,
        } = rect;
        if w < 2 || h < 2 {
            return;
        }

        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        self.put_char(x, y, corners[0], style);
        self.put_char(right, y, corners[1], style);
        self.put_char(x, bottom, corners[2], style);
        self.put_char(right, bottom, corners[3], style);

        for dx in 1..w - 1 {
            self.put_char(x.saturating_add(dx), y, '─', style);
            self.put_char(x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..h - 1 {
            self.put_char(x, y.saturating_add(dy), '│', style);
            self.put_char(right, y.saturating_add(dy), '│', style);
        }
    }

    /// Text of row `y`, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_u32_writes_digits() {
        let mut fb = FrameBuffer::new(12, 1);
        let style = CellStyle::default();
        assert_eq!(fb.put_u32(0, 0, 0, style), 1);
        assert_eq!(fb.put_u32(2, 0, 4_294_967_295, style), 10);
        assert_eq!(fb.row_text(0), "0 4294967295");
    }

    #[test]
    fn writes_outside_are_clipped() {
        let mut fb = FrameBuffer::new(3, 2);
        let style = CellStyle::default();
        fb.put_str(1, 0, "abcdef", style);
        fb.put_char(9, 9, 'x', style);
        assert_eq!(fb.row_text(0), " ab");
        assert_eq!(fb.row_text(1), "   ");
    }

    #[test]
    fn frames_near_the_coordinate_limit_do_not_overflow() {
        let mut fb = FrameBuffer::new(4, 4);
        let style = CellStyle::default();
        fb.draw_frame(Rect::new(u16::MAX - 1, 1, 6, 3), SQUARE_CORNERS, style);
        fb.draw_frame(Rect::new(1, u16::MAX - 1, 3, 6), SQUARE_CORNERS, style);
        fb.draw_box(Rect::new(u16::MAX, u16::MAX, 4, 4), style);
        assert!((0..4).all(|y| fb.row_text(y) == "    "));
    }

    #[test]
    fn draw_frame_leaves_the_inside_alone() {
        let mut fb = FrameBuffer::new(4, 3);
        let style = CellStyle::default();
        fb.put_char(1, 1, 'x', style);
        fb.draw_frame(Rect::new(0, 0, 4, 3), SQUARE_CORNERS, style);
        assert_eq!(fb.row_text(0), "┌──┐");
        assert_eq!(fb.row_text(1), "│x │");
        assert_eq!(fb.row_text(2), "└──┘");
    }

    #[test]
    fn draw_box_has_rounded_corners() {
        let mut fb = FrameBuffer::new(5, 3);
        fb.draw_box(Rect::new(0, 0, 5, 3), CellStyle::default());
        assert_eq!(fb.row_text(0), "╭───╮");
        assert_eq!(fb.row_text(1), "│   │");
        assert_eq!(fb.row_text(2), "╰───╯");
    }

    #[test]
    fn resize_keeps_dimensions_consistent() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(4, 3);
        assert_eq!(fb.cells().len(), 12);
        assert_eq!((fb.width(), fb.height()), (4, 3));
    }
}
