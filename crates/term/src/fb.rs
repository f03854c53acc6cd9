//! Framebuffer and style types for terminal rendering.

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

    /// Parse a `#rrggbb` color token.
    pub fn from_hex(token: &str) -> Option<Self> {
        let hex = token.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

impl CellStyle {
    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
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

    /// Resize the framebuffer, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
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

    /// Writes outside the buffer are dropped.
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
        for (i, ch) in s.chars().enumerate() {
            let cx = x.saturating_add(i as u16);
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
        }
    }

    /// Write a decimal number without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) {
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
            let ch = digits[len - 1 - i] as char;
            self.put_char(x.saturating_add(i as u16), y, ch, style);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Row `y` as a string, for tests and debugging.
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
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#00f0f0"), Some(Rgb::new(0, 240, 240)));
        assert_eq!(Rgb::from_hex("#A000F0"), Some(Rgb::new(160, 0, 240)));
        assert_eq!(Rgb::from_hex("00f0f0"), None);
        assert_eq!(Rgb::from_hex("#00f0f"), None);
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_put_u32() {
        let mut fb = FrameBuffer::new(12, 1);
        let style = CellStyle::default();
        fb.put_u32(0, 0, 0, style);
        assert_eq!(fb.row_text(0).trim_end(), "0");

        fb.put_u32(0, 0, 4_294_967_295, style);
        assert_eq!(fb.row_text(0).trim_end(), "4294967295");
    }

    #[test]
    fn test_writes_outside_are_dropped() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(1, 0, "abcdef", CellStyle::default());
        fb.put_char(5, 5, 'x', CellStyle::default());
        assert_eq!(fb.row_text(0), " ab");
    }
}
