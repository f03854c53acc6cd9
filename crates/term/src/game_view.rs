//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MAX_SHAPE_SIZE};

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

/// Front-end state drawn next to the game.
#[derive(Debug, Clone, Copy, Default)]
pub struct HudView<'a> {
    /// Message centered over the board, replacing the pause/game-over banner.
    pub prompt: Option<&'a str>,
    /// Lines listed at the bottom of the side panel (key bindings, help).
    pub hints: &'a [String],
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

const PLAYFIELD_BG: Rgb = Rgb::new(26, 26, 26);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only reallocated
    /// when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle {
            fg: Rgb::new(160, 160, 160),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells plus the falling piece (already stamped into the snapshot board).
        for (y, row) in snap.board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (x, y) = (x as u16, y as u16);
                match cell {
                    Some(kind) => self.draw_board_cell(fb, start_x, start_y, x, y, *kind),
                    None => self.draw_empty_cell(fb, start_x, start_y, x, y),
                }
            }
        }

        if let Some(ghost) = snap.ghost {
            let ghost_style = CellStyle {
                fg: Rgb::new(90, 90, 90),
                bg: PLAYFIELD_BG,
                bold: false,
                dim: true,
            };
            for (x, y) in ghost.board_cells() {
                if snap.board.is_empty_at(x, y) {
                    self.fill_cell_rect(fb, start_x, start_y, x as u16, y as u16, '░', ghost_style);
                }
            }
        }

        self.draw_side_panel(fb, snap, hud, viewport, start_x, start_y, frame_w);

        let banner = hud.prompt.or(if snap.game_over() {
            Some("GAME OVER")
        } else if snap.paused() {
            Some("PAUSED")
        } else {
            None
        });
        if let Some(text) = banner {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_hud(snap, &HudView::default(), viewport)
    }

    pub fn render_with_hud(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(64, 64, 64),
            bg: PLAYFIELD_BG,
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', piece_style(kind));
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// 4x4 preview box for the next/held piece, in the piece's own matrix frame.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: Option<&Piece>) {
        let empty = CellStyle {
            fg: Rgb::new(64, 64, 64),
            bg: PLAYFIELD_BG,
            bold: false,
            dim: true,
        };
        let side = MAX_SHAPE_SIZE as u16;
        fb.fill_rect(x, y, side * self.cell_w, side, '·', empty);

        let Some(piece) = piece else {
            return;
        };
        let style = piece_style(piece.kind());
        for (col, row) in piece.matrix().cells() {
            let px = x + (col as u16) * self.cell_w;
            fb.fill_rect(px, y + row as u16, self.cell_w, 1, '█', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(160, 160, 160),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(240, 240, 240),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let high = CellStyle {
            fg: Rgb::new(234, 179, 8),
            ..value
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, snap.next.as_ref());
        y = y.saturating_add(MAX_SHAPE_SIZE as u16 + 1);

        fb.put_str(panel_x, y, "HOLD", label);
        if !snap.can_hold {
            let dim = CellStyle { dim: true, ..label };
            fb.put_str(panel_x + 5, y, "(used)", dim);
        }
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, snap.held.as_ref());
        y = y.saturating_add(MAX_SHAPE_SIZE as u16 + 1);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HIGH SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.high_score, high);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.level, value);
        y = y.saturating_add(2);

        let hint = CellStyle { dim: true, ..label };
        for line in hud.hints {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Cell style drawn from the kind's color token.
fn piece_style(kind: PieceKind) -> CellStyle {
    CellStyle {
        fg: Rgb::from_hex(kind.color()).unwrap_or(Rgb::new(220, 220, 220)),
        bg: PLAYFIELD_BG,
        bold: true,
        dim: false,
    }
}
