//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and every frame after a resize or [`TerminalRenderer::invalidate`])
//! is a full redraw. Later frames only rewrite the runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    /// Set when the terminal accepted the keyboard enhancement push on enter.
    enhanced_keys: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            enhanced_keys: false,
        }
    }

    /// Switch to raw mode and the alternate screen.
    ///
    /// Where the terminal supports it, key release and bare modifier events are
    /// requested too, so a lone Shift press can be bound to an action.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.enhanced_keys = terminal::supports_keyboard_enhancement().unwrap_or(false);

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        if self.enhanced_keys {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                    | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES,
            ))?;
        }
        self.flush_buf()?;
        self.last = None;
        Ok(())
    }

    /// Restore the terminal. Safe to call after a partial [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.enhanced_keys {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
            self.enhanced_keys = false;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Whether bare modifier keys (e.g. `ShiftLeft`) will be reported.
    pub fn enhanced_keys(&self) -> bool {
        self.enhanced_keys
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer diffs against the previous frame and then swaps buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::BeginSynchronizedUpdate)?;

        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };

        self.buf.queue(terminal::EndSynchronizedUpdate)?;
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// `prev` and `next` must have the same size; otherwise every row is rewritten.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;
    let mut wrote = false;

    for_each_changed_run(prev, next, |x, y, len| {
        wrote = true;
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    if wrote {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for each horizontal run of cells that differ.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
