//! Ratatui-backed draw surface and host binding
//!
//! Draw calls arrive in row-local cell coordinates. The surface offsets them
//! by its area, clips to it, and composites translucent colours over the
//! configured background so fades stay visible on a terminal.

use ratatui::{
    buffer::Buffer,
    layout::Rect as CellRect,
    style::{Color, Style},
};
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::color::Argb;
use crate::config::IconConfig;
use crate::geometry::Rect;
use crate::host::{DrawSurface, HeightSpec, HostBinding, MeasureProposal};
use crate::measure::MeasuredBlock;
use crate::paint::{TextAlign, TextPaint};
use crate::shadow::ShadowConfig;

const DIVIDER_GLYPH: char = '─';

/// Host binding for a row rendered inside a ratatui frame
#[derive(Debug, Clone)]
pub struct TuiHost {
    proposal: MeasureProposal,
    needs_layout: bool,
    needs_redraw: bool,
}

impl TuiHost {
    pub fn new() -> Self {
        Self {
            proposal: MeasureProposal::new(0, HeightSpec::Unspecified),
            needs_layout: true,
            needs_redraw: true,
        }
    }

    /// Offer a new width; a change schedules a layout pass
    pub fn propose_width(&mut self, width: u16) {
        if self.proposal.width != width as i32 {
            self.proposal.width = width as i32;
            self.needs_layout = true;
        }
    }

    /// Take the pending layout request
    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_layout)
    }

    /// Take the pending redraw request
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}

impl Default for TuiHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostBinding for TuiHost {
    fn measure_proposal(&self) -> MeasureProposal {
        self.proposal
    }

    fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    fn request_relayout(&mut self) {
        self.needs_layout = true;
    }
}

/// Draws one row into a region of a ratatui buffer
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: CellRect,
    background: Argb,
    origin: (i32, i32),
    stack: Vec<(i32, i32)>,
}

impl<'a> BufferSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: CellRect, background: Argb) -> Self {
        Self {
            buf,
            area,
            background,
            origin: (0, 0),
            stack: Vec::new(),
        }
    }

    fn color(&self, color: Argb) -> Color {
        let (r, g, b) = color.over(self.background);
        Color::Rgb(r, g, b)
    }

    /// Write `text` at row-local (x, y), clipped to the area
    fn put(&mut self, x: i32, y: i32, text: &str, style: Style) {
        let top = self.area.y as i32;
        let left = self.area.x as i32;
        let right = left + self.area.width as i32;
        let row = top + y;
        if y < 0 || y >= self.area.height as i32 {
            return;
        }

        let mut col = left + x;
        for c in text.chars() {
            let width = c.width().unwrap_or(0) as i32;
            if col >= left && col + width <= right {
                if let Some(cell) = self.buf.cell_mut((col as u16, row as u16)) {
                    cell.set_char(c).set_style(style);
                }
            }
            col += width;
        }
    }

    /// Apply `style` to every cell of a row-local rect, clipped to the area
    fn paint_rect(&mut self, bounds: Rect, style: Style) {
        let (ox, oy) = self.origin;
        for y in (bounds.top + oy).max(0)..(bounds.bottom + oy).min(self.area.height as i32) {
            for x in (bounds.left + ox).max(0)..(bounds.right + ox).min(self.area.width as i32) {
                let pos = ((self.area.x as i32 + x) as u16, (self.area.y as i32 + y) as u16);
                if let Some(cell) = self.buf.cell_mut(pos) {
                    cell.set_style(style);
                }
            }
        }
    }
}

impl DrawSurface for BufferSurface<'_> {
    fn width(&self) -> i32 {
        self.area.width as i32
    }

    fn height(&self) -> i32 {
        self.area.height as i32
    }

    fn save(&mut self) {
        self.stack.push(self.origin);
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.origin = (self.origin.0 + dx, self.origin.1 + dy);
    }

    fn restore(&mut self) {
        if let Some(origin) = self.stack.pop() {
            self.origin = origin;
        }
    }

    fn draw_text(&mut self, block: &MeasuredBlock, paint: &TextPaint) {
        if paint.color.alpha() == 0 {
            return;
        }
        let style = Style::default().fg(self.color(paint.color));
        let (ox, oy) = self.origin;
        for (i, line) in block.lines.iter().enumerate() {
            let width = line.width() as i32;
            let x = match paint.align {
                TextAlign::Left => ox,
                TextAlign::Center => ox - width / 2,
                TextAlign::Right => ox - width,
            };
            self.put(x, oy + i as i32, line, style);
        }
    }

    fn draw_icon(&mut self, icon: &IconConfig, bounds: Rect) {
        let style = Style::default().fg(self.color(icon.color));
        let (ox, oy) = self.origin;
        let glyph_width = icon.glyph.width() as i32;
        let x = bounds.left + ox + (bounds.width() - glyph_width).max(0) / 2;
        let y = bounds.top + oy + bounds.height() / 2;
        self.put(x, y, &icon.glyph, style);
    }

    fn fill_rect(&mut self, bounds: Rect, color: Argb) {
        let style = Style::default().fg(self.color(color));
        let (ox, oy) = self.origin;
        let line: String = std::iter::repeat(DIVIDER_GLYPH).take(bounds.width() as usize).collect();
        for y in bounds.top..bounds.bottom {
            self.put(bounds.left + ox, y + oy, &line, style);
        }
    }

    fn draw_shadow(&mut self, bounds: Rect, shadow: &ShadowConfig) {
        // Terminal cells cannot blur: cast a one-cell shade in the offset direction
        let shade = Style::default().bg(self.color(Argb(shadow.color.0 & 0x60FF_FFFF)));
        let dx = shadow.dx.signum();
        let dy = shadow.dy.signum();
        if dx != 0 {
            let x = if dx > 0 { bounds.right } else { bounds.left - 1 };
            self.paint_rect(Rect::new(x, bounds.top + dy, x + 1, bounds.bottom + dy), shade);
        }
        if dy != 0 {
            let y = if dy > 0 { bounds.bottom } else { bounds.top - 1 };
            self.paint_rect(Rect::new(bounds.left + dx, y, bounds.right + dx, y + 1), shade);
        }
    }
}
