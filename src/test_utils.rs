//! Test doubles shared by the unit tests.
//!
//! - [`FixedMeasurer`] - fixed-advance text measurement with call counters
//! - [`FakeHost`] - records redraw/relayout requests
//! - [`RecordingSurface`] - records draw calls with their resolved origin
//! - [`buffer_to_string`] - ratatui buffer snapshot as plain text

use std::cell::Cell;

use ratatui::buffer::Buffer;

use crate::color::Argb;
use crate::config::IconConfig;
use crate::geometry::Rect;
use crate::host::{DrawSurface, HeightSpec, HostBinding, MeasureProposal};
use crate::measure::{MeasuredBlock, TextMeasurer};
use crate::paint::TextPaint;
use crate::shadow::ShadowConfig;

/// Every character is `advance` wide, every line `line_height` tall
pub(crate) struct FixedMeasurer {
    advance: i32,
    line_height: i32,
    layouts: Cell<usize>,
}

impl FixedMeasurer {
    pub(crate) fn new(advance: i32, line_height: i32) -> Self {
        Self { advance, line_height, layouts: Cell::new(0) }
    }

    /// Number of `layout` calls so far
    pub(crate) fn layout_calls(&self) -> usize {
        self.layouts.get()
    }
}

impl TextMeasurer for FixedMeasurer {
    fn natural_width(&self, text: &str, _paint: &TextPaint) -> i32 {
        text.chars().count() as i32 * self.advance
    }

    fn line_height(&self, _paint: &TextPaint) -> i32 {
        self.line_height
    }

    fn layout(&self, text: &str, _paint: &TextPaint, width: i32) -> MeasuredBlock {
        self.layouts.set(self.layouts.get() + 1);
        let per_line = (width / self.advance.max(1)) as usize;
        if per_line == 0 {
            return MeasuredBlock::empty();
        }
        let chars: Vec<char> = text.chars().collect();
        let lines: Vec<String> = chars.chunks(per_line).map(|c| c.iter().collect()).collect();
        let height = lines.len() as i32 * self.line_height;
        MeasuredBlock { lines, width, height }
    }
}

/// Host with a fixed proposal that counts requests
#[derive(Debug)]
pub(crate) struct FakeHost {
    pub(crate) proposal: MeasureProposal,
    pub(crate) redraws: usize,
    pub(crate) relayouts: usize,
}

impl FakeHost {
    pub(crate) fn new(width: i32, height: HeightSpec) -> Self {
        Self { proposal: MeasureProposal::new(width, height), redraws: 0, relayouts: 0 }
    }
}

impl HostBinding for FakeHost {
    fn measure_proposal(&self) -> MeasureProposal {
        self.proposal
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn request_relayout(&mut self) {
        self.relayouts += 1;
    }
}

/// A draw call with the translation in effect when it was made
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawOp {
    Text { origin: (i32, i32), first_line: String, color: Argb },
    Icon { glyph: String, bounds: Rect },
    Fill { bounds: Rect, color: Argb },
    Shadow { bounds: Rect },
}

pub(crate) struct RecordingSurface {
    width: i32,
    height: i32,
    origin: (i32, i32),
    stack: Vec<(i32, i32)>,
    pub(crate) ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub(crate) fn new(width: i32, height: i32) -> Self {
        Self { width, height, origin: (0, 0), stack: Vec::new(), ops: Vec::new() }
    }

    /// Depth of unbalanced `save` calls
    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
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
        self.ops.push(DrawOp::Text {
            origin: self.origin,
            first_line: block.lines.first().cloned().unwrap_or_default(),
            color: paint.color,
        });
    }

    fn draw_icon(&mut self, icon: &IconConfig, bounds: Rect) {
        self.ops.push(DrawOp::Icon { glyph: icon.glyph.clone(), bounds });
    }

    fn fill_rect(&mut self, bounds: Rect, color: Argb) {
        self.ops.push(DrawOp::Fill { bounds, color });
    }

    fn draw_shadow(&mut self, bounds: Rect, _shadow: &ShadowConfig) {
        self.ops.push(DrawOp::Shadow { bounds });
    }
}

/// Render a buffer to text, one line per row, trailing spaces trimmed
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in buf.area.top()..buf.area.bottom() {
        for x in buf.area.left()..buf.area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}
