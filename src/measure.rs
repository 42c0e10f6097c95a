//! Text measurement and the layout cache
//!
//! The two text blocks are expensive to lay out, so they are rebuilt only
//! during the layout pass and only when something that affects them changed:
//! text, text size, typeface, icon visibility or the available width. Drawing
//! reads whatever the last rebuild produced.

use crate::geometry::{BlockSize, RowGeometry, TextBlocks};
use crate::paint::TextPaint;

/// Measures and wraps text for a host's font machinery
pub trait TextMeasurer {
    /// Width of `text` on a single unwrapped line
    fn natural_width(&self, text: &str, paint: &TextPaint) -> i32;

    /// Height of one line of text
    fn line_height(&self, paint: &TextPaint) -> i32;

    /// Wrap `text` into a box `width` wide
    ///
    /// A non-positive width yields a block without lines.
    fn layout(&self, text: &str, paint: &TextPaint, width: i32) -> MeasuredBlock;
}

/// A laid-out block of text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MeasuredBlock {
    pub lines: Vec<String>,
    /// Width of the box the text was laid out into
    pub width: i32,
    pub height: i32,
}

impl MeasuredBlock {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn size(&self) -> BlockSize {
        BlockSize { width: self.width, height: self.height }
    }
}

/// Text and paint of one line, `text` is `None` when the line is absent
#[derive(Debug, Clone, Copy)]
pub struct LineSource<'a> {
    pub text: Option<&'a str>,
    pub paint: &'a TextPaint,
}

/// Holds the brief and body blocks between layout passes
#[derive(Debug, Clone)]
pub struct LayoutCache {
    brief: Option<MeasuredBlock>,
    body: Option<MeasuredBlock>,
    dirty: bool,
    width: i32,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            brief: None,
            body: None,
            dirty: true,
            width: 0,
        }
    }

    /// Force a rebuild on the next layout pass
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether both blocks have been built at least once
    pub fn is_measured(&self) -> bool {
        self.brief.is_some() && self.body.is_some()
    }

    pub fn brief(&self) -> Option<&MeasuredBlock> {
        self.brief.as_ref()
    }

    pub fn body(&self) -> Option<&MeasuredBlock> {
        self.body.as_ref()
    }

    /// Sizes of both blocks; missing blocks count as empty
    pub fn blocks(&self) -> TextBlocks {
        TextBlocks {
            brief: self.brief.as_ref().map(MeasuredBlock::size).unwrap_or_default(),
            body: self.body.as_ref().map(MeasuredBlock::size).unwrap_or_default(),
        }
    }

    /// Rebuild the blocks if needed. Returns whether a rebuild happened.
    pub fn ensure_measured(
        &mut self,
        row: &RowGeometry,
        brief: LineSource<'_>,
        body: LineSource<'_>,
        measurer: &dyn TextMeasurer,
        width: i32,
    ) -> bool {
        if width <= 0 {
            return false;
        }
        if !self.dirty && self.width == width && self.is_measured() {
            return false;
        }

        self.brief = Some(build_block(row, brief, measurer, width));
        self.body = Some(build_block(row, body, measurer, width));
        self.width = width;
        self.dirty = false;

        tracing::debug!(
            width,
            max_text_width = row.usable_max_text_width(width),
            brief_lines = self.brief.as_ref().map_or(0, MeasuredBlock::line_count),
            body_lines = self.body.as_ref().map_or(0, MeasuredBlock::line_count),
            "rebuilt text layout"
        );
        true
    }
}

fn build_block(
    row: &RowGeometry,
    line: LineSource<'_>,
    measurer: &dyn TextMeasurer,
    width: i32,
) -> MeasuredBlock {
    match line.text {
        Some(text) => {
            let natural = measurer.natural_width(text, line.paint);
            let box_width = row.text_box_width(Some(natural), width);
            measurer.layout(text, line.paint, box_width)
        }
        None => MeasuredBlock::empty(),
    }
}
