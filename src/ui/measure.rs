//! Terminal cell text measurement
//!
//! One cell is one unit: text width is its display width in cells and every
//! line is one row tall, whatever the configured text size.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::measure::{MeasuredBlock, TextMeasurer};
use crate::paint::TextPaint;

/// Measures text in terminal cells
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasurer;

impl TextMeasurer for CellMeasurer {
    fn natural_width(&self, text: &str, _paint: &TextPaint) -> i32 {
        text.width() as i32
    }

    fn line_height(&self, _paint: &TextPaint) -> i32 {
        1
    }

    fn layout(&self, text: &str, _paint: &TextPaint, width: i32) -> MeasuredBlock {
        if width <= 0 {
            return MeasuredBlock::empty();
        }
        let lines = wrap(text, width as usize);
        let height = lines.len() as i32;
        MeasuredBlock { lines, width, height }
    }
}

/// Greedy word wrap; words wider than a line are split by character
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if max_width == 0 {
        return lines;
    }

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let sep = usize::from(!line.is_empty());

            if line_width + sep + word_width <= max_width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += sep + word_width;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width <= max_width {
                line.push_str(word);
                line_width = word_width;
                continue;
            }

            for c in word.chars() {
                let char_width = c.width().unwrap_or(0);
                if line_width + char_width > max_width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += char_width;
            }
        }

        lines.push(line);
    }

    lines
}
