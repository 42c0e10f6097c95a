//! Draw pass
//!
//! Paint order, back to front: shadow, body text, brief text, start icon,
//! end icon, divider.

use super::ItemRow;
use crate::geometry::{Line, RowGeometry, TextBlocks};
use crate::host::{DrawSurface, HostBinding};
use crate::measure::TextMeasurer;

impl<H: HostBinding, M: TextMeasurer> ItemRow<H, M> {
    /// Draw the row with the bounds from the last layout pass
    ///
    /// Never measures; a row that has not been laid out draws nothing.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        if self.width <= 0 || self.height <= 0 || surface.width() <= 0 || surface.height() <= 0 {
            return;
        }
        if !self.cache.is_measured() {
            return;
        }
        let geometry = self.geometry(self.width, self.height);
        let blocks = self.cache.blocks();

        if let Some(bounds) = self.config.shadow.shadow_rect(self.width, self.height) {
            surface.draw_shadow(bounds, &self.config.shadow);
        }

        self.draw_line(surface, Line::Body, &geometry, &blocks);
        self.draw_line(surface, Line::Brief, &geometry, &blocks);

        if let Some(icon) = self.config.start_icon.as_ref().filter(|i| i.visible) {
            if let Some(bounds) = geometry.start_icon_rect(&blocks) {
                surface.draw_icon(icon, bounds);
            }
        }
        if let Some(icon) = self.config.end_icon.as_ref().filter(|i| i.visible) {
            if let Some(bounds) = geometry.end_icon_rect(&blocks) {
                surface.draw_icon(icon, bounds);
            }
        }

        if let Some(divider) = &self.config.divider {
            let bounds = geometry.divider_rect(divider.height, self.start_icon_extent());
            if !bounds.is_empty() {
                surface.fill_rect(bounds, divider.color);
            }
        }
    }

    fn draw_line(&self, surface: &mut dyn DrawSurface, line: Line, geometry: &RowGeometry, blocks: &TextBlocks) {
        let (text, block, paint, baseline) = match line {
            Line::Brief => (&self.brief_text, self.cache.brief(), &self.brief_paint, self.current.brief_baseline_y),
            Line::Body => (&self.body_text, self.cache.body(), &self.body_paint, self.current.body_baseline_y),
        };
        let (Some(_), Some(block)) = (text, block) else {
            return;
        };

        surface.save();
        surface.translate(geometry.text_anchor_x(line, blocks), baseline.unwrap_or(0));
        surface.draw_text(block, paint);
        surface.restore();
    }
}
