//! Host binding seams
//!
//! The row never owns a window, a canvas or a frame clock. The host view
//! system is injected through these traits:
//! - [`HostBinding`] - size proposals and redraw/relayout requests
//! - [`DrawSurface`] - the primitive drawing calls for one draw pass

use crate::color::Argb;
use crate::config::IconConfig;
use crate::geometry::Rect;
use crate::measure::MeasuredBlock;
use crate::paint::TextPaint;
use crate::shadow::ShadowConfig;

/// How the host constrains the height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightSpec {
    /// Height is fixed by the host
    Exactly(i32),
    /// Up to the given height; the row reports its content height
    AtMost(i32),
    /// No constraint
    Unspecified,
}

/// Size proposal for one measure pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureProposal {
    pub width: i32,
    pub height: HeightSpec,
}

impl MeasureProposal {
    pub fn new(width: i32, height: HeightSpec) -> Self {
        Self { width, height }
    }
}

/// Services the host view system provides to a row
pub trait HostBinding {
    /// Bounds proposed for the next measure pass
    fn measure_proposal(&self) -> MeasureProposal;

    /// Ask for another draw pass
    fn request_redraw(&mut self);

    /// Ask for another measure + layout pass
    fn request_relayout(&mut self);
}

/// Primitive drawing operations for one pass
pub trait DrawSurface {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Push the current translation
    fn save(&mut self);
    fn translate(&mut self, dx: i32, dy: i32);
    /// Pop back to the last saved translation
    fn restore(&mut self);

    /// Draw a text block with its top-left at the origin (alignment shifts each line)
    fn draw_text(&mut self, block: &MeasuredBlock, paint: &TextPaint);
    fn draw_icon(&mut self, icon: &IconConfig, bounds: Rect);
    fn fill_rect(&mut self, bounds: Rect, color: Argb);
    fn draw_shadow(&mut self, bounds: Rect, shadow: &ShadowConfig);
}
