//! The item row view
//!
//! Structure:
//! - `mod.rs` - state, construction, measure/layout passes and setters
//! - `render.rs` - the draw pass
//! - `animate.rs` - line enable/disable in timed and scrubbed mode
//!
//! The host drives a row in three passes, like any retained-mode view:
//! `measure()` against the host's proposal, `layout(width, height)` with the
//! final bounds, then `draw(surface)` as often as it likes. Setters only mark
//! state dirty and ask the host for another pass.

mod animate;
mod render;


use std::time::Duration;

use crate::anim::{AnimElement, TimedRun, DEFAULT_DURATION};
use crate::color::Argb;
use crate::config::{IconConfig, ItemConfig};
use crate::geometry::{
    content_height, vertical_baselines, Baselines, HeightInputs, IconSize, Insets, RowGeometry, Size,
};
use crate::host::{HeightSpec, HostBinding};
use crate::measure::{LayoutCache, LineSource, MeasuredBlock, TextMeasurer};
use crate::paint::TextPaint;

/// A compound row: start icon, brief + body text, end icon, divider, shadow
pub struct ItemRow<H: HostBinding, M: TextMeasurer> {
    host: H,
    measurer: M,
    config: ItemConfig,
    brief_text: Option<String>,
    body_text: Option<String>,
    brief_paint: TextPaint,
    body_paint: TextPaint,
    /// Configured colours; the paints hold the animated ones
    brief_text_color: Argb,
    body_text_color: Argb,
    brief_enabled: bool,
    body_enabled: bool,
    cache: LayoutCache,
    width: i32,
    height: i32,
    /// Live animated values used by the draw pass
    current: AnimElement,
    run: Option<TimedRun>,
    /// Start and end captured by the last scrub that flipped a flag.
    /// Cleared whenever anything else moves `current`.
    scrub_span: Option<(AnimElement, AnimElement)>,
    duration: Duration,
}

fn intrinsic_size(icon: &IconConfig) -> IconSize {
    IconSize { width: icon.width.max(0), height: icon.height.max(0) }
}

/// Size of a visible icon; hidden icons take no space
fn icon_size(icon: &Option<IconConfig>) -> Option<IconSize> {
    icon.as_ref().filter(|i| i.visible).map(intrinsic_size)
}

impl<H: HostBinding, M: TextMeasurer> ItemRow<H, M> {
    pub fn new(config: ItemConfig, host: H, measurer: M) -> Self {
        let brief_paint = TextPaint::new(
            "brief",
            config.brief_paint.color,
            config.brief_paint.size,
            config.brief_paint.typeface.as_deref(),
            config.brief_gravity,
        );
        let body_paint = TextPaint::new(
            "body",
            config.body_paint.color,
            config.body_paint.size,
            config.body_paint.typeface.as_deref(),
            config.body_gravity,
        );
        let current = AnimElement {
            brief_text_color: Some(brief_paint.color),
            body_text_color: Some(body_paint.color),
            ..AnimElement::default()
        };

        Self {
            host,
            measurer,
            brief_text: config.initial_brief_text(),
            body_text: config.initial_body_text(),
            brief_text_color: brief_paint.color,
            body_text_color: body_paint.color,
            brief_paint,
            body_paint,
            config,
            brief_enabled: true,
            body_enabled: true,
            cache: LayoutCache::new(),
            width: 0,
            height: 0,
            current,
            run: None,
            scrub_span: None,
            duration: DEFAULT_DURATION,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    pub fn config(&self) -> &ItemConfig {
        &self.config
    }

    /// Bounds from the last layout pass
    pub fn size(&self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Live animated values
    pub fn current(&self) -> &AnimElement {
        &self.current
    }

    pub fn brief_paint(&self) -> &TextPaint {
        &self.brief_paint
    }

    pub fn body_paint(&self) -> &TextPaint {
        &self.body_paint
    }

    pub fn brief_block(&self) -> Option<&MeasuredBlock> {
        self.cache.brief()
    }

    pub fn body_block(&self) -> Option<&MeasuredBlock> {
        self.cache.body()
    }

    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Configured padding plus whatever the shadow needs
    pub fn padding(&self) -> Insets {
        self.config.padding.clamped() + self.config.shadow.insets()
    }

    /// Configured start icon size, visible or not
    fn start_icon_extent(&self) -> Option<IconSize> {
        self.config.start_icon.as_ref().map(intrinsic_size)
    }

    fn geometry(&self, width: i32, height: i32) -> RowGeometry {
        RowGeometry {
            width,
            height,
            padding: self.padding(),
            drawable_padding: self.config.drawable_padding,
            text_interval: self.config.text_interval,
            start_icon: icon_size(&self.config.start_icon),
            end_icon: icon_size(&self.config.end_icon),
            brief_gravity: self.config.brief_gravity,
            body_gravity: self.config.body_gravity,
            chain_style: self.config.chain_style,
        }
    }

    fn ensure_measured(&mut self, width: i32) {
        let geometry = self.geometry(width, self.height);
        self.cache.ensure_measured(
            &geometry,
            LineSource { text: self.brief_text.as_deref(), paint: &self.brief_paint },
            LineSource { text: self.body_text.as_deref(), paint: &self.body_paint },
            &self.measurer,
            width,
        );
    }

    /// Measure pass: size wanted for the host's current proposal
    pub fn measure(&mut self) -> Size {
        let proposal = self.host.measure_proposal();
        let width = proposal.width.max(0);
        if width > 0 {
            self.ensure_measured(width);
        }

        let padding = self.padding();
        let height = match proposal.height {
            HeightSpec::Exactly(h) => h.max(0),
            HeightSpec::AtMost(max) => (self.content_height() + padding.top + padding.bottom).min(max.max(0)),
            HeightSpec::Unspecified => self.content_height() + padding.top + padding.bottom,
        };
        Size { width, height }
    }

    fn content_height(&self) -> i32 {
        let line = |text: &Option<String>, paint: &TextPaint| {
            text.as_ref().map(|_| self.measurer.line_height(paint))
        };
        let block = |text: &Option<String>, block: Option<&MeasuredBlock>| {
            text.as_ref().and(block).map(|b| b.height)
        };
        content_height(&HeightInputs {
            icon_heights: [
                icon_size(&self.config.start_icon).map(|i| i.height),
                icon_size(&self.config.end_icon).map(|i| i.height),
            ],
            brief_line: line(&self.brief_text, &self.brief_paint),
            body_line: line(&self.body_text, &self.body_paint),
            brief_block: block(&self.brief_text, self.cache.brief()),
            body_block: block(&self.body_text, self.cache.body()),
            gap: self.config.text_interval,
        })
    }

    /// Layout pass: accept final bounds and settle the baselines
    pub fn layout(&mut self, width: i32, height: i32) {
        self.width = width.max(0);
        self.height = height.max(0);
        if self.width > 0 {
            self.ensure_measured(self.width);
        }
        let baselines = self.target_baselines();
        self.scrub_span = None;
        self.current.brief_baseline_y = Some(baselines.brief_y);
        self.current.body_baseline_y = Some(baselines.body_y);
        tracing::debug!(width = self.width, height = self.height, ?baselines, "laid out item row");
    }

    /// Where the baselines belong for the current enable flags
    fn target_baselines(&self) -> Baselines {
        if !self.cache.is_measured() {
            return Baselines::default();
        }
        vertical_baselines(
            self.height,
            self.config.text_interval,
            &self.cache.blocks(),
            self.brief_text.is_some() && self.brief_enabled,
            self.body_text.is_some() && self.body_enabled,
        )
    }

    fn invalidate_text(&mut self) {
        self.cache.invalidate();
        self.host.request_relayout();
        self.host.request_redraw();
    }

    /// Ignored when empty
    pub fn set_brief_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.brief_text = Some(text.to_string());
        self.invalidate_text();
    }

    /// Ignored when empty
    pub fn set_body_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.body_text = Some(text.to_string());
        self.invalidate_text();
    }

    pub fn brief_text(&self) -> Option<&str> {
        self.brief_text.as_deref()
    }

    pub fn body_text(&self) -> Option<&str> {
        self.body_text.as_deref()
    }

    pub fn set_brief_text_color(&mut self, color: Argb) {
        self.brief_text_color = color;
        self.brief_paint.color = color;
        self.current.brief_text_color = Some(color);
        self.host.request_redraw();
    }

    pub fn set_body_text_color(&mut self, color: Argb) {
        self.body_text_color = color;
        self.body_paint.color = color;
        self.current.body_text_color = Some(color);
        self.host.request_redraw();
    }

    pub fn set_brief_text_size(&mut self, size: f32) {
        self.brief_paint.size = size;
        self.invalidate_text();
    }

    pub fn set_body_text_size(&mut self, size: f32) {
        self.body_paint.size = size;
        self.invalidate_text();
    }

    /// Show or hide both icons
    pub fn set_drawable_visible(&mut self, visible: bool) {
        self.set_start_drawable_visible(visible);
        self.set_end_drawable_visible(visible);
    }

    /// No-op for a row without a start icon
    pub fn set_start_drawable_visible(&mut self, visible: bool) {
        if let Some(icon) = self.config.start_icon.as_mut() {
            if icon.visible != visible {
                icon.visible = visible;
                self.invalidate_text();
            }
        }
    }

    /// No-op for a row without an end icon
    pub fn set_end_drawable_visible(&mut self, visible: bool) {
        if let Some(icon) = self.config.end_icon.as_mut() {
            if icon.visible != visible {
                icon.visible = visible;
                self.invalidate_text();
            }
        }
    }

    pub fn is_start_drawable_visible(&self) -> bool {
        self.config.start_icon.as_ref().is_some_and(|i| i.visible)
    }

    pub fn is_end_drawable_visible(&self) -> bool {
        self.config.end_icon.as_ref().is_some_and(|i| i.visible)
    }
}
