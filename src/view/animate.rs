//! Enabling and disabling text lines
//!
//! A line change moves the baselines of both lines and fades the changed
//! line's colour. Timed runs are sampled on the host's frame clock via
//! [`ItemRow::on_frame`]. Scrubbing takes its progress from the caller and
//! evaluates the same blend immediately.

use std::time::Instant;

use super::ItemRow;
use crate::anim::{evaluate, AnimElement, TimedRun};
use crate::geometry::Line;
use crate::host::HostBinding;
use crate::measure::TextMeasurer;

impl<H: HostBinding, M: TextMeasurer> ItemRow<H, M> {
    pub fn is_brief_text_enabled(&self) -> bool {
        self.brief_enabled
    }

    pub fn is_body_text_enabled(&self) -> bool {
        self.body_enabled
    }

    /// Enable or disable the brief line, animated over the run duration or at once
    pub fn enable_brief_text(&mut self, enable: bool, animate: bool) {
        self.toggle(Line::Brief, enable, animate);
    }

    /// Enable or disable the body line, animated over the run duration or at once
    pub fn enable_body_text(&mut self, enable: bool, animate: bool) {
        self.toggle(Line::Body, enable, animate);
    }

    /// Enable or disable the brief line at a caller-driven `progress` in [0, 1]
    pub fn enable_brief_text_at(&mut self, enable: bool, progress: f32) {
        self.scrub(Line::Brief, enable, progress);
    }

    /// Enable or disable the body line at a caller-driven `progress` in [0, 1]
    pub fn enable_body_text_at(&mut self, enable: bool, progress: f32) {
        self.scrub(Line::Body, enable, progress);
    }

    /// Swap the flag for `line`, returning whether it changed
    fn set_enabled(&mut self, line: Line, enable: bool) -> bool {
        let flag = match line {
            Line::Brief => &mut self.brief_enabled,
            Line::Body => &mut self.body_enabled,
        };
        let changed = *flag != enable;
        *flag = enable;
        changed
    }

    fn toggle(&mut self, line: Line, enable: bool, animate: bool) {
        if !self.set_enabled(line, enable) {
            return;
        }
        if animate {
            self.start_animation();
        } else {
            self.run = None;
            self.scrub_span = None;
            let (_, end) = self.ready_animation();
            self.update_animation(&end);
        }
    }

    fn scrub(&mut self, line: Line, enable: bool, progress: f32) {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        let flipped = self.set_enabled(line, enable);
        if self.run.take().is_some() {
            tracing::debug!("scrub replaced a running animation");
        }
        let (start, end) = match self.scrub_span {
            Some(span) if !flipped => span,
            _ => {
                let span = self.ready_animation();
                self.scrub_span = Some(span);
                span
            }
        };
        let element = evaluate(progress, &start, &end);
        self.update_animation(&element);
    }

    /// Capture the live values as start and the layout for the new flags as end
    fn ready_animation(&self) -> (AnimElement, AnimElement) {
        let start = self.current;
        let target = self.target_baselines();
        let end = AnimElement {
            body_baseline_y: Some(target.body_y),
            brief_baseline_y: Some(target.brief_y),
            body_text_color: Some(if self.body_enabled {
                self.body_text_color
            } else {
                self.body_text_color.transparent()
            }),
            brief_text_color: Some(if self.brief_enabled {
                self.brief_text_color
            } else {
                self.brief_text_color.transparent()
            }),
        };
        (start, end)
    }

    /// Write the set fields into the live state and push colours to the paints
    fn update_animation(&mut self, element: &AnimElement) {
        if let Some(y) = element.body_baseline_y {
            self.current.body_baseline_y = Some(y);
        }
        if let Some(y) = element.brief_baseline_y {
            self.current.brief_baseline_y = Some(y);
        }
        if let Some(color) = element.body_text_color {
            self.current.body_text_color = Some(color);
            self.body_paint.color = color;
        }
        if let Some(color) = element.brief_text_color {
            self.current.brief_text_color = Some(color);
            self.brief_paint.color = color;
        }
        self.host.request_redraw();
    }

    /// Start a timed run from wherever the row is now, replacing any run in flight
    fn start_animation(&mut self) {
        let (start, end) = self.ready_animation();
        if self.run.is_some() {
            tracing::debug!("restarting line animation from current state");
        }
        self.scrub_span = None;
        self.run = Some(TimedRun::new(start, end, self.duration));
        self.host.request_redraw();
    }

    /// Advance a timed run to `now`. Returns whether more frames are needed.
    pub fn on_frame(&mut self, now: Instant) -> bool {
        let Some(run) = self.run.as_mut() else {
            return false;
        };
        let (element, finished) = run.sample(now);
        if finished {
            self.run = None;
        }
        self.update_animation(&element);
        !finished
    }

    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// The timed run in flight, if any
    pub fn active_run(&self) -> Option<&TimedRun> {
        self.run.as_ref()
    }
}
