use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::ui::{CellMeasurer, TuiHost};
use crate::view::ItemRow;

pub type Row = ItemRow<TuiHost, CellMeasurer>;

/// Scrub in progress on one row's body line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scrub {
    pub row: usize,
    /// Enable flag the scrub moves towards
    pub target: bool,
    pub progress: f32,
}

/// Application state
pub struct App {
    rows: Vec<Row>,
    /// Currently selected row
    selected: usize,
    scrub: Option<Scrub>,
    config: AppConfig,
    /// Set by input handling; rows track their own redraw requests
    dirty: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let duration = Duration::from_millis(config.animation.duration_ms);
        let rows = config
            .rows
            .iter()
            .map(|item| {
                let mut row = ItemRow::new(item.clone(), TuiHost::new(), CellMeasurer);
                row.set_animation_duration(duration);
                row
            })
            .collect();

        Self {
            rows,
            selected: 0,
            scrub: None,
            config,
            dirty: true,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.rows.get(self.selected)
    }

    fn selected_row_mut(&mut self) -> Option<&mut Row> {
        self.dirty = true;
        self.rows.get_mut(self.selected)
    }

    pub fn scrub(&self) -> Option<Scrub> {
        self.scrub
    }

    /// Move selection up
    pub fn previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.dirty = true;
        }
    }

    /// Move selection down
    pub fn next(&mut self) {
        if self.selected < self.rows.len().saturating_sub(1) {
            self.selected += 1;
            self.dirty = true;
        }
    }

    /// Flip the selected row's brief line, ending any scrub on it
    pub fn toggle_brief(&mut self, animate: bool) {
        self.end_scrub();
        if let Some(row) = self.selected_row_mut() {
            let enable = !row.is_brief_text_enabled();
            row.enable_brief_text(enable, animate);
        }
    }

    /// Flip the selected row's body line, ending any scrub on it
    pub fn toggle_body(&mut self, animate: bool) {
        self.end_scrub();
        if let Some(row) = self.selected_row_mut() {
            let enable = !row.is_body_text_enabled();
            row.enable_body_text(enable, animate);
        }
    }

    /// Move the body scrub by `delta`; the first step starts a scrub towards
    /// the opposite of the row's current state
    pub fn scrub_body(&mut self, delta: f32) {
        let selected = self.selected;
        let Some(row) = self.rows.get_mut(selected) else {
            return;
        };
        let scrub = match self.scrub {
            Some(scrub) if scrub.row == selected => scrub,
            _ => Scrub { row: selected, target: !row.is_body_text_enabled(), progress: 0.0 },
        };
        let progress = (scrub.progress + delta).clamp(0.0, 1.0);
        row.enable_body_text_at(scrub.target, progress);
        self.scrub = Some(Scrub { progress, ..scrub });
        self.dirty = true;
        tracing::debug!(row = selected, progress, "scrubbed body line");
    }

    pub fn scrub_step(&self) -> f32 {
        self.config.animation.scrub_step
    }

    fn end_scrub(&mut self) {
        if let Some(scrub) = self.scrub.take() {
            // A scrub left short of its target settles back where it started
            if scrub.progress < 1.0 {
                if let Some(row) = self.rows.get_mut(scrub.row) {
                    row.enable_body_text_at(!scrub.target, 1.0);
                }
            }
        }
    }

    pub fn toggle_start_icon(&mut self) {
        if let Some(row) = self.selected_row_mut() {
            let visible = !row.is_start_drawable_visible();
            row.set_start_drawable_visible(visible);
        }
    }

    pub fn toggle_end_icon(&mut self) {
        if let Some(row) = self.selected_row_mut() {
            let visible = !row.is_end_drawable_visible();
            row.set_end_drawable_visible(visible);
        }
    }

    /// Run measure and layout for rows whose host asked for it or whose
    /// width changed
    pub fn layout_rows(&mut self, width: u16) {
        for row in &mut self.rows {
            row.host_mut().propose_width(width);
            if row.host_mut().take_layout_request() {
                let size = row.measure();
                row.layout(size.width, size.height);
            }
        }
    }

    /// Advance timed runs. Returns whether any row still animates.
    pub fn on_frame(&mut self, now: Instant) -> bool {
        let mut animating = false;
        for row in &mut self.rows {
            animating |= row.on_frame(now);
        }
        animating
    }

    /// Whether anything changed since the last call
    pub fn take_redraw(&mut self) -> bool {
        let mut redraw = std::mem::take(&mut self.dirty);
        for row in &mut self.rows {
            redraw |= row.host_mut().take_redraw_request();
        }
        redraw
    }

    /// Force a full redraw, e.g. after a terminal resize
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
