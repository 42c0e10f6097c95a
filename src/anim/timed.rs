//! Fixed-duration animation runs ticked by the host's frame clock

use std::time::{Duration, Instant};

use super::element::AnimElement;
use super::evaluator::evaluate;

/// Default run length
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Accelerate-decelerate easing: slow start, fast middle, slow end
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5
}

/// One in-flight timed animation
///
/// The clock starts on the first sample, so a run created between frames
/// does not skip ahead.
#[derive(Debug, Clone)]
pub struct TimedRun {
    start: AnimElement,
    end: AnimElement,
    duration: Duration,
    started_at: Option<Instant>,
}

impl TimedRun {
    pub fn new(start: AnimElement, end: AnimElement, duration: Duration) -> Self {
        Self { start, end, duration, started_at: None }
    }

    pub fn start(&self) -> &AnimElement {
        &self.start
    }

    pub fn end(&self) -> &AnimElement {
        &self.end
    }

    /// Linear fraction of the run elapsed at `now`
    pub fn fraction(&mut self, now: Instant) -> f32 {
        let started = *self.started_at.get_or_insert(now);
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Blended element at `now` and whether the run has finished
    pub fn sample(&mut self, now: Instant) -> (AnimElement, bool) {
        let fraction = self.fraction(now);
        if fraction >= 1.0 {
            return (evaluate(1.0, &self.start, &self.end), true);
        }
        (evaluate(ease_in_out(fraction), &self.start, &self.end), false)
    }
}
