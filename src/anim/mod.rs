//! Property animation for the item row
//!
//! Structure:
//! - `element.rs` - the optional-field snapshot being animated
//! - `evaluator.rs` - the single blend function
//! - `timed.rs` - clock-driven runs; scrubbing calls `evaluate` directly

pub mod element;
pub mod evaluator;
pub mod timed;

pub use element::AnimElement;
pub use evaluator::evaluate;
pub use timed::{ease_in_out, TimedRun, DEFAULT_DURATION};
