//! Compound list row layout and animation
//!
//! An item row lays out a start icon, a brief line over a body line, an end
//! icon, a bottom divider and an optional drop shadow. Text lines can be
//! enabled or disabled with a timed or caller-scrubbed transition.
//!
//! Provides:
//! - Pure geometry for icon chains and text baselines
//! - A layout cache that only re-measures text when dirty or resized
//! - `ItemRow`, driven by a host through `HostBinding` and `DrawSurface`
//! - A ratatui host used by the `item-row` demo binary

pub mod anim;
pub mod app;
pub mod color;
pub mod config;
pub mod geometry;
pub mod host;
pub mod measure;
pub mod paint;
pub mod shadow;
pub mod ui;
pub mod view;

#[cfg(test)]
mod test_utils;

pub use color::Argb;
pub use config::{AppConfig, ItemConfig};
pub use host::{DrawSurface, HeightSpec, HostBinding, MeasureProposal};
pub use measure::{MeasuredBlock, TextMeasurer};
pub use view::ItemRow;
