//! UI module - terminal host for item rows
//!
//! Structure:
//! - `draw.rs` - Demo screen drawing
//! - `surface.rs` - `DrawSurface` over a ratatui buffer and the row host binding
//! - `measure.rs` - Cell-based text measurement and word wrap

mod draw;
pub mod measure;
pub mod surface;

// Re-export main draw function
pub use draw::draw;

// Re-export commonly used types
pub use measure::CellMeasurer;
pub use surface::{BufferSurface, TuiHost};
