//! Partial snapshot of the animatable row state

use crate::color::Argb;

/// Animatable fields of a row; `None` means the field is not set
///
/// An update only touches the fields that are set, and blending keeps only
/// the fields set on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimElement {
    pub body_baseline_y: Option<i32>,
    pub brief_baseline_y: Option<i32>,
    pub body_text_color: Option<Argb>,
    pub brief_text_color: Option<Argb>,
}

impl AnimElement {
    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
