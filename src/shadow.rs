//! Edge shadow compositor
//!
//! A shadow may be cast on any combination of the four edges. Each flagged
//! edge is inset by `radius + 5` so the blur never clips, and the shadow
//! offset (dx, dy) pushes the right and bottom insets further out.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::color::Argb;
use crate::geometry::{Insets, Rect};

/// Extra room beyond the blur radius
const SHADOW_SLACK: i32 = 5;

/// One edge of the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl ShadowSide {
    pub const ALL: [ShadowSide; 4] = [ShadowSide::Left, ShadowSide::Right, ShadowSide::Top, ShadowSide::Bottom];
}

/// Shadow settings of a row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    pub sides: BTreeSet<ShadowSide>,
    pub radius: i32,
    pub dx: i32,
    pub dy: i32,
    pub color: Argb,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            sides: BTreeSet::new(),
            radius: 0,
            dx: 10,
            dy: 10,
            color: Argb::BLACK,
        }
    }
}

impl ShadowConfig {
    pub fn is_enabled(&self) -> bool {
        !self.sides.is_empty()
    }

    pub fn has_side(&self, side: ShadowSide) -> bool {
        self.sides.contains(&side)
    }

    /// Padding the row needs so the shadow stays inside its bounds
    pub fn insets(&self) -> Insets {
        if !self.is_enabled() {
            return Insets::ZERO;
        }
        let effect = self.radius.max(0) + SHADOW_SLACK;
        let edge = |side| if self.has_side(side) { effect } else { 0 };
        Insets {
            left: edge(ShadowSide::Left),
            top: edge(ShadowSide::Top),
            right: edge(ShadowSide::Right) + self.dx,
            bottom: edge(ShadowSide::Bottom) + self.dy,
        }
    }

    /// Rectangle that casts the shadow within a `width` x `height` row
    pub fn shadow_rect(&self, width: i32, height: i32) -> Option<Rect> {
        if !self.is_enabled() {
            return None;
        }
        let insets = self.insets();
        Some(Rect::new(insets.left, insets.top, width - insets.right, height - insets.bottom))
    }
}
