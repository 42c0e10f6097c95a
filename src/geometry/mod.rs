//! Geometry engine for the item row
//!
//! Pure functions that turn the row configuration plus the measured text
//! blocks into positions: usable widths, text box widths, text anchors,
//! icon bounds, the divider strip and the vertical baselines.
//!
//! All arithmetic is integer pixel arithmetic with truncating division.
//! Nothing here fails: negative sizes clamp to zero and a degenerate row
//! simply produces empty rectangles.

pub mod chain;

use serde::{Deserialize, Deserializer, Serialize};

use chain::IconOffset;

/// Horizontal gravity of one text line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gravity {
    #[default]
    Left,
    Center,
    Right,
}

impl Gravity {
    /// Legacy attribute codes (1, 2, 3); anything else is `Left`
    pub fn from_code(code: i64) -> Self {
        match code {
            2 => Gravity::Center,
            3 => Gravity::Right,
            _ => Gravity::Left,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "center" | "centre" => Gravity::Center,
            "right" | "end" => Gravity::Right,
            _ => Gravity::Left,
        }
    }
}

/// How the icons chain with the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainStyle {
    /// Text boxes take all usable width, icons hug the padding edges
    #[default]
    SpreadInside,
    /// Text boxes shrink to their natural width and icons follow them
    Packed,
}

impl ChainStyle {
    /// Legacy attribute codes (10, 20); anything else is `SpreadInside`
    pub fn from_code(code: i64) -> Self {
        match code {
            20 => ChainStyle::Packed,
            _ => ChainStyle::SpreadInside,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().replace('-', "_").as_str() {
            "packed" => ChainStyle::Packed,
            _ => ChainStyle::SpreadInside,
        }
    }
}

/// Enumerations may arrive as names or legacy integer codes. Unknown input
/// of any shape falls back to the default variant instead of failing.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEnum {
    Code(i64),
    Name(String),
    Other(serde::de::IgnoredAny),
}

impl<'de> Deserialize<'de> for Gravity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawEnum::deserialize(deserializer)? {
            RawEnum::Code(code) => Gravity::from_code(code),
            RawEnum::Name(name) => Gravity::from_name(&name),
            RawEnum::Other(_) => Gravity::default(),
        })
    }
}

impl<'de> Deserialize<'de> for ChainStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawEnum::deserialize(deserializer)? {
            RawEnum::Code(code) => ChainStyle::from_code(code),
            RawEnum::Name(name) => ChainStyle::from_name(&name),
            RawEnum::Other(_) => ChainStyle::default(),
        })
    }
}

/// Which end of the row an icon sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Start,
    End,
}

/// Padding on each edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub const ZERO: Insets = Insets { left: 0, top: 0, right: 0, bottom: 0 };

    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn uniform(v: i32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Negative insets are treated as zero
    pub fn clamped(self) -> Self {
        Self::new(self.left.max(0), self.top.max(0), self.right.max(0), self.bottom.max(0))
    }
}

impl std::ops::Add for Insets {
    type Output = Insets;

    fn add(self, o: Insets) -> Insets {
        Insets::new(self.left + o.left, self.top + o.top, self.right + o.right, self.bottom + o.bottom)
    }
}

/// Axis-aligned rectangle, right/bottom exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> i32 {
        (self.right - self.left).max(0)
    }

    pub fn height(&self) -> i32 {
        (self.bottom - self.top).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Measured size of a whole row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// Intrinsic size of an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IconSize {
    pub width: i32,
    pub height: i32,
}

/// Size of one laid-out text block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockSize {
    pub width: i32,
    pub height: i32,
}

/// The two text blocks, as the geometry sees them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBlocks {
    pub brief: BlockSize,
    pub body: BlockSize,
}

/// Text line selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Brief,
    Body,
}

/// Top of each text block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Baselines {
    pub brief_y: i32,
    pub body_y: i32,
}

/// Inputs of one geometry pass
///
/// Icons are `Some` only when present and visible; hidden icons reserve no
/// space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowGeometry {
    pub width: i32,
    pub height: i32,
    pub padding: Insets,
    pub drawable_padding: i32,
    pub text_interval: i32,
    pub start_icon: Option<IconSize>,
    pub end_icon: Option<IconSize>,
    pub brief_gravity: Gravity,
    pub body_gravity: Gravity,
    pub chain_style: ChainStyle,
}

impl RowGeometry {
    /// Horizontal space taken by everything except the text
    pub fn occupied_width(&self) -> i32 {
        let padding = self.padding.clamped();
        let icon = |i: Option<IconSize>| i.map_or(0, |i| self.drawable_padding.max(0) + i.width.max(0));
        padding.left + padding.right + icon(self.start_icon) + icon(self.end_icon)
    }

    /// Widest a text block may be for the given total width
    pub fn usable_max_text_width(&self, total_width: i32) -> i32 {
        if total_width <= 0 {
            return 0;
        }
        (total_width - self.occupied_width()).max(0)
    }

    /// Width of the box a text line is laid out into
    ///
    /// `natural` is the unwrapped text width, `None` when the line is absent.
    pub fn text_box_width(&self, natural: Option<i32>, total_width: i32) -> i32 {
        let Some(natural) = natural else { return 0 };
        let usable = self.usable_max_text_width(total_width);
        match self.chain_style {
            ChainStyle::Packed => natural.max(0).min(usable),
            ChainStyle::SpreadInside => usable,
        }
    }

    /// Space left beside the brief block
    pub fn usable_brief_space(&self, blocks: &TextBlocks) -> i32 {
        self.width - self.occupied_width() - blocks.brief.width
    }

    /// Space left beside the body block
    pub fn usable_body_space(&self, blocks: &TextBlocks) -> i32 {
        self.width - self.occupied_width() - blocks.body.width
    }

    /// Space left beside the wider block
    pub fn usable_space(&self, blocks: &TextBlocks) -> i32 {
        self.width - self.occupied_width() - blocks.brief.width.max(blocks.body.width)
    }

    /// Left edge of the text area, just past the start icon
    pub fn text_left_edge(&self) -> i32 {
        let padding = self.padding.clamped();
        match self.start_icon {
            Some(icon) => padding.left + self.drawable_padding.max(0) + icon.width.max(0),
            None => padding.left,
        }
    }

    /// Anchor x for drawing a line; the paint alignment matches the gravity
    pub fn text_anchor_x(&self, line: Line, blocks: &TextBlocks) -> i32 {
        let (gravity, space, block) = match line {
            Line::Brief => (self.brief_gravity, self.usable_brief_space(blocks), blocks.brief),
            Line::Body => (self.body_gravity, self.usable_body_space(blocks), blocks.body),
        };
        match gravity {
            Gravity::Left => self.text_left_edge(),
            Gravity::Center => self.width / 2,
            Gravity::Right => space + block.width + self.text_left_edge(),
        }
    }

    /// Placement formula for an icon
    pub fn icon_offset(&self, side: Side) -> IconOffset {
        chain::icon_offset(side, self.chain_style, self.brief_gravity, self.body_gravity)
    }

    /// Bounds of the start icon, `None` when hidden
    pub fn start_icon_rect(&self, blocks: &TextBlocks) -> Option<Rect> {
        let icon = self.start_icon?;
        let padding = self.padding.clamped();
        let dp = self.drawable_padding.max(0);
        let wider = blocks.brief.width.max(blocks.body.width);
        let left = match self.icon_offset(Side::Start) {
            IconOffset::PaddingEdge => padding.left,
            IconOffset::OutsideWiderCentered => self.width / 2 - wider / 2 - dp - icon.width,
            IconOffset::OutsideBodyCentered => self.width / 2 - blocks.body.width / 2 - dp - icon.width,
            IconOffset::HalfBriefSpace => padding.left + self.usable_brief_space(blocks) / 2,
            IconOffset::HalfBodySpace => padding.left + self.usable_body_space(blocks) / 2,
            IconOffset::FullSpace => padding.left + self.usable_space(blocks),
        };
        let top = self.height / 2 - icon.height / 2;
        Some(Rect::new(left, top, left + icon.width, top + icon.height))
    }

    /// Bounds of the end icon, `None` when hidden
    pub fn end_icon_rect(&self, blocks: &TextBlocks) -> Option<Rect> {
        let icon = self.end_icon?;
        let padding = self.padding.clamped();
        let dp = self.drawable_padding.max(0);
        let wider = blocks.brief.width.max(blocks.body.width);
        let edge = self.width - padding.right;
        let right = match self.icon_offset(Side::End) {
            IconOffset::PaddingEdge => edge,
            IconOffset::OutsideWiderCentered => self.width / 2 + wider / 2 + dp + icon.width,
            IconOffset::OutsideBodyCentered => self.width / 2 + blocks.body.width / 2 + dp + icon.width,
            IconOffset::HalfBriefSpace => edge - self.usable_brief_space(blocks) / 2,
            IconOffset::HalfBodySpace => edge - self.usable_body_space(blocks) / 2,
            IconOffset::FullSpace => edge - self.usable_space(blocks),
        };
        let top = self.height / 2 - icon.height / 2;
        Some(Rect::new(right - icon.width, top, right, top + icon.height))
    }

    /// Bottom strip holding the divider
    ///
    /// `start_icon` is the configured start icon whether or not it is
    /// visible; a hidden icon still indents the divider.
    pub fn divider_rect(&self, divider_height: f32, start_icon: Option<IconSize>) -> Rect {
        let padding = self.padding.clamped();
        let left = match start_icon {
            Some(icon) => padding.left + self.drawable_padding.max(0) + icon.width.max(0),
            None => padding.left,
        };
        Rect::new(
            left,
            (self.height as f32 - divider_height.max(0.0)) as i32,
            self.width - padding.right,
            self.height,
        )
    }
}

/// Vertical position of both blocks inside `total_height`
///
/// A line counts as shown when it has text and is enabled. Each block is
/// centred on its own when the other line is not shown, otherwise the pair
/// is centred with `gap` between them.
pub fn vertical_baselines(
    total_height: i32,
    gap: i32,
    blocks: &TextBlocks,
    brief_shown: bool,
    body_shown: bool,
) -> Baselines {
    let h = total_height.max(0);
    let bh = blocks.brief.height;
    let dh = blocks.body.height;
    let pair_top = (h - gap - bh - dh) / 2;

    let brief_y = if body_shown { pair_top } else { h / 2 - bh / 2 };
    let body_y = if brief_shown { h - pair_top - dh } else { h / 2 - dh / 2 };
    Baselines { brief_y, body_y }
}

/// Content height before padding, for hosts that leave the height open
#[derive(Debug, Clone, Copy, Default)]
pub struct HeightInputs {
    pub icon_heights: [Option<i32>; 2],
    /// Single-line height of each present line
    pub brief_line: Option<i32>,
    pub body_line: Option<i32>,
    /// Laid-out block height of each present line
    pub brief_block: Option<i32>,
    pub body_block: Option<i32>,
    pub gap: i32,
}

pub fn content_height(inputs: &HeightInputs) -> i32 {
    let icons = inputs.icon_heights.iter().flatten().copied().max().unwrap_or(0);
    let lines = inputs.brief_line.unwrap_or(0) + inputs.gap + inputs.body_line.unwrap_or(0);
    let blocks = inputs.brief_block.unwrap_or(0) + inputs.body_block.unwrap_or(0) + inputs.gap;
    icons.max(lines).max(blocks).max(0)
}

#[cfg(test)]
mod tests;
