//! Icon placement rules for the drawable chain
//!
//! In PACKED style the icons follow the text instead of sitting against the
//! padding edges. Where exactly depends on both line gravities, so the rules
//! live in a lookup table keyed by `(side, brief_gravity, body_gravity)`.
//! The formulas behind each [`IconOffset`] are resolved in the parent module.

use super::{ChainStyle, Gravity, Side};

/// Which formula positions an icon
///
/// For the start icon the formula yields its left edge, for the end icon its
/// right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconOffset {
    /// Against the padding on the icon's own side
    PaddingEdge,
    /// Just outside the wider of the two centred text blocks
    OutsideWiderCentered,
    /// Just outside the centred body block
    OutsideBodyCentered,
    /// Half of the space left over beside the brief block
    HalfBriefSpace,
    /// Half of the space left over beside the body block
    HalfBodySpace,
    /// All of the space left over beside the wider block
    FullSpace,
}

use Gravity::{Center, Left, Right};
use IconOffset::*;

const START_RULES: [(Gravity, Gravity, IconOffset); 9] = [
    (Left, Left, PaddingEdge),
    (Left, Center, PaddingEdge),
    (Left, Right, PaddingEdge),
    (Center, Left, PaddingEdge),
    (Center, Center, OutsideWiderCentered),
    (Center, Right, HalfBriefSpace),
    (Right, Left, PaddingEdge),
    (Right, Center, OutsideBodyCentered),
    (Right, Right, FullSpace),
];

// Not a mirror of START_RULES: (Left, Center) uses half the body space while
// the start side's (Right, Center) hugs the body block.
const END_RULES: [(Gravity, Gravity, IconOffset); 9] = [
    (Left, Left, FullSpace),
    (Left, Center, HalfBodySpace),
    (Left, Right, PaddingEdge),
    (Center, Left, HalfBriefSpace),
    (Center, Center, OutsideWiderCentered),
    (Center, Right, PaddingEdge),
    (Right, Left, PaddingEdge),
    (Right, Center, PaddingEdge),
    (Right, Right, PaddingEdge),
];

/// Look up the placement rule for an icon
pub fn icon_offset(side: Side, chain: ChainStyle, brief: Gravity, body: Gravity) -> IconOffset {
    if chain == ChainStyle::SpreadInside {
        return PaddingEdge;
    }
    let rules = match side {
        Side::Start => &START_RULES,
        Side::End => &END_RULES,
    };
    rules
        .iter()
        .find(|(b, d, _)| *b == brief && *d == body)
        .map(|(_, _, offset)| *offset)
        .unwrap_or(PaddingEdge)
}
