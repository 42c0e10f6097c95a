//! Tests for the geometry engine

use super::*;
use proptest::prelude::*;

fn row(chain_style: ChainStyle, brief: Gravity, body: Gravity) -> RowGeometry {
    RowGeometry {
        width: 300,
        height: 100,
        padding: Insets::new(10, 0, 10, 0),
        drawable_padding: 5,
        text_interval: 0,
        start_icon: Some(IconSize { width: 20, height: 24 }),
        end_icon: Some(IconSize { width: 30, height: 16 }),
        brief_gravity: brief,
        body_gravity: body,
        chain_style,
    }
}

fn blocks(brief_width: i32, body_width: i32) -> TextBlocks {
    TextBlocks {
        brief: BlockSize { width: brief_width, height: 30 },
        body: BlockSize { width: body_width, height: 40 },
    }
}

#[test]
fn test_occupied_width() {
    let g = row(ChainStyle::SpreadInside, Gravity::Left, Gravity::Left);
    assert_eq!(g.occupied_width(), 10 + 10 + 5 + 20 + 5 + 30);

    let bare = RowGeometry { start_icon: None, end_icon: None, ..g };
    assert_eq!(bare.occupied_width(), 20);
}

#[test]
fn test_usable_max_text_width_clamps() {
    let g = row(ChainStyle::SpreadInside, Gravity::Left, Gravity::Left);
    assert_eq!(g.usable_max_text_width(300), 220);
    assert_eq!(g.usable_max_text_width(80), 0);
    assert_eq!(g.usable_max_text_width(50), 0);
    assert_eq!(g.usable_max_text_width(0), 0);
    assert_eq!(g.usable_max_text_width(-40), 0);
}

#[test]
fn test_text_box_width_by_chain_style() {
    let spread = row(ChainStyle::SpreadInside, Gravity::Left, Gravity::Left);
    let packed = row(ChainStyle::Packed, Gravity::Left, Gravity::Left);

    assert_eq!(spread.text_box_width(Some(60), 300), 220);
    assert_eq!(packed.text_box_width(Some(60), 300), 60);
    assert_eq!(packed.text_box_width(Some(500), 300), 220);

    // Absent text takes no room in either style
    assert_eq!(spread.text_box_width(None, 300), 0);
    assert_eq!(packed.text_box_width(None, 300), 0);
}

#[test]
fn test_text_anchor_by_gravity() {
    let b = blocks(80, 60);

    let left = row(ChainStyle::Packed, Gravity::Left, Gravity::Left);
    assert_eq!(left.text_anchor_x(Line::Brief, &b), 35);

    let center = row(ChainStyle::Packed, Gravity::Center, Gravity::Center);
    assert_eq!(center.text_anchor_x(Line::Brief, &b), 150);
    assert_eq!(center.text_anchor_x(Line::Body, &b), 150);

    // Right-gravity text ends at the text area's right boundary
    let right = row(ChainStyle::Packed, Gravity::Right, Gravity::Right);
    assert_eq!(right.text_anchor_x(Line::Brief, &b), 300 - 10 - 5 - 30);
    assert_eq!(right.text_anchor_x(Line::Body, &b), 300 - 10 - 5 - 30);
}

#[test]
fn test_left_anchor_without_start_icon() {
    let g = RowGeometry { start_icon: None, ..row(ChainStyle::Packed, Gravity::Left, Gravity::Left) };
    assert_eq!(g.text_anchor_x(Line::Body, &blocks(10, 10)), 10);
    assert_eq!(g.text_left_edge(), 10);
}

#[test]
fn test_spread_icons_hug_padding() {
    let g = row(ChainStyle::SpreadInside, Gravity::Center, Gravity::Center);
    let b = blocks(220, 220);
    assert_eq!(g.start_icon_rect(&b), Some(Rect::new(10, 38, 30, 62)));
    assert_eq!(g.end_icon_rect(&b), Some(Rect::new(260, 42, 290, 58)));
}

#[test]
fn test_packed_centered_icons_flank_wider_block() {
    let g = row(ChainStyle::Packed, Gravity::Center, Gravity::Center);
    let b = blocks(80, 60);

    let start = g.start_icon_rect(&b).unwrap();
    let end = g.end_icon_rect(&b).unwrap();
    // Wider block spans 110..190 around the centre
    assert_eq!(start.left, 85);
    assert_eq!(start.right, 105);
    assert_eq!(end.left, 195);
    assert_eq!(end.right, 225);
}

#[test]
fn test_packed_right_right_start_icon_follows_text() {
    let g = row(ChainStyle::Packed, Gravity::Right, Gravity::Right);
    let b = blocks(80, 80);
    let start = g.start_icon_rect(&b).unwrap();
    assert_eq!(start.left, 10 + (300 - 80 - 80));
    assert_eq!(g.end_icon_rect(&b).unwrap().right, 290);
}

#[test]
fn test_packed_left_left_end_icon_follows_text() {
    let g = row(ChainStyle::Packed, Gravity::Left, Gravity::Left);
    let b = blocks(80, 40);
    let end = g.end_icon_rect(&b).unwrap();
    // Text occupies 35..115, icon sits one drawable padding after it
    assert_eq!(end.right, 290 - 140);
    assert_eq!(end.left, 120);
    assert_eq!(g.start_icon_rect(&b).unwrap().left, 10);
}

#[test]
fn test_packed_mixed_gravity_literal_formulas() {
    let b = blocks(80, 60);

    let g = row(ChainStyle::Packed, Gravity::Right, Gravity::Center);
    assert_eq!(g.start_icon_rect(&b).unwrap().left, 150 - 30 - 5 - 20);

    let g = row(ChainStyle::Packed, Gravity::Center, Gravity::Right);
    assert_eq!(g.start_icon_rect(&b).unwrap().left, 10 + (300 - 80 - 80) / 2);

    let g = row(ChainStyle::Packed, Gravity::Left, Gravity::Center);
    assert_eq!(g.end_icon_rect(&b).unwrap().right, 290 - (300 - 80 - 60) / 2);

    let g = row(ChainStyle::Packed, Gravity::Center, Gravity::Left);
    assert_eq!(g.end_icon_rect(&b).unwrap().right, 290 - (300 - 80 - 80) / 2);
}

#[test]
fn test_hidden_icons_have_no_rect() {
    let g = RowGeometry {
        start_icon: None,
        end_icon: None,
        ..row(ChainStyle::Packed, Gravity::Center, Gravity::Center)
    };
    assert_eq!(g.start_icon_rect(&blocks(1, 1)), None);
    assert_eq!(g.end_icon_rect(&blocks(1, 1)), None);
}

#[test]
fn test_divider_rect() {
    let g = row(ChainStyle::SpreadInside, Gravity::Left, Gravity::Left);
    assert_eq!(g.divider_rect(1.0, g.start_icon), Rect::new(35, 99, 290, 100));
    assert_eq!(g.divider_rect(1.5, g.start_icon), Rect::new(35, 98, 290, 100));

    // A hidden start icon frees the text area but still indents the divider
    let hidden = RowGeometry { start_icon: None, ..g };
    assert_eq!(hidden.text_left_edge(), 10);
    assert_eq!(hidden.divider_rect(2.0, g.start_icon), Rect::new(35, 98, 290, 100));

    assert_eq!(hidden.divider_rect(2.0, None), Rect::new(10, 98, 290, 100));
}

#[test]
fn test_baselines_pair() {
    let b = blocks(0, 0);
    let lines = vertical_baselines(200, 10, &b, true, true);
    assert_eq!(lines, Baselines { brief_y: 60, body_y: 100 });
    assert_eq!(lines.body_y - lines.brief_y, 10 + 30);
}

#[test]
fn test_baselines_single_line() {
    let b = blocks(0, 0);
    let only_brief = vertical_baselines(200, 10, &b, true, false);
    assert_eq!(only_brief.brief_y, 200 / 2 - 30 / 2);

    let only_body = vertical_baselines(200, 10, &b, false, true);
    assert_eq!(only_body.body_y, 200 / 2 - 40 / 2);
}

#[test]
fn test_degenerate_row_does_not_panic() {
    let g = RowGeometry { width: 0, height: 0, ..row(ChainStyle::Packed, Gravity::Center, Gravity::Right) };
    let b = TextBlocks::default();
    assert_eq!(g.usable_max_text_width(g.width), 0);
    let _ = g.start_icon_rect(&b);
    let _ = g.end_icon_rect(&b);
    assert!(g.divider_rect(1.0, g.start_icon).is_empty());
    let _ = vertical_baselines(-10, 4, &b, true, true);
}

#[test]
fn test_content_height() {
    let inputs = HeightInputs {
        icon_heights: [Some(48), None],
        brief_line: Some(14),
        body_line: Some(16),
        brief_block: Some(14),
        body_block: Some(32),
        gap: 4,
    };
    assert_eq!(content_height(&inputs), 50);

    let icon_wins = HeightInputs { icon_heights: [Some(48), Some(60)], gap: 0, ..Default::default() };
    assert_eq!(content_height(&icon_wins), 60);
}

#[test]
fn test_enum_fallbacks() {
    assert_eq!(Gravity::from_code(1), Gravity::Left);
    assert_eq!(Gravity::from_code(2), Gravity::Center);
    assert_eq!(Gravity::from_code(3), Gravity::Right);
    assert_eq!(Gravity::from_code(42), Gravity::Left);
    assert_eq!(Gravity::from_name("CENTER"), Gravity::Center);
    assert_eq!(Gravity::from_name("diagonal"), Gravity::Left);

    assert_eq!(ChainStyle::from_code(20), ChainStyle::Packed);
    assert_eq!(ChainStyle::from_code(10), ChainStyle::SpreadInside);
    assert_eq!(ChainStyle::from_code(-1), ChainStyle::SpreadInside);
    assert_eq!(ChainStyle::from_name("spread-inside"), ChainStyle::SpreadInside);
    assert_eq!(ChainStyle::from_name("Packed"), ChainStyle::Packed);
}

proptest! {
    #[test]
    fn prop_no_negative_usable_width(width in -500i32..500, pad in 0i32..100, dp in 0i32..50) {
        let g = RowGeometry {
            padding: Insets::new(pad, 0, pad, 0),
            drawable_padding: dp,
            ..row(ChainStyle::SpreadInside, Gravity::Left, Gravity::Left)
        };
        let usable = g.usable_max_text_width(width);
        prop_assert!(usable >= 0);
        if width <= g.occupied_width() {
            prop_assert_eq!(usable, 0);
        }
    }

    #[test]
    fn prop_packed_never_wider_than_spread(width in 0i32..1000, natural in 0i32..1000) {
        let spread = row(ChainStyle::SpreadInside, Gravity::Left, Gravity::Left);
        let packed = row(ChainStyle::Packed, Gravity::Left, Gravity::Left);
        let p = packed.text_box_width(Some(natural), width);
        prop_assert!(p <= spread.text_box_width(Some(natural), width));
        prop_assert!(p <= natural);
    }

    #[test]
    fn prop_pair_gap_is_exact(height in 0i32..2000, gap in 0i32..50, bh in 0i32..200, dh in 0i32..200) {
        let b = TextBlocks {
            brief: BlockSize { width: 0, height: bh },
            body: BlockSize { width: 0, height: dh },
        };
        let lines = vertical_baselines(height, gap, &b, true, true);
        // Exact whenever the free space splits evenly
        if (height - gap - bh - dh) % 2 == 0 {
            prop_assert_eq!(lines.body_y - lines.brief_y, gap + bh);
        }
    }
}
