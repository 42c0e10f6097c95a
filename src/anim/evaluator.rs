//! Blending between two animation elements
//!
//! Every value is blended as `trunc(start + (end - start) * progress)`, in
//! f64. Colours blend per ARGB channel. Truncation is toward zero, so halfway
//! from alpha 255 to 0 lands on 127.

use super::element::AnimElement;
use crate::color::Argb;

/// Blend `start` towards `end` at `progress` in [0, 1]
///
/// Fields missing on either side stay missing in the result.
pub fn evaluate(progress: f32, start: &AnimElement, end: &AnimElement) -> AnimElement {
    let p = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) as f64 };
    AnimElement {
        body_baseline_y: both(start.body_baseline_y, end.body_baseline_y).map(|(s, e)| lerp_i32(s, e, p)),
        brief_baseline_y: both(start.brief_baseline_y, end.brief_baseline_y).map(|(s, e)| lerp_i32(s, e, p)),
        body_text_color: both(start.body_text_color, end.body_text_color).map(|(s, e)| lerp_color(s, e, p)),
        brief_text_color: both(start.brief_text_color, end.brief_text_color).map(|(s, e)| lerp_color(s, e, p)),
    }
}

fn both<T>(a: Option<T>, b: Option<T>) -> Option<(T, T)> {
    a.zip(b)
}

fn lerp_i32(start: i32, end: i32, p: f64) -> i32 {
    (start as f64 + (end as f64 - start as f64) * p) as i32
}

fn lerp_color(start: Argb, end: Argb, p: f64) -> Argb {
    let s = start.channels();
    let e = end.channels();
    Argb::from_channels(std::array::from_fn(|i| {
        lerp_i32(s[i] as i32, e[i] as i32, p).clamp(0, 255) as u8
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn full(y_body: i32, y_brief: i32, body: u32, brief: u32) -> AnimElement {
        AnimElement {
            body_baseline_y: Some(y_body),
            brief_baseline_y: Some(y_brief),
            body_text_color: Some(Argb(body)),
            brief_text_color: Some(Argb(brief)),
        }
    }

    #[test]
    fn test_endpoints_reproduce_inputs() {
        let s = full(10, 80, 0xFF10_2030, 0xFF00_0000);
        let e = full(-40, 20, 0x00AB_CDEF, 0x80FF_FFFF);
        assert_eq!(evaluate(0.0, &s, &e), s);
        assert_eq!(evaluate(1.0, &s, &e), e);
    }

    #[test]
    fn test_half_alpha_is_truncated_mean() {
        let opaque = Argb(0xFF33_6699);
        let s = AnimElement { brief_text_color: Some(opaque), ..Default::default() };
        let e = AnimElement { brief_text_color: Some(opaque.transparent()), ..Default::default() };

        let mid = evaluate(0.5, &s, &e).brief_text_color.unwrap();
        assert_eq!(mid.alpha(), 127);
        assert_eq!(mid.red(), 0x33);
        assert_eq!(mid.green(), 0x66);
        assert_eq!(mid.blue(), 0x99);
    }

    #[test]
    fn test_partial_fields() {
        let s = AnimElement { body_baseline_y: Some(0), brief_baseline_y: Some(10), ..Default::default() };
        let e = AnimElement { body_baseline_y: Some(100), body_text_color: Some(Argb::WHITE), ..Default::default() };

        let mid = evaluate(0.25, &s, &e);
        assert_eq!(mid.body_baseline_y, Some(25));
        // Present on one side only: not blended, not defaulted
        assert_eq!(mid.brief_baseline_y, None);
        assert_eq!(mid.body_text_color, None);
        assert_eq!(mid.brief_text_color, None);
    }

    #[test]
    fn test_progress_is_clamped() {
        let s = full(0, 0, 0, 0);
        let e = full(100, 100, 0xFFFF_FFFF, 0xFFFF_FFFF);
        assert_eq!(evaluate(-3.0, &s, &e), s);
        assert_eq!(evaluate(7.5, &s, &e), e);
        assert_eq!(evaluate(f32::NAN, &s, &e), s);
    }

    proptest! {
        #[test]
        fn prop_monotonic_per_channel(
            a in any::<u32>(), b in any::<u32>(),
            ya in -5000i32..5000, yb in -5000i32..5000,
            p in 0.0f32..=1.0, q in 0.0f32..=1.0,
        ) {
            let (lo, hi) = if p <= q { (p, q) } else { (q, p) };
            let s = full(ya, ya, a, a);
            let e = full(yb, yb, b, b);
            let x = evaluate(lo, &s, &e);
            let y = evaluate(hi, &s, &e);

            let ordered = |from: i32, to: i32, u: i32, v: i32| {
                if to >= from { u <= v } else { u >= v }
            };
            prop_assert!(ordered(ya, yb, x.body_baseline_y.unwrap(), y.body_baseline_y.unwrap()));
            let (sc, ec) = (Argb(a).channels(), Argb(b).channels());
            let (xc, yc) = (x.body_text_color.unwrap().channels(), y.body_text_color.unwrap().channels());
            for i in 0..4 {
                prop_assert!(ordered(sc[i] as i32, ec[i] as i32, xc[i] as i32, yc[i] as i32));
            }
        }

        #[test]
        fn prop_absent_stays_absent(p in 0.0f32..=1.0, y in any::<i32>()) {
            let s = AnimElement { body_baseline_y: Some(y), ..Default::default() };
            let e = AnimElement { brief_baseline_y: Some(y), ..Default::default() };
            prop_assert!(evaluate(p, &s, &e).is_empty());
        }
    }
}
