//! Direction-sensitive lookahead scaling.
//!
//! Raw scroll delta is measured in on-screen vertical pixels, but the tracer
//! moves in arc length.  On a near-level stretch a pixel of arc barely moves
//! the head down the page, so the same scroll input should cover more arc;
//! on a steep stretch the opposite.  This module inspects the curve ahead of
//! the head in the scroll direction and produces the multiplier that keeps
//! perceived vertical motion roughly proportional to input.

use super::config::TracerConfig;
use super::curve::Curve;

/// Scale applied to `scroll_delta` before it is integrated into arc length.
///
/// Returns exactly `1.0` when `scroll_delta == 0`; otherwise a value clamped
/// to `[cfg.min_scale, cfg.max_scale]`.
pub fn lookahead_scale(
    curve: &dyn Curve,
    head_len: f64,
    scroll_delta: f64,
    viewport_width: f64,
    cfg: &TracerConfig,
) -> f64 {
    if scroll_delta == 0.0 {
        return 1.0;
    }
    let total = curve.total_length();
    let horizon = total.min(viewport_width * cfg.lookahead_viewport_factor);
    if total <= 0.0 || horizon <= 0.0 {
        return 1.0;
    }

    let forward = scroll_delta > 0.0;
    let start_y = curve.point_at(head_len).y;

    // March along the curve in step_px increments, tracking the extreme
    // vertical coordinate reached in the direction of travel.  Stop early
    // once the accumulated vertical change hits the threshold or the march
    // runs off the curve.
    let mut extreme_y = start_y;
    let mut scanned = 0.0;
    loop {
        let requested = (scanned + cfg.step_px).min(horizon);
        let s = if forward {
            head_len + requested
        } else {
            head_len - requested
        };
        let clamped = s.clamp(0.0, total);
        let covered = if forward {
            clamped - head_len
        } else {
            head_len - clamped
        };
        scanned = covered.max(0.0);

        let y = curve.point_at(clamped).y;
        extreme_y = if forward {
            extreme_y.max(y)
        } else {
            extreme_y.min(y)
        };

        let hit_boundary = covered < requested;
        if (extreme_y - start_y).abs() >= cfg.vertical_threshold
            || scanned >= horizon
            || hit_boundary
        {
            break;
        }
    }

    // Vertical pixels gained per arc-length pixel scanned.
    let opportunity = (extreme_y - start_y).abs() / scanned.max(1.0);
    opportunity_to_scale(opportunity, cfg.min_scale).clamp(cfg.min_scale, cfg.max_scale)
}

/// Piecewise map from vertical opportunity to traversal scale.
fn opportunity_to_scale(opportunity: f64, min_scale: f64) -> f64 {
    if opportunity <= 0.05 {
        2.0
    } else if opportunity <= 0.15 {
        1.4
    } else if opportunity <= 0.30 {
        1.0
    } else {
        // Linear from 1.0 at 0.30 down to min_scale at 1.0, saturating.
        let t = ((opportunity - 0.30) / 0.70).min(1.0);
        1.0 + (min_scale - 1.0) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::curve::{Point, PolylineCurve};

    fn cfg() -> TracerConfig {
        TracerConfig::default()
    }

    fn horizontal(len: f64) -> PolylineCurve {
        PolylineCurve::new(vec![Point::new(0.0, 0.0), Point::new(len, 0.0)]).unwrap()
    }

    fn vertical(len: f64) -> PolylineCurve {
        PolylineCurve::new(vec![Point::new(0.0, 0.0), Point::new(0.0, len)]).unwrap()
    }

    #[test]
    fn zero_delta_is_exactly_neutral() {
        let c = vertical(1000.0);
        assert_eq!(lookahead_scale(&c, 500.0, 0.0, 800.0, &cfg()), 1.0);
    }

    #[test]
    fn flat_stretch_accelerates() {
        // No vertical change at all ahead: opportunity ~0 → scale 2.0.
        let c = horizontal(2000.0);
        let scale = lookahead_scale(&c, 0.0, 100.0, 800.0, &cfg());
        assert!((scale - 2.0).abs() < 1e-12);
    }

    #[test]
    fn steep_stretch_decelerates_to_min_scale() {
        // Straight vertical drop: one arc pixel is one vertical pixel,
        // opportunity saturates at 1.0.
        let c = vertical(2000.0);
        let scale = lookahead_scale(&c, 0.0, 100.0, 800.0, &cfg());
        assert!((scale - cfg().min_scale).abs() < 1e-9);
    }

    #[test]
    fn direction_matters() {
        // Steep drop first, then a long flat run.  Looking forward from the
        // joint sees flat; looking backward sees steep.
        let c = PolylineCurve::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 500.0),
            Point::new(2000.0, 500.0),
        ])
        .unwrap();
        let forward = lookahead_scale(&c, 500.0, 50.0, 800.0, &cfg());
        let backward = lookahead_scale(&c, 500.0, -50.0, 800.0, &cfg());
        assert!((forward - 2.0).abs() < 1e-12);
        assert!(backward < 1.0);
    }

    #[test]
    fn result_stays_within_configured_bounds() {
        let c = vertical(2000.0);
        let mut tight = cfg();
        tight.min_scale = 0.9;
        tight.max_scale = 1.1;
        let down = lookahead_scale(&c, 0.0, 100.0, 800.0, &tight);
        assert!(down >= 0.9 && down <= 1.1);

        let flat = horizontal(2000.0);
        let up = lookahead_scale(&flat, 0.0, 100.0, 800.0, &tight);
        assert!((up - 1.1).abs() < 1e-12);
    }

    #[test]
    fn scrolling_off_the_end_does_not_stall() {
        // Head at the very end, scrolling forward: nothing to scan, the
        // march hits the boundary immediately and the scale stays finite.
        let c = vertical(1000.0);
        let scale = lookahead_scale(&c, 1000.0, 10.0, 800.0, &cfg());
        assert!(scale.is_finite());
        assert!(scale >= cfg().min_scale && scale <= cfg().max_scale);
    }
}
