//! Viewport-fit correction search.
//!
//! The preferred head position is where raw input wants the tracer; the band
//! is where the viewer can actually see it.  This search finds the head
//! position whose segment best fits inside the band while staying as close
//! as possible to the preferred position — a deterministic discrete
//! approximation of a 1D constrained optimization, run as two candidate
//! pools: a dense window around the preferred head plus a sparse sweep over
//! the whole curve in case the best fit is elsewhere (loops, switchbacks).

use super::config::TracerConfig;
use super::curve::Curve;
use super::mapper::ViewportBand;

/// Weight of the distance-to-preferred term.  Small enough that it only
/// breaks ties among candidates with equal out-of-band penalty.
const DISTANCE_WEIGHT: f64 = 0.001;

/// Fraction of the sample budget spent on the dense local window.
const LOCAL_POOL_SHARE: f64 = 0.7;

/// Search-internal candidate; discarded after every call.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    head_len: f64,
    score: f64,
}

/// How far a candidate head position's segment sticks out of the band,
/// plus the tie-break distance term.  Zero penalty portion = fully inside.
pub fn fit_score(
    curve: &dyn Curve,
    head_len: f64,
    preferred_head: f64,
    tracer_length: f64,
    band: ViewportBand,
) -> f64 {
    let tail_len = (head_len - tracer_length).max(0.0);
    let head_y = curve.point_at(head_len).y;
    let tail_y = curve.point_at(tail_len).y;
    let head_overshoot = (head_y - band.bottom).max(0.0);
    let tail_overshoot = (band.top - tail_y).max(0.0);
    head_overshoot + tail_overshoot + (head_len - preferred_head).abs() * DISTANCE_WEIGHT
}

/// Best achievable head position near `preferred_head` whose segment fits
/// the band, by minimum violation score.
pub fn fit_head_to_band(
    curve: &dyn Curve,
    preferred_head: f64,
    band: ViewportBand,
    cfg: &TracerConfig,
) -> f64 {
    let total = curve.total_length();
    if total <= 0.0 {
        return 0.0;
    }

    let score = |h: f64| fit_score(curve, h, preferred_head, cfg.tracer_length, band);
    let mut best = Candidate {
        head_len: preferred_head,
        score: score(preferred_head),
    };
    let mut consider = |h: f64| {
        let c = Candidate {
            head_len: h,
            score: score(h),
        };
        if c.score < best.score {
            best = c;
        }
    };

    // Dense pool: uniform samples inside a local window around the
    // preferred head, clamped to the curve.
    let half_window = total.min((2.0 * cfg.tracer_length).max(0.15 * total));
    let lo = (preferred_head - half_window).max(0.0);
    let hi = (preferred_head + half_window).min(total);
    let local_samples = ((cfg.fit_samples as f64 * LOCAL_POOL_SHARE) as usize).max(2);
    for i in 0..local_samples {
        let t = i as f64 / (local_samples - 1) as f64;
        consider(lo + (hi - lo) * t);
    }

    // Sparse pool: uniform sweep over the whole curve.
    let global_samples = cfg.fit_samples.saturating_sub(local_samples).max(2);
    for i in 0..global_samples {
        let t = i as f64 / (global_samples - 1) as f64;
        consider(total * t);
    }

    best.head_len
}
