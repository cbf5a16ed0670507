//! Coarse curve-in-viewport existence test.

use super::curve::Curve;
use super::mapper::ViewportBand;

/// Does any part of the curve lie inside the viewport band?
///
/// Samples `samples` evenly spaced arc-length points across the full curve
/// and returns true as soon as one sampled `y` falls inside the band.  This
/// is an existence test, not exact geometry: a curve much shorter than the
/// sample spacing can slip between samples, which is acceptable because the
/// intended curves are long relative to the viewport.
pub fn curve_intersects_band(curve: &dyn Curve, band: ViewportBand, samples: usize) -> bool {
    let total = curve.total_length();
    if total <= 0.0 || band.bottom < band.top {
        return false;
    }
    let samples = samples.max(2);
    let step = total / (samples - 1) as f64;
    (0..samples).any(|i| {
        let y = curve.point_at(i as f64 * step).y;
        y >= band.top && y <= band.bottom
    })
}
