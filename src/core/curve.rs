//! Curve abstraction — arc-length parameterized 2D paths.
//!
//! The control algorithm only ever *reads* a curve: its total arc length and
//! a point sample at a given arc-length position.  Implementations must be
//! continuous and deterministic over `[0, total_length]` so that repeated
//! sampling during the fit search never disagrees with itself.

use thiserror::Error;

/// A 2D point in the curve's coordinate space.  `y` grows downward, matching
/// scroll offsets (scrolling forward moves toward larger `y`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point.
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Read-only arc-length parameterized path.
///
/// `Send + Sync` so one curve can be shared across unboundedly many pipeline
/// invocations without synchronization.
pub trait Curve: Send + Sync {
    /// Total arc length of the path.  Must be positive and constant.
    fn total_length(&self) -> f64;

    /// Point at arc-length `s`.  Implementors clamp `s` to
    /// `[0, total_length]` rather than extrapolating.
    fn point_at(&self, s: f64) -> Point;
}

/// Why a polyline could not be turned into a curve.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("a polyline curve needs at least 2 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("vertex {0} has a non-finite coordinate")]
    NonFiniteVertex(usize),
    #[error("polyline has zero total length")]
    ZeroLength,
}

// ───────────────────────────────────────── polyline ──────────

/// Arc-length parameterized polyline.
///
/// Stores the vertices plus a cumulative arc-length table so `point_at` is a
/// binary search followed by one linear interpolation.
#[derive(Debug, Clone)]
pub struct PolylineCurve {
    vertices: Vec<Point>,
    /// `cumulative[i]` = arc length from the start to `vertices[i]`.
    /// Strictly increasing: zero-length segments are dropped up front.
    cumulative: Vec<f64>,
    total: f64,
}

impl PolylineCurve {
    pub fn new(vertices: Vec<Point>) -> Result<Self, CurveError> {
        if vertices.len() < 2 {
            return Err(CurveError::TooFewVertices(vertices.len()));
        }
        if let Some(i) = vertices
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(CurveError::NonFiniteVertex(i));
        }

        // Drop consecutive duplicates so every stored segment has positive
        // length — keeps the cumulative table strictly increasing.
        let mut kept: Vec<Point> = Vec::with_capacity(vertices.len());
        let mut cumulative: Vec<f64> = Vec::with_capacity(vertices.len());
        for v in vertices {
            match kept.last() {
                Some(&prev) => {
                    let d = prev.distance(v);
                    if d > 0.0 {
                        let last = *cumulative.last().unwrap_or(&0.0);
                        kept.push(v);
                        cumulative.push(last + d);
                    }
                }
                None => {
                    kept.push(v);
                    cumulative.push(0.0);
                }
            }
        }

        let total = *cumulative.last().unwrap_or(&0.0);
        if kept.len() < 2 || total <= 0.0 {
            return Err(CurveError::ZeroLength);
        }

        Ok(Self {
            vertices: kept,
            cumulative,
            total,
        })
    }

    /// Vertices the curve was built from (duplicates removed).
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

impl Curve for PolylineCurve {
    fn total_length(&self) -> f64 {
        self.total
    }

    fn point_at(&self, s: f64) -> Point {
        let s = s.clamp(0.0, self.total);
        // Index of the first cumulative value >= s; seg start is the one before.
        let idx = self.cumulative.partition_point(|&c| c < s);
        if idx == 0 {
            return self.vertices[0];
        }
        let i = idx - 1;
        if i + 1 >= self.vertices.len() {
            return self.vertices[self.vertices.len() - 1];
        }
        let seg_start = self.cumulative[i];
        let seg_len = self.cumulative[i + 1] - seg_start;
        let t = (s - seg_start) / seg_len;
        let a = self.vertices[i];
        let b = self.vertices[i + 1];
        Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

// ───────────────────────────────────────── generators ────────

/// Demo curve: a sine sweep running down a vertical band.
///
/// `height` is the vertical extent, `amplitude` the horizontal swing around
/// `center_x`, `periods` the number of full oscillations top to bottom.
pub fn sine_curve(
    center_x: f64,
    height: f64,
    amplitude: f64,
    periods: f64,
) -> Result<PolylineCurve, CurveError> {
    let steps = ((height / 4.0).ceil() as usize).max(64);
    let mut vertices = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let y = t * height;
        let x = center_x + amplitude * (t * periods * std::f64::consts::TAU).sin();
        vertices.push(Point::new(x, y));
    }
    PolylineCurve::new(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_line(len: f64) -> PolylineCurve {
        PolylineCurve::new(vec![Point::new(0.0, 0.0), Point::new(0.0, len)]).unwrap()
    }

    #[test]
    fn rejects_degenerate_polylines() {
        assert!(matches!(
            PolylineCurve::new(vec![Point::new(1.0, 1.0)]),
            Err(CurveError::TooFewVertices(1))
        ));
        assert!(matches!(
            PolylineCurve::new(vec![Point::new(1.0, 1.0), Point::new(1.0, 1.0)]),
            Err(CurveError::ZeroLength)
        ));
        assert!(matches!(
            PolylineCurve::new(vec![Point::new(0.0, f64::NAN), Point::new(1.0, 1.0)]),
            Err(CurveError::NonFiniteVertex(0))
        ));
    }

    #[test]
    fn point_at_interpolates_and_clamps() {
        let c = vertical_line(100.0);
        assert_eq!(c.total_length(), 100.0);
        assert_eq!(c.point_at(50.0), Point::new(0.0, 50.0));
        assert_eq!(c.point_at(-10.0), Point::new(0.0, 0.0));
        assert_eq!(c.point_at(1e9), Point::new(0.0, 100.0));
    }

    #[test]
    fn multi_segment_arc_length_is_cumulative() {
        // L-shape: 100 right, then 100 down.
        let c = PolylineCurve::new(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ])
        .unwrap();
        assert_eq!(c.total_length(), 200.0);
        assert_eq!(c.point_at(150.0), Point::new(100.0, 50.0));
    }

    #[test]
    fn duplicate_vertices_are_dropped() {
        let c = PolylineCurve::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
        ])
        .unwrap();
        assert_eq!(c.vertices().len(), 2);
        assert_eq!(c.total_length(), 10.0);
    }

    #[test]
    fn sine_curve_spans_requested_height() {
        let c = sine_curve(60.0, 2000.0, 30.0, 6.0).unwrap();
        let top = c.point_at(0.0);
        let bottom = c.point_at(c.total_length());
        assert_eq!(top.y, 0.0);
        assert!((bottom.y - 2000.0).abs() < 1e-9);
        assert!(c.total_length() >= 2000.0);
    }
}
