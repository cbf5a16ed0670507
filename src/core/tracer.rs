//! Segment sampling and polyline emission.

use super::curve::{Curve, Point};

/// Where rendered polylines go.  The core never draws; it hands an ordered
/// point list (first point = move, rest = line segments) to the sink.
pub trait RenderSink {
    /// Present a polyline.  An empty slice means "clear the tracer".
    fn draw_polyline(&mut self, points: &[Point]);
}

/// Sample the curve from `tail_len` to `head_len` inclusive at `sampling`
/// evenly spaced arc-length points and emit the polyline.
///
/// `head_len <= tail_len` is a defined degenerate case and emits an empty
/// render rather than a backwards segment.
pub fn render_segment(
    curve: &dyn Curve,
    tail_len: f64,
    head_len: f64,
    sampling: usize,
    sink: &mut dyn RenderSink,
) {
    if head_len <= tail_len {
        sink.draw_polyline(&[]);
        return;
    }
    let sampling = sampling.max(2);
    let span = head_len - tail_len;
    let mut points = Vec::with_capacity(sampling);
    for i in 0..sampling {
        let s = tail_len + span * (i as f64 / (sampling - 1) as f64);
        points.push(curve.point_at(s));
    }
    sink.draw_polyline(&points);
}

/// Sink that records the last polyline it was handed.  Used by tests and by
/// the demo front end, which draws from the recorded points each frame.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub points: Vec<Point>,
    pub draws: usize,
}

impl RenderSink for RecordingSink {
    fn draw_polyline(&mut self, points: &[Point]) {
        self.points = points.to_vec();
        self.draws += 1;
    }
}
