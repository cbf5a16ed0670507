//! Scroll-to-path orchestration — session state and the per-event pipeline.
//!
//! One mapper owns one curve, one validated config, and one small mutable
//! state record.  Every input event runs a single synchronous pass:
//! desired delta → preferred head → visibility gate → viewport-fit
//! correction → step-limited smoothing → segment derivation → render.
//! Everything below the orchestrator is a pure function over its inputs.

use thiserror::Error;

use super::config::{ConfigError, TracerConfig};
use super::curve::Curve;
use super::fit::fit_head_to_band;
use super::lookahead::lookahead_scale;
use super::smoothing::step_toward;
use super::tracer::{render_segment, RenderSink};
use super::visibility::curve_intersects_band;

/// Viewport dimensions reported by the input source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

/// Vertical range currently visible, inset by the guard margin.  Transient:
/// rebuilt from the scroll offset on every input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBand {
    pub top: f64,
    pub bottom: f64,
}

/// Mutable per-session state, threaded through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TracerState {
    /// Smoothed arc-length head position.  Always in `[0, total_length]`.
    pub ghost_head_len: f64,
    /// Arc-length head position actually rendered last event.
    pub visible_head_len: f64,
    /// True only before the first processed input event; forces a zero
    /// desired delta so the tracer never jumps on the opening frame.
    pub first_update: bool,
    /// Offset of the previous event, for delta computation.
    pub previous_scroll_offset: f64,
}

impl TracerState {
    fn new() -> Self {
        Self {
            ghost_head_len: 0.0,
            visible_head_len: 0.0,
            first_update: true,
            previous_scroll_offset: 0.0,
        }
    }
}

/// Session could not be initialised — missing or malformed collaborators
/// are fatal, never papered over with partial wiring.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid tracer configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("curve must have positive total length, got {0}")]
    DegenerateCurve(f64),
}

/// Orchestrator: converts cumulative scroll offsets into tracer segments.
pub struct ScrollToPathMapper<C: Curve> {
    curve: C,
    cfg: TracerConfig,
    state: TracerState,
}

impl<C: Curve> ScrollToPathMapper<C> {
    /// Validate the config and curve and create a fresh session.
    pub fn new(curve: C, cfg: TracerConfig) -> Result<Self, SetupError> {
        cfg.validate()?;
        let total = curve.total_length();
        if !(total > 0.0) {
            return Err(SetupError::DegenerateCurve(total));
        }
        Ok(Self {
            curve,
            cfg,
            state: TracerState::new(),
        })
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }

    pub fn config(&self) -> &TracerConfig {
        &self.cfg
    }

    pub fn state(&self) -> &TracerState {
        &self.state
    }

    pub fn set_diagnostics(&mut self, on: bool) {
        self.cfg.diagnostics = on;
    }

    /// Throw away session state; the next event behaves like session start.
    pub fn reset(&mut self) {
        self.state = TracerState::new();
    }

    /// Session start: one synthetic update with a zero scroll delta to
    /// establish the initial rendered segment.  `first_update` stays set
    /// until the first real event has been processed.
    pub fn start(&mut self, viewport: ViewportSize, sink: &mut dyn RenderSink) {
        let offset = self.state.previous_scroll_offset;
        let band = self.band_for(offset, viewport);
        self.run_pipeline(0.0, band, viewport, sink);
    }

    /// Process one input event carrying the new cumulative scroll offset.
    ///
    /// Non-finite offsets are coerced to "no movement" at this boundary so
    /// a malformed upstream value never reaches geometry sampling.
    pub fn on_scroll(&mut self, offset: f64, viewport: ViewportSize, sink: &mut dyn RenderSink) {
        let offset = if offset.is_finite() {
            offset
        } else {
            self.state.previous_scroll_offset
        };
        let scroll_delta = offset - self.state.previous_scroll_offset;
        self.state.previous_scroll_offset = offset;

        let band = self.band_for(offset, viewport);
        self.run_pipeline(scroll_delta, band, viewport, sink);
        self.state.first_update = false;
    }

    fn band_for(&self, offset: f64, viewport: ViewportSize) -> ViewportBand {
        ViewportBand {
            top: offset - self.cfg.guard_band,
            bottom: offset + viewport.height + self.cfg.guard_band,
        }
    }

    fn run_pipeline(
        &mut self,
        scroll_delta: f64,
        band: ViewportBand,
        viewport: ViewportSize,
        sink: &mut dyn RenderSink,
    ) {
        let total = self.curve.total_length();
        let ghost = self.state.ghost_head_len;

        // 1–2: desired delta and preferred head.
        let (scale, desired) = if self.state.first_update || scroll_delta == 0.0 {
            (1.0, 0.0)
        } else {
            let scale =
                lookahead_scale(&self.curve, ghost, scroll_delta, viewport.width, &self.cfg);
            (scale, scroll_delta * self.cfg.scroll_to_path_scale * scale)
        };
        let preferred = (ghost + desired).clamp(0.0, total);

        // 3: visibility gate.  While the curve is fully offscreen the state
        // must not advance, or the tracer would drift invisibly and jump
        // when it reappears.
        if !curve_intersects_band(&self.curve, band, self.cfg.visibility_samples) {
            if self.cfg.diagnostics {
                tracing::debug!(
                    "tracer: offscreen band=[{:.1},{:.1}] ghost={:.1}",
                    band.top,
                    band.bottom,
                    ghost
                );
            }
            sink.draw_polyline(&[]);
            return;
        }

        // 4–5: viewport-fit correction, then step-limited smoothing.
        let corrected = fit_head_to_band(&self.curve, preferred, band, &self.cfg);
        let ghost = step_toward(ghost, corrected, self.cfg.max_head_step_px, total);

        // 6: segment derivation.  Near the curve start the segment is
        // anchored at the nominal length instead of shrinking to nothing.
        let (tail_len, head_len) = if ghost < self.cfg.tracer_length {
            (0.0, self.cfg.tracer_length.min(total))
        } else {
            (ghost - self.cfg.tracer_length, ghost)
        };

        self.state.ghost_head_len = ghost;
        self.state.visible_head_len = head_len;

        if self.cfg.diagnostics {
            tracing::debug!(
                "tracer: delta={:.1} scale={:.2} preferred={:.1} corrected={:.1} ghost={:.1} seg=[{:.1},{:.1}]",
                scroll_delta,
                scale,
                preferred,
                corrected,
                ghost,
                tail_len,
                head_len
            );
        }

        // 7: render.
        if head_len <= tail_len {
            sink.draw_polyline(&[]);
        } else {
            render_segment(&self.curve, tail_len, head_len, self.cfg.sampling, sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::curve::{Point, PolylineCurve};
    use crate::core::tracer::RecordingSink;

    fn vertical(len: f64) -> PolylineCurve {
        PolylineCurve::new(vec![Point::new(0.0, 0.0), Point::new(0.0, len)]).unwrap()
    }

    fn viewport() -> ViewportSize {
        ViewportSize {
            width: 800.0,
            height: 400.0,
        }
    }

    #[test]
    fn setup_rejects_invalid_config() {
        let mut cfg = TracerConfig::default();
        cfg.tracer_length = -1.0;
        assert!(matches!(
            ScrollToPathMapper::new(vertical(1000.0), cfg),
            Err(SetupError::Config(_))
        ));
    }

    #[test]
    fn first_event_anchors_segment_at_curve_start() {
        // Curve of length 1000, tracer 150: the synthetic start event must
        // leave the ghost at 0 and render the anchored [0, 150] segment.
        let mut mapper =
            ScrollToPathMapper::new(vertical(1000.0), TracerConfig::default()).unwrap();
        let mut sink = RecordingSink::default();
        mapper.start(viewport(), &mut sink);

        assert_eq!(mapper.state().ghost_head_len, 0.0);
        assert_eq!(mapper.state().visible_head_len, 150.0);
        assert_eq!(sink.points.first().map(|p| p.y), Some(0.0));
        let last_y = sink.points.last().map(|p| p.y).unwrap();
        assert!((last_y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn first_real_event_forces_zero_delta() {
        // Wide guard band keeps the initial segment fitting even at the
        // jumped offset, so any ghost movement could only come from the
        // scroll delta itself — which first_update must suppress.
        let mut cfg = TracerConfig::default();
        cfg.guard_band = 200.0;
        let mut mapper = ScrollToPathMapper::new(vertical(1000.0), cfg).unwrap();
        let mut sink = RecordingSink::default();
        mapper.start(viewport(), &mut sink);
        assert!(mapper.state().first_update);

        // A large first offset establishes the baseline without motion.
        mapper.on_scroll(80.0, viewport(), &mut sink);
        assert!(!mapper.state().first_update);
        assert_eq!(mapper.state().previous_scroll_offset, 80.0);
        assert_eq!(mapper.state().ghost_head_len, 0.0);
    }

    #[test]
    fn flat_curve_doubles_scroll_into_arc_length() {
        // Flat curve: near-zero vertical opportunity → lookahead scale 2.0,
        // so a 100 px scroll asks for ~200 px of arc.  A generous head step
        // lets the ghost reach the corrected position in one event.
        let flat =
            PolylineCurve::new(vec![Point::new(0.0, 0.0), Point::new(4000.0, 0.0)]).unwrap();
        let mut cfg = TracerConfig::default();
        cfg.guard_band = 200.0; // keep the y=0 line inside the band while scrolled
        cfg.max_head_step_px = 500.0;
        let mut mapper = ScrollToPathMapper::new(flat, cfg).unwrap();
        let mut sink = RecordingSink::default();

        mapper.start(viewport(), &mut sink);
        mapper.on_scroll(0.0, viewport(), &mut sink); // clears first_update
        mapper.on_scroll(100.0, viewport(), &mut sink);

        assert!((mapper.state().ghost_head_len - 200.0).abs() < 1e-6);
    }

    #[test]
    fn offscreen_curve_freezes_state_and_clears_render() {
        let mut mapper =
            ScrollToPathMapper::new(vertical(1000.0), TracerConfig::default()).unwrap();
        let mut sink = RecordingSink::default();
        mapper.start(viewport(), &mut sink);
        mapper.on_scroll(0.0, viewport(), &mut sink);
        let before = mapper.state().clone();

        // Scroll far past the end of the curve: the band misses it.
        mapper.on_scroll(5000.0, viewport(), &mut sink);
        assert!(sink.points.is_empty());
        assert_eq!(mapper.state().ghost_head_len, before.ghost_head_len);
        assert_eq!(mapper.state().visible_head_len, before.visible_head_len);
    }

    #[test]
    fn zero_delta_is_idempotent_once_settled() {
        let mut mapper =
            ScrollToPathMapper::new(vertical(1000.0), TracerConfig::default()).unwrap();
        let mut sink = RecordingSink::default();
        mapper.start(viewport(), &mut sink);
        mapper.on_scroll(0.0, viewport(), &mut sink);

        let a = mapper.state().clone();
        mapper.on_scroll(0.0, viewport(), &mut sink);
        let b = mapper.state().clone();
        mapper.on_scroll(0.0, viewport(), &mut sink);
        let c = mapper.state().clone();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn ghost_step_is_bounded_and_in_range() {
        let mut mapper =
            ScrollToPathMapper::new(vertical(1000.0), TracerConfig::default()).unwrap();
        let max_step = mapper.config().max_head_step_px;
        let mut sink = RecordingSink::default();
        mapper.start(viewport(), &mut sink);

        let offsets = [0.0, 120.0, 480.0, 90.0, -300.0, 700.0, 700.0, 50.0];
        for &offset in &offsets {
            let before = mapper.state().ghost_head_len;
            mapper.on_scroll(offset, viewport(), &mut sink);
            let after = mapper.state().ghost_head_len;
            assert!((after - before).abs() <= max_step + 1e-9);
            assert!((0.0..=1000.0).contains(&after));
            assert!((0.0..=1000.0).contains(&mapper.state().visible_head_len));
        }
    }

    #[test]
    fn non_finite_offset_is_coerced_to_no_movement() {
        let mut mapper =
            ScrollToPathMapper::new(vertical(1000.0), TracerConfig::default()).unwrap();
        let mut sink = RecordingSink::default();
        mapper.start(viewport(), &mut sink);
        // Repeat the same offset until the fit correction has settled.
        for _ in 0..10 {
            mapper.on_scroll(100.0, viewport(), &mut sink);
        }
        let before = mapper.state().clone();

        mapper.on_scroll(f64::NAN, viewport(), &mut sink);
        assert_eq!(*mapper.state(), before);
        assert!(mapper.state().ghost_head_len.is_finite());

        mapper.on_scroll(f64::INFINITY, viewport(), &mut sink);
        assert_eq!(*mapper.state(), before);
    }

    #[test]
    fn reset_restores_session_start_behavior() {
        let mut mapper =
            ScrollToPathMapper::new(vertical(1000.0), TracerConfig::default()).unwrap();
        let mut sink = RecordingSink::default();
        mapper.start(viewport(), &mut sink);
        mapper.on_scroll(250.0, viewport(), &mut sink);
        mapper.on_scroll(400.0, viewport(), &mut sink);

        mapper.reset();
        assert!(mapper.state().first_update);
        assert_eq!(mapper.state().ghost_head_len, 0.0);
    }
}
