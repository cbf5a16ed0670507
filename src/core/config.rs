//! Tracer configuration — tuning knobs with validated defaults.
//!
//! One immutable struct passed to the mapper at session start.  Validation
//! happens once, up front: a bad value is a setup failure, never something
//! the per-frame pipeline has to defend against.

use thiserror::Error;

/// A configuration field failed validation at session start.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tracer_length must be > 0, got {0}")]
    TracerLength(f64),
    #[error("guard_band must be >= 0, got {0}")]
    GuardBand(f64),
    #[error("sampling must be >= 2, got {0}")]
    Sampling(usize),
    #[error("max_head_step_px must be > 0, got {0}")]
    MaxHeadStep(f64),
    #[error("scroll_to_path_scale must be > 0, got {0}")]
    ScrollToPathScale(f64),
    #[error("lookahead_viewport_factor must be > 0, got {0}")]
    LookaheadViewportFactor(f64),
    #[error("step_px must be > 0, got {0}")]
    StepPx(f64),
    #[error("vertical_threshold must be > 0, got {0}")]
    VerticalThreshold(f64),
    #[error("min_scale ({min}) must be positive and below max_scale ({max})")]
    ScaleRange { min: f64, max: f64 },
    #[error("fit_samples must be >= 8, got {0}")]
    FitSamples(usize),
    #[error("visibility_samples must be >= 2, got {0}")]
    VisibilitySamples(usize),
}

/// All tuning knobs of the scroll-to-path control algorithm.
///
/// Distances are in the curve's coordinate units (pixels for the demo).
#[derive(Debug, Clone)]
pub struct TracerConfig {
    /// Nominal arc length of the rendered segment.
    pub tracer_length: f64,
    /// Margin added above and below the viewport when building the band.
    pub guard_band: f64,
    /// Number of polyline points sampled per rendered segment.
    pub sampling: usize,
    /// Maximum per-event movement of the smoothed head position.
    pub max_head_step_px: f64,
    /// Base scroll-delta → arc-length multiplier, before lookahead scaling.
    pub scroll_to_path_scale: f64,
    /// Lookahead horizon as a multiple of the viewport width.
    pub lookahead_viewport_factor: f64,
    /// Arc-length increment of the lookahead march.
    pub step_px: f64,
    /// Vertical change at which the lookahead march stops early.
    pub vertical_threshold: f64,
    /// Lower bound of the lookahead scale.
    pub min_scale: f64,
    /// Upper bound of the lookahead scale.
    pub max_scale: f64,
    /// Total candidate budget of the viewport-fit search.
    pub fit_samples: usize,
    /// Samples taken across the full curve by the visibility check.
    pub visibility_samples: usize,
    /// Emit `tracing::debug!` events with intermediate pipeline values.
    /// Purely observational — never changes a computed result.
    pub diagnostics: bool,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            tracer_length: 150.0,
            guard_band: 40.0,
            sampling: 40,
            max_head_step_px: 48.0,
            scroll_to_path_scale: 1.0,
            lookahead_viewport_factor: 1.5,
            step_px: 8.0,
            vertical_threshold: 120.0,
            min_scale: 0.6,
            max_scale: 3.0,
            fit_samples: 200,
            visibility_samples: 40,
            diagnostics: false,
        }
    }
}

impl TracerConfig {
    /// Check every field, reporting the first offender.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tracer_length > 0.0) {
            return Err(ConfigError::TracerLength(self.tracer_length));
        }
        if !(self.guard_band >= 0.0) {
            return Err(ConfigError::GuardBand(self.guard_band));
        }
        if self.sampling < 2 {
            return Err(ConfigError::Sampling(self.sampling));
        }
        if !(self.max_head_step_px > 0.0) {
            return Err(ConfigError::MaxHeadStep(self.max_head_step_px));
        }
        if !(self.scroll_to_path_scale > 0.0) {
            return Err(ConfigError::ScrollToPathScale(self.scroll_to_path_scale));
        }
        if !(self.lookahead_viewport_factor > 0.0) {
            return Err(ConfigError::LookaheadViewportFactor(
                self.lookahead_viewport_factor,
            ));
        }
        if !(self.step_px > 0.0) {
            return Err(ConfigError::StepPx(self.step_px));
        }
        if !(self.vertical_threshold > 0.0) {
            return Err(ConfigError::VerticalThreshold(self.vertical_threshold));
        }
        if !(self.min_scale > 0.0 && self.min_scale < self.max_scale) {
            return Err(ConfigError::ScaleRange {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if self.fit_samples < 8 {
            return Err(ConfigError::FitSamples(self.fit_samples));
        }
        if self.visibility_samples < 2 {
            return Err(ConfigError::VisibilitySamples(self.visibility_samples));
        }
        Ok(())
    }
}
