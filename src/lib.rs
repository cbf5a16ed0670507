//! Scroll-to-path tracer.
//!
//! Maps a cumulative scroll offset onto a smoothed position along a fixed
//! parametric curve and renders a fixed-length segment ("tracer") anchored
//! there, constrained to the scrolling viewport.  The control algorithm
//! lives in [`core`]; [`app`] and [`ui`] are the terminal front end.

pub mod app;
pub mod core;
pub mod ui;

pub use crate::core::config::TracerConfig;
pub use crate::core::curve::{Curve, Point, PolylineCurve};
pub use crate::core::mapper::{ScrollToPathMapper, TracerState, ViewportBand, ViewportSize};
pub use crate::core::tracer::{RecordingSink, RenderSink};
