//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event
//! handling).  The mapper itself only runs from `pump`, once per frame,
//! after input handlers have finished mutating the scroll offset.

use crate::core::curve::{Curve, PolylineCurve};
use crate::core::mapper::{ScrollToPathMapper, ViewportSize};
use crate::core::tracer::RecordingSink;

/// Curve-space units represented by one terminal cell.  Terminal cells are
/// roughly twice as tall as they are wide; the canvas uses the same ratios
/// when projecting, so circles stay circles.
pub const PX_PER_COL: f64 = 4.0;
pub const PX_PER_ROW: f64 = 8.0;

/// Top-level application state.
pub struct AppState {
    /// The scroll-to-path control session.
    pub mapper: ScrollToPathMapper<PolylineCurve>,
    /// Last polyline the mapper emitted; the canvas draws from this.
    pub sink: RecordingSink,
    /// Cumulative scroll offset in curve-space pixels.
    pub scroll_offset: f64,
    /// Curve-space pixels per wheel notch.
    pub wheel_step: f64,
    /// Viewport size in curve-space pixels, derived from the canvas area.
    pub viewport: ViewportSize,
    /// Vertical extent of the scrollable content (curve end y).
    pub content_height: f64,
    /// Set whenever the offset or viewport changed; cleared by `pump`.
    pub dirty: bool,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(mapper: ScrollToPathMapper<PolylineCurve>, wheel_step: f64) -> Self {
        let total = mapper.curve().total_length();
        let content_height = mapper.curve().point_at(total).y;
        Self {
            mapper,
            sink: RecordingSink::default(),
            scroll_offset: 0.0,
            wheel_step,
            viewport: ViewportSize {
                width: 320.0,
                height: 192.0,
            },
            content_height,
            dirty: true,
            should_quit: false,
            status_message: None,
        }
    }

    /// Update the viewport from a canvas area in terminal cells.
    pub fn set_viewport_from_cells(&mut self, cols: u16, rows: u16) {
        let viewport = ViewportSize {
            width: f64::from(cols) * PX_PER_COL,
            height: f64::from(rows) * PX_PER_ROW,
        };
        if viewport != self.viewport {
            self.viewport = viewport;
            self.clamp_offset();
            self.dirty = true;
        }
    }

    /// Apply a scroll movement in curve-space pixels.
    pub fn scroll_by(&mut self, delta: f64) {
        if delta == 0.0 {
            return;
        }
        self.scroll_offset += delta;
        self.clamp_offset();
        self.status_message = None;
        self.dirty = true;
    }

    /// Jump to an absolute offset (Home / End keys).
    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_offset = offset;
        self.clamp_offset();
        self.dirty = true;
    }

    /// Run one pipeline pass if any input arrived since the last frame.
    /// Input handlers only mutate the offset; this is the single place the
    /// mapper is invoked, so bursts coalesce into one pass per frame.
    pub fn pump(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;
        self.mapper
            .on_scroll(self.scroll_offset, self.viewport, &mut self.sink);
    }

    /// Restart the tracer session from the top of the curve.  `start`
    /// renders the anchored initial segment itself, so no pump is pending.
    pub fn reset_session(&mut self) {
        self.mapper.reset();
        self.scroll_offset = 0.0;
        self.mapper.start(self.viewport, &mut self.sink);
        self.dirty = false;
    }

    /// Largest useful scroll offset: the curve bottom just stays on screen.
    pub fn max_offset(&self) -> f64 {
        (self.content_height - self.viewport.height).max(0.0)
    }

    fn clamp_offset(&mut self) {
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_offset());
    }
}
