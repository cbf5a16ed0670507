//! Curve canvas — projects the curve and tracer into the scrolled viewport.

use ratatui::layout::Rect;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::state::{AppState, PX_PER_COL, PX_PER_ROW};
use crate::ui::theme::Theme;

/// Render the curve (dim) and the current tracer polyline (highlighted)
/// into `area`.  Curve space has y growing downward; canvas space has y
/// growing upward, so the projection flips around the scrolled window.
pub fn draw_curve_canvas(frame: &mut Frame, area: Rect, state: &AppState) {
    // Canvas interior, in curve-space pixels.
    let inner_w = (f64::from(area.width.saturating_sub(2)) * PX_PER_COL).max(1.0);
    let inner_h = (f64::from(area.height.saturating_sub(2)) * PX_PER_ROW).max(1.0);
    let offset = state.scroll_offset;
    let project = move |x: f64, y: f64| (x, inner_h - (y - offset));

    let block = Block::default()
        .title(" scroll-tracer ")
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style());

    let canvas = Canvas::default()
        .block(block)
        .x_bounds([0.0, inner_w])
        .y_bounds([0.0, inner_h])
        .paint(|ctx| {
            // Full curve as context, clipped by the canvas itself.
            for w in state.mapper.curve().vertices().windows(2) {
                let (x1, y1) = project(w[0].x, w[0].y);
                let (x2, y2) = project(w[1].x, w[1].y);
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: Theme::curve_color(),
                });
            }

            // Tracer segment on top.
            ctx.layer();
            for w in state.sink.points.windows(2) {
                let (x1, y1) = project(w[0].x, w[0].y);
                let (x2, y2) = project(w[1].x, w[1].y);
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: Theme::tracer_color(),
                });
            }

            // Head marker.
            if let Some(head) = state.sink.points.last() {
                let coords = [project(head.x, head.y)];
                ctx.draw(&Points {
                    coords: &coords,
                    color: Theme::head_color(),
                });
            }
        });

    frame.render_widget(canvas, area);
}
