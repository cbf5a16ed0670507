//! Terminal demo for the scroll-to-path tracer.
//!
//! Draws a long sine curve in a scrolling canvas and maps mouse-wheel /
//! arrow-key scrolling onto a smoothed tracer segment moving along it.

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::Paragraph, Terminal};

use scroll_tracer::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use scroll_tracer::core::{config::TracerConfig, curve::sine_curve, mapper::ScrollToPathMapper};
use scroll_tracer::ui::{canvas, layout::AppLayout, theme::Theme};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Scroll-to-path tracer demo")]
struct Cli {
    /// Vertical extent of the demo curve, in curve-space pixels.
    #[arg(long, default_value_t = 4000.0)]
    height: f64,

    /// Horizontal swing of the sine curve.
    #[arg(long, default_value_t = 140.0)]
    amplitude: f64,

    /// Number of full oscillations top to bottom.
    #[arg(long, default_value_t = 8.0)]
    periods: f64,

    /// Arc length of the rendered tracer segment.
    #[arg(long, default_value_t = 150.0)]
    tracer_length: f64,

    /// Scroll distance per wheel notch / arrow key, in curve-space pixels.
    #[arg(long, default_value_t = 40.0)]
    wheel_step: f64,

    /// Maximum per-event movement of the smoothed head position.
    #[arg(long, default_value_t = 48.0)]
    max_step: f64,

    /// Emit structured trace events for every pipeline pass
    /// (visible with RUST_LOG=debug).
    #[arg(long)]
    diagnostics: bool,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute the canvas
        .init();

    let cli = Cli::parse();

    // ── build the session ─────────────────────────────────────
    let curve = sine_curve(200.0, cli.height, cli.amplitude, cli.periods)?;
    let mut cfg = TracerConfig::default();
    cfg.tracer_length = cli.tracer_length;
    cfg.max_head_step_px = cli.max_step;
    cfg.diagnostics = cli.diagnostics;
    let mapper = ScrollToPathMapper::new(curve, cfg)?;
    let mut state = AppState::new(mapper, cli.wheel_step);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // Establish the initial rendered segment before the first real event.
    let area = AppLayout::from_area(terminal.get_frame().area()).canvas_area;
    state.set_viewport_from_cells(area.width.saturating_sub(2), area.height.saturating_sub(2));
    state.reset_session();

    let mut events = spawn_event_reader(Duration::from_millis(33));

    // ── event loop ────────────────────────────────────────────
    loop {
        // One pipeline pass per frame, after input has been coalesced.
        state.pump();

        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area());
            canvas::draw_curve_canvas(frame, layout.canvas_area, &state);

            let status = state.status_message.clone().unwrap_or_else(|| {
                format!(
                    " scroll {:>6.0}/{:.0}  head {:>6.1}  wheel/j/k scroll · r reset · d diag · q quit",
                    state.scroll_offset,
                    state.max_offset(),
                    state.mapper.state().visible_head_len,
                )
            });
            frame.render_widget(
                Paragraph::new(status).style(Theme::status_bar_style()),
                layout.status_area,
            );
        })?;

        if let Some(event) = events.recv().await {
            handle_event(&mut state, event);
            // Batch-drain everything queued so a wheel burst becomes one
            // coalesced offset change instead of a pipeline pass per notch.
            while let Ok(ev) = events.try_recv() {
                handle_event(&mut state, ev);
            }
        } else {
            break; // event reader gone
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Key(k) => handler::handle_key(state, k),
        AppEvent::Wheel(notches) => handler::handle_wheel(state, notches),
        AppEvent::Resize(w, h) => {
            // Keep the viewport in sync with the canvas interior.
            let layout = AppLayout::from_area(ratatui::layout::Rect::new(0, 0, w, h));
            state.set_viewport_from_cells(
                layout.canvas_area.width.saturating_sub(2),
                layout.canvas_area.height.saturating_sub(2),
            );
        }
        AppEvent::Tick => {}
    }
}
