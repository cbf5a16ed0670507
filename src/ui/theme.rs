//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── canvas ─────────────────────────────────────────────────
    /// The full curve, drawn dim behind the tracer.
    pub fn curve_color() -> Color {
        Color::DarkGray
    }

    /// The tracer segment itself.
    pub fn tracer_color() -> Color {
        Color::Cyan
    }

    /// Marker at the tracer head.
    pub fn head_color() -> Color {
        Color::White
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
