//! Input handling — maps key and wheel events to state mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::AppState;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => state.scroll_by(-state.wheel_step),
        KeyCode::Down | KeyCode::Char('j') => state.scroll_by(state.wheel_step),
        KeyCode::PageUp => state.scroll_by(-state.viewport.height),
        KeyCode::PageDown => state.scroll_by(state.viewport.height),
        KeyCode::Home | KeyCode::Char('g') => state.scroll_to(0.0),
        KeyCode::End | KeyCode::Char('G') => state.scroll_to(state.max_offset()),
        KeyCode::Char('r') => {
            state.reset_session();
            state.status_message = Some("session reset".into());
        }
        KeyCode::Char('d') => {
            let on = !state.mapper.config().diagnostics;
            state.mapper.set_diagnostics(on);
            state.status_message = Some(if on {
                "diagnostics on (RUST_LOG=debug)".into()
            } else {
                "diagnostics off".into()
            });
        }
        _ => {}
    }
}

/// Process mouse wheel movement, already reduced to signed notch counts.
pub fn handle_wheel(state: &mut AppState, notches: f64) {
    state.scroll_by(notches * state.wheel_step);
}
