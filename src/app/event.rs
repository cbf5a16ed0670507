//! Terminal event abstraction.
//!
//! Wraps crossterm events into the handful of inputs the tracer cares about
//! and runs a background task that forwards them over a channel so the main
//! loop stays non-blocking.  Mouse wheel motion is translated into signed
//! notch counts here; the main loop coalesces bursts into one pipeline pass
//! per frame.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEventKind};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Mouse wheel movement in notches; positive scrolls forward (down).
    Wheel(f64),
    Resize(u16, u16),
    Tick,
}

/// Spawns a background task that polls the terminal for events and sends
/// them through the returned channel.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            // Use crossterm's poll with the tick rate so we can send Tick
            // events even when nothing is happening.
            let has_event = event::poll(tick_rate).unwrap_or(false);
            if has_event {
                if let Ok(ev) = event::read() {
                    let app_event = match ev {
                        CtEvent::Key(k) => AppEvent::Key(k),
                        CtEvent::Mouse(m) => match m.kind {
                            MouseEventKind::ScrollDown => AppEvent::Wheel(1.0),
                            MouseEventKind::ScrollUp => AppEvent::Wheel(-1.0),
                            _ => continue,
                        },
                        CtEvent::Resize(w, h) => AppEvent::Resize(w, h),
                        _ => continue,
                    };
                    if tx.send(app_event).is_err() {
                        break; // receiver dropped
                    }
                }
            } else {
                // No event within tick_rate — send a tick.
                if tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        }
    });

    rx
}
