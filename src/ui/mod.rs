//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into pixels on
//! the terminal.  No control-algorithm math happens here.

pub mod canvas;
pub mod layout;
pub mod theme;
