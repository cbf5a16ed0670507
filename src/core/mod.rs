//! Core control algorithm – scroll delta in, smoothed curve position out.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! Every type is `Send + Sync` so curves can be shared across async tasks.

pub mod config;
pub mod curve;
pub mod fit;
pub mod lookahead;
pub mod mapper;
pub mod smoothing;
pub mod tracer;
pub mod visibility;
