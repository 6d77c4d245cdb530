#![forbid(unsafe_code)]

//! Core: input events, viewport geometry, swipe recognition, deferred timers,
//! and the rotation lock.

pub mod event;
pub mod geometry;
pub mod gesture;
pub mod lock;
pub mod logging;
pub mod timer;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, trace_span, warn};
