//! Loading-phase bookkeeping.
//!
//! Tracks the system manifest load alongside the minimum display time of the
//! loading screen, and ticks the overlay timers that drive state transitions.

pub mod manifest_loader;
pub mod progress;
