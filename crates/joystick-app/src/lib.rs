//! Joystick replay tool
//!
//! Plays a recorded touch trace through a joystick and reports the listener
//! callbacks, the way a host application would receive them.

mod replay;

pub use replay::{replay, Callback, ReplayError, Trace, TraceEvent};
