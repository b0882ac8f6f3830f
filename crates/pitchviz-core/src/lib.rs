//! pitchviz Core
//!
//! Shared plumbing for the pitchviz crates: logging bootstrap, runtime
//! configuration, profiling hooks, math re-exports and the warn-once
//! diagnostics recorder used by the text engine.

pub mod config;
pub mod diagnostics;
pub mod logging;
pub mod math;
pub mod profiling;

pub use config::{Config, ProfilingMode};
pub use diagnostics::WarnOnce;
