//! Profiling utilities based on the `puffin` crate.

pub use puffin::{profile_function, profile_scope};

use crate::config::ProfilingMode;

#[cfg(feature = "profiling-server")]
static PROFILING_SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Enable profiling scopes according to `mode`.
///
/// # Example
/// ```no_run
/// use pitchviz_core::{ProfilingMode, profiling::init_profiling};
///
/// init_profiling(ProfilingMode::On);
/// ```
pub fn init_profiling(mode: ProfilingMode) {
    match mode {
        ProfilingMode::Off => puffin::set_scopes_on(false),
        ProfilingMode::On => puffin::set_scopes_on(true),
        ProfilingMode::WithServer => {
            puffin::set_scopes_on(true);
            start_server();
        }
    }
}

#[cfg(feature = "profiling-server")]
fn start_server() {
    match puffin_http::Server::new("0.0.0.0:8585") {
        Ok(server) => {
            tracing::info!("Puffin profiler server started on http://0.0.0.0:8585");
            let _ = PROFILING_SERVER.set(server);
        }
        Err(e) => {
            tracing::error!("Failed to start puffin server: {}", e);
        }
    }
}

#[cfg(not(feature = "profiling-server"))]
fn start_server() {
    tracing::warn!("profiling server requested but the `profiling-server` feature is disabled");
}

/// Mark the start of a new frame (one full render pass over all labels).
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
