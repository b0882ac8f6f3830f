/// Runtime configuration for pitchviz tooling (demos, benches, embedding apps).
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing-subscriber` env-filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: "info,pitchviz_text=debug,cosmic_text=warn".to_string(),
            profiling: ProfilingMode::Off,
        }
    }
}

impl Config {
    /// Override the log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Override the profiling mode.
    pub fn with_profiling(mut self, mode: ProfilingMode) -> Self {
        self.profiling = mode;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingMode {
    /// Profiling scopes are compiled in but disabled
    #[default]
    Off,
    /// Scopes are recorded in-process
    On,
    /// Scopes are recorded and served to `puffin_viewer`
    /// (requires the `profiling-server` feature)
    WithServer,
}
