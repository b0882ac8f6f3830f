//! Text measurement backends.

mod heuristic;
pub use heuristic::HeuristicMetrics;

#[cfg(feature = "cosmic-text")]
mod cosmic;
#[cfg(feature = "cosmic-text")]
pub use cosmic::CosmicMeasure;
