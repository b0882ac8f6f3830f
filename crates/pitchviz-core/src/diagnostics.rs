//! Warn-once recorder for non-fatal configuration problems.
//!
//! Hosts own one [`WarnOnce`] per rendering context. Each warning category is
//! reported through `tracing` the first time it is raised and suppressed
//! afterwards, so a radar with a dozen mis-styled labels logs a single line.

use ahash::AHashSet;

/// Records which warning categories have already been emitted.
#[derive(Debug, Default, Clone)]
pub struct WarnOnce {
    seen: AHashSet<&'static str>,
}

impl WarnOnce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `message` under `category` unless that category was already
    /// reported. Returns `true` when the warning was actually emitted.
    pub fn warn(&mut self, category: &'static str, message: impl std::fmt::Display) -> bool {
        if !self.seen.insert(category) {
            return false;
        }
        tracing::warn!(category, "{}", message);
        true
    }

    /// Whether `category` has been reported.
    pub fn has_warned(&self, category: &str) -> bool {
        self.seen.contains(category)
    }

    /// Number of distinct categories reported so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Forget everything, so each category fires again.
    pub fn reset(&mut self) {
        self.seen.clear();
    }
}
