//! Finder context configuration

/// Per-call options for the pair scan.
///
/// Passed explicitly to [`find_pair_with`](crate::find_pair_with); nothing
/// is read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinderContext {
    /// Emit a `trace!` event for every visited element
    pub trace: bool,
}

impl FinderContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with per-step trace logging enabled.
    pub fn with_trace() -> Self {
        Self { trace: true }
    }
}
