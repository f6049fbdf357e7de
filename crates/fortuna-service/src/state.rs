//! The view state machine exposed to the presentation layer.

/// Presentation-facing state: `Idle -> Loading -> (Result | Error) -> Idle`.
///
/// Published over a `tokio::sync::watch` channel; the presentation layer
/// subscribes and renders whatever state it observes. There is no
/// concurrent-transition protection beyond "one submit in flight at a
/// time", which callers are expected to uphold by disabling re-submission
/// while `Loading`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Nothing in flight, nothing to show.
    #[default]
    Idle,
    /// A submit is in flight.
    Loading,
    /// The latest submit succeeded with this interpretation text.
    Result(String),
    /// The latest submit failed; carries the user-facing message only.
    Error(String),
}

impl ViewState {
    /// Whether a submit is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}
