//! Error type shared by the paginator sessions.

/// Failures surfaced by cursor operations and interactive sessions.
///
/// Cleanup failures on the live message never show up here; they are logged
/// and dropped by [`best_effort`](crate::host::best_effort).
#[derive(Debug, thiserror::Error)]
pub enum PaginatorError {
    /// A page index fell outside `0..len`.
    #[error("page index {index} is out of range for {len} page(s)")]
    OutOfRange { index: usize, len: usize },
    /// A session was built without any pages.
    #[error("a paginator needs at least one page")]
    EmptyPages,
    /// Two controls were bound to the same emoji.
    #[error("emoji `{0}` is bound to more than one control")]
    DuplicateControl(String),
    /// No matching reaction arrived before the session timeout.
    #[error("timed out waiting for a reaction")]
    Timeout,
    /// The host platform rejected a call the session cannot continue without.
    #[error(transparent)]
    Host(#[from] anyhow::Error),
}
