use thiserror::Error;

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by graph construction, limit calculation and enumeration.
///
/// Finding no feasible partition is not an error: the enumerator returns an
/// empty list in that case.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Bad `num_parts`, `max_ratio`, limits or an empty graph.
    #[error("InvalidParameter: {0}")]
    InvalidParameter(String),

    /// Graph input that breaks the weighted undirected graph invariants.
    #[error("InvalidGraph: {0}")]
    InvalidGraph(String),

    /// A partition failed re-validation against its graph and limits.
    #[error("InvalidPartition: {0}")]
    InvalidPartition(String),

    /// The search was interrupted by its cancellation flag or deadline.
    #[error("Cancelled: enumeration interrupted before completion")]
    Cancelled,

    /// IO error.
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("SerdeJsonError: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_parameter(msg: impl Into<String>) -> Self { Self::InvalidParameter(msg.into()) }

    pub(crate) fn invalid_graph(msg: impl Into<String>) -> Self { Self::InvalidGraph(msg.into()) }

    pub(crate) fn invalid_partition(msg: impl Into<String>) -> Self { Self::InvalidPartition(msg.into()) }

    /// True if this error is the cancellation outcome rather than a failure.
    #[inline] pub fn is_cancelled(&self) -> bool { matches!(self, Self::Cancelled) }
}
