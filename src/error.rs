use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    /// Rejected before any centroid work begins; no partial state mutation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Step was invoked before centroids were fully established, including
    /// manual mode with fewer than k points collected.
    #[error("clustering step invoked before centroids are fully initialized")]
    PrematureStep,
}
