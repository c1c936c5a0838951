//! Engine error taxonomy

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Search depth must be at least one ply
    #[error("search depth must be positive, got {plies}")]
    InvalidDepth { plies: u32 },

    /// Utility is undefined without at least one archer to measure against
    #[error("cannot evaluate a state with no archers")]
    NoOpponents,

    /// Nothing to plan for without at least one footman
    #[error("cannot plan for a state with no footmen")]
    NoUnits,

    /// Every joint candidate was rejected by the bounds check
    #[error("no legal joint action from the current state")]
    NoLegalActions,

    /// Snapshot failed structural validation
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot JSON invalid: {0}")]
    Json(#[from] serde_json::Error),
}
