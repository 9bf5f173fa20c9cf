use thiserror::Error;

/// Failure to load a [`ProblemSetRequest`](super::models::ProblemSetRequest).
///
/// Generation and answer checking never fail; this is the only error the
/// crate returns.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid problem set request: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
