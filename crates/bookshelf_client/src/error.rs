use thiserror::Error;

/// Failure of a single catalog request. Nothing here is retried or recovered
/// locally; every variant propagates to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never produced a response: DNS, connection refused,
    /// or a timeout at either the connect or request level.
    #[error("could not reach the catalog service: {0}")]
    Transport(String),

    /// A response arrived but carried a non-success status.
    #[error("catalog service responded with status {status}")]
    Status { status: u16 },

    /// A success response whose body did not match the expected schema.
    #[error("catalog response did not match the expected schema: {0}")]
    Decode(String),
}

impl ClientError {
    /// True for connectivity failures where no response was obtained.
    /// `Status` and `Decode` both count as server-side failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_decode() {
        return ClientError::Decode(err.to_string());
    }
    ClientError::Transport(err.to_string())
}
