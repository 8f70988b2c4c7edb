use thiserror::Error;

/// Why a service call produced no body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("service answered with http status {0}")]
    Http(u16),
    /// The call could not even be issued (the bridge threw while building it).
    #[error("bridge fault: {0}")]
    Bridge(String),
}

/// Why a generative-service reply could not be turned into a record.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("reply carried no candidate text")]
    EmptyReply,
    #[error("malformed reply: {0}")]
    Json(#[from] serde_json::Error),
    #[error("reply violates schema: {0}")]
    Schema(String),
}
