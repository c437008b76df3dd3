/// Error raised by [`RpcClient`](crate::RpcClient) operations.
///
/// Every failure aborts the entire batch and propagates immediately; there
/// is no partial success and nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The transport produced no usable HTTP response (code -342).
    #[error("missing HTTP response from server")]
    NoResponse(#[source] reqwest::Error),

    /// The server answered with a non-200 HTTP status (code -344).
    #[error("{status} {reason}")]
    HttpStatus { status: u16, reason: String },

    /// The response body was not a well-formed JSON-RPC batch.
    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(String),

    /// A batch element carried neither an `error` nor a `result` member
    /// (code -343).
    #[error("missing JSON-RPC result")]
    MissingResult,

    /// The batch response had no element for an issued request id.
    #[error("no batch response entry for request id {id}")]
    MissingBatchItem { id: u64 },

    /// An error object reported by the server, forwarded verbatim.
    #[error("RPC server error {code}: {message}")]
    Server { code: i64, message: String },

    /// A request parameter outside the JSON-representable value set.
    #[error("{0} is not JSON serializable")]
    NotSerializable(String),
}

impl RpcError {
    /// Numeric error code, for the failures that carry one.
    ///
    /// Locally synthesized codes follow the convention of the classic
    /// Bitcoin RPC bindings: -342 missing response, -343 missing result,
    /// -344 unexpected HTTP status. Server-reported codes pass through
    /// untouched.
    pub fn code(&self) -> Option<i64> {
        match self {
            RpcError::NoResponse(_) => Some(-342),
            RpcError::MissingResult => Some(-343),
            RpcError::HttpStatus { .. } => Some(-344),
            RpcError::Server { code, .. } => Some(*code),
            RpcError::InvalidResponse(_)
            | RpcError::MissingBatchItem { .. }
            | RpcError::NotSerializable(_) => None,
        }
    }
}
