use reqwest::StatusCode;

/// Failure modes of a single JSON-RPC call.
///
/// Every call resolves to either a decoded `result` value or exactly one
/// of these variants; nothing is retried or suppressed inside the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection-level failure before an HTTP response was received.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The daemon answered with a non-2xx HTTP status.
    #[error("unexpected HTTP status {status}")]
    HttpStatus { status: StatusCode, body: String },

    /// The response body was not a well-formed JSON-RPC response.
    #[error("invalid JSON-RPC response: {0}")]
    Decode(String),

    /// The daemon reported an application error for this call.
    #[error("daemon error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Invalid endpoint configuration, rejected at construction.
    #[error("invalid endpoint configuration: {0}")]
    Config(String),
}
