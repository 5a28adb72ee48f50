//! JSON-RPC transport layer.
//!
//! Defines the [`RawRpc`] seam every facade method goes through and
//! provides the HTTP implementation ([`HttpTransport`]) plus a canned
//! test double (`mock::MockTransport`).

mod connection;
mod http;
#[cfg(test)]
pub(crate) mod mock;
mod protocol;

pub use http::HttpTransport;

use async_trait::async_trait;

use crate::error::Error;

/// One JSON-RPC round trip: serialize `{method, params}`, dispatch,
/// return the decoded `result` or a distinguishable [`Error`].
///
/// Implementations hold no per-call state; callers may issue any number
/// of calls concurrently.
#[async_trait]
pub trait RawRpc: Send + Sync {
    async fn raw_call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, Error>;
}
