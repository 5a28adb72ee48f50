//! Typed JSON-RPC client for the Pirate Chain (ARRR) daemon.
//!
//! A pass-through binding: each [`ArrrClient`] method serializes its
//! arguments into a JSON-RPC request, POSTs it to the configured
//! endpoint, and returns the decoded `result` or one of the four
//! failure kinds in [`Error`]. The daemon owns all wallet and chain
//! state; the client holds nothing but the immutable endpoint
//! configuration, so one instance can serve concurrent calls.
//!
//! ```no_run
//! use arrr_rpc::ArrrClient;
//!
//! # async fn demo() -> Result<(), arrr_rpc::Error> {
//! let client = ArrrClient::connect("http://127.0.0.1:45453")?;
//! let height = client.get_block_count().await?;
//! let hash = client.get_block_hash(height).await?;
//! let block = client.get_block(&hash, None).await?;
//! # let _ = block;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod transport;

pub use client::{ArrrClient, SendOptions};
pub use error::Error;
pub use transport::{HttpTransport, RawRpc};
