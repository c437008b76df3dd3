//! Batch-oriented JSON-RPC 2.0 client for coin daemon RPC interfaces.
//!
//! Bitcoin Core and its derivatives expose a JSON-RPC endpoint guarded by
//! HTTP Basic authentication. [`RpcClient`] groups one or more method
//! invocations into a single HTTP POST, decodes the batch response, and
//! hands results back in call order. Any failure aborts the whole batch:
//! callers either get a complete result sequence or a single [`RpcError`]
//! describing the first thing that went wrong.
//!
//! ```no_run
//! use coinrpc::{Call, RpcClient};
//!
//! # async fn run() -> Result<(), coinrpc::RpcError> {
//! let rpc = RpcClient::new("user", "pass", "127.0.0.1", 8332, 8);
//!
//! let count = rpc.call("getblockcount", Vec::new()).await?;
//!
//! let hashes = rpc
//!     .batch(vec![
//!         Call::new("getblockhash").param(1),
//!         Call::new("getblockhash").param(2),
//!     ])
//!     .await?;
//! # let _ = (count, hashes);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod params;
mod protocol;

pub use client::{Call, RpcClient, USER_AGENT};
pub use error::RpcError;
pub use params::Param;

pub use rust_decimal::Decimal;
