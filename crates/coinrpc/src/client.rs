//! The HTTP JSON-RPC client itself.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::{header, StatusCode};
use tracing::{debug, trace};

use crate::error::RpcError;
use crate::params::Param;
use crate::protocol::{parse_batch_element, parse_batch_id, JsonRpcRequest, JSONRPC_VERSION};

/// `User-Agent` header sent with every request.
pub const USER_AGENT: &str = "CoinRpc";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// One method invocation: a name plus positional parameters.
#[derive(Debug, Clone)]
pub struct Call {
    pub method: String,
    pub params: Vec<Param>,
}

impl Call {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: Vec::new(),
        }
    }

    /// Append one positional parameter.
    pub fn param(mut self, value: impl Into<Param>) -> Self {
        self.params.push(value.into());
        self
    }
}

/// JSON-RPC 2.0 batch client for a coin daemon's HTTP endpoint.
///
/// One instance per target server. The instance owns its request id
/// sequence and its precomputed Basic auth credential; it is safe to share
/// across tasks, and concurrent batches keep their ids disjoint.
pub struct RpcClient {
    http: reqwest::Client,
    url: String,
    auth: String,
    precision: u32,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Create a client for the daemon at `http://{host}:{port}/`.
    ///
    /// The Basic auth header is derived here, once. `precision` is the
    /// number of fractional digits kept when a decimal parameter is
    /// converted for transmission.
    pub fn new(username: &str, password: &str, host: &str, port: u16, precision: u32) -> Self {
        let credentials = BASE64.encode(format!("{username}:{password}"));

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            // One connection per exchange; nothing is kept alive between
            // calls. No overall request timeout: daemon calls such as
            // rescans can legitimately run for a long time.
            .pool_max_idle_per_host(0)
            .build()
            .expect("reqwest client builder uses valid static config");

        Self {
            http,
            url: format!("http://{host}:{port}/"),
            auth: format!("Basic {credentials}"),
            precision,
            next_id: AtomicU64::new(0),
        }
    }

    /// Atomically reserve `count` consecutive request ids.
    fn reserve_request_ids(&self, count: u64) -> u64 {
        self.next_id.fetch_add(count, Ordering::Relaxed)
    }

    /// Invoke a single method.
    ///
    /// Equivalent to a one-entry [`batch`](Self::batch) returning its only
    /// result.
    pub async fn call(
        &self,
        method: &str,
        params: Vec<Param>,
    ) -> Result<serde_json::Value, RpcError> {
        let mut results = self
            .batch(vec![Call {
                method: method.to_owned(),
                params,
            }])
            .await?;
        Ok(results.pop().expect("batch returns one result per call"))
    }

    /// Invoke several methods in one HTTP exchange.
    ///
    /// Results come back in call order, one per entry. The first failed
    /// call aborts the whole batch; no partial results are returned.
    pub async fn batch(&self, calls: Vec<Call>) -> Result<Vec<serde_json::Value>, RpcError> {
        if calls.is_empty() {
            // Answered locally: daemons reject an empty `[]` body.
            return Ok(Vec::new());
        }

        let count = calls.len();
        let start_id = self.reserve_request_ids(count as u64);
        debug!(
            rpc.batch_start_id = start_id,
            rpc.batch_size = count,
            "rpc batch call"
        );

        let mut requests = Vec::with_capacity(count);
        for (offset, call) in calls.into_iter().enumerate() {
            let params = call
                .params
                .iter()
                .map(|param| param.to_json(self.precision))
                .collect::<Result<Vec<_>, _>>()?;
            requests.push(JsonRpcRequest {
                jsonrpc: JSONRPC_VERSION,
                method: call.method,
                params,
                id: start_id + offset as u64,
            });
        }

        let response = self
            .http
            .post(&self.url)
            .header(header::AUTHORIZATION, &self.auth)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&requests)
            .send()
            .await
            .map_err(RpcError::NoResponse)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RpcError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_owned(),
            });
        }

        let body = response.text().await.map_err(RpcError::NoResponse)?;
        debug!(
            rpc.batch_start_id = start_id,
            rpc.batch_size = count,
            body_len = body.len(),
            "rpc batch response"
        );
        trace!(rpc.batch_start_id = start_id, body = %body, "rpc batch response body");

        let decoded: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| RpcError::InvalidResponse(format!("decode JSON-RPC batch: {e}")))?;
        let elements = decoded.as_array().ok_or_else(|| {
            RpcError::InvalidResponse(format!("batch response is not an array: {decoded}"))
        })?;

        // Correlate by id rather than by array position: a compliant server
        // preserves order, but nothing forces it to.
        let mut by_id: HashMap<u64, &serde_json::Value> = HashMap::with_capacity(elements.len());
        for element in elements {
            by_id.insert(parse_batch_id(element.get("id"))?, element);
        }

        let mut results = Vec::with_capacity(count);
        for id in start_id..start_id + count as u64 {
            let element = by_id
                .remove(&id)
                .ok_or(RpcError::MissingBatchItem { id })?;
            results.push(parse_batch_element(element)?);
        }

        Ok(results)
    }
}
