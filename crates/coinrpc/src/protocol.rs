use crate::error::RpcError;

pub(crate) const JSONRPC_VERSION: &str = "2.0";

/// A single request object inside a JSON-RPC 2.0 batch.
#[derive(serde::Serialize)]
pub(crate) struct JsonRpcRequest {
    pub(crate) jsonrpc: &'static str,
    pub(crate) method: String,
    pub(crate) params: Vec<serde_json::Value>,
    pub(crate) id: u64,
}

/// Interpret one element of a batch response.
///
/// A non-null `error` member wins over everything else. An element that
/// answers with neither `error` nor `result` violates the protocol; note
/// that `"result": null` is a present member and a valid answer.
pub(crate) fn parse_batch_element(
    element: &serde_json::Value,
) -> Result<serde_json::Value, RpcError> {
    let object = element.as_object().ok_or_else(|| {
        RpcError::InvalidResponse(format!("batch element is not an object: {element}"))
    })?;

    if let Some(error) = object.get("error") {
        if !error.is_null() {
            return Err(parse_jsonrpc_error(error));
        }
    }

    match object.get("result") {
        Some(result) => Ok(result.clone()),
        None => Err(RpcError::MissingResult),
    }
}

/// Parse a server-reported JSON-RPC error value.
///
/// JSON-RPC 2.0 defines errors as `{"code": <int>, "message": <string>}`.
/// That shape is forwarded verbatim; anything else is a malformed response.
pub(crate) fn parse_jsonrpc_error(error: &serde_json::Value) -> RpcError {
    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
    }

    match serde_json::from_value::<JsonRpcError>(error.clone()) {
        Ok(parsed) => RpcError::Server {
            code: parsed.code,
            message: parsed.message,
        },
        Err(_) => RpcError::InvalidResponse(format!("non-standard JSON-RPC error: {error}")),
    }
}

/// Parse the `id` member of a batch response element.
///
/// Daemons answer with the integer id they were sent, but some front-end
/// proxies stringify it.
pub(crate) fn parse_batch_id(id: Option<&serde_json::Value>) -> Result<u64, RpcError> {
    let Some(id) = id else {
        return Err(RpcError::InvalidResponse(
            "batch element without an id".to_owned(),
        ));
    };

    if let Some(n) = id.as_u64() {
        return Ok(n);
    }

    if let Some(s) = id.as_str() {
        return s.parse::<u64>().map_err(|e| {
            RpcError::InvalidResponse(format!("invalid batch response id string: {e}"))
        });
    }

    Err(RpcError::InvalidResponse(format!(
        "invalid batch response id: {id}"
    )))
}
