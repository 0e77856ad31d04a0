//! Catch-all capture handler.
//!
//! Every request that does not hit an operator route ends up here and is
//! appended to the request log.

use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
};

use blackhole_core::request::{encode_body, CapturedRequest};
use serde_json::Value;

use crate::{handlers::AppError, state::AppState};

/// Body of every successful capture response.
pub const CAPTURE_ACK: &str = "Request captured";

/// Any method, any path not reserved for operators.
pub async fn capture(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, &'static str), AppError> {
    let request = captured_request(&method, &uri, &headers, &body);
    tracing::debug!(method = %request.method, path = %request.path, "Incoming request");

    let id = state.repo.append_record(&request).await?;

    tracing::debug!(%id, bytes = body.len(), "Request captured");
    Ok((StatusCode::OK, CAPTURE_ACK))
}

/// Builds the structured record input from the raw request parts.
pub fn captured_request(method: &Method, uri: &Uri, headers: &HeaderMap, body: &[u8]) -> CapturedRequest {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| uri.authority().map(|a| a.to_string()))
        .unwrap_or_default();

    CapturedRequest::new(method.as_str(), path)
        .with_host(host)
        .with_headers(flatten_headers(headers))
        .with_body(encode_body(body))
}

/// Header names are already lowercase in `HeaderMap`. Repeated names are
/// joined with ", " in arrival order, then each value goes through
/// `encode_body`, so non-UTF-8 bytes survive as base64.
fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, Value> {
    let mut raw: BTreeMap<&str, Vec<u8>> = BTreeMap::new();
    for (name, value) in headers {
        raw.entry(name.as_str())
            .and_modify(|existing| {
                existing.extend_from_slice(b", ");
                existing.extend_from_slice(value.as_bytes());
            })
            .or_insert_with(|| value.as_bytes().to_vec());
    }

    raw.into_iter()
        .map(|(name, bytes)| (name.to_string(), encode_body(&bytes)))
        .collect()
}
