use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::storage::{Result, StoreError};

use super::encoding::query_from_target;

/// An inbound HTTP request as the listener hands it over, before encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    /// Request target including the query string, e.g. `/a?x=1`.
    pub path: String,
    /// Value of the `Host` header.
    pub host: String,
    pub method: String,
    /// Header values encoded like bodies: a string for UTF-8 text, the
    /// base64 object otherwise.
    pub headers: BTreeMap<String, Value>,
    pub query: Map<String, Value>,
    pub body: Value,
}

impl CapturedRequest {
    /// Creates a request with an empty body and headers.
    ///
    /// The query parameters are parsed from `path`.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        let query = query_from_target(&path);
        Self {
            path,
            host: String::new(),
            method: method.into(),
            headers: BTreeMap::new(),
            query,
            body: Value::String(String::new()),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_headers(mut self, headers: BTreeMap<String, Value>) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), Value::String(value.into()));
        self
    }

    /// Overrides the query parameters parsed from the path.
    pub fn with_query(mut self, query: Map<String, Value>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }
}

/// The persisted representation of one captured request.
///
/// `headers`, `query` and `body` hold JSON text exactly as it was written to
/// the store. Records are append-only and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
    pub id: Uuid,
    pub path: String,
    pub host: String,
    pub method: String,
    pub headers: String,
    pub query: String,
    pub body: String,
    pub captured_at: DateTime<Utc>,
}

impl RequestRecord {
    /// Builds the record for `request`, JSON-encoding its structured fields.
    ///
    /// Every engine goes through this function, so the stored text is identical
    /// regardless of backend.
    pub fn capture(request: &CapturedRequest, id: Uuid, captured_at: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            id,
            path: request.path.clone(),
            host: request.host.clone(),
            method: request.method.clone(),
            headers: to_json(&request.headers, "headers")?,
            query: to_json(&request.query, "query")?,
            body: to_json(&request.body, "body")?,
            captured_at,
        })
    }

    /// Decodes the stored header map.
    pub fn headers_json(&self) -> Result<Value> {
        from_json(&self.headers, "headers")
    }

    /// Decodes the stored query parameters.
    pub fn query_json(&self) -> Result<Value> {
        from_json(&self.query, "query")
    }

    /// Decodes the stored body value.
    pub fn body_json(&self) -> Result<Value> {
        from_json(&self.body, "body")
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, field: &str) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|e| StoreError::Serialization(format!("cannot encode {field}: {e}")))
}

fn from_json(text: &str, field: &str) -> Result<Value> {
    serde_json::from_str(text)
        .map_err(|e| StoreError::InvalidData(format!("stored {field} is not JSON: {e}")))
}
