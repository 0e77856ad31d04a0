//! Captured HTTP requests and their persisted form.

mod encoding;
mod types;

pub use encoding::{decode_body, encode_body, parse_query, query_from_target, BODY_ENCODING_BASE64};
pub use types::{CapturedRequest, RequestRecord};
