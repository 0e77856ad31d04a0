//! Pretty output formatting.

use blackhole_core::request::{decode_body, RequestRecord};
use serde_json::Value;

use crate::client::health::HealthStatus;

/// Format a captured request for display.
pub fn format_record(record: &RequestRecord) -> String {
    let mut output = format!(
        "{} {}\n  ID: {}\n  Host: {}\n  Captured: {}",
        record.method,
        record.path,
        record.id,
        display_or_dash(&record.host),
        record.captured_at.format("%Y-%m-%d %H:%M:%S%.6f UTC"),
    );
    if let Some(body) = describe_body(record) {
        output.push_str(&format!("\n  Body: {}", body));
    }
    output
}

/// Format captured requests for display.
pub fn format_records(records: &[RequestRecord]) -> String {
    if records.is_empty() {
        return "No requests captured.".to_string();
    }
    let mut output = format!("REQUESTS ({})\n", records.len());
    output.push_str(&"-".repeat(40));
    for record in records {
        output.push_str(&format!("\n{}", format_record(record)));
        output.push('\n');
    }
    output
}

/// Format a storage health report.
pub fn format_health(health: &HealthStatus) -> String {
    let mut output = format!("Storage: {}\n  Backend: {}", health.status, health.backend);
    if let Some(version) = &health.version {
        output.push_str(&format!("\n  Version: {}", version));
    }
    output
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// None for an empty body.
fn describe_body(record: &RequestRecord) -> Option<String> {
    let body = match record.body_json() {
        Ok(body) => body,
        Err(_) => return Some(format!("<undecodable> {}", record.body)),
    };

    match &body {
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => match decode_body(other) {
            Some(bytes) => Some(format!("<{} bytes of binary data>", bytes.len())),
            None => Some(other.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackhole_core::request::CapturedRequest;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use uuid::Uuid;

    fn record(request: CapturedRequest) -> RequestRecord {
        let captured_at = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        RequestRecord::capture(&request, Uuid::nil(), captured_at).unwrap()
    }

    #[test]
    fn test_format_record_text_body() {
        let record = record(
            CapturedRequest::new("POST", "/hooks?x=1")
                .with_host("example.com")
                .with_body(json!("hello")),
        );

        let output = format_record(&record);

        assert!(output.starts_with("POST /hooks?x=1\n"));
        assert!(output.contains("Host: example.com"));
        assert!(output.contains("Captured: 2024-06-15 10:30:00.000000 UTC"));
        assert!(output.contains("Body: hello"));
    }

    #[test]
    fn test_format_record_omits_empty_body_and_host() {
        let output = format_record(&record(CapturedRequest::new("GET", "/")));

        assert!(output.contains("Host: -"));
        assert!(!output.contains("Body:"));
    }

    #[test]
    fn test_format_record_binary_body() {
        let record = record(
            CapturedRequest::new("PUT", "/blob").with_body(json!({"encoding": "base64", "data": "/wAQ"})),
        );

        assert!(format_record(&record).contains("Body: <3 bytes of binary data>"));
    }

    #[test]
    fn test_format_records_empty() {
        assert_eq!(format_records(&[]), "No requests captured.");
    }

    #[test]
    fn test_format_records_counts() {
        let records = vec![
            record(CapturedRequest::new("GET", "/a")),
            record(CapturedRequest::new("GET", "/b")),
        ];

        let output = format_records(&records);
        assert!(output.starts_with("REQUESTS (2)\n"));
        assert!(output.contains("GET /a"));
        assert!(output.contains("GET /b"));
    }

    #[test]
    fn test_format_health() {
        let health = HealthStatus {
            status: "healthy".to_string(),
            backend: "sqlite".to_string(),
            version: Some("3.46.0".to_string()),
        };

        assert_eq!(
            format_health(&health),
            "Storage: healthy\n  Backend: sqlite\n  Version: 3.46.0"
        );
    }
}
