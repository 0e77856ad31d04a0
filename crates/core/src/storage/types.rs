/// Name of the single table every engine writes to.
pub const REQUESTS_TABLE: &str = "requests";

/// Column order shared by every engine's INSERT and SELECT statements.
pub const REQUEST_COLUMNS: [&str; 8] = [
    "id",
    "path",
    "host",
    "method",
    "headers",
    "query",
    "body",
    "captured_at",
];

/// Schema check shared by every engine.
///
/// Selects each declared column without reading any rows. It fails when the
/// table is absent and also when an existing table lacks one of the columns.
pub fn schema_check_sql() -> String {
    format!(
        "SELECT {} FROM {} LIMIT 0",
        REQUEST_COLUMNS.join(", "),
        REQUESTS_TABLE
    )
}

/// Outcome of a successful schema bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    /// The probe found the table already in place.
    Existing,
    /// The probe reported the table absent and it was created.
    Created,
}

impl SchemaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaStatus::Existing => "existing",
            SchemaStatus::Created => "created",
        }
    }
}
