mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use http_mapping::store_error_to_status_code;
pub use traits::RequestRepository;
pub use types::{schema_check_sql, SchemaStatus, REQUESTS_TABLE, REQUEST_COLUMNS};
