//! Output rendering for every command.

pub mod pretty;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Renders `value` as compact JSON or through the given human-readable formatter.
pub fn render<T, F>(value: &T, format: OutputFormat, pretty: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(value)?),
        OutputFormat::Pretty => Ok(pretty(value)),
    }
}
