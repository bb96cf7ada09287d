//! Resource handles for the Tape API surface.
//!
//! Each resource type ([`Record`], [`App`], [`Workspace`], [`File`]) is a
//! stateless handle holding nothing but a shared reference to the transport
//! it was resolved from. Handles are cheap to create, never mutated, and
//! freely discarded after use.
//!
//! Endpoint methods all follow one convention: build the fixed URL template
//! with a sanitized identifier, append the encoded [`RequestOptions`] query
//! string, validate any write payload *before* touching the network, and
//! delegate execution to the transport.

mod app;
mod errors;
mod file;
mod options;
mod record;
mod workspace;

pub use app::App;
pub use errors::{ApiError, FailedRequest, ValidationError};
pub use file::File;
pub use options::RequestOptions;
pub use record::Record;
pub use workspace::Workspace;

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

/// Normalizes an identifier for use in a URL path.
///
/// Integer identifiers render as their canonical decimal form; string
/// identifiers pass through unchanged, so the function is idempotent on
/// already-normalized input.
///
/// # Example
///
/// ```rust
/// use tape_api::sanitize_id;
///
/// assert_eq!(sanitize_id(9_590_591), "9590591");
/// assert_eq!(sanitize_id("9590591"), "9590591");
/// ```
#[must_use]
pub fn sanitize_id(id: impl Display) -> String {
    id.to_string()
}

/// Validates that a write payload serializes to a JSON object.
///
/// This is the precondition every write method checks before issuing a
/// request: a rejected payload never reaches the wire.
pub(crate) fn ensure_object<T: Serialize + ?Sized>(payload: &T) -> Result<Value, ValidationError> {
    let value = serde_json::to_value(payload)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(ValidationError::NotAnObject {
            found: json_type_name(&value),
        })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
