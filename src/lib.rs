//! Infers JSON Schema documents from a single example value.
//!
//! Hand this crate one representative value, and it describes that value's
//! shape as a [JSON Schema](https://json-schema.org/). The schema accepts the
//! example itself and any other value with the same structure.
//!
//! A single example can't say much, so the inference follows a few fixed
//! rules:
//!
//! * Strings, numbers and booleans become `{"type": "string"}`,
//!   `{"type": "number"}` and `{"type": "boolean"}`. No formats, ranges or
//!   enums are inferred.
//! * Every key of an object is required.
//! * A non-empty array is described by its first element. The other elements
//!   are assumed to look the same, and are never inspected.
//! * An empty array says nothing about its elements, so its schema accepts
//!   arrays of anything.
//! * `null` has no schema. Running into one anywhere in the example is an
//!   [`UnsupportedTypeError`], and no schema is produced.
//!
//! # Quick start
//!
//! ```
//! use serde_json::json;
//! use schema_by_example::infer;
//!
//! let schema = infer(&json!({
//!     "foo": "i am a string",
//!     "bar": [5, 6, 7],
//!     "quux": { "enabled": false },
//! }))
//! .unwrap();
//!
//! assert_eq!(
//!     json!({
//!         "type": "object",
//!         "required": ["foo", "bar", "quux"],
//!         "properties": {
//!             "foo": { "type": "string" },
//!             "bar": { "type": "array", "items": { "type": "number" } },
//!             "quux": {
//!                 "type": "object",
//!                 "required": ["enabled"],
//!                 "properties": { "enabled": { "type": "boolean" } },
//!             },
//!         },
//!     }),
//!     schema.to_value(),
//! )
//! ```
//!
//! Any [`Serialize`] type works as an example too, through [`infer_from`].

mod error;
mod schema_node;

pub use crate::error::{UnsupportedKind, UnsupportedTypeError};
pub use crate::schema_node::{SchemaNode, SchemaType};
use serde::Serialize;
use serde_json::Value;

/// Infers a schema from a JSON example.
///
/// Fails on the first `null` in `value`, wherever it is. The returned error
/// points at it.
pub fn infer(value: &Value) -> Result<SchemaNode, UnsupportedTypeError> {
    SchemaNode::infer(value)
}

/// Infers a schema from any serializable example.
///
/// The example is converted with [`serde_json::to_value`] first. Values that
/// end up as `null` (`None`, unit, non-finite floats) are rejected the same way
/// [`infer`] rejects them, and values that serde_json can't convert at all are
/// reported as [`UnsupportedKind::NotRepresentable`].
///
/// ```
/// use serde::Serialize;
/// use schema_by_example::infer_from;
///
/// #[derive(Serialize)]
/// struct Point {
///     x: f64,
///     y: f64,
///     label: Option<String>,
/// }
///
/// let schema = infer_from(&Point { x: 1.0, y: 2.0, label: Some("a".into()) }).unwrap();
/// assert_eq!(Some(vec!["x", "y", "label"]), schema.required());
///
/// let err = infer_from(&Point { x: 1.0, y: 2.0, label: None }).unwrap_err();
/// assert_eq!("/label", err.pointer());
/// ```
pub fn infer_from<T>(example: &T) -> Result<SchemaNode, UnsupportedTypeError>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(example).map_err(UnsupportedTypeError::not_representable)?;
    infer(&value)
}
