use std::fmt;
use thiserror::Error;

/// The kind of value that [`infer`][`crate::infer`] refused to describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedKind {
    /// A JSON `null`.
    ///
    /// `Option::None` serializes to `null`, and so does a non-finite float, so
    /// both end up here when going through
    /// [`infer_from`][`crate::infer_from`].
    Null,

    /// A value that could not be converted into JSON at all. Holds the message
    /// of the serializer that refused it.
    NotRepresentable(String),
}

impl fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::NotRepresentable(reason) => {
                write!(f, "a value with no JSON representation ({})", reason)
            }
        }
    }
}

/// Returned when an example contains a value that no schema type covers.
///
/// Inference stops at the first such value. The error records where that value
/// was found, as a path from the root of the example.
///
/// ```
/// use serde_json::json;
/// use schema_by_example::{infer, UnsupportedKind};
///
/// let err = infer(&json!({ "foo": [{ "bar": null }] })).unwrap_err();
///
/// assert_eq!(&UnsupportedKind::Null, err.kind());
/// assert_eq!("/foo/0/bar", err.pointer());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot infer a schema from {kind} at {:?}", to_pointer(.path))]
pub struct UnsupportedTypeError {
    kind: UnsupportedKind,
    path: Vec<String>,
}

impl UnsupportedTypeError {
    pub(crate) fn new(kind: UnsupportedKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
        }
    }

    pub(crate) fn not_representable(err: serde_json::Error) -> Self {
        Self::new(UnsupportedKind::NotRepresentable(err.to_string()))
    }

    /// Re-roots the error one level up, under `segment`.
    ///
    /// Called while unwinding out of the recursion, so segments arrive
    /// innermost first.
    pub(crate) fn within(mut self, segment: &str) -> Self {
        self.path.insert(0, segment.to_owned());
        self
    }

    /// What kind of value was rejected.
    pub fn kind(&self) -> &UnsupportedKind {
        &self.kind
    }

    /// The unescaped segments leading from the root of the example to the
    /// rejected value. Array elements are addressed by their index.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The location of the rejected value as a JSON Pointer (RFC 6901). The
    /// root of the example is the empty string.
    pub fn pointer(&self) -> String {
        to_pointer(&self.path)
    }
}

fn to_pointer(path: &[String]) -> String {
    path.iter()
        .map(|segment| format!("/{}", segment.replace('~', "~0").replace('/', "~1")))
        .collect()
}
