use crate::error::{UnsupportedKind, UnsupportedTypeError};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{json, Map, Value};
use std::fmt;

/// The JSON Schema `type` keyword of a [`SchemaNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    Object,
    Array,
    String,
    Number,
    Boolean,
}

impl SchemaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A schema inferred from one example value.
///
/// The tree mirrors the example: objects become [`SchemaNode::Object`], arrays
/// become [`SchemaNode::Array`], and scalars are leaves. An object's `required`
/// list is always the keys of its properties, in the order the example
/// listed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    String,
    Number,
    Boolean,

    /// `None` when the example array was empty, which leaves the element type
    /// unconstrained.
    Array(Option<Box<SchemaNode>>),

    Object(IndexMap<String, SchemaNode>),
}

impl SchemaNode {
    /// Infers a schema from `value`. See [`crate::infer`].
    pub fn infer(value: &Value) -> Result<Self, UnsupportedTypeError> {
        match value {
            Value::String(_) => Ok(SchemaNode::String),
            Value::Number(_) => Ok(SchemaNode::Number),
            Value::Bool(_) => Ok(SchemaNode::Boolean),

            // Only the first element is looked at. The rest are assumed to
            // share its shape.
            Value::Array(elements) => match elements.first() {
                None => Ok(SchemaNode::Array(None)),
                Some(first) => {
                    let items = Self::infer(first).map_err(|e| e.within("0"))?;
                    Ok(SchemaNode::Array(Some(Box::new(items))))
                }
            },

            Value::Object(obj) => {
                let mut props = IndexMap::with_capacity(obj.len());
                for (k, v) in obj {
                    let sub_infer = Self::infer(v).map_err(|e| e.within(k))?;
                    props.insert(k.clone(), sub_infer);
                }

                Ok(SchemaNode::Object(props))
            }

            Value::Null => Err(UnsupportedTypeError::new(UnsupportedKind::Null)),
        }
    }

    pub fn schema_type(&self) -> SchemaType {
        match self {
            SchemaNode::String => SchemaType::String,
            SchemaNode::Number => SchemaType::Number,
            SchemaNode::Boolean => SchemaType::Boolean,
            SchemaNode::Array(_) => SchemaType::Array,
            SchemaNode::Object(_) => SchemaType::Object,
        }
    }

    /// The schemas of an object's properties, keyed by property name.
    pub fn properties(&self) -> Option<&IndexMap<String, SchemaNode>> {
        match self {
            SchemaNode::Object(props) => Some(props),
            _ => None,
        }
    }

    /// The required property names of an object. Always the same keys as
    /// [`SchemaNode::properties`], in the same order.
    pub fn required(&self) -> Option<Vec<&str>> {
        self.properties()
            .map(|props| props.keys().map(String::as_str).collect())
    }

    /// The schema of an array's elements. `None` for anything but a non-empty
    /// example array.
    pub fn items(&self) -> Option<&SchemaNode> {
        match self {
            SchemaNode::Array(items) => items.as_deref(),
            _ => None,
        }
    }

    /// Renders the schema as a JSON value.
    ///
    /// ```
    /// use serde_json::json;
    /// use schema_by_example::infer;
    ///
    /// let schema = infer(&json!([{ "id": 1 }])).unwrap();
    ///
    /// assert_eq!(
    ///     json!({
    ///         "type": "array",
    ///         "items": {
    ///             "type": "object",
    ///             "required": ["id"],
    ///             "properties": { "id": { "type": "number" } },
    ///         },
    ///     }),
    ///     schema.to_value(),
    /// );
    /// ```
    pub fn to_value(&self) -> Value {
        match self {
            SchemaNode::Object(props) => {
                let properties: Map<String, Value> = props
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_value()))
                    .collect();

                json!({
                    "type": SchemaType::Object.as_str(),
                    "required": props.keys().collect::<Vec<_>>(),
                    "properties": properties,
                })
            }
            SchemaNode::Array(Some(items)) => json!({
                "type": SchemaType::Array.as_str(),
                "items": items.to_value(),
            }),
            _ => json!({ "type": self.schema_type().as_str() }),
        }
    }
}

impl From<SchemaNode> for Value {
    fn from(schema: SchemaNode) -> Self {
        schema.to_value()
    }
}

impl Serialize for SchemaNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = match self {
            SchemaNode::Object(_) => 3,
            SchemaNode::Array(Some(_)) => 2,
            _ => 1,
        };

        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", self.schema_type().as_str())?;
        match self {
            SchemaNode::Object(props) => {
                map.serialize_entry("required", &self.required())?;
                map.serialize_entry("properties", props)?;
            }
            SchemaNode::Array(Some(items)) => {
                map.serialize_entry("items", items)?;
            }
            _ => {}
        }

        map.end()
    }
}
