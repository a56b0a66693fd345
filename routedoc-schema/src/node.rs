use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

/// Normalized, JSON-Schema-like representation produced by translation.
///
/// Serializes to the JSON Schema form consumed by OpenAPI documents; see
/// [`SchemaNode::to_value`].
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    String {
        min_length: Option<u64>,
        max_length: Option<u64>,
        format: Option<String>,
        pattern: Option<String>,
    },
    Number {
        /// Emit `type: integer` instead of `type: number`.
        integer: bool,
        format: Option<String>,
        minimum: Option<f64>,
        maximum: Option<f64>,
        exclusive_minimum: bool,
        exclusive_maximum: bool,
        multiple_of: Option<f64>,
    },
    Boolean,
    /// A string carrying the `date-time` format.
    DateTime,
    Array {
        /// `None` means the element type is unconstrained.
        items: Option<Box<SchemaNode>>,
        min_items: Option<u64>,
        max_items: Option<u64>,
    },
    Object {
        /// Field name to schema, in declaration order.
        fields: Vec<(String, SchemaNode)>,
        required: Vec<String>,
    },
    /// Additional-properties object.
    Record { values: Option<Box<SchemaNode>> },
    /// Fixed-length positional array.
    Tuple { items: Vec<SchemaNode> },
    /// Ordered set of allowed scalar values. Literals fold into a
    /// one-member enum of the literal's runtime type.
    Enum {
        type_name: &'static str,
        values: Vec<Value>,
    },
    /// `oneOf` alternatives, with an optional discriminator field name.
    Union {
        options: Vec<SchemaNode>,
        discriminator: Option<String>,
    },
    /// Binary `allOf`.
    Intersection {
        left: Box<SchemaNode>,
        right: Box<SchemaNode>,
    },
    /// Wraps the inner schema and marks it null-allowed. An absent inner
    /// schema yields an empty object marked nullable.
    Nullable { inner: Option<Box<SchemaNode>> },
    /// Accepts anything; serializes to `{}`.
    Unconstrained,
    /// An already-normalized schema object, passed through unchanged.
    Raw(Value),
}

impl SchemaNode {
    /// A string schema with no refinements.
    pub fn string() -> Self {
        SchemaNode::String {
            min_length: None,
            max_length: None,
            format: None,
            pattern: None,
        }
    }

    /// A number schema with no refinements.
    pub fn number() -> Self {
        SchemaNode::Number {
            integer: false,
            format: None,
            minimum: None,
            maximum: None,
            exclusive_minimum: false,
            exclusive_maximum: false,
            multiple_of: None,
        }
    }

    /// The under-specified fallback for unmapped node kinds: a bare object.
    pub fn bare_object() -> Self {
        SchemaNode::Object {
            fields: Vec::new(),
            required: Vec::new(),
        }
    }

    /// Whether the top-level required-field set is non-empty.
    ///
    /// Drives the `required` flag of an automatically derived request body.
    pub fn has_required_fields(&self) -> bool {
        match self {
            SchemaNode::Object { required, .. } => !required.is_empty(),
            SchemaNode::Raw(value) => value
                .get("required")
                .and_then(Value::as_array)
                .is_some_and(|r| !r.is_empty()),
            _ => false,
        }
    }

    /// Render this node as its JSON Schema value.
    pub fn to_value(&self) -> Value {
        match self {
            SchemaNode::String {
                min_length,
                max_length,
                format,
                pattern,
            } => {
                let mut obj = Map::new();
                obj.insert("type".into(), json!("string"));
                if let Some(min) = min_length {
                    obj.insert("minLength".into(), json!(min));
                }
                if let Some(max) = max_length {
                    obj.insert("maxLength".into(), json!(max));
                }
                if let Some(format) = format {
                    obj.insert("format".into(), json!(format));
                }
                if let Some(pattern) = pattern {
                    obj.insert("pattern".into(), json!(pattern));
                }
                Value::Object(obj)
            }
            SchemaNode::Number {
                integer,
                format,
                minimum,
                maximum,
                exclusive_minimum,
                exclusive_maximum,
                multiple_of,
            } => {
                let mut obj = Map::new();
                obj.insert(
                    "type".into(),
                    json!(if *integer { "integer" } else { "number" }),
                );
                if let Some(format) = format {
                    obj.insert("format".into(), json!(format));
                }
                if let Some(min) = minimum {
                    obj.insert("minimum".into(), json!(min));
                }
                if *exclusive_minimum {
                    obj.insert("exclusiveMinimum".into(), json!(true));
                }
                if let Some(max) = maximum {
                    obj.insert("maximum".into(), json!(max));
                }
                if *exclusive_maximum {
                    obj.insert("exclusiveMaximum".into(), json!(true));
                }
                if let Some(multiple) = multiple_of {
                    obj.insert("multipleOf".into(), json!(multiple));
                }
                Value::Object(obj)
            }
            SchemaNode::Boolean => json!({ "type": "boolean" }),
            SchemaNode::DateTime => json!({ "type": "string", "format": "date-time" }),
            SchemaNode::Array {
                items,
                min_items,
                max_items,
            } => {
                let mut obj = Map::new();
                obj.insert("type".into(), json!("array"));
                obj.insert(
                    "items".into(),
                    items.as_ref().map_or_else(|| json!({}), |i| i.to_value()),
                );
                if let Some(min) = min_items {
                    obj.insert("minItems".into(), json!(min));
                }
                if let Some(max) = max_items {
                    obj.insert("maxItems".into(), json!(max));
                }
                Value::Object(obj)
            }
            SchemaNode::Object { fields, required } => {
                let mut obj = Map::new();
                obj.insert("type".into(), json!("object"));
                if !fields.is_empty() {
                    let mut properties = Map::new();
                    for (name, node) in fields {
                        properties.insert(name.clone(), node.to_value());
                    }
                    obj.insert("properties".into(), Value::Object(properties));
                }
                if !required.is_empty() {
                    obj.insert("required".into(), json!(required));
                }
                Value::Object(obj)
            }
            SchemaNode::Record { values } => json!({
                "type": "object",
                "additionalProperties": values.as_ref().map_or_else(|| json!({}), |v| v.to_value()),
            }),
            SchemaNode::Tuple { items } => {
                let rendered: Vec<Value> = items.iter().map(SchemaNode::to_value).collect();
                json!({
                    "type": "array",
                    "items": rendered,
                    "minItems": items.len(),
                    "maxItems": items.len(),
                })
            }
            SchemaNode::Enum { type_name, values } => json!({
                "type": type_name,
                "enum": values,
            }),
            SchemaNode::Union {
                options,
                discriminator,
            } => {
                let mut obj = Map::new();
                if let Some(field) = discriminator {
                    obj.insert("discriminator".into(), json!({ "propertyName": field }));
                }
                obj.insert(
                    "oneOf".into(),
                    Value::Array(options.iter().map(SchemaNode::to_value).collect()),
                );
                Value::Object(obj)
            }
            SchemaNode::Intersection { left, right } => json!({
                "allOf": [left.to_value(), right.to_value()],
            }),
            SchemaNode::Nullable { inner } => {
                let rendered = inner.as_ref().map_or_else(|| json!({}), |i| i.to_value());
                match rendered {
                    Value::Object(mut obj) => {
                        obj.insert("nullable".into(), json!(true));
                        Value::Object(obj)
                    }
                    _ => json!({ "nullable": true }),
                }
            }
            SchemaNode::Unconstrained => json!({}),
            SchemaNode::Raw(value) => value.clone(),
        }
    }
}

impl Serialize for SchemaNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
