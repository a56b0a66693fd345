use std::collections::HashMap;

use serde_json::Value;

use crate::node::SchemaNode;
use crate::tree::{CurrentDef, LegacyDef, NodeId, NumberCheck, RawNode, SchemaTree, StringCheck};

/// Translate one node of `tree` into its normalized schema.
///
/// Convenience wrapper over a fresh [`Translator`]; callers translating many
/// nodes of the same tree should keep a translator around so repeated
/// references to the same declaration are translated once.
pub fn translate(tree: &SchemaTree, id: NodeId) -> Option<SchemaNode> {
    Translator::new(tree).translate(id)
}

enum CacheSlot {
    /// The node is being translated further up the call stack; hitting this
    /// slot means the declaration is cyclic.
    InProgress,
    Done(Option<SchemaNode>),
}

/// Recursive schema translator with identity-keyed memoization.
///
/// Translation is total: unmapped node kinds degrade to a bare object node
/// and unrecognizable input degrades to `None`, but no input panics. Cyclic
/// declarations terminate by identity: a reference back into an
/// in-progress node resolves to a bare object node.
pub struct Translator<'t> {
    tree: &'t SchemaTree,
    cache: HashMap<NodeId, CacheSlot>,
}

impl<'t> Translator<'t> {
    pub fn new(tree: &'t SchemaTree) -> Self {
        Self {
            tree,
            cache: HashMap::new(),
        }
    }

    /// Translate the node at `id`.
    ///
    /// Returns `None` only when the node is not recognizable as either
    /// supported encoding. Both outcomes are cached for the lifetime of the
    /// translator.
    pub fn translate(&mut self, id: NodeId) -> Option<SchemaNode> {
        match self.cache.get(&id) {
            Some(CacheSlot::Done(result)) => return result.clone(),
            Some(CacheSlot::InProgress) => return Some(SchemaNode::bare_object()),
            None => {}
        }
        self.cache.insert(id, CacheSlot::InProgress);

        let tree = self.tree;
        let result = match tree.get(id) {
            RawNode::Legacy(def) => Some(self.legacy(def)),
            RawNode::Current(def) => Some(self.current(def)),
            RawNode::Inline(value) => passthrough(value),
        };

        self.cache.insert(id, CacheSlot::Done(result.clone()));
        result
    }

    /// Translate a child node, degrading an unrecognizable child to a bare
    /// object instead of dropping it.
    fn child(&mut self, id: NodeId) -> SchemaNode {
        self.translate(id).unwrap_or_else(SchemaNode::bare_object)
    }

    fn legacy(&mut self, def: &LegacyDef) -> SchemaNode {
        match def {
            LegacyDef::String { checks } => string_node(checks),
            LegacyDef::Number { checks } => number_node(checks, true),
            LegacyDef::Boolean => SchemaNode::Boolean,
            LegacyDef::BigInt => int64_node(),
            LegacyDef::Date => SchemaNode::DateTime,
            LegacyDef::Object { shape } => self.object_node(shape),
            LegacyDef::Array {
                element,
                min_length,
                max_length,
            } => SchemaNode::Array {
                items: element.map(|e| Box::new(self.child(e))),
                min_items: *min_length,
                max_items: *max_length,
            },
            LegacyDef::Optional { inner } | LegacyDef::Default { inner } => match inner {
                Some(inner) => self.child(*inner),
                None => SchemaNode::Unconstrained,
            },
            LegacyDef::Nullable { inner } => SchemaNode::Nullable {
                inner: inner.map(|i| Box::new(self.child(i))),
            },
            LegacyDef::Enum { values } => string_enum(values),
            LegacyDef::NativeEnum { values } => SchemaNode::Enum {
                type_name: "string",
                values: values.clone(),
            },
            LegacyDef::Literal { value } => SchemaNode::Enum {
                type_name: runtime_type(value),
                values: vec![value.clone()],
            },
            LegacyDef::Union { options } => SchemaNode::Union {
                options: options.iter().map(|o| self.child(*o)).collect(),
                discriminator: None,
            },
            LegacyDef::DiscriminatedUnion {
                discriminator,
                options,
            } => SchemaNode::Union {
                options: options.iter().map(|o| self.child(*o)).collect(),
                discriminator: Some(discriminator.clone()),
            },
            LegacyDef::Intersection { left, right } => SchemaNode::Intersection {
                left: Box::new(self.child(*left)),
                right: Box::new(self.child(*right)),
            },
            LegacyDef::Record { value_type } => SchemaNode::Record {
                values: value_type.map(|v| Box::new(self.child(v))),
            },
            LegacyDef::Tuple { items } => SchemaNode::Tuple {
                items: items.iter().map(|i| self.child(*i)).collect(),
            },
            LegacyDef::Effects { schema } => self.through(*schema),
            LegacyDef::Lazy { target } => self.through(*target),
            LegacyDef::Pipeline { input } => self.through(*input),
            LegacyDef::Any | LegacyDef::Unknown | LegacyDef::Void => SchemaNode::Unconstrained,
            LegacyDef::Other => {
                tracing::debug!("unmapped legacy schema kind, emitting bare object");
                SchemaNode::bare_object()
            }
        }
    }

    fn current(&mut self, def: &CurrentDef) -> SchemaNode {
        match def {
            CurrentDef::String { checks } => string_node(checks),
            // The current encoding does not surface bound exclusivity.
            CurrentDef::Number { checks } => number_node(checks, false),
            CurrentDef::Boolean => SchemaNode::Boolean,
            CurrentDef::BigInt => int64_node(),
            CurrentDef::Date => SchemaNode::DateTime,
            CurrentDef::Object { shape } => self.object_node(shape),
            CurrentDef::Array {
                element,
                min_length,
                max_length,
            } => SchemaNode::Array {
                items: element.map(|e| Box::new(self.child(e))),
                min_items: *min_length,
                max_items: *max_length,
            },
            CurrentDef::Optional { inner } | CurrentDef::Default { inner } => match inner {
                Some(inner) => self.child(*inner),
                None => SchemaNode::Unconstrained,
            },
            CurrentDef::Nullable { inner } => SchemaNode::Nullable {
                inner: inner.map(|i| Box::new(self.child(i))),
            },
            CurrentDef::Enum { values } => string_enum(values),
            CurrentDef::Literal { values } => SchemaNode::Enum {
                type_name: values.first().map_or("string", runtime_type),
                values: values.clone(),
            },
            CurrentDef::Union { options } => SchemaNode::Union {
                options: options.iter().map(|o| self.child(*o)).collect(),
                discriminator: None,
            },
            CurrentDef::Intersection { left, right } => SchemaNode::Intersection {
                left: Box::new(self.child(*left)),
                right: Box::new(self.child(*right)),
            },
            CurrentDef::Record { value_type } => SchemaNode::Record {
                values: value_type.map(|v| Box::new(self.child(v))),
            },
            CurrentDef::Tuple { items } => SchemaNode::Tuple {
                items: items.iter().map(|i| self.child(*i)).collect(),
            },
            CurrentDef::Other => {
                tracing::debug!("unmapped schema kind, emitting bare object");
                SchemaNode::bare_object()
            }
        }
    }

    fn object_node(&mut self, shape: &[(String, NodeId)]) -> SchemaNode {
        let mut fields = Vec::with_capacity(shape.len());
        let mut required = Vec::new();
        for (name, field) in shape {
            if !self.tree.get(*field).is_optional_wrapper() {
                required.push(name.clone());
            }
            fields.push((name.clone(), self.child(*field)));
        }
        SchemaNode::Object { fields, required }
    }

    /// Passthrough wrappers translate to their underlying declared schema;
    /// a missing underlying schema degrades to a bare object.
    fn through(&mut self, inner: Option<NodeId>) -> SchemaNode {
        match inner {
            Some(inner) => self.child(inner),
            None => SchemaNode::bare_object(),
        }
    }
}

fn passthrough(value: &Value) -> Option<SchemaNode> {
    if value.get("type").is_some_and(Value::is_string) {
        Some(SchemaNode::Raw(value.clone()))
    } else {
        tracing::debug!("inline value is not a schema object, translation absent");
        None
    }
}

fn string_node(checks: &[StringCheck]) -> SchemaNode {
    let mut min_length = None;
    let mut max_length = None;
    let mut format = None;
    let mut pattern = None;
    for check in checks {
        match check {
            StringCheck::Min(n) => min_length = Some(*n),
            StringCheck::Max(n) => max_length = Some(*n),
            StringCheck::Length(n) => {
                min_length = Some(*n);
                max_length = Some(*n);
            }
            StringCheck::Email => format = Some("email".to_string()),
            StringCheck::Url => format = Some("uri".to_string()),
            StringCheck::Uuid => format = Some("uuid".to_string()),
            StringCheck::Cuid => format = Some("cuid".to_string()),
            StringCheck::Regex(source) => pattern = Some(source.clone()),
        }
    }
    SchemaNode::String {
        min_length,
        max_length,
        format,
        pattern,
    }
}

fn number_node(checks: &[NumberCheck], exclusive: bool) -> SchemaNode {
    let mut node = SchemaNode::number();
    if let SchemaNode::Number {
        integer,
        minimum,
        maximum,
        exclusive_minimum,
        exclusive_maximum,
        multiple_of,
        ..
    } = &mut node
    {
        for check in checks {
            match check {
                NumberCheck::Min { value, inclusive } => {
                    *minimum = Some(*value);
                    if exclusive && !inclusive {
                        *exclusive_minimum = true;
                    }
                }
                NumberCheck::Max { value, inclusive } => {
                    *maximum = Some(*value);
                    if exclusive && !inclusive {
                        *exclusive_maximum = true;
                    }
                }
                NumberCheck::Int => *integer = true,
                NumberCheck::MultipleOf(value) => *multiple_of = Some(*value),
            }
        }
    }
    node
}

fn int64_node() -> SchemaNode {
    SchemaNode::Number {
        integer: true,
        format: Some("int64".to_string()),
        minimum: None,
        maximum: None,
        exclusive_minimum: false,
        exclusive_maximum: false,
        multiple_of: None,
    }
}

fn string_enum(values: &[String]) -> SchemaNode {
    SchemaNode::Enum {
        type_name: "string",
        values: values.iter().map(|v| Value::String(v.clone())).collect(),
    }
}

fn runtime_type(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        _ => "object",
    }
}
