use serde::Serialize;
use serde_json::Value;

/// Identity of a node inside a [`SchemaTree`].
///
/// Node identity (not node value) is the memoization key during translation,
/// so two structurally equal declarations stay distinct and self-referential
/// declarations terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(usize);

/// Arena holding one validator schema tree.
///
/// Nodes reference their children by [`NodeId`], which makes cyclic
/// declarations (a lazy schema pointing back at an ancestor) representable
/// as plain data.
#[derive(Debug, Default)]
pub struct SchemaTree {
    nodes: Vec<RawNode>,
}

impl SchemaTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and return its id.
    pub fn insert(&mut self, node: RawNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Look up a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    pub fn get(&self, id: NodeId) -> &RawNode {
        &self.nodes[id.0]
    }

    /// Overwrite an existing node in place.
    ///
    /// This is how self-referential declarations are tied: insert a
    /// placeholder, build the nodes that reference it, then replace the
    /// placeholder with the real definition.
    pub fn replace(&mut self, id: NodeId, node: RawNode) {
        self.nodes[id.0] = node;
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// One node of a validator schema description.
///
/// The validator library has shipped two incompatible encodings of the same
/// schema model; both are recognized, plus a passthrough for plain JSON
/// Schema objects attached directly.
#[derive(Debug, Clone)]
pub enum RawNode {
    /// The historical encoding, discriminated by a type-name tag.
    Legacy(LegacyDef),
    /// The current encoding, discriminated by a nested type tag.
    Current(CurrentDef),
    /// A plain, already-normalized schema object. Passes through unchanged
    /// when it carries a string `type` field; otherwise it is not a schema
    /// description and translation yields nothing.
    Inline(Value),
}

/// String refinement checks, shared by both encodings.
#[derive(Debug, Clone)]
pub enum StringCheck {
    /// Minimum length.
    Min(u64),
    /// Maximum length.
    Max(u64),
    /// Exact length (sets both bounds).
    Length(u64),
    Email,
    Url,
    Uuid,
    Cuid,
    /// Pattern as a regex source string.
    Regex(String),
}

/// Numeric refinement checks, shared by both encodings.
///
/// Only the legacy encoding surfaces exclusivity: an `inclusive: false`
/// bound becomes an exclusive bound there, and is ignored in the current
/// encoding.
#[derive(Debug, Clone)]
pub enum NumberCheck {
    Min { value: f64, inclusive: bool },
    Max { value: f64, inclusive: bool },
    /// Integer coercion.
    Int,
    MultipleOf(f64),
}

/// Node kinds of the legacy encoding.
#[derive(Debug, Clone)]
pub enum LegacyDef {
    String { checks: Vec<StringCheck> },
    Number { checks: Vec<NumberCheck> },
    Boolean,
    BigInt,
    Date,
    /// Declared fields in declaration order.
    Object { shape: Vec<(String, NodeId)> },
    Array {
        element: Option<NodeId>,
        min_length: Option<u64>,
        max_length: Option<u64>,
    },
    /// Optional wrapper. Contributes no node of its own; its only effect is
    /// exclusion from a parent object's required set.
    Optional { inner: Option<NodeId> },
    /// Default-value wrapper, treated like [`LegacyDef::Optional`].
    Default { inner: Option<NodeId> },
    Nullable { inner: Option<NodeId> },
    /// Plain string enum.
    Enum { values: Vec<String> },
    /// Native enum; its value set is flattened into a string-typed enum.
    NativeEnum { values: Vec<Value> },
    Literal { value: Value },
    Union { options: Vec<NodeId> },
    DiscriminatedUnion {
        discriminator: String,
        options: Vec<NodeId>,
    },
    Intersection { left: NodeId, right: NodeId },
    Record { value_type: Option<NodeId> },
    Tuple { items: Vec<NodeId> },
    /// Refinement/transform wrapper; translates through to the inner schema.
    Effects { schema: Option<NodeId> },
    /// Deferred (possibly self-referential) declaration.
    Lazy { target: Option<NodeId> },
    /// Pipeline wrapper; translates through to its input schema.
    Pipeline { input: Option<NodeId> },
    Any,
    Unknown,
    Void,
    /// Catch-all for kinds this translator does not map.
    Other,
}

/// Node kinds of the current encoding.
#[derive(Debug, Clone)]
pub enum CurrentDef {
    String { checks: Vec<StringCheck> },
    Number { checks: Vec<NumberCheck> },
    Boolean,
    BigInt,
    Date,
    Object { shape: Vec<(String, NodeId)> },
    Array {
        element: Option<NodeId>,
        min_length: Option<u64>,
        max_length: Option<u64>,
    },
    Optional { inner: Option<NodeId> },
    Default { inner: Option<NodeId> },
    Nullable { inner: Option<NodeId> },
    Enum { values: Vec<String> },
    /// The current encoding permits multiple literal values.
    Literal { values: Vec<Value> },
    Union { options: Vec<NodeId> },
    Intersection { left: NodeId, right: NodeId },
    Record { value_type: Option<NodeId> },
    Tuple { items: Vec<NodeId> },
    /// Catch-all for kinds this translator does not map.
    Other,
}

impl RawNode {
    /// Whether this node is an optional/default wrapper in either encoding.
    ///
    /// Used when building an object's required set: a field is required iff
    /// its node is not a wrapper of this kind.
    pub fn is_optional_wrapper(&self) -> bool {
        matches!(
            self,
            RawNode::Legacy(LegacyDef::Optional { .. } | LegacyDef::Default { .. })
                | RawNode::Current(CurrentDef::Optional { .. } | CurrentDef::Default { .. })
        )
    }
}
