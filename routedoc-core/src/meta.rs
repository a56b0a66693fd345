use std::collections::BTreeMap;

use routedoc_schema::NodeId;
use serde::Serialize;
use serde_json::Value;

/// HTTP verbs a route can be documented under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Lowercase wire form, as used for path-table keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Patch => "patch",
            Method::Delete => "delete",
        }
    }
}

/// Where a parameter is located in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Path,
    Query,
    Header,
    Cookie,
}

/// One operation parameter.
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    pub name: String,
    pub location: ParamLocation,
    pub required: bool,
    /// JSON Schema for the parameter value.
    pub schema: Value,
    pub description: Option<String>,
}

/// One response entry, keyed in a record by status code (or `"default"`).
#[derive(Debug, Clone, Serialize)]
pub struct ResponseSpec {
    pub description: String,
    /// Optional content block (mime type to media object).
    pub content: Option<Value>,
}

impl ResponseSpec {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            content: None,
        }
    }
}

/// What part of the request a validator attachment describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttachTarget {
    BodyJson,
    BodyForm,
    Query,
    Path,
    Header,
    Cookie,
}

impl AttachTarget {
    /// Content type for body-targeted attachments.
    pub fn content_type(self) -> Option<&'static str> {
        match self {
            AttachTarget::BodyJson => Some("application/json"),
            AttachTarget::BodyForm => Some("application/x-www-form-urlencoded"),
            _ => None,
        }
    }

    /// Parameter location for non-body attachments.
    pub fn param_location(self) -> Option<ParamLocation> {
        match self {
            AttachTarget::Query => Some(ParamLocation::Query),
            AttachTarget::Path => Some(ParamLocation::Path),
            AttachTarget::Header => Some(ParamLocation::Header),
            AttachTarget::Cookie => Some(ParamLocation::Cookie),
            AttachTarget::BodyJson | AttachTarget::BodyForm => None,
        }
    }
}

/// A validator schema recorded against a route at registration time and
/// consumed once during document assembly.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ValidatorAttachment {
    pub target: AttachTarget,
    /// Node id into the schema tree shared with the assembler.
    pub schema: NodeId,
}

/// One registered route's declared documentation metadata.
///
/// Created once per registration and treated as immutable afterwards; a
/// prefix merge produces a copy, never touches the original.
#[derive(Debug, Clone, Serialize)]
pub struct RouteRecord {
    pub method: Method,
    /// URL template, possibly containing `:name` placeholders.
    pub path: String,
    /// Empty means "no tags of its own" and stays eligible for mount-level
    /// inheritance.
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub deprecated: Option<bool>,
    pub security: Option<Value>,
    /// Explicitly declared parameters; these always win over inferred ones.
    pub parameters: Vec<Parameter>,
    /// Explicit request body, used verbatim when present.
    pub request_body: Option<Value>,
    /// Status code (or `"default"`) to response.
    pub responses: BTreeMap<String, ResponseSpec>,
    pub attachments: Vec<ValidatorAttachment>,
}

impl RouteRecord {
    /// A record with the synthetic `200` response and nothing else declared.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let mut responses = BTreeMap::new();
        responses.insert("200".to_string(), ResponseSpec::new("Successful response"));
        Self {
            method,
            path: path.into(),
            tags: Vec::new(),
            summary: None,
            description: None,
            deprecated: None,
            security: None,
            parameters: Vec::new(),
            request_body: None,
            responses,
            attachments: Vec::new(),
        }
    }
}

/// Mount-level defaults applied during a prefix merge.
///
/// Each field fills in only where the merged record lacks its own value;
/// explicit per-route metadata always wins.
#[derive(Debug, Clone, Default)]
pub struct MountDefaults {
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub security: Option<Value>,
    pub deprecated: Option<bool>,
}
