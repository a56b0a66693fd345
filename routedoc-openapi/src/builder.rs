use routedoc_core::{AttachTarget, ParamLocation, Parameter, Registry, RouteRecord};
use routedoc_schema::{SchemaNode, SchemaTree, Translator};
use serde_json::{json, Map, Value};

use crate::params::{extract_path_params, merge_parameters, template_path};

/// Configuration for the assembled OpenAPI document.
pub struct DocConfig {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
    /// Textual prefix prepended to every route path.
    pub prefix: Option<String>,
    pub servers: Option<Value>,
    pub components: Option<Value>,
    pub security: Option<Value>,
}

impl DocConfig {
    pub fn new(title: &str, version: &str) -> Self {
        Self {
            title: title.to_string(),
            version: version.to_string(),
            description: None,
            prefix: None,
            servers: None,
            components: None,
            security: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    pub fn with_servers(mut self, servers: Value) -> Self {
        self.servers = Some(servers);
        self
    }

    pub fn with_components(mut self, components: Value) -> Self {
        self.components = Some(components);
        self
    }

    pub fn with_security(mut self, security: Value) -> Self {
        self.security = Some(security);
        self
    }
}

/// Assemble an OpenAPI 3.1.0 document from a registry snapshot.
///
/// Pure and stateless: inputs are not mutated, and repeated calls with
/// unchanged inputs produce structurally identical documents. Later
/// registrations for the same `(path, method)` pair overwrite earlier ones.
pub fn build_document(config: &DocConfig, registry: &Registry, tree: &SchemaTree) -> Value {
    let mut translator = Translator::new(tree);
    let mut paths: Map<String, Value> = Map::new();

    for record in registry.records() {
        let raw_path = match &config.prefix {
            Some(prefix) => format!("{prefix}{}", record.path),
            None => record.path.clone(),
        };
        let full_path = template_path(&raw_path);

        let mut operation: Map<String, Value> = Map::new();

        if !record.tags.is_empty() {
            operation.insert("tags".into(), json!(record.tags));
        }
        if let Some(ref summary) = record.summary {
            operation.insert("summary".into(), json!(summary));
        }
        if let Some(ref description) = record.description {
            operation.insert("description".into(), json!(description));
        }
        if record.deprecated == Some(true) {
            operation.insert("deprecated".into(), json!(true));
        }
        if let Some(ref security) = record.security {
            operation.insert("security".into(), security.clone());
        }

        // Request body: explicit declaration wins, otherwise derived from
        // the first body-targeted validator attachment.
        let request_body = record
            .request_body
            .clone()
            .or_else(|| derive_request_body(record, &mut translator));
        if let Some(body) = request_body {
            operation.insert("requestBody".into(), body);
        }

        // Parameters: explicit declarations win over attachment-derived
        // ones; path placeholders missing from either are appended.
        let declared = if record.parameters.is_empty() {
            derive_parameters(record, &mut translator)
        } else {
            record.parameters.clone()
        };
        let merged = merge_parameters(declared, extract_path_params(&raw_path));
        if !merged.is_empty() {
            let rendered: Vec<Value> = merged.iter().map(parameter_value).collect();
            operation.insert("parameters".into(), Value::Array(rendered));
        }

        let mut responses: Map<String, Value> = Map::new();
        if record.responses.is_empty() {
            responses.insert("200".into(), json!({ "description": "Successful response" }));
        } else {
            for (status, spec) in &record.responses {
                responses.insert(status.clone(), response_value(spec));
            }
        }
        // Validated routes can answer 400; advertise it unless the route
        // already documents one.
        if !record.attachments.is_empty() && !responses.contains_key("400") {
            responses.insert("400".into(), json!({ "description": "Validation error" }));
        }
        operation.insert("responses".into(), Value::Object(responses));

        tracing::debug!(
            path = %full_path,
            method = record.method.as_str(),
            "documented route"
        );

        let path_entry = paths.entry(full_path).or_insert_with(|| json!({}));
        if let Some(obj) = path_entry.as_object_mut() {
            obj.insert(record.method.as_str().to_string(), Value::Object(operation));
        }
    }

    let mut info: Map<String, Value> = Map::new();
    info.insert("title".into(), json!(config.title));
    info.insert("version".into(), json!(config.version));
    if let Some(ref description) = config.description {
        info.insert("description".into(), json!(description));
    }

    let mut doc: Map<String, Value> = Map::new();
    doc.insert("openapi".into(), json!("3.1.0"));
    doc.insert("info".into(), Value::Object(info));
    doc.insert("paths".into(), Value::Object(paths));
    if let Some(ref servers) = config.servers {
        doc.insert("servers".into(), servers.clone());
    }
    if let Some(ref components) = config.components {
        doc.insert("components".into(), components.clone());
    }
    if let Some(ref security) = config.security {
        doc.insert("security".into(), security.clone());
    }

    Value::Object(doc)
}

/// Derive a request body from the first `body-json` attachment, falling
/// back to the first `body-form` attachment. The body is required iff the
/// translated schema's top-level required set is non-empty.
fn derive_request_body(record: &RouteRecord, translator: &mut Translator) -> Option<Value> {
    let attachment = record
        .attachments
        .iter()
        .find(|a| a.target == AttachTarget::BodyJson)
        .or_else(|| {
            record
                .attachments
                .iter()
                .find(|a| a.target == AttachTarget::BodyForm)
        })?;
    let mime = attachment.target.content_type()?;
    let node = translator.translate(attachment.schema)?;

    let mut media = Map::new();
    media.insert("schema".into(), node.to_value());
    let mut content = Map::new();
    content.insert(mime.to_string(), Value::Object(media));

    Some(json!({
        "required": node.has_required_fields(),
        "content": content,
    }))
}

/// Derive one parameter per declared field of every object-translated
/// query/path/header/cookie attachment. Path parameters are always
/// required; others follow the object's required set.
fn derive_parameters(record: &RouteRecord, translator: &mut Translator) -> Vec<Parameter> {
    let mut params = Vec::new();
    for attachment in &record.attachments {
        let Some(location) = attachment.target.param_location() else {
            continue;
        };
        let Some(SchemaNode::Object { fields, required }) = translator.translate(attachment.schema)
        else {
            continue;
        };
        for (name, node) in fields {
            let required = location == ParamLocation::Path || required.contains(&name);
            params.push(Parameter {
                name,
                location,
                required,
                schema: node.to_value(),
                description: None,
            });
        }
    }
    params
}

fn parameter_value(param: &Parameter) -> Value {
    let mut value = json!({
        "name": param.name,
        "in": param.location,
        "required": param.required,
        "schema": param.schema,
    });
    if let Some(ref description) = param.description {
        value["description"] = json!(description);
    }
    value
}

fn response_value(spec: &routedoc_core::ResponseSpec) -> Value {
    let mut value = json!({ "description": spec.description });
    if let Some(ref content) = spec.content {
        value["content"] = content.clone();
    }
    value
}
