use std::collections::HashSet;

use routedoc_core::{ParamLocation, Parameter};
use serde_json::json;

/// Length of the leading `:param` identifier in `s`, or 0 if `s` does not
/// start with one. Identifiers are ASCII: letter or underscore, then
/// letters, digits, or underscores.
fn ident_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    if !bytes
        .first()
        .is_some_and(|b| b.is_ascii_alphabetic() || *b == b'_')
    {
        return 0;
    }
    let mut len = 1;
    while len < bytes.len() && (bytes[len].is_ascii_alphanumeric() || bytes[len] == b'_') {
        len += 1;
    }
    len
}

/// Rewrite `:name` placeholders to the `{name}` form used for path-table
/// keys. Registry paths keep the colon form; only the document key is
/// rewritten.
pub fn template_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 2);
    let mut rest = path;
    while let Some(pos) = rest.find(':') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let len = ident_len(after);
        if len == 0 {
            out.push(':');
            rest = after;
        } else {
            out.push('{');
            out.push_str(&after[..len]);
            out.push('}');
            rest = &after[len..];
        }
    }
    out.push_str(rest);
    out
}

/// Derive one required, string-schema path parameter per `:name`
/// placeholder, in template order. The template alone carries no richer
/// type information.
pub fn extract_path_params(template: &str) -> Vec<Parameter> {
    let mut params = Vec::new();
    let mut rest = template;
    while let Some(pos) = rest.find(':') {
        let after = &rest[pos + 1..];
        let len = ident_len(after);
        if len == 0 {
            rest = after;
            continue;
        }
        params.push(Parameter {
            name: after[..len].to_string(),
            location: ParamLocation::Path,
            required: true,
            schema: json!({ "type": "string" }),
            description: None,
        });
        rest = &after[len..];
    }
    params
}

/// Merge explicitly declared parameters with inferred ones.
///
/// Explicit parameters come first and are never dropped or altered;
/// inferred parameters are appended only for names not already declared
/// (exact, case-sensitive comparison). Declaring `id` with a numeric
/// schema therefore narrows the inferred string `id` away while forgotten
/// placeholders still get covered.
pub fn merge_parameters(explicit: Vec<Parameter>, inferred: Vec<Parameter>) -> Vec<Parameter> {
    let declared: HashSet<String> = explicit.iter().map(|p| p.name.clone()).collect();
    let mut merged = explicit;
    merged.extend(
        inferred
            .into_iter()
            .filter(|p| !declared.contains(&p.name)),
    );
    merged
}
