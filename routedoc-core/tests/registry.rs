use routedoc_core::{Method, MountDefaults, Registry, RouteRecord};
use serde_json::json;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn record(method: Method, path: &str) -> RouteRecord {
    RouteRecord::new(method, path)
}

fn tagged(method: Method, path: &str, tags: &[&str]) -> RouteRecord {
    RouteRecord {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..record(method, path)
    }
}

// ── Records ─────────────────────────────────────────────────────────────────

#[test]
fn new_record_has_synthetic_200() {
    let r = record(Method::Get, "/users");
    assert_eq!(r.responses.len(), 1);
    assert_eq!(r.responses["200"].description, "Successful response");
}

// ── Append and order ────────────────────────────────────────────────────────

#[test]
fn add_preserves_insertion_order() {
    let mut registry = Registry::new();
    registry.add(record(Method::Get, "/b"));
    registry.add(record(Method::Get, "/a"));
    registry.add(record(Method::Get, "/c"));

    let paths: Vec<&str> = registry.records().iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, ["/b", "/a", "/c"]);
}

#[test]
fn add_does_not_deduplicate() {
    let mut registry = Registry::new();
    registry.add(record(Method::Get, "/users"));
    registry.add(record(Method::Get, "/users"));
    assert_eq!(registry.records().len(), 2);
}

// ── Prefix merge ────────────────────────────────────────────────────────────

#[test]
fn merge_prefixes_paths() {
    let mut child = Registry::new();
    child.add(record(Method::Get, "/list"));
    child.add(record(Method::Post, "/create"));

    let mut parent = Registry::new();
    parent.merge_from("/users", &child, None);

    let paths: Vec<&str> = parent.records().iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, ["/users/list", "/users/create"]);
}

#[test]
fn merge_root_path_contributes_no_segment() {
    let mut child = Registry::new();
    child.add(record(Method::Get, "/"));

    let mut parent = Registry::new();
    parent.merge_from("/users", &child, None);

    assert_eq!(parent.records()[0].path, "/users");
}

#[test]
fn merge_keeps_source_order_after_existing_records() {
    let mut child = Registry::new();
    child.add(record(Method::Get, "/one"));
    child.add(record(Method::Get, "/two"));

    let mut parent = Registry::new();
    parent.add(record(Method::Get, "/zero"));
    parent.merge_from("/sub", &child, None);

    let paths: Vec<&str> = parent.records().iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, ["/zero", "/sub/one", "/sub/two"]);
}

#[test]
fn merge_copies_records_by_value() {
    let mut child = Registry::new();
    child.add(record(Method::Get, "/list"));

    let mut parent = Registry::new();
    parent.merge_from("/users", &child, None);

    // Later additions to the child do not reach the parent.
    child.add(record(Method::Get, "/late"));
    assert_eq!(parent.records().len(), 1);
    // And the child's own paths stay unprefixed.
    assert_eq!(child.records()[0].path, "/list");
}

// ── Inheritance precedence ──────────────────────────────────────────────────

fn defaults() -> MountDefaults {
    MountDefaults {
        tags: vec!["y".to_string()],
        summary: Some("mount summary".to_string()),
        description: Some("mount description".to_string()),
        security: Some(json!([{ "bearerAuth": [] }])),
        deprecated: Some(true),
    }
}

#[test]
fn own_tags_win_over_inherited() {
    let mut child = Registry::new();
    child.add(tagged(Method::Get, "/a", &["x"]));

    let mut parent = Registry::new();
    parent.merge_from("/m", &child, Some(&defaults()));

    assert_eq!(parent.records()[0].tags, ["x"]);
}

#[test]
fn empty_tag_list_inherits() {
    let mut child = Registry::new();
    child.add(record(Method::Get, "/a"));

    let mut parent = Registry::new();
    parent.merge_from("/m", &child, Some(&defaults()));

    assert_eq!(parent.records()[0].tags, ["y"]);
}

#[test]
fn own_summary_and_description_win() {
    let mut child = Registry::new();
    child.add(RouteRecord {
        summary: Some("own summary".to_string()),
        description: Some("own description".to_string()),
        ..record(Method::Get, "/a")
    });

    let mut parent = Registry::new();
    parent.merge_from("/m", &child, Some(&defaults()));

    let merged = &parent.records()[0];
    assert_eq!(merged.summary.as_deref(), Some("own summary"));
    assert_eq!(merged.description.as_deref(), Some("own description"));
}

#[test]
fn missing_fields_inherit_from_defaults() {
    let mut child = Registry::new();
    child.add(record(Method::Get, "/a"));

    let mut parent = Registry::new();
    parent.merge_from("/m", &child, Some(&defaults()));

    let merged = &parent.records()[0];
    assert_eq!(merged.summary.as_deref(), Some("mount summary"));
    assert_eq!(merged.description.as_deref(), Some("mount description"));
    assert_eq!(merged.security, Some(json!([{ "bearerAuth": [] }])));
    assert_eq!(merged.deprecated, Some(true));
}

#[test]
fn explicit_deprecated_false_suppresses_inheritance() {
    let mut child = Registry::new();
    child.add(RouteRecord {
        deprecated: Some(false),
        ..record(Method::Get, "/a")
    });

    let mut parent = Registry::new();
    parent.merge_from("/m", &child, Some(&defaults()));

    assert_eq!(parent.records()[0].deprecated, Some(false));
}

#[test]
fn merge_without_defaults_changes_only_paths() {
    let mut child = Registry::new();
    child.add(tagged(Method::Get, "/a", &["x"]));

    let mut parent = Registry::new();
    parent.merge_from("/m", &child, None);

    let merged = &parent.records()[0];
    assert_eq!(merged.tags, ["x"]);
    assert!(merged.summary.is_none());
    assert!(merged.deprecated.is_none());
}
