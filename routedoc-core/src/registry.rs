use crate::meta::{MountDefaults, RouteRecord};

/// Ordered, append-only collection of route records.
///
/// Insertion order is document path order. A registry is owned by the
/// router that created it; mounting a sub-router merges a *copy* of the
/// child's records into the parent, so later additions to the child never
/// retroactively change an already-merged parent.
#[derive(Debug, Default)]
pub struct Registry {
    records: Vec<RouteRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record unconditionally. No deduplication, no path
    /// validation; duplicate `(path, method)` pairs are resolved
    /// last-write-wins at assembly time.
    pub fn add(&mut self, record: RouteRecord) {
        self.records.push(record);
    }

    /// All records, in registration order.
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    /// Merge every record of `source`, in order, under `prefix`.
    ///
    /// A source root path of exactly `/` contributes no extra segment, so
    /// mounting it at `/users` yields `/users` rather than `/users/`.
    /// `defaults` fill in tags/summary/description/security/deprecated only
    /// where the record has no value of its own; an empty tag list counts
    /// as having none.
    pub fn merge_from(&mut self, prefix: &str, source: &Registry, defaults: Option<&MountDefaults>) {
        for record in &source.records {
            let mut merged = record.clone();
            merged.path = if record.path == "/" {
                prefix.to_string()
            } else {
                format!("{prefix}{}", record.path)
            };

            if let Some(defaults) = defaults {
                if !defaults.tags.is_empty() && merged.tags.is_empty() {
                    merged.tags = defaults.tags.clone();
                }
                if defaults.summary.is_some() && merged.summary.is_none() {
                    merged.summary = defaults.summary.clone();
                }
                if defaults.description.is_some() && merged.description.is_none() {
                    merged.description = defaults.description.clone();
                }
                if defaults.security.is_some() && merged.security.is_none() {
                    merged.security = defaults.security.clone();
                }
                if defaults.deprecated.is_some() && merged.deprecated.is_none() {
                    merged.deprecated = defaults.deprecated;
                }
            }

            self.records.push(merged);
        }
    }
}
