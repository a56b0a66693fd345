//! OpenAPI 3.1 document assembly from a routedoc registry.
//!
//! [`build_document`] walks the registry once, derives request bodies and
//! parameters from validator attachments, reconciles them with `:name`
//! path placeholders, and produces a complete, JSON-serializable document.

mod builder;
mod params;

pub use builder::{build_document, DocConfig};
pub use params::{extract_path_params, merge_parameters, template_path};
