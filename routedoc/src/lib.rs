//! routedoc — OpenAPI documents from route registrations.
//!
//! This facade crate re-exports the routedoc sub-crates through a single
//! dependency. Import everything you need with:
//!
//! ```ignore
//! use routedoc::prelude::*;
//! ```
//!
//! Router glue (whatever web framework dispatches the actual requests) is
//! expected to push a [`prelude::RouteRecord`] per registration into a
//! [`prelude::Registry`] and hand the registry plus its
//! [`prelude::SchemaTree`] to [`prelude::build_document`] when the
//! document endpoint is hit.

pub extern crate routedoc_core;
pub extern crate routedoc_openapi;
pub extern crate routedoc_schema;

/// The commonly used surface of all sub-crates.
pub mod prelude {
    pub use routedoc_core::{
        AttachTarget, Method, MountDefaults, ParamLocation, Parameter, Registry, ResponseSpec,
        RouteRecord, ValidatorAttachment,
    };
    pub use routedoc_openapi::{
        build_document, extract_path_params, merge_parameters, template_path, DocConfig,
    };
    pub use routedoc_schema::{
        translate, CurrentDef, LegacyDef, NodeId, NumberCheck, RawNode, SchemaNode, SchemaTree,
        StringCheck, Translator,
    };
}
