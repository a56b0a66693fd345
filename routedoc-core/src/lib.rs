//! Route documentation metadata and the registry it accumulates in.
//!
//! Router glue pushes one [`RouteRecord`] per registration into a
//! [`Registry`]; registries compose hierarchically through
//! [`Registry::merge_from`], which prefixes paths and applies inheritable
//! [`MountDefaults`]. The assembled registry is later turned into an
//! OpenAPI document by `routedoc-openapi`.

mod meta;
mod registry;

pub use meta::{
    AttachTarget, Method, MountDefaults, ParamLocation, Parameter, ResponseSpec, RouteRecord,
    ValidatorAttachment,
};
pub use registry::Registry;
