//! Validator schema trees and their translation to JSON Schema.
//!
//! Route registrations carry raw schema descriptions produced by the
//! validation library. Two incompatible historical encodings of that
//! library are recognized, plus a passthrough for plain JSON Schema
//! objects. The [`Translator`] converts any such tree into the normalized
//! [`SchemaNode`] representation embedded in OpenAPI documents.
//!
//! Translation is total and terminating: unmapped kinds degrade to an
//! under-specified schema, unrecognizable input yields `None`, and
//! self-referential declarations are cut off by identity-keyed
//! memoization.

mod node;
mod translate;
mod tree;

pub use node::SchemaNode;
pub use translate::{translate, Translator};
pub use tree::{
    CurrentDef, LegacyDef, NodeId, NumberCheck, RawNode, SchemaTree, StringCheck,
};
