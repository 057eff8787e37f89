#![allow(clippy::doc_markdown)] // README uses "OpenAPI"/"AsyncAPI" proper nouns throughout
#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! ## API Reference

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod model;
mod project;

pub use asyncapi_document::{AsyncApiDocument, DocumentRead};
pub use model::{
    Contact, Document, ExternalDocs, Info, License, Operation, OrderedMap, Parameter, PathItem,
    Server, ServerVariable,
};
pub use project::{project, OPENAPI_VERSION};
