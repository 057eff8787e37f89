//! Read-only AsyncAPI document model.
//!
//! This crate is the document-loading half of the asyncapi-openapi
//! workspace: it sniffs the input format (JSON vs YAML), deserializes into
//! a [`serde_json::Value`] tree, and exposes the narrow read-only accessor
//! surface ([`DocumentRead`]) that the projection crate consumes.
//!
//! No validation happens here — a structurally broken document yields
//! absent fields from the accessors instead of errors. Callers that need
//! schema conformance must validate upstream.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod document;
mod error;

pub use document::{
    AsyncApiDocument, Channel, ChannelParameter, Contact, DocumentRead, ExternalDocs, Info,
    License, Operation, Server, ServerVariable,
};
pub use error::{Error, Result};
