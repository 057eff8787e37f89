//! Typed OpenAPI v3 document model.
//!
//! Only the sections the projection can populate are fully typed; sections
//! with no AsyncAPI analog (`components`, `security`, the two vendor
//! extensions) are `Option` fields that stay `None` and therefore never
//! reach the serialized output. Every optional field is skipped when
//! absent — a missing value never appears as a `null` key.
//!
//! Field order in each struct matches the serialized key order.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Insertion-ordered string-keyed map with JS-object assignment semantics:
/// inserting an existing key overwrites the value but keeps the key's
/// original position.
///
/// Used for `paths` (keyed by channel name) and server `variables`, where
/// the source document's ordering must survive serialization.
#[derive(Debug, Clone)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> OrderedMap<V> {
    /// Empty map.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert `value` under `key`, overwriting any existing entry in place.
    pub fn insert(&mut self, key: String, value: V) {
        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }

    /// Look up an entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// An OpenAPI v3 document produced by [`project`](crate::project).
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Fixed `"3.0.0"` version marker.
    pub openapi: String,

    /// One path item per source channel, keyed by slash-prefixed channel
    /// name. Always serialized, possibly as an empty object.
    pub paths: OrderedMap<PathItem>,

    /// API metadata.
    pub info: Info,

    /// Always absent — AsyncAPI carries no reusable-components section this
    /// projection could fill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Value>,

    /// Server list; absent when the source declares no servers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,

    /// Source tag objects, passed through unchanged; absent when the source
    /// has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Value>>,

    /// Always absent — AsyncAPI security models do not map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Value>,

    /// Document-level external documentation.
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,

    /// Always absent; declared so the document shape is explicit about the
    /// extension key.
    #[serde(
        rename = "x-express-openapi-additional-middleware",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_middleware: Option<Value>,

    /// Always absent.
    #[serde(
        rename = "x-express-openapi-validation-strict",
        skip_serializing_if = "Option::is_none"
    )]
    pub validation_strict: Option<bool>,
}

/// OpenAPI `info` object.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Info {
    /// API title, copied from the source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// API version, copied from the source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Description; an explicit source `null` is dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Terms-of-service URL.
    #[serde(rename = "termsOfService", skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,

    /// Contact object, only when the source carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    /// License object, only when the source carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

/// OpenAPI `info.contact` object.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Contact {
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Contact name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contact URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// OpenAPI `info.license` object.
#[derive(Debug, Clone, Default, Serialize)]
pub struct License {
    /// License name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// License URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// OpenAPI server object.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Server {
    /// Server URL, copied from the source (may contain template variables).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Description; an explicit source `null` is dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Server variables; absent when the source variable map is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<OrderedMap<ServerVariable>>,
}

/// OpenAPI server variable.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ServerVariable {
    /// Default value, copied from the source variable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Variable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Allowed values; only populated together with `description`.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Value>,
}

/// A path item synthesized from one AsyncAPI channel.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PathItem {
    /// Channel-level `$ref`, copied unchanged.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<Value>,

    /// Channel description, copied unchanged — an explicit source `null`
    /// serializes as `null` here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    /// Header-placed parameters; absent when the channel declares none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,

    /// The channel's `subscribe` operation, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribe: Option<Operation>,

    /// The channel's `publish` operation, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish: Option<Operation>,
}

/// A parameter synthesized from one AsyncAPI channel parameter.
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    /// Fixed location marker — always `"header"`.
    #[serde(rename = "in")]
    pub location: String,

    /// Parameter key from the channel's parameter map.
    pub name: String,

    /// Raw `$ref`, copied unchanged.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<Value>,

    /// Raw description, copied unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    /// Raw schema, copied unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

/// An operation-shaped object carried over from `publish`/`subscribe`.
///
/// Not a standard OpenAPI HTTP operation — the key under the path item
/// keeps the AsyncAPI operation name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Operation {
    /// Operation identifier.
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    /// Short summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Description; an explicit source `null` is dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Bare tag names; absent when the source operation lists no tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Raw `externalDocs`, copied unchanged.
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<Value>,
}

/// OpenAPI `externalDocs` object.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExternalDocs {
    /// Documentation URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Description; an explicit source `null` is dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
