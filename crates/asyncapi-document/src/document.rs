//! Accessor views over a parsed AsyncAPI document tree.
//!
//! The document is held as a single [`serde_json::Value`]; every view below
//! is a borrowed window into that tree. Getters return `None` for absent
//! fields and never panic on malformed shapes. Explicit `null` values stay
//! observable through the raw getters, so consumers can distinguish
//! "absent" from "present but null" where that matters.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::Result;

/// Leading-character sniff for JSON input: optional blanks followed by `{`
/// or `[`. Everything else is treated as YAML.
fn looks_like_json(input: &str) -> bool {
    input
        .trim_start_matches([' ', '\r', '\n', '\t'])
        .starts_with(['{', '['])
}

/// Iterate the entries of an optional JSON object value.
fn object_entries<'a>(
    value: Option<&'a Value>,
) -> impl Iterator<Item = (&'a str, &'a Value)> {
    value
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|map| map.iter().map(|(key, value)| (key.as_str(), value)))
}

/// String field lookup on an object value.
fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key)?.as_str()
}

/// A parsed AsyncAPI document.
///
/// Owns the raw document tree and hands out borrowed views through
/// [`DocumentRead`]. Construction performs no validation; the accessors
/// tolerate any shape.
#[derive(Debug, Clone)]
pub struct AsyncApiDocument {
    root: Value,
}

impl AsyncApiDocument {
    /// Wrap an already-parsed document tree.
    #[must_use]
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Parse a document from source text.
    ///
    /// Input starting with `{` or `[` (after leading blanks) is parsed as
    /// JSON, anything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid for the detected format.
    pub fn parse(input: &str) -> Result<Self> {
        let root = if looks_like_json(input) {
            serde_json::from_str(input)?
        } else {
            serde_yaml_ng::from_str(input)?
        };
        Ok(Self { root })
    }

    /// Load a document from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

impl DocumentRead for AsyncApiDocument {
    fn json(&self) -> &Value {
        &self.root
    }
}

/// Narrow read-only capability surface over an AsyncAPI document.
///
/// Only [`json`](Self::json) is required; every accessor is derived from
/// the raw tree. [`AsyncApiDocument`] is the production implementation, and
/// tests can implement this on hand-built [`Value`] fixtures to drive
/// consumers without any parsing.
pub trait DocumentRead {
    /// The raw document root.
    fn json(&self) -> &Value;

    /// The `info` object.
    fn info(&self) -> Info<'_> {
        Info {
            value: self.json().get("info"),
        }
    }

    /// Named servers, in document order.
    fn servers(&self) -> Vec<(&str, Server<'_>)> {
        object_entries(self.json().get("servers"))
            .map(|(name, value)| (name, Server { value }))
            .collect()
    }

    /// Named channels, in document order.
    fn channels(&self) -> Vec<(&str, Channel<'_>)> {
        object_entries(self.json().get("channels"))
            .map(|(name, value)| (name, Channel { value }))
            .collect()
    }

    /// Document-level tag objects. Empty when the document has none.
    fn tags(&self) -> &[Value] {
        self.json()
            .get("tags")
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }

    /// Document-level `externalDocs`, if present and non-null.
    fn external_docs(&self) -> Option<ExternalDocs<'_>> {
        let value = self.json().get("externalDocs").filter(|v| !v.is_null())?;
        Some(ExternalDocs { value })
    }
}

/// Borrowed view of the `info` object.
#[derive(Debug, Clone, Copy)]
pub struct Info<'a> {
    value: Option<&'a Value>,
}

impl<'a> Info<'a> {
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.value?.get(key)
    }

    /// `title`. Required by the AsyncAPI schema; absence is tolerated.
    #[must_use]
    pub fn title(&self) -> Option<&'a str> {
        self.get("title")?.as_str()
    }

    /// `version`.
    #[must_use]
    pub fn version(&self) -> Option<&'a str> {
        self.get("version")?.as_str()
    }

    /// Raw `description` — `Some(Value::Null)` when explicitly null.
    #[must_use]
    pub fn description(&self) -> Option<&'a Value> {
        self.get("description")
    }

    /// `termsOfService`.
    #[must_use]
    pub fn terms_of_service(&self) -> Option<&'a str> {
        self.get("termsOfService")?.as_str()
    }

    /// `contact`, if present and non-null.
    #[must_use]
    pub fn contact(&self) -> Option<Contact<'a>> {
        let value = self.get("contact").filter(|v| !v.is_null())?;
        Some(Contact { value })
    }

    /// `license`, if present and non-null.
    #[must_use]
    pub fn license(&self) -> Option<License<'a>> {
        let value = self.get("license").filter(|v| !v.is_null())?;
        Some(License { value })
    }
}

/// Borrowed view of `info.contact`.
#[derive(Debug, Clone, Copy)]
pub struct Contact<'a> {
    value: &'a Value,
}

impl<'a> Contact<'a> {
    /// Contact name.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        str_field(self.value, "name")
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> Option<&'a str> {
        str_field(self.value, "email")
    }

    /// Contact URL.
    #[must_use]
    pub fn url(&self) -> Option<&'a str> {
        str_field(self.value, "url")
    }
}

/// Borrowed view of `info.license`.
#[derive(Debug, Clone, Copy)]
pub struct License<'a> {
    value: &'a Value,
}

impl<'a> License<'a> {
    /// License name.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        str_field(self.value, "name")
    }

    /// License URL.
    #[must_use]
    pub fn url(&self) -> Option<&'a str> {
        str_field(self.value, "url")
    }
}

/// Borrowed view of one server descriptor.
#[derive(Debug, Clone, Copy)]
pub struct Server<'a> {
    value: &'a Value,
}

impl<'a> Server<'a> {
    /// Server URL.
    #[must_use]
    pub fn url(&self) -> Option<&'a str> {
        str_field(self.value, "url")
    }

    /// Raw `description` — `Some(Value::Null)` when explicitly null.
    #[must_use]
    pub fn description(&self) -> Option<&'a Value> {
        self.value.get("description")
    }

    /// Named server variables, in document order.
    #[must_use]
    pub fn variables(&self) -> Vec<(&'a str, ServerVariable<'a>)> {
        object_entries(self.value.get("variables"))
            .map(|(name, value)| (name, ServerVariable { value }))
            .collect()
    }
}

/// Borrowed view of one server variable.
#[derive(Debug, Clone, Copy)]
pub struct ServerVariable<'a> {
    value: &'a Value,
}

impl<'a> ServerVariable<'a> {
    /// `default`.
    #[must_use]
    pub fn default_value(&self) -> Option<&'a str> {
        str_field(self.value, "default")
    }

    /// Raw `description`.
    #[must_use]
    pub fn description(&self) -> Option<&'a Value> {
        self.value.get("description")
    }

    /// Raw `enum` array.
    #[must_use]
    pub fn enum_values(&self) -> Option<&'a Value> {
        self.value.get("enum")
    }
}

/// Borrowed view of one channel descriptor.
#[derive(Debug, Clone, Copy)]
pub struct Channel<'a> {
    value: &'a Value,
}

impl<'a> Channel<'a> {
    /// Raw channel-level `$ref`.
    #[must_use]
    pub fn reference(&self) -> Option<&'a Value> {
        self.value.get("$ref")
    }

    /// Raw `description` — `Some(Value::Null)` when explicitly null.
    #[must_use]
    pub fn description(&self) -> Option<&'a Value> {
        self.value.get("description")
    }

    /// Named channel parameters, in document order.
    #[must_use]
    pub fn parameters(&self) -> Vec<(&'a str, ChannelParameter<'a>)> {
        object_entries(self.value.get("parameters"))
            .map(|(name, value)| (name, ChannelParameter { value }))
            .collect()
    }

    /// The `subscribe` operation, if present and non-null.
    #[must_use]
    pub fn subscribe(&self) -> Option<Operation<'a>> {
        self.operation("subscribe")
    }

    /// The `publish` operation, if present and non-null.
    #[must_use]
    pub fn publish(&self) -> Option<Operation<'a>> {
        self.operation("publish")
    }

    fn operation(&self, key: &str) -> Option<Operation<'a>> {
        let value = self.value.get(key).filter(|v| !v.is_null())?;
        Some(Operation { value })
    }
}

/// Borrowed view of one channel parameter.
#[derive(Debug, Clone, Copy)]
pub struct ChannelParameter<'a> {
    value: &'a Value,
}

impl<'a> ChannelParameter<'a> {
    /// Raw `$ref`.
    #[must_use]
    pub fn reference(&self) -> Option<&'a Value> {
        self.value.get("$ref")
    }

    /// Raw `description`.
    #[must_use]
    pub fn description(&self) -> Option<&'a Value> {
        self.value.get("description")
    }

    /// Raw `schema`.
    #[must_use]
    pub fn schema(&self) -> Option<&'a Value> {
        self.value.get("schema")
    }
}

/// Borrowed view of a `publish` or `subscribe` operation.
#[derive(Debug, Clone, Copy)]
pub struct Operation<'a> {
    value: &'a Value,
}

impl<'a> Operation<'a> {
    /// `operationId`.
    #[must_use]
    pub fn operation_id(&self) -> Option<&'a str> {
        str_field(self.value, "operationId")
    }

    /// `summary`.
    #[must_use]
    pub fn summary(&self) -> Option<&'a str> {
        str_field(self.value, "summary")
    }

    /// Raw `description` — `Some(Value::Null)` when explicitly null.
    #[must_use]
    pub fn description(&self) -> Option<&'a Value> {
        self.value.get("description")
    }

    /// Operation tag objects. Empty when the operation has none.
    #[must_use]
    pub fn tags(&self) -> &'a [Value] {
        self.value
            .get("tags")
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }

    /// Raw `externalDocs`.
    #[must_use]
    pub fn external_docs(&self) -> Option<&'a Value> {
        self.value.get("externalDocs")
    }
}

/// Borrowed view of the document-level `externalDocs` object.
#[derive(Debug, Clone, Copy)]
pub struct ExternalDocs<'a> {
    value: &'a Value,
}

impl<'a> ExternalDocs<'a> {
    /// Documentation URL.
    #[must_use]
    pub fn url(&self) -> Option<&'a str> {
        str_field(self.value, "url")
    }

    /// Raw `description` — `Some(Value::Null)` when explicitly null.
    #[must_use]
    pub fn description(&self) -> Option<&'a Value> {
        self.value.get("description")
    }
}
