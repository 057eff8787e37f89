//! The AsyncAPI → OpenAPI field-by-field projection.
//!
//! A single pure pass over the source document. Each mapping rule is an
//! independent projection: preserve what OpenAPI can express, drop what it
//! cannot, and collapse explicit `null` into absence wherever the target
//! treats the two as equivalent.

use serde_json::Value;

use asyncapi_document::DocumentRead;

use crate::model::{
    Contact, Document, ExternalDocs, Info, License, Operation, OrderedMap, Parameter, PathItem,
    Server, ServerVariable,
};

/// Version marker stamped on every produced document.
pub const OPENAPI_VERSION: &str = "3.0.0";

/// Project an AsyncAPI document onto the OpenAPI v3 shape.
///
/// Infallible for any input: absent source fields map to absent target
/// fields, never to an error. The source is only read, never mutated, and
/// the returned value owns all of its data.
#[must_use]
pub fn project(doc: &impl DocumentRead) -> Document {
    Document {
        openapi: OPENAPI_VERSION.to_owned(),
        paths: project_paths(doc),
        info: project_info(doc.info()),
        // Sections with no AsyncAPI analog stay absent.
        components: None,
        servers: project_servers(doc),
        tags: project_tags(doc),
        security: None,
        external_docs: project_external_docs(doc),
        additional_middleware: None,
        validation_strict: None,
    }
}

/// Null-vs-absent normalization for description-like fields: an explicit
/// `null` (or any non-string value) becomes an absent target field; a
/// string is copied through exactly.
fn normalize_optional(value: Option<&Value>) -> Option<String> {
    value?.as_str().map(str::to_owned)
}

/// Loose presence check used for server variable descriptions: `null`,
/// `false`, `0`, and the empty string all count as missing.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn project_info(info: asyncapi_document::Info<'_>) -> Info {
    Info {
        title: info.title().map(str::to_owned),
        version: info.version().map(str::to_owned),
        description: normalize_optional(info.description()),
        terms_of_service: info.terms_of_service().map(str::to_owned),
        contact: info.contact().map(|contact| Contact {
            email: contact.email().map(str::to_owned),
            name: contact.name().map(str::to_owned),
            url: contact.url().map(str::to_owned),
        }),
        license: info.license().map(|license| License {
            name: license.name().map(str::to_owned),
            url: license.url().map(str::to_owned),
        }),
    }
}

fn project_servers(doc: &impl DocumentRead) -> Option<Vec<Server>> {
    let servers: Vec<Server> = doc
        .servers()
        .into_iter()
        .map(|(_, server)| project_server(server))
        .collect();
    if servers.is_empty() {
        None
    } else {
        Some(servers)
    }
}

fn project_server(server: asyncapi_document::Server<'_>) -> Server {
    let mut variables = OrderedMap::new();
    for (name, variable) in server.variables() {
        variables.insert(name.to_owned(), project_server_variable(variable));
    }

    Server {
        url: server.url().map(str::to_owned),
        description: normalize_optional(server.description()),
        variables: if variables.is_empty() {
            None
        } else {
            Some(variables)
        },
    }
}

fn project_server_variable(variable: asyncapi_document::ServerVariable<'_>) -> ServerVariable {
    // `enum` rides along only when the variable passes the description
    // presence check — the two fields are emitted together.
    let described = variable.description().is_some_and(is_truthy);

    ServerVariable {
        default: variable.default_value().map(str::to_owned),
        description: if described {
            variable
                .description()
                .and_then(Value::as_str)
                .map(str::to_owned)
        } else {
            None
        },
        enum_values: if described {
            variable.enum_values().cloned()
        } else {
            None
        },
    }
}

fn project_tags(doc: &impl DocumentRead) -> Option<Vec<Value>> {
    let tags = doc.tags();
    if tags.is_empty() {
        None
    } else {
        Some(tags.to_vec())
    }
}

fn project_external_docs(doc: &impl DocumentRead) -> Option<ExternalDocs> {
    doc.external_docs().map(|docs| ExternalDocs {
        url: docs.url().map(str::to_owned),
        description: normalize_optional(docs.description()),
    })
}

fn project_paths(doc: &impl DocumentRead) -> OrderedMap<PathItem> {
    let mut paths = OrderedMap::new();
    for (name, channel) in doc.channels() {
        // Channel names already shaped like paths are kept verbatim;
        // everything else gets a leading slash. `foo` and `/foo` therefore
        // collide, and the later channel wins.
        let key = if name.starts_with('/') {
            name.to_owned()
        } else {
            format!("/{name}")
        };
        paths.insert(key, project_channel(channel));
    }
    paths
}

fn project_channel(channel: asyncapi_document::Channel<'_>) -> PathItem {
    // Channel parameters always land in `header`; their source location
    // (URI template variables) has no slot on a synthesized path item.
    let parameters: Vec<Parameter> = channel
        .parameters()
        .into_iter()
        .map(|(name, parameter)| Parameter {
            location: "header".to_owned(),
            name: name.to_owned(),
            reference: parameter.reference().cloned(),
            description: parameter.description().cloned(),
            schema: parameter.schema().cloned(),
        })
        .collect();

    PathItem {
        reference: channel.reference().cloned(),
        description: channel.description().cloned(),
        parameters: if parameters.is_empty() {
            None
        } else {
            Some(parameters)
        },
        subscribe: channel.subscribe().map(project_operation),
        publish: channel.publish().map(project_operation),
    }
}

fn project_operation(operation: asyncapi_document::Operation<'_>) -> Operation {
    let source_tags = operation.tags();
    let tags: Vec<String> = source_tags
        .iter()
        .filter_map(|tag| tag.get("name").and_then(Value::as_str))
        .map(str::to_owned)
        .collect();

    Operation {
        operation_id: operation.operation_id().map(str::to_owned),
        summary: operation.summary().map(str::to_owned),
        description: normalize_optional(operation.description()),
        tags: if source_tags.is_empty() { None } else { Some(tags) },
        external_docs: operation.external_docs().cloned(),
    }
}
