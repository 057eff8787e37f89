//! End-to-end fixture tests for the document projection.
//!
//! Each test parses a minimal AsyncAPI fixture, projects it, and asserts on
//! the serialized JSON — absent keys are as much a part of the contract as
//! present ones.

use indoc::indoc;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use asyncapi_openapi::{project, AsyncApiDocument, DocumentRead};

/// Parse a fixture, project it, and return the serialized result.
fn run_projection(input: &str) -> Value {
    let doc = AsyncApiDocument::parse(input).expect("fixture should parse");
    serde_json::to_value(project(&doc)).expect("output should serialize")
}

#[test]
fn minimal_document_shape() {
    let result = run_projection("asyncapi: 2.0.0\n");

    assert_eq!(result["openapi"], json!("3.0.0"));
    assert_eq!(result["paths"], json!({}));

    // Sections with no AsyncAPI analog never appear, not even as null.
    let root = result.as_object().unwrap();
    assert!(!root.contains_key("components"));
    assert!(!root.contains_key("security"));
    assert!(!root.contains_key("servers"));
    assert!(!root.contains_key("tags"));
    assert!(!root.contains_key("externalDocs"));
    assert!(!root.contains_key("x-express-openapi-additional-middleware"));
    assert!(!root.contains_key("x-express-openapi-validation-strict"));
}

#[test]
fn publish_only_channel() {
    let input = indoc! {"
        asyncapi: 2.0.0
        info:
          title: Signup events
          version: 1.0.0
        channels:
          user/signedup:
            publish:
              operationId: publishSignup
    "};
    let result = run_projection(input);

    let item = &result["paths"]["/user/signedup"];
    assert_eq!(item["publish"]["operationId"], json!("publishSignup"));

    let item_map = item.as_object().unwrap();
    assert!(!item_map.contains_key("subscribe"));
    assert!(!item_map.contains_key("parameters"));
}

#[test]
fn null_info_description_is_dropped() {
    let result = run_projection(indoc! {"
        info:
          title: Test
          version: 1.0.0
          description: null
    "});

    assert_eq!(
        result["info"],
        json!({"title": "Test", "version": "1.0.0"})
    );
}

#[test]
fn string_info_description_is_kept_exactly() {
    let result = run_projection(indoc! {"
        info:
          title: Test
          version: 1.0.0
          description: 'Event API '
    "});

    assert_eq!(result["info"]["description"], json!("Event API "));
}

#[test]
fn zero_tags_produce_no_tags_key() {
    let result = run_projection("info:\n  title: Test\n");
    assert!(!result.as_object().unwrap().contains_key("tags"));

    let result = run_projection("tags: []\n");
    assert!(!result.as_object().unwrap().contains_key("tags"));
}

#[test]
fn tags_pass_through_unchanged() {
    let result = run_projection(indoc! {"
        tags:
          - name: user
            description: User signup flow
            x-custom: kept
          - name: account
    "});

    assert_eq!(
        result["tags"],
        json!([
            {"name": "user", "description": "User signup flow", "x-custom": "kept"},
            {"name": "account"}
        ])
    );
}

#[test]
fn info_contact_and_license() {
    let result = run_projection(indoc! {"
        info:
          title: Test
          version: 1.0.0
          termsOfService: https://example.com/tos
          contact:
            name: API Team
            email: api@example.com
          license:
            name: Apache 2.0
            url: https://www.apache.org/licenses/LICENSE-2.0
    "});

    assert_eq!(result["info"]["termsOfService"], json!("https://example.com/tos"));
    assert_eq!(
        result["info"]["contact"],
        json!({"email": "api@example.com", "name": "API Team"})
    );
    assert_eq!(
        result["info"]["license"],
        json!({"name": "Apache 2.0", "url": "https://www.apache.org/licenses/LICENSE-2.0"})
    );
}

#[test]
fn absent_contact_is_not_synthesized() {
    let result = run_projection("info:\n  title: Test\n  version: 1.0.0\n");
    let info = result["info"].as_object().unwrap();
    assert!(!info.contains_key("contact"));
    assert!(!info.contains_key("license"));
}

#[test]
fn servers_with_variables() {
    let result = run_projection(indoc! {"
        servers:
          production:
            url: '{region}.events.example.com'
            description: null
            variables:
              region:
                default: eu-west
                description: Deployment region
                enum: [eu-west, us-east]
              port:
                default: '5672'
                enum: ['5672', '5671']
    "});

    let server = &result["servers"][0];
    assert_eq!(server["url"], json!("{region}.events.example.com"));
    // null description collapses to an absent key
    assert!(!server.as_object().unwrap().contains_key("description"));

    assert_eq!(
        server["variables"]["region"],
        json!({
            "default": "eu-west",
            "description": "Deployment region",
            "enum": ["eu-west", "us-east"]
        })
    );
    // without a description, the enum is suppressed too
    assert_eq!(server["variables"]["port"], json!({"default": "5672"}));
}

#[test]
fn channel_parameters_become_header_parameters() {
    let result = run_projection(indoc! {"
        channels:
          user/{userId}/signedup:
            parameters:
              userId:
                description: Id of the user
                schema:
                  type: string
            subscribe:
              operationId: onSignup
    "});

    let item = &result["paths"]["/user/{userId}/signedup"];
    assert_eq!(
        item["parameters"],
        json!([{
            "in": "header",
            "name": "userId",
            "description": "Id of the user",
            "schema": {"type": "string"}
        }])
    );
    assert_eq!(item["subscribe"]["operationId"], json!("onSignup"));
}

#[test]
fn channel_ref_and_null_description_survive_verbatim() {
    let result = run_projection(indoc! {"
        channels:
          events:
            $ref: '#/components/channels/events'
            description: null
    "});

    let item = &result["paths"]["/events"];
    assert_eq!(item["$ref"], json!("#/components/channels/events"));
    // channel descriptions are copied unchanged — null stays null here
    assert!(item.as_object().unwrap().contains_key("description"));
    assert_eq!(item["description"], Value::Null);
}

#[test]
fn operation_fields_are_projected() {
    let result = run_projection(indoc! {"
        channels:
          events:
            publish:
              operationId: emit
              summary: Emit an event
              description: null
              tags:
                - name: events
              externalDocs:
                url: https://example.com/docs
    "});

    let publish = &result["paths"]["/events"]["publish"];
    assert_eq!(
        publish,
        &json!({
            "operationId": "emit",
            "summary": "Emit an event",
            "tags": ["events"],
            "externalDocs": {"url": "https://example.com/docs"}
        })
    );
}

#[test]
fn document_external_docs() {
    let result = run_projection(indoc! {"
        externalDocs:
          url: https://example.com/docs
          description: null
    "});
    assert_eq!(result["externalDocs"], json!({"url": "https://example.com/docs"}));

    let result = run_projection(indoc! {"
        externalDocs:
          url: https://example.com/docs
          description: Read me first
    "});
    assert_eq!(
        result["externalDocs"],
        json!({"url": "https://example.com/docs", "description": "Read me first"})
    );
}

#[test]
fn json_and_yaml_inputs_agree() {
    let yaml = indoc! {"
        info:
          title: Test
          version: 1.0.0
        channels:
          user/signedup:
            publish:
              operationId: publishSignup
    "};
    let json_input = indoc! {r#"
        {
          "info": {"title": "Test", "version": "1.0.0"},
          "channels": {
            "user/signedup": {"publish": {"operationId": "publishSignup"}}
          }
        }
    "#};

    assert_eq!(run_projection(yaml), run_projection(json_input));
}

/// Hand-built fixture driving the projection through [`DocumentRead`]
/// directly, without any parsing.
struct Fixture(Value);

impl DocumentRead for Fixture {
    fn json(&self) -> &Value {
        &self.0
    }
}

#[test]
fn hand_built_fixture_through_the_trait() {
    let fixture = Fixture(json!({
        "info": {"title": "Fixture", "version": "0.0.1"},
        "channels": {"events": {"publish": {"operationId": "emit"}}}
    }));

    let result = serde_json::to_value(project(&fixture)).unwrap();
    assert_eq!(result["info"]["title"], json!("Fixture"));
    assert_eq!(result["paths"]["/events"]["publish"]["operationId"], json!("emit"));
}
