//! Integration tests for the request adapter.

use paramguard::{AdapterConfig, GuardOutcome, ParamGuard, RequestParams, Schema, SchemaRegistry};
use serde_json::{json, Value};

fn params(path: Value, query: Value, body: Value) -> RequestParams {
    RequestParams {
        path: path.as_object().cloned().unwrap(),
        query: query.as_object().cloned().unwrap(),
        body,
    }
}

fn route_fields() -> Vec<Schema> {
    vec![
        Schema::int("id").min(1),
        Schema::int("page").min(1).optional(),
        Schema::object("filter", [Schema::string("q")]).optional(),
    ]
}

#[test]
fn test_request_passes_with_merged_coerced_bag() {
    let guard: ParamGuard<(), ()> = ParamGuard::new(route_fields(), AdapterConfig::default());
    let request = params(
        json!({"id": "10"}),
        json!({"page": "2"}),
        json!({"filter": "{\"q\": \"rust\"}"}),
    );

    match guard.check(request, &mut (), &mut ()) {
        GuardOutcome::Proceed(bag) => {
            assert_eq!(bag["id"], json!(10));
            assert_eq!(bag["page"], json!(2));
            assert_eq!(bag["filter"], json!({"q": "rust"}));
        }
        GuardOutcome::Reject(response) => panic!("unexpected rejection: {:?}", response),
    }
}

#[test]
fn test_body_overrides_path_and_query() {
    let guard: ParamGuard<(), ()> = ParamGuard::new(route_fields(), AdapterConfig::default());
    let request = params(json!({"id": "x"}), json!({"id": "y"}), json!({"id": 3}));

    assert!(matches!(
        guard.check(request, &mut (), &mut ()),
        GuardOutcome::Proceed(bag) if bag["id"] == json!(3)
    ));
}

#[test]
fn test_debug_response_shape() {
    let guard: ParamGuard<(), ()> =
        ParamGuard::new(route_fields(), AdapterConfig::default().with_debug(true));
    let request = params(json!({}), json!({"page": "0"}), Value::Null);

    let response = match guard.check(request, &mut (), &mut ()) {
        GuardOutcome::Reject(response) => response,
        GuardOutcome::Proceed(_) => panic!("expected rejection"),
    };

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "status": 400,
            "body": {
                "code": "EBADPARAM",
                "message": "invalid parameters",
                "errors": [
                    {"name": "id", "type": "int", "value": null, "description": "not found"},
                    {"name": "page", "type": "int", "value": "0", "description": "less than min"}
                ]
            }
        })
    );
}

#[test]
fn test_non_debug_response_has_no_details() {
    let guard: ParamGuard<(), ()> = ParamGuard::new(route_fields(), AdapterConfig::default());
    let request = params(json!({}), json!({}), Value::Null);

    match guard.check(request, &mut (), &mut ()) {
        GuardOutcome::Reject(response) => {
            assert_eq!(
                serde_json::to_value(&response.body).unwrap(),
                json!({"code": "EBADPARAM", "message": "invalid parameters"})
            );
        }
        GuardOutcome::Proceed(_) => panic!("expected rejection"),
    }
}

#[test]
fn test_guard_from_registry_fields() {
    let registry = SchemaRegistry::new();
    registry
        .register_json("get_item", r#"[{"name": "id", "type": "int"}]"#)
        .unwrap();

    let guard: ParamGuard<(), ()> =
        ParamGuard::new(registry.get("get_item").unwrap(), AdapterConfig::default());
    assert_eq!(guard.fields().len(), 1);

    let request = params(json!({"id": "5"}), json!({}), Value::Null);
    assert!(matches!(guard.check(request, &mut (), &mut ()), GuardOutcome::Proceed(_)));
}
