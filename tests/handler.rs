// Handler tests
#![allow(clippy::unwrap_used, clippy::panic)]

use greeter_lambda::handler::{api_gateway_body, parse_request};
use greeter_lambda::models::{AppError, GreetingRequest};
use serde_json::json;

#[test]
fn test_parse_direct_request() {
    let request = parse_request(json!({"firstName": "Ada", "lastName": "Lovelace"})).unwrap();
    assert_eq!(
        request,
        GreetingRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    );
}

#[test]
fn test_parse_api_gateway_body() {
    let payload = json!({
        "httpMethod": "POST",
        "body": "{\"firstName\": \"Alan\", \"lastName\": \"Turing\"}"
    });

    let request = parse_request(payload).unwrap();
    assert_eq!(request.first_name, "Alan");
    assert_eq!(request.last_name, "Turing");
}

#[test]
fn test_parse_ignores_unknown_fields() {
    let request =
        parse_request(json!({"firstName": "Ada", "lastName": "Lovelace", "title": "Countess"}))
            .unwrap();
    assert_eq!(request.first_name, "Ada");
}

#[test]
fn test_parse_missing_field() {
    let result = parse_request(json!({"firstName": "Ada"}));

    match result {
        Err(AppError::InvalidInput(message)) => assert!(
            message.contains("lastName"),
            "Error should name the missing field, got '{message}'"
        ),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_parse_null_field() {
    let result = parse_request(json!({"firstName": null, "lastName": "Lovelace"}));
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[test]
fn test_parse_non_string_field() {
    let result = parse_request(json!({"firstName": 42, "lastName": "Lovelace"}));
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[test]
fn test_parse_malformed_api_gateway_body() {
    let result = parse_request(json!({"body": "invalid json"}));
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[test]
fn test_parse_snake_case_keys_rejected() {
    let result = parse_request(json!({"first_name": "Ada", "last_name": "Lovelace"}));
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[test]
fn test_parse_direct_request_with_body_key() {
    let request =
        parse_request(json!({"firstName": "Ada", "lastName": "Lovelace", "body": "note"}))
            .unwrap();
    assert_eq!(request.first_name, "Ada");
    assert_eq!(request.last_name, "Lovelace");
}

#[test]
fn test_api_gateway_body_detection() {
    assert_eq!(
        api_gateway_body(&json!({"body": "{}", "httpMethod": "POST"})),
        Some("{}")
    );
    assert_eq!(api_gateway_body(&json!({"firstName": "Ada", "body": "note"})), None);
    assert_eq!(api_gateway_body(&json!({"body": {"firstName": "Ada"}})), None);
    assert_eq!(api_gateway_body(&json!({"firstName": "Ada", "lastName": "Lovelace"})), None);
}
