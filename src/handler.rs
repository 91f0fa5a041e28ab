use lambda_runtime::tracing::{debug, error, info};
use lambda_runtime::{Diagnostic, LambdaEvent};
use serde_json::{Value, json};

use crate::config::DeploymentConfig;
use crate::greeter;
use crate::models::{ApiGatewayResponse, AppError, GreetingRequest, GreetingResponse};

const STATUS_OK: u16 = 200;
const STATUS_BAD_REQUEST: u16 = 400;
const STATUS_INTERNAL_ERROR: u16 = 500;

/// Returns the API Gateway proxy body carried by `payload`, if any.
///
/// A payload counts as a proxy event when it has a string `body` and neither name
/// field at the top level. A direct request with an extra `body` key is left alone.
#[must_use]
pub fn api_gateway_body(payload: &Value) -> Option<&str> {
    if payload.get("firstName").is_some() || payload.get("lastName").is_some() {
        return None;
    }
    payload.get("body").and_then(Value::as_str)
}

/// Unwraps an API Gateway proxy event if present and reads the greeting request.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the proxy body is not JSON, or if a name
/// field is missing, `null` or not a string.
pub fn parse_request(payload: Value) -> Result<GreetingRequest, AppError> {
    let request_value = if let Some(body) = api_gateway_body(&payload) {
        debug!("Unwrapping API Gateway body");
        serde_json::from_str(body).map_err(|e| AppError::InvalidInput(e.to_string()))?
    } else {
        payload
    };

    serde_json::from_value(request_value).map_err(|e| AppError::InvalidInput(e.to_string()))
}

fn greet(payload: Value) -> Result<GreetingResponse, AppError> {
    parse_request(payload).map(|request| greeter::handle(&request))
}

// Proxy integrations turn a function error into a 502, so failures become
// HTTP responses here instead of diagnostics.
fn proxy_response(result: Result<GreetingResponse, AppError>) -> Result<Value, AppError> {
    let response = match result {
        Ok(greeting) => ApiGatewayResponse::json(
            STATUS_OK,
            serde_json::to_string(&greeting)
                .map_err(|e| AppError::Serialization(e.to_string()))?,
        ),
        Err(e) => {
            error!(error = %e, "Rejecting API Gateway request");
            let status = match e {
                AppError::InvalidInput(_) => STATUS_BAD_REQUEST,
                AppError::Serialization(_) => STATUS_INTERNAL_ERROR,
            };
            ApiGatewayResponse::json(status, json!({ "error": e.to_string() }).to_string())
        }
    };

    serde_json::to_value(response).map_err(|e| AppError::Serialization(e.to_string()))
}

/// Lambda event handler. Reads a `{ firstName, lastName }` request, either directly
/// or from an API Gateway proxy event.
///
/// Direct invocations get `{ message }` back. Proxy events get an
/// `{ statusCode, headers, body }` response whose body holds `{ message }`, or
/// `{ error }` with status 400 when the request is unreadable.
/// Logs the full event only when `RUST_LOG=debug/trace`.
///
/// # Errors
///
/// Returns a `Diagnostic` error with one of the following types:
///
/// - `InvalidInput`: A direct payload is not a greeting request
/// - `SerializationError`: The response could not be serialized back to JSON
#[allow(clippy::unused_async)]
pub async fn function_handler(
    event: LambdaEvent<Value>,
    config: &DeploymentConfig,
) -> Result<Value, Diagnostic> {
    let (payload, context) = event.into_parts();
    let is_proxy_event = api_gateway_body(&payload).is_some();

    info!(
        request_id = %context.request_id,
        environment = %config.environment_name(),
        api_gateway = is_proxy_event,
        "Greeting invocation"
    );
    debug!(payload = ?payload, "Received event");

    let result = greet(payload);

    let response = if is_proxy_event {
        proxy_response(result)
    } else {
        result.and_then(|greeting| {
            serde_json::to_value(greeting).map_err(|e| AppError::Serialization(e.to_string()))
        })
    };

    response.map_err(|e| {
        error!(error = %e, "Greeting invocation failed");
        Diagnostic::from(e)
    })
}
