use crate::models::{GreetingRequest, GreetingResponse};

/// Builds the greeting text. Both names are used as-is.
#[must_use]
pub fn greeting_message(first_name: &str, last_name: &str) -> String {
    format!("Hello {first_name} {last_name}!")
}

/// Greets the person named in the request.
///
/// Total over any pair of strings, empty ones included, and free of side effects.
///
/// # Examples
///
/// `{ firstName: "Ada", lastName: "Lovelace" }` gives `"Hello Ada Lovelace!"`.
#[must_use]
pub fn handle(request: &GreetingRequest) -> GreetingResponse {
    GreetingResponse {
        message: greeting_message(&request.first_name, &request.last_name),
    }
}
