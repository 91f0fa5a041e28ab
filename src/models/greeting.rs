use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Request for a greeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GreetingRequest {
    #[schemars(description = "First name, substituted verbatim")]
    pub first_name: String,
    #[schemars(description = "Last name, substituted verbatim")]
    pub last_name: String,
}

/// Response containing the greeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GreetingResponse {
    #[schemars(description = "Greeting of the form `Hello <firstName> <lastName>!`")]
    pub message: String,
}
