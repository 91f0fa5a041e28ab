//! API Gateway proxy integration response.
//!
//! Proxy integrations expect the function to return the HTTP response itself,
//! with the payload serialized into a string `body`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const CONTENT_TYPE: &str = "Content-Type";
const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ApiGatewayResponse {
    /// JSON response with CORS opened to every origin.
    #[must_use]
    pub fn json(status_code: u16, body: String) -> Self {
        let headers = HashMap::from([
            (CONTENT_TYPE.to_string(), "application/json".to_string()),
            (ALLOW_ORIGIN.to_string(), "*".to_string()),
            (
                ALLOW_HEADERS.to_string(),
                "Origin, X-Requested-With, Content-Type, Accept".to_string(),
            ),
        ]);

        Self {
            status_code,
            headers,
            body,
        }
    }
}
