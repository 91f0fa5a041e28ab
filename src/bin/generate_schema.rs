//! Schema generator for the greeter function.
//!
//! Writes `greeter_schema.json` describing the request and response payloads,
//! for API Gateway models and client code generation.

use greeter_lambda::models::{GreetingRequest, GreetingResponse};
use schemars::{JsonSchema, schema_for};
use serde_json::{Value, json};
use std::fs;

const SCHEMA_FILE: &str = "greeter_schema.json";

fn main() {
    let schema = json!({
        "name": "greeter",
        "description": "Greets a person by full name. Returns a message of the form `Hello <firstName> <lastName>!` with both names used exactly as given.",
        "inputSchema": generate_schema::<GreetingRequest>(),
        "outputSchema": generate_schema::<GreetingResponse>(),
    });

    let json = serde_json::to_string_pretty(&schema).unwrap_or_else(|e| {
        eprintln!("Failed to serialize schema: {e}");
        std::process::exit(1);
    });

    fs::write(SCHEMA_FILE, json).unwrap_or_else(|e| {
        eprintln!("Failed to write {SCHEMA_FILE}: {e}");
        std::process::exit(1);
    });

    println!("✅ Generated {SCHEMA_FILE}");
}

// Generates a plain JSON schema for the given type
fn generate_schema<T: JsonSchema>() -> Value {
    let mut schema = serde_json::to_value(schema_for!(T)).unwrap_or_else(|e| {
        eprintln!("Failed to serialize schema: {e}");
        std::process::exit(1);
    });

    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
        obj.remove("title");
    }

    schema
}
