pub mod config;
pub mod greeter;
pub mod handler;
pub mod models;
