//! HTTP request handlers.
//!
//! Controllers extract request parameters, call into the service layer, and convert
//! domain models into DTOs. Every handler carries a `utoipa::path` description so it
//! shows up in the generated OpenAPI document.

pub mod chatbot;
pub mod extract;
pub mod health;
pub mod outlet;
pub mod param;
