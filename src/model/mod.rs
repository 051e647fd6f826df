//! Wire-level DTOs shared by every endpoint and described in the OpenAPI document.

pub mod api;
pub mod outlet;
