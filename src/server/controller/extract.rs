//! Request extractors whose rejections render as `{"error": ...}` bodies.

use axum::extract::{FromRequestParts, Path, Query};

use crate::server::error::AppError;

/// `Query` that rejects malformed query strings with `AppError::BadRequest`.
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// `Path` that rejects unparsable segments with `AppError::BadRequest`.
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
