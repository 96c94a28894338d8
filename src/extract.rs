//! Extractors that turn axum's default rejections into [`ApiError`].
//!
//! axum answers bad path segments and query strings with 400 and bad JSON
//! bodies with 400/415/422 depending on the failure. These wrappers funnel
//! every one of them into a single 422 validation error.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// Typed path parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ValidPath<T>(pub T);

/// Typed query string.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ValidQuery<T>(pub T);

/// Typed JSON body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ValidJson<T>(pub T);
