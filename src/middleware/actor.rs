//! Acting-user extraction.
//!
//! Identity attribution comes from an optional `X-User-Id` header supplied by
//! the front proxy. It only attributes `user_id` on registration and
//! `checked_in_by` on check-in; it grants nothing.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;

const USER_ID_HEADER: &str = "x-user-id";

/// The identity user a request acts as, when one was supplied.
#[derive(Debug, Clone, Copy)]
pub struct ActingUser(pub Option<i32>);

impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(USER_ID_HEADER) else {
            return Ok(Self(None));
        };

        let user_id = value
            .to_str()
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .ok_or_else(|| AppError::BadRequest("Invalid X-User-Id header".to_string()))?;

        Ok(Self(Some(user_id)))
    }
}
