use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use super::Identity;

/// Extractor for the `Identity` put into request extensions by the auth gate.
/// Missing identity (gate not installed on this route) is a 401.
pub struct CurrentUser(pub Identity);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(CurrentUser)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
