//! Member id taken from the request path

use crate::error::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// The `:id` segment of a member route.
///
/// A segment that is not an integer cannot name a member, so it is rejected
/// with the same 404 page as an id that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for MemberId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(MemberId(id)),
            Err(rejection) => {
                let raw = parts.uri.path().rsplit('/').next().unwrap_or_default();
                tracing::debug!("Rejected member path {}: {}", parts.uri.path(), rejection);
                Err(AppError::not_found(format!(
                    "No existe un usuario con DNI {}",
                    raw
                )))
            }
        }
    }
}
