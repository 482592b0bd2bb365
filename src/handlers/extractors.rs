//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;

use crate::{error::Error, validation::parse_uuid};

/// The `{id}` path segment, parsed as a UUID.
///
/// Anything else is rejected with 400 `"Invalid UUID"` before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub Uuid);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state).await?;
        Ok(Self(parse_uuid(&raw)?))
    }
}
