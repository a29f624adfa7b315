use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;
use uuid::Uuid;

pub const ACTOR_HEADER: &str = "x-user-id";

/// The requesting identity, resolved upstream by the authentication
/// collaborator and passed in the `x-user-id` header. `None` is anonymous;
/// a malformed header reads as anonymous rather than an error.
#[derive(Clone, Copy, Debug)]
pub struct Actor(pub Option<Uuid>);

#[async_trait]
impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok());
        Ok(Actor(actor))
    }
}
