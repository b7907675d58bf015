//! Request extraction.
//!
//! # Responsibilities
//! - Parse JSON bodies leniently (empty body → defaults, any content type)
//! - Parse the listing query string
//!
//! # Design Decisions
//! - Body size rejections from the limit layer pass through untouched
//! - Anything that is not a JSON object is a malformed body

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::http::response::ApiError;

/// JSON body extractor that does not insist on `Content-Type`.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        parse_body(&bytes)
            .map(LenientJson)
            .map_err(IntoResponse::into_response)
    }
}

/// Decode a request body into `T`. Blank bodies yield `T::default()`.
pub fn parse_body<T>(bytes: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let value: Value = serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!(error = %e, "Rejecting unparseable body");
        ApiError::MalformedBody
    })?;

    if !value.is_object() {
        tracing::debug!("Rejecting non-object body");
        return Err(ApiError::MalformedBody);
    }

    serde_json::from_value(value).map_err(|e| {
        tracing::debug!(error = %e, "Rejecting body");
        ApiError::MalformedBody
    })
}

/// Query string of `GET /projects`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::ProjectPayload;

    #[test]
    fn test_blank_body_is_default() {
        assert_eq!(parse_body::<ProjectPayload>(b"").unwrap(), ProjectPayload::default());
        assert_eq!(parse_body::<ProjectPayload>(b" \n").unwrap(), ProjectPayload::default());
    }

    #[test]
    fn test_object_body() {
        let payload: ProjectPayload = parse_body(br#"{"title":"A","owner":"B"}"#).unwrap();
        assert_eq!(payload, ProjectPayload::new("A", "B"));
    }

    #[test]
    fn test_malformed_bodies() {
        let bodies: [&[u8]; 5] = [b"{", b"[1,2]", b"\"title\"", b"null", b"42"];
        for body in bodies {
            assert_eq!(
                parse_body::<ProjectPayload>(body),
                Err(ApiError::MalformedBody),
                "body {:?}",
                String::from_utf8_lossy(body)
            );
        }
    }
}
