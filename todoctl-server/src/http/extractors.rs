//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, RawPathParams, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Integer ids from the path.
///
/// Only plain unsigned digits match, so `-1`, `+1` and `abc` all mean no
/// route matched and the rejection is 404 rather than 400.
pub struct PathIds<T>(pub T);

impl<S, T> FromRequestParts<S> for PathIds<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let digits_only = RawPathParams::from_request_parts(parts, state)
            .await
            .map(|raw| raw.iter().all(|(_, value)| is_unsigned_digits(value)))
            .unwrap_or(false);
        if !digits_only {
            return Err(route_not_found(parts));
        }

        let Path(ids) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|_| route_not_found(parts))?;
        Ok(Self(ids))
    }
}

fn is_unsigned_digits(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

fn route_not_found(parts: &Parts) -> ApiError {
    ApiError::NotFound {
        resource: "route",
        id: parts.uri.path().to_owned(),
    }
}

/// JSON body whose rejections are reported as validation errors
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "request body",
                reason: e.body_text(),
            })
        })?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_plain_digits_are_ids() {
        assert!(is_unsigned_digits("0"));
        assert!(is_unsigned_digits("42"));
        assert!(!is_unsigned_digits(""));
        assert!(!is_unsigned_digits("-1"));
        assert!(!is_unsigned_digits("+1"));
        assert!(!is_unsigned_digits("1.5"));
        assert!(!is_unsigned_digits("abc"));
    }
}
