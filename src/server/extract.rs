//! Extractors that report decoding failures as JSON errors
//!
//! axum's own `Query` and `Json` reject with a plain-text body. These wrappers
//! turn the rejection into [`ValidationError::InvalidRequest`] so every error
//! the API returns has the same `{code, message, details}` shape.

use crate::core::CrudError;
use crate::core::error::ValidationError;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// Query string decoded into `T`
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = CrudError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(invalid_request(rejection.body_text())),
        }
    }
}

/// JSON body decoded into `T`
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = CrudError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(invalid_request(rejection.body_text())),
        }
    }
}

fn invalid_request(message: String) -> CrudError {
    tracing::debug!(%message, "rejected request");
    CrudError::Validation(ValidationError::InvalidRequest { message })
}
