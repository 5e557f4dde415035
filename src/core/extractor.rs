use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// JSON body extractor whose rejections go through the shared error
/// envelope instead of axum's plain-text defaults.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(AppJsonRejection)
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => {
                format!("Request body does not match the expected shape: {}", err)
            }
            JsonRejection::JsonSyntaxError(err) => {
                format!("Request body is not well-formed JSON: {}", err)
            }
            JsonRejection::MissingJsonContentType(err) => {
                format!("Request must be sent as application/json: {}", err)
            }
            _ => "Could not read JSON request body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}
