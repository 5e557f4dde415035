use crate::core::error::AppError;
use crate::features::auth::JwtValidator;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Generates request ids as UUID v7 so they sort by arrival time in logs
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::now_v7().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Span factory that carries the request id alongside method and uri,
/// so every log line within a request can be correlated
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

/// Builds the CORS layer from the configured origin list. A literal `"*"`
/// anywhere in the list opens the API to any origin; otherwise only origins
/// that parse as valid header values are allowed.
pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}

fn basic_credentials(req: &Request) -> Option<String> {
    let header = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = BASE64_STANDARD.decode(encoded).ok()?;
    String::from_utf8(decoded).ok()
}

/// HTTP basic auth in front of the API docs. `valid_credentials` holds the
/// expected `user:password` pair.
pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let expected = valid_credentials.clone();
        Box::pin(async move {
            if basic_credentials(&req).as_deref() == Some(expected.as_str()) {
                return Ok(next.run(req).await);
            }

            let challenge = Response::builder()
                .status(StatusCode::UNAUTHORIZED)
                .header(header::WWW_AUTHENTICATE, "Basic realm=\"Helpdesk API docs\"")
                .body(Body::from("Unauthorized"))
                .unwrap();

            Err(challenge)
        })
    }
}

/// Validates the bearer token and stores the resulting [`AuthenticatedUser`]
/// in request extensions for the extractors and guards downstream.
///
/// [`AuthenticatedUser`]: crate::features::auth::model::AuthenticatedUser
pub async fn auth_middleware(
    State(validator): State<Arc<JwtValidator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Unauthorized("Authorization header must carry a bearer token".to_string())
    })?;

    let user = validator.validate_token(token).await?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_authorization(value: &str) -> Request {
        axum::http::Request::builder()
            .header(header::AUTHORIZATION, value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn decodes_well_formed_basic_credentials() {
        let encoded = BASE64_STANDARD.encode("docs:secret");
        let req = request_with_authorization(&format!("Basic {}", encoded));
        assert_eq!(basic_credentials(&req).as_deref(), Some("docs:secret"));
    }

    #[test]
    fn rejects_non_basic_and_malformed_headers() {
        let req = request_with_authorization("Bearer some-token");
        assert_eq!(basic_credentials(&req), None);

        let req = request_with_authorization("Basic not-base64!!!");
        assert_eq!(basic_credentials(&req), None);

        let req = axum::http::Request::builder().body(Body::empty()).unwrap();
        assert_eq!(basic_credentials(&req), None);
    }
}
