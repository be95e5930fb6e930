//! Authentication middleware for Axum
//!
//! All `/v1` routes require a Bearer token except the signup and login
//! endpoints, which stay open so a caseworker can obtain a token in the
//! first place.

use axum::{
    body::Body,
    extract::State,
    http::{header, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig};

/// Authentication state handed to the middleware.
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// Identity extracted from a verified token, inserted as a request
/// extension for handlers that care who is calling.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

/// Routes reachable without a token.
fn is_public(method: &Method, path: &str) -> bool {
    matches!(
        (method, path),
        (&Method::POST, "/v1/user") | (&Method::POST, "/v1/auth/login")
    )
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

/// Bearer-token authentication middleware.
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if is_public(request.method(), request.uri().path()) {
        return next.run(request).await;
    }

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let Some(auth_header) = auth_header else {
        return unauthorized("Token not provided");
    };

    let Some(token) = extract_token(&auth_header) else {
        return unauthorized("Token invalid");
    };

    match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) if !claims.is_expired() => {
            request
                .extensions_mut()
                .insert(AuthenticatedUser { user_id: claims.sub });
            next.run(request).await
        }
        _ => unauthorized("Token invalid"),
    }
}

fn unauthorized(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_signup_and_login_are_public() {
        assert!(is_public(&Method::POST, "/v1/user"));
        assert!(is_public(&Method::POST, "/v1/auth/login"));
        assert!(!is_public(&Method::GET, "/v1/user"));
        assert!(!is_public(&Method::POST, "/v1/order"));
        assert!(!is_public(&Method::DELETE, "/v1/user"));
    }

    #[test]
    fn bearer_prefix_is_required() {
        assert_eq!(extract_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_token("abc.def.ghi"), None);
        assert_eq!(extract_token("Basic dXNlcg=="), None);
    }
}
