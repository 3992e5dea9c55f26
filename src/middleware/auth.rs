use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::Claims;
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user context extracted from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
    pub full_name: Option<String>,
}

impl AuthUser {
    /// Name stamped into responsible-party columns.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("N/A")
    }
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            full_name: claims.full_name,
        }
    }
}

/// JWT authentication middleware that validates tokens and extracts user context
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Rejected {} {}: missing bearer token", request.method(), request.uri().path());
        ApiError::unauthorized("Missing bearer token")
    })?;

    let claims = state.tokens.validate(token).map_err(|e| {
        tracing::warn!("Rejected {} {}: {}", request.method(), request.uri().path(), e);
        ApiError::from(e)
    })?;

    request.extensions_mut().insert(AuthUser::from(claims));
    Ok(next.run(request).await)
}

/// Only the configured admin username passes.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let username = request
        .extensions()
        .get::<AuthUser>()
        .map(|user| user.username.clone())
        .ok_or_else(|| ApiError::unauthorized("Missing bearer token"))?;

    if !state.is_admin(&username) {
        tracing::warn!("User {} denied admin operation {}", username, request.uri().path());
        return Err(ApiError::forbidden("Administrator privileges required"));
    }

    Ok(next.run(request).await)
}

/// The token from `Authorization: Bearer <token>`; the scheme is case-insensitive.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_scheme_is_case_insensitive() {
        assert_eq!(extract_bearer_token(&headers("Bearer abc")), Some("abc"));
        assert_eq!(extract_bearer_token(&headers("bearer abc")), Some("abc"));
        assert_eq!(extract_bearer_token(&headers("BEARER  abc ")), Some("abc"));
    }

    #[test]
    fn other_schemes_are_rejected() {
        assert_eq!(extract_bearer_token(&headers("Basic dXNlcjpwYXNz")), None);
        assert_eq!(extract_bearer_token(&headers("Bearer")), None);
        assert_eq!(extract_bearer_token(&headers("Bearer ")), None);
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn display_name_falls_back() {
        let user = AuthUser {
            username: "jperez".into(),
            full_name: None,
        };
        assert_eq!(user.display_name(), "N/A");
    }
}
