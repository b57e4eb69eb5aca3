//! Auth extractor: resolves a bearer token to its validated subject email.

use axum::http::header::AUTHORIZATION;

use crate::error::AppError;
use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Extractor: validated subject email from a bearer token. The token comes
/// from the `Authorization` header or, per the portal contract, a `token`
/// query parameter; the header wins when both are present.
#[derive(Clone, Debug)]
pub struct AuthUser(pub String);

#[axum::async_trait]
impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix(BEARER_PREFIX));
        let token = header_token
            .or_else(|| token_from_query(parts.uri.query()))
            .ok_or(AppError::InvalidToken)?;
        let email = state.jwt_secret().validate(token)?;
        Ok(AuthUser(email))
    }
}

/// Pull `token=...` out of a raw query string. JWTs are URL-safe, so no
/// percent-decoding is needed.
fn token_from_query(query: Option<&str>) -> Option<&str> {
    query?
        .split('&')
        .find_map(|pair| pair.strip_prefix("token="))
        .filter(|t| !t.is_empty())
}
