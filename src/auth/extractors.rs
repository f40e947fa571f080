use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::{
    auth::{jwt::JwtKeys, repo::User},
    error::{AppError, NOT_AUTHORIZED},
    state::AppState,
};

/// Verified bearer identity: the email claim of a valid token.
pub struct AuthUser(pub String);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);

        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized(NOT_AUTHORIZED))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized(NOT_AUTHORIZED))?;

        let claims = keys.verify(token).map_err(|e| {
            warn!(error = %e, "invalid or expired token");
            AppError::Unauthorized(NOT_AUTHORIZED)
        })?;

        Ok(AuthUser(claims.sub))
    }
}

/// Admin gate: resolves the token's email to a user row and requires the
/// admin flag. Runs before the protected handler body and short-circuits
/// the request with 401, so no protected work executes for non-admins.
pub struct AdminUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(email) = AuthUser::from_request_parts(parts, state).await?;

        match User::find_by_email(&state.db, &email).await? {
            Some(user) if user.is_admin => Ok(AdminUser(user)),
            _ => {
                warn!(email = %email, "admin access denied");
                Err(AppError::Unauthorized(NOT_AUTHORIZED))
            }
        }
    }
}
