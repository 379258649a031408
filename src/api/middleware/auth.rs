//! Bearer credential authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using bearer credentials from the Authorization
/// header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// Header-name lookup is case-insensitive (the `http` crate normalizes
/// names), so `authorization` and `Authorization` are equivalent.
///
/// # Authentication Flow
///
/// 1. Extract the token from the `Authorization` header; a missing header
///    fails here, before any other work
/// 2. Verify signature and temporal claims via the configured
///    [`crate::infrastructure::auth::CredentialVerifier`]
/// 3. Store the verified [`crate::infrastructure::auth::AuthClaims`] in
///    request extensions
/// 4. Continue to the handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - The Authorization header is missing or not a bearer credential
/// - Verification fails (bad signature, expired, unknown signing key)
///
/// 401 responses carry a `WWW-Authenticate: Bearer` header per RFC 6750.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Authorization token missing",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let claims = st.credential_verifier.verify(&token).await?;
    tracing::debug!(sub = %claims.sub, "request authenticated");

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
