//! Middleware de autenticación JWT
//!
//! Verifica el bearer token y deja un `AuthenticatedUser` en las
//! extensiones de la request. Sin token válido la request no llega al
//! handler (401).

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{
    state::AppState,
    utils::{
        errors::AppError,
        jwt::{extract_token_from_header, verify_token},
    },
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    let claims = verify_token(token, &state.jwt).map_err(|e| {
        tracing::debug!("🔒 token rechazado: {}", e);
        e
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user_id: claims.sub });

    Ok(next.run(request).await)
}
