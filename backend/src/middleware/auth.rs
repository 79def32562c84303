use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use sqlx::PgPool;

use crate::{
    config::Config,
    error::AppError,
    repositories::auth as auth_repo,
    utils::{
        cookies::{extract_cookie_value, SESSION_COOKIE_NAME},
        session::hash_session_token,
    },
};

/// Resolves the session cookie to a user and injects it as a request
/// extension. Requests without a live session get a 401.
pub async fn auth(
    State((pool, _config)): State<(PgPool, Config)>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| extract_cookie_value(raw, SESSION_COOKIE_NAME))
        .ok_or_else(|| AppError::Unauthorized("Sesión requerida".to_string()))?;

    let token_hash = hash_session_token(&token);
    let session = auth_repo::find_valid_session(&pool, &token_hash, chrono::Utc::now())
        .await?
        .ok_or_else(|| AppError::Unauthorized("Sesión inválida o expirada".to_string()))?;

    let usuario = auth_repo::find_usuario_by_id(&pool, session.usuario_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Sesión inválida o expirada".to_string()))?;

    request.extensions_mut().insert(usuario);
    Ok(next.run(request).await)
}
