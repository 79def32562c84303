//! Session-based login, signup and logout.

use axum::{
    extract::{Extension, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use sqlx::PgPool;
use std::time::Duration;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::usuario::{LoginRequest, RegisterRequest, Usuario, UsuarioResponse},
    repositories::auth as auth_repo,
    utils::{
        cookies::{build_clear_cookie, build_session_cookie, extract_cookie_value, SESSION_COOKIE_NAME},
        password::{hash_password, verify_password},
        session::{generate_session_token, hash_session_token},
    },
};

const CREDENCIALES_INVALIDAS: &str = "Correo electrónico o contraseña incorrectos";

/// Creates an account and opens a session for it.
pub async fn register(
    State((pool, config)): State<(PgPool, Config)>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    if auth_repo::find_usuario_by_email(&pool, &payload.email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(
            "El correo electrónico ya está registrado".to_string(),
        ));
    }

    let password_hash = hash_password(&payload.password)?;
    let usuario = Usuario::new(payload.email.to_lowercase(), password_hash);
    auth_repo::insert_usuario(&pool, &usuario).await?;

    let cookie = open_session(&pool, &config, &usuario).await?;
    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(UsuarioResponse::from(usuario)),
    ))
}

/// Verifies credentials and opens a session.
pub async fn login(
    State((pool, config)): State<(PgPool, Config)>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let usuario = auth_repo::find_usuario_by_email(&pool, &payload.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized(CREDENCIALES_INVALIDAS.to_string()))?;

    if !verify_password(&payload.password, &usuario.password_hash)? {
        return Err(AppError::Unauthorized(CREDENCIALES_INVALIDAS.to_string()));
    }

    let cookie = open_session(&pool, &config, &usuario).await?;
    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(UsuarioResponse::from(usuario)),
    ))
}

/// Drops the current session and clears the cookie.
pub async fn logout(
    State((pool, config)): State<(PgPool, Config)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    if let Some(token) = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| extract_cookie_value(raw, SESSION_COOKIE_NAME))
    {
        auth_repo::delete_session_by_hash(&pool, &hash_session_token(&token)).await?;
    }

    Ok((
        [(header::SET_COOKIE, build_clear_cookie(config.cookie_secure))],
        Json(serde_json::json!({ "success": true })),
    ))
}

/// Returns the account behind the current session.
pub async fn me(Extension(usuario): Extension<Usuario>) -> Json<UsuarioResponse> {
    Json(UsuarioResponse::from(usuario))
}

async fn open_session(
    pool: &PgPool,
    config: &Config,
    usuario: &Usuario,
) -> Result<String, AppError> {
    let token = generate_session_token();
    let session = auth_repo::StoredSession::new(
        usuario.id,
        hash_session_token(&token),
        config.session_ttl_hours,
    );
    auth_repo::insert_session(pool, &session).await?;

    Ok(build_session_cookie(
        &token,
        Duration::from_secs(config.session_ttl_hours * 3600),
        config.cookie_secure,
    ))
}
