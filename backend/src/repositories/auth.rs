//! Repository functions for back-office users and their sessions.
//!
//! Sessions follow the hashed-token pattern: the cookie carries the raw
//! token, the table only its SHA-256 digest.

use chrono::{DateTime, Duration, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::usuario::Usuario;

const USUARIO_COLUMNS: &str = "id, email, password_hash, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct StoredSession {
    pub id: Uuid,
    pub usuario_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(usuario_id: Uuid, token_hash: String, ttl_hours: u64) -> Self {
        StoredSession {
            id: Uuid::new_v4(),
            usuario_id,
            token_hash,
            expires_at: Utc::now() + Duration::hours(ttl_hours as i64),
        }
    }
}

pub async fn find_usuario_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<Usuario>, sqlx::Error> {
    sqlx::query_as::<_, Usuario>(&format!(
        "SELECT {USUARIO_COLUMNS} FROM usuarios WHERE LOWER(email) = LOWER($1)"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn find_usuario_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Usuario>, sqlx::Error> {
    sqlx::query_as::<_, Usuario>(&format!(
        "SELECT {USUARIO_COLUMNS} FROM usuarios WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn insert_usuario(pool: &PgPool, usuario: &Usuario) -> Result<(), sqlx::Error> {
    sqlx::query(&format!(
        "INSERT INTO usuarios ({USUARIO_COLUMNS}) VALUES ($1, $2, $3, $4, $5)"
    ))
    .bind(usuario.id)
    .bind(&usuario.email)
    .bind(&usuario.password_hash)
    .bind(usuario.created_at)
    .bind(usuario.updated_at)
    .execute(pool)
    .await
    .map(|_| ())
}

pub async fn insert_session(pool: &PgPool, session: &StoredSession) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO sesiones (id, usuario_id, token_hash, expires_at, created_at) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(session.id)
    .bind(session.usuario_id)
    .bind(&session.token_hash)
    .bind(session.expires_at)
    .bind(Utc::now())
    .execute(pool)
    .await
    .map(|_| ())
}

/// Looks up an unexpired session by token digest.
pub async fn find_valid_session(
    pool: &PgPool,
    token_hash: &str,
    now: DateTime<Utc>,
) -> Result<Option<StoredSession>, sqlx::Error> {
    sqlx::query_as::<_, StoredSession>(
        "SELECT id, usuario_id, token_hash, expires_at FROM sesiones \
         WHERE token_hash = $1 AND expires_at > $2",
    )
    .bind(token_hash)
    .bind(now)
    .fetch_optional(pool)
    .await
}

pub async fn delete_session_by_hash(pool: &PgPool, token_hash: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sesiones WHERE token_hash = $1")
        .bind(token_hash)
        .execute(pool)
        .await
        .map(|_| ())
}

pub async fn delete_sessions_for_usuario(
    pool: &PgPool,
    usuario_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sesiones WHERE usuario_id = $1")
        .bind(usuario_id)
        .execute(pool)
        .await
        .map(|_| ())
}

/// Deletes expired sessions, returning how many were removed.
pub async fn cleanup_expired_sessions(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sesiones WHERE expires_at <= $1")
        .bind(Utc::now())
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
