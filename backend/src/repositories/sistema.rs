//! Repository functions for gym systems.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::sistema::{Sistema, UpdateSistema};
use crate::repositories::common::like_pattern;

const SISTEMA_COLUMNS: &str = "id, nombre, descripcion, activo, created_at, updated_at";

/// Fetches sistemas ordered by name, optionally including inactive ones.
pub async fn list(pool: &PgPool, incluir_inactivos: bool) -> Result<Vec<Sistema>, sqlx::Error> {
    sqlx::query_as::<_, Sistema>(&format!(
        "SELECT {SISTEMA_COLUMNS} FROM sistemas WHERE activo = TRUE OR $1 = TRUE ORDER BY nombre ASC"
    ))
    .bind(incluir_inactivos)
    .fetch_all(pool)
    .await
}

/// Case-insensitive substring search over nombre, active sistemas only.
pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<Sistema>, sqlx::Error> {
    let pattern = like_pattern(query);
    sqlx::query_as::<_, Sistema>(&format!(
        "SELECT {SISTEMA_COLUMNS} FROM sistemas WHERE activo = TRUE AND nombre ILIKE $1 \
         ORDER BY nombre ASC"
    ))
    .bind(pattern)
    .fetch_all(pool)
    .await
}

/// Fetches a single sistema row.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Sistema>, sqlx::Error> {
    sqlx::query_as::<_, Sistema>(&format!(
        "SELECT {SISTEMA_COLUMNS} FROM sistemas WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Inserts a fully-built sistema row.
pub async fn insert(pool: &PgPool, sistema: &Sistema) -> Result<(), sqlx::Error> {
    sqlx::query(&format!(
        "INSERT INTO sistemas ({SISTEMA_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6)"
    ))
    .bind(sistema.id)
    .bind(&sistema.nombre)
    .bind(&sistema.descripcion)
    .bind(sistema.activo)
    .bind(sistema.created_at)
    .bind(sistema.updated_at)
    .execute(pool)
    .await
    .map(|_| ())
}

/// Applies a partial update and returns the updated row.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    cambios: &UpdateSistema,
) -> Result<Option<Sistema>, sqlx::Error> {
    sqlx::query_as::<_, Sistema>(&format!(
        "UPDATE sistemas SET \
         nombre = COALESCE($2, nombre), \
         descripcion = COALESCE($3, descripcion), \
         activo = COALESCE($4, activo), \
         updated_at = $5 \
         WHERE id = $1 \
         RETURNING {SISTEMA_COLUMNS}"
    ))
    .bind(id)
    .bind(&cambios.nombre)
    .bind(&cambios.descripcion)
    .bind(cambios.activo)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Marks a sistema inactive.
pub async fn soft_delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE sistemas SET activo = FALSE, updated_at = $2 WHERE id = $1")
        .bind(id)
        .bind(Utc::now())
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
