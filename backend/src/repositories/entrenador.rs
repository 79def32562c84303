//! Repository functions for trainer rows.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::entrenador::{Entrenador, EntrenadorClientes, UpdateEntrenador};
use crate::repositories::common::like_pattern;

const ENTRENADOR_COLUMNS: &str = "id, nombre, apellido, email, telefono, fecha_nacimiento, \
     comision_porcentaje, notas, imagen_url, activo, created_at, updated_at";

/// Fetches all active trainers ordered by first name.
pub async fn list_active(pool: &PgPool) -> Result<Vec<Entrenador>, sqlx::Error> {
    sqlx::query_as::<_, Entrenador>(&format!(
        "SELECT {ENTRENADOR_COLUMNS} FROM entrenadores WHERE activo = TRUE ORDER BY nombre ASC"
    ))
    .fetch_all(pool)
    .await
}

/// Case-insensitive substring search over nombre and apellido,
/// restricted to active trainers.
pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<Entrenador>, sqlx::Error> {
    let pattern = like_pattern(query);
    sqlx::query_as::<_, Entrenador>(&format!(
        "SELECT {ENTRENADOR_COLUMNS} FROM entrenadores WHERE activo = TRUE \
         AND (nombre ILIKE $1 OR apellido ILIKE $1) ORDER BY nombre ASC"
    ))
    .bind(pattern)
    .fetch_all(pool)
    .await
}

/// Fetches a single trainer row, active or not.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Entrenador>, sqlx::Error> {
    sqlx::query_as::<_, Entrenador>(&format!(
        "SELECT {ENTRENADOR_COLUMNS} FROM entrenadores WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Inserts a fully-built trainer row.
pub async fn insert(pool: &PgPool, entrenador: &Entrenador) -> Result<(), sqlx::Error> {
    sqlx::query(&format!(
        "INSERT INTO entrenadores ({ENTRENADOR_COLUMNS}) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)"
    ))
    .bind(entrenador.id)
    .bind(&entrenador.nombre)
    .bind(&entrenador.apellido)
    .bind(&entrenador.email)
    .bind(&entrenador.telefono)
    .bind(entrenador.fecha_nacimiento)
    .bind(entrenador.comision_porcentaje)
    .bind(&entrenador.notas)
    .bind(&entrenador.imagen_url)
    .bind(entrenador.activo)
    .bind(entrenador.created_at)
    .bind(entrenador.updated_at)
    .execute(pool)
    .await
    .map(|_| ())
}

/// Applies a partial update and returns the updated row.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    cambios: &UpdateEntrenador,
) -> Result<Option<Entrenador>, sqlx::Error> {
    sqlx::query_as::<_, Entrenador>(&format!(
        "UPDATE entrenadores SET \
         nombre = COALESCE($2, nombre), \
         apellido = COALESCE($3, apellido), \
         email = COALESCE($4, email), \
         telefono = COALESCE($5, telefono), \
         fecha_nacimiento = COALESCE($6, fecha_nacimiento), \
         comision_porcentaje = COALESCE($7, comision_porcentaje), \
         notas = COALESCE($8, notas), \
         imagen_url = COALESCE($9, imagen_url), \
         updated_at = $10 \
         WHERE id = $1 \
         RETURNING {ENTRENADOR_COLUMNS}"
    ))
    .bind(id)
    .bind(&cambios.nombre)
    .bind(&cambios.apellido)
    .bind(&cambios.email)
    .bind(&cambios.telefono)
    .bind(cambios.fecha_nacimiento)
    .bind(cambios.comision_porcentaje)
    .bind(&cambios.notas)
    .bind(&cambios.imagen_url)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Marks a trainer inactive. Assigned clients keep their reference.
pub async fn soft_delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result =
        sqlx::query("UPDATE entrenadores SET activo = FALSE, updated_at = $2 WHERE id = $1")
            .bind(id)
            .bind(Utc::now())
            .execute(pool)
            .await?;
    Ok(result.rows_affected() > 0)
}

/// Active-client counts for every active trainer, in one grouped query.
pub async fn clientes_por_entrenador(pool: &PgPool) -> Result<Vec<EntrenadorClientes>, sqlx::Error> {
    sqlx::query_as::<_, EntrenadorClientes>(
        "SELECT e.id, e.nombre, e.apellido, e.comision_porcentaje, \
         COUNT(c.id) AS clientes_count \
         FROM entrenadores e \
         LEFT JOIN clientes c ON c.entrenador = e.id AND c.activo = TRUE \
         WHERE e.activo = TRUE \
         GROUP BY e.id, e.nombre, e.apellido, e.comision_porcentaje \
         ORDER BY e.nombre ASC",
    )
    .fetch_all(pool)
    .await
}

/// Number of active clients assigned to one trainer.
pub async fn count_clientes_activos(pool: &PgPool, id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM clientes WHERE entrenador = $1 AND activo = TRUE",
    )
    .bind(id)
    .fetch_one(pool)
    .await
}
