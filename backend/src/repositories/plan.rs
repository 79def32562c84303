//! Repository functions for membership plans.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::plan::{Plan, UpdatePlan};
use crate::repositories::common::like_pattern;

const PLAN_COLUMNS: &str = "id, nombre, descripcion, activo, created_at, updated_at";

/// Fetches plans ordered by name. Inactive plans are included only on
/// request (the plan admin screen offers a toggle).
pub async fn list(pool: &PgPool, incluir_inactivos: bool) -> Result<Vec<Plan>, sqlx::Error> {
    sqlx::query_as::<_, Plan>(&format!(
        "SELECT {PLAN_COLUMNS} FROM planes WHERE activo = TRUE OR $1 = TRUE ORDER BY nombre ASC"
    ))
    .bind(incluir_inactivos)
    .fetch_all(pool)
    .await
}

/// Case-insensitive substring search over nombre, active plans only.
pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<Plan>, sqlx::Error> {
    let pattern = like_pattern(query);
    sqlx::query_as::<_, Plan>(&format!(
        "SELECT {PLAN_COLUMNS} FROM planes WHERE activo = TRUE AND nombre ILIKE $1 \
         ORDER BY nombre ASC"
    ))
    .bind(pattern)
    .fetch_all(pool)
    .await
}

/// Fetches a single plan row.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Plan>, sqlx::Error> {
    sqlx::query_as::<_, Plan>(&format!("SELECT {PLAN_COLUMNS} FROM planes WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Inserts a fully-built plan row.
pub async fn insert(pool: &PgPool, plan: &Plan) -> Result<(), sqlx::Error> {
    sqlx::query(&format!(
        "INSERT INTO planes ({PLAN_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6)"
    ))
    .bind(plan.id)
    .bind(&plan.nombre)
    .bind(&plan.descripcion)
    .bind(plan.activo)
    .bind(plan.created_at)
    .bind(plan.updated_at)
    .execute(pool)
    .await
    .map(|_| ())
}

/// Applies a partial update and returns the updated row.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    cambios: &UpdatePlan,
) -> Result<Option<Plan>, sqlx::Error> {
    sqlx::query_as::<_, Plan>(&format!(
        "UPDATE planes SET \
         nombre = COALESCE($2, nombre), \
         descripcion = COALESCE($3, descripcion), \
         activo = COALESCE($4, activo), \
         updated_at = $5 \
         WHERE id = $1 \
         RETURNING {PLAN_COLUMNS}"
    ))
    .bind(id)
    .bind(&cambios.nombre)
    .bind(&cambios.descripcion)
    .bind(cambios.activo)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Marks a plan inactive. Clients referencing it keep the reference.
pub async fn soft_delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE planes SET activo = FALSE, updated_at = $2 WHERE id = $1")
        .bind(id)
        .bind(Utc::now())
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
