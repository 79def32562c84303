//! Repository functions for client rows.
//!
//! Read queries resolve the plan, sistema and trainer references to
//! display names in the same statement; a dangling or missing reference
//! simply yields NULL for the name.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::cliente::{Cliente, ClienteResponse, EstadoDelMes, UpdateCliente};
use crate::repositories::common::like_pattern;

const CLIENTE_COLUMNS: &str = "id, nombre, apellido, email, telefono, direccion, \
     fecha_nacimiento, fecha_inscripcion, plan_id, sistema_id, entrenador, pago_mensual, \
     dia_de_pago, estado_del_mes, notas, activo, created_at, updated_at";

const CLIENTE_VIEW: &str = "SELECT c.id, c.nombre, c.apellido, c.email, c.telefono, \
     c.direccion, c.fecha_nacimiento, c.fecha_inscripcion, c.plan_id, p.nombre AS plan, \
     c.sistema_id, s.nombre AS sistema, c.entrenador, \
     e.nombre || ' ' || e.apellido AS entrenador_nombre, c.pago_mensual, c.dia_de_pago, \
     c.estado_del_mes, c.notas, c.activo, c.created_at, c.updated_at \
     FROM clientes c \
     LEFT JOIN planes p ON p.id = c.plan_id \
     LEFT JOIN sistemas s ON s.id = c.sistema_id \
     LEFT JOIN entrenadores e ON e.id = c.entrenador";

/// Fetches all active clients ordered by first name.
pub async fn list_active(pool: &PgPool) -> Result<Vec<ClienteResponse>, sqlx::Error> {
    sqlx::query_as::<_, ClienteResponse>(&format!(
        "{CLIENTE_VIEW} WHERE c.activo = TRUE ORDER BY c.nombre ASC"
    ))
    .fetch_all(pool)
    .await
}

/// Case-insensitive substring search over nombre, apellido and email,
/// restricted to active clients.
pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<ClienteResponse>, sqlx::Error> {
    let pattern = like_pattern(query);
    sqlx::query_as::<_, ClienteResponse>(&format!(
        "{CLIENTE_VIEW} WHERE c.activo = TRUE AND \
         (c.nombre ILIKE $1 OR c.apellido ILIKE $1 OR c.email ILIKE $1) \
         ORDER BY c.nombre ASC"
    ))
    .bind(pattern)
    .fetch_all(pool)
    .await
}

/// Fetches active clients with the given monthly status.
pub async fn filter_by_estado(
    pool: &PgPool,
    estado: EstadoDelMes,
) -> Result<Vec<ClienteResponse>, sqlx::Error> {
    sqlx::query_as::<_, ClienteResponse>(&format!(
        "{CLIENTE_VIEW} WHERE c.activo = TRUE AND c.estado_del_mes = $1 ORDER BY c.nombre ASC"
    ))
    .bind(estado)
    .fetch_all(pool)
    .await
}

/// Fetches active clients assigned to a trainer.
pub async fn list_by_entrenador(
    pool: &PgPool,
    entrenador_id: Uuid,
) -> Result<Vec<ClienteResponse>, sqlx::Error> {
    sqlx::query_as::<_, ClienteResponse>(&format!(
        "{CLIENTE_VIEW} WHERE c.activo = TRUE AND c.entrenador = $1 ORDER BY c.nombre ASC"
    ))
    .bind(entrenador_id)
    .fetch_all(pool)
    .await
}

/// Fetches a single client row without name resolution. Inactive
/// clients are still returned; listing is what filters them out.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Cliente>, sqlx::Error> {
    sqlx::query_as::<_, Cliente>(&format!(
        "SELECT {CLIENTE_COLUMNS} FROM clientes WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Fetches a single client with resolved display names.
pub async fn find_detalle(pool: &PgPool, id: Uuid) -> Result<Option<ClienteResponse>, sqlx::Error> {
    sqlx::query_as::<_, ClienteResponse>(&format!("{CLIENTE_VIEW} WHERE c.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Inserts a fully-built client row.
pub async fn insert(pool: &PgPool, cliente: &Cliente) -> Result<(), sqlx::Error> {
    sqlx::query(&format!(
        "INSERT INTO clientes ({CLIENTE_COLUMNS}) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)"
    ))
    .bind(cliente.id)
    .bind(&cliente.nombre)
    .bind(&cliente.apellido)
    .bind(&cliente.email)
    .bind(&cliente.telefono)
    .bind(&cliente.direccion)
    .bind(cliente.fecha_nacimiento)
    .bind(cliente.fecha_inscripcion)
    .bind(cliente.plan_id)
    .bind(cliente.sistema_id)
    .bind(cliente.entrenador)
    .bind(cliente.pago_mensual)
    .bind(cliente.dia_de_pago)
    .bind(cliente.estado_del_mes)
    .bind(&cliente.notas)
    .bind(cliente.activo)
    .bind(cliente.created_at)
    .bind(cliente.updated_at)
    .execute(pool)
    .await
    .map(|_| ())
}

/// Applies a partial update and returns the updated row, or `None` if
/// the client does not exist. Omitted fields keep their stored value.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    cambios: &UpdateCliente,
) -> Result<Option<Cliente>, sqlx::Error> {
    sqlx::query_as::<_, Cliente>(&format!(
        "UPDATE clientes SET \
         nombre = COALESCE($2, nombre), \
         apellido = COALESCE($3, apellido), \
         email = COALESCE($4, email), \
         telefono = COALESCE($5, telefono), \
         direccion = COALESCE($6, direccion), \
         fecha_nacimiento = COALESCE($7, fecha_nacimiento), \
         fecha_inscripcion = COALESCE($8, fecha_inscripcion), \
         plan_id = COALESCE($9, plan_id), \
         sistema_id = COALESCE($10, sistema_id), \
         entrenador = COALESCE($11, entrenador), \
         pago_mensual = COALESCE($12, pago_mensual), \
         dia_de_pago = COALESCE($13, dia_de_pago), \
         estado_del_mes = COALESCE($14, estado_del_mes), \
         notas = COALESCE($15, notas), \
         updated_at = $16 \
         WHERE id = $1 \
         RETURNING {CLIENTE_COLUMNS}"
    ))
    .bind(id)
    .bind(&cambios.nombre)
    .bind(&cambios.apellido)
    .bind(&cambios.email)
    .bind(&cambios.telefono)
    .bind(&cambios.direccion)
    .bind(cambios.fecha_nacimiento)
    .bind(cambios.fecha_inscripcion)
    .bind(cambios.plan_id)
    .bind(cambios.sistema_id)
    .bind(cambios.entrenador)
    .bind(cambios.pago_mensual)
    .bind(cambios.dia_de_pago)
    .bind(cambios.estado_del_mes)
    .bind(&cambios.notas)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Marks a client inactive. Relations to trainers, plans and payments
/// are left untouched so history stays queryable.
pub async fn soft_delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE clientes SET activo = FALSE, updated_at = $2 WHERE id = $1")
        .bind(id)
        .bind(Utc::now())
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Flips the cached monthly status label.
pub async fn set_estado_del_mes(
    pool: &PgPool,
    id: Uuid,
    estado: EstadoDelMes,
) -> Result<bool, sqlx::Error> {
    let result =
        sqlx::query("UPDATE clientes SET estado_del_mes = $2, updated_at = $3 WHERE id = $1")
            .bind(id)
            .bind(estado)
            .bind(Utc::now())
            .execute(pool)
            .await?;
    Ok(result.rows_affected() > 0)
}

/// Counts active clients, total and by paid status, in one query.
pub async fn stats(pool: &PgPool) -> Result<(i64, i64), sqlx::Error> {
    sqlx::query_as::<_, (i64, i64)>(
        "SELECT COUNT(*), COUNT(*) FILTER (WHERE estado_del_mes = 'Pagado') \
         FROM clientes WHERE activo = TRUE",
    )
    .fetch_one(pool)
    .await
}
