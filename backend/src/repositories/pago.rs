//! Repository functions for payment rows.
//!
//! Payments have no active flag; listings are never filtered by
//! activity and always come back newest first.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::pago::{Pago, PagoResponse, UpdatePago};

const PAGO_COLUMNS: &str = "id, cliente_id, monto, fecha_pago, mes_correspondiente, \
     metodo_pago, comprobante, notas, created_by, created_at, updated_at";

const PAGO_VIEW: &str = "SELECT p.id, p.cliente_id, \
     c.nombre || ' ' || c.apellido AS cliente_nombre, p.monto, p.fecha_pago, \
     p.mes_correspondiente, p.metodo_pago, p.comprobante, p.notas, p.created_by, \
     p.created_at, p.updated_at \
     FROM pagos p \
     LEFT JOIN clientes c ON c.id = p.cliente_id";

/// Fetches all payments, newest first.
pub async fn list(pool: &PgPool) -> Result<Vec<PagoResponse>, sqlx::Error> {
    sqlx::query_as::<_, PagoResponse>(&format!("{PAGO_VIEW} ORDER BY p.fecha_pago DESC"))
        .fetch_all(pool)
        .await
}

/// Fetches the payments settling a given month (`YYYY-MM`).
pub async fn list_by_mes(pool: &PgPool, mes: &str) -> Result<Vec<PagoResponse>, sqlx::Error> {
    sqlx::query_as::<_, PagoResponse>(&format!(
        "{PAGO_VIEW} WHERE p.mes_correspondiente = $1 ORDER BY p.fecha_pago DESC"
    ))
    .bind(mes)
    .fetch_all(pool)
    .await
}

/// Audit trail for one client, newest first.
pub async fn list_by_cliente(pool: &PgPool, cliente_id: Uuid) -> Result<Vec<Pago>, sqlx::Error> {
    sqlx::query_as::<_, Pago>(&format!(
        "SELECT {PAGO_COLUMNS} FROM pagos WHERE cliente_id = $1 ORDER BY fecha_pago DESC"
    ))
    .bind(cliente_id)
    .fetch_all(pool)
    .await
}

/// Fetches a single payment with the client name resolved.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<PagoResponse>, sqlx::Error> {
    sqlx::query_as::<_, PagoResponse>(&format!("{PAGO_VIEW} WHERE p.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Inserts a fully-built payment row.
pub async fn insert(pool: &PgPool, pago: &Pago) -> Result<(), sqlx::Error> {
    sqlx::query(&format!(
        "INSERT INTO pagos ({PAGO_COLUMNS}) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)"
    ))
    .bind(pago.id)
    .bind(pago.cliente_id)
    .bind(pago.monto)
    .bind(pago.fecha_pago)
    .bind(&pago.mes_correspondiente)
    .bind(&pago.metodo_pago)
    .bind(&pago.comprobante)
    .bind(&pago.notas)
    .bind(pago.created_by)
    .bind(pago.created_at)
    .bind(pago.updated_at)
    .execute(pool)
    .await
    .map(|_| ())
}

/// Registers a payment and flips the client's monthly status to
/// `Pagado` in a single transaction. Either write failing rolls back
/// both, so a payment row can never exist with the status unflipped.
pub async fn registrar(pool: &PgPool, pago: &Pago) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(&format!(
        "INSERT INTO pagos ({PAGO_COLUMNS}) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)"
    ))
    .bind(pago.id)
    .bind(pago.cliente_id)
    .bind(pago.monto)
    .bind(pago.fecha_pago)
    .bind(&pago.mes_correspondiente)
    .bind(&pago.metodo_pago)
    .bind(&pago.comprobante)
    .bind(&pago.notas)
    .bind(pago.created_by)
    .bind(pago.created_at)
    .bind(pago.updated_at)
    .execute(&mut *tx)
    .await?;

    let updated =
        sqlx::query("UPDATE clientes SET estado_del_mes = 'Pagado', updated_at = $2 WHERE id = $1")
            .bind(pago.cliente_id)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;
    if updated.rows_affected() == 0 {
        // client vanished between lookup and write; dropping tx rolls
        // the insert back
        return Err(sqlx::Error::RowNotFound);
    }

    tx.commit().await?;
    Ok(())
}

/// Applies a partial update and returns the updated row.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    cambios: &UpdatePago,
) -> Result<Option<Pago>, sqlx::Error> {
    sqlx::query_as::<_, Pago>(&format!(
        "UPDATE pagos SET \
         monto = COALESCE($2, monto), \
         fecha_pago = COALESCE($3, fecha_pago), \
         mes_correspondiente = COALESCE($4, mes_correspondiente), \
         metodo_pago = COALESCE($5, metodo_pago), \
         comprobante = COALESCE($6, comprobante), \
         notas = COALESCE($7, notas), \
         updated_at = $8 \
         WHERE id = $1 \
         RETURNING {PAGO_COLUMNS}"
    ))
    .bind(id)
    .bind(cambios.monto)
    .bind(cambios.fecha_pago)
    .bind(&cambios.mes_correspondiente)
    .bind(&cambios.metodo_pago)
    .bind(&cambios.comprobante)
    .bind(&cambios.notas)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Hard-deletes a payment. The one entity without soft delete.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM pagos WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Sum of all payments recorded for a client; zero when there are none.
pub async fn total_by_cliente(pool: &PgPool, cliente_id: Uuid) -> Result<Decimal, sqlx::Error> {
    sqlx::query_scalar::<_, Decimal>(
        "SELECT COALESCE(SUM(monto), 0) FROM pagos WHERE cliente_id = $1",
    )
    .bind(cliente_id)
    .fetch_one(pool)
    .await
}

/// Collection totals for a month and a day, in one query:
/// `(total_mes, cantidad_pagos_mes, total_hoy, cantidad_pagos_hoy)`.
pub async fn stats(
    pool: &PgPool,
    mes: &str,
    hoy: NaiveDate,
) -> Result<(Decimal, i64, Decimal, i64), sqlx::Error> {
    sqlx::query_as::<_, (Decimal, i64, Decimal, i64)>(
        "SELECT \
         COALESCE(SUM(monto) FILTER (WHERE mes_correspondiente = $1), 0), \
         COUNT(*) FILTER (WHERE mes_correspondiente = $1), \
         COALESCE(SUM(monto) FILTER (WHERE fecha_pago = $2), 0), \
         COUNT(*) FILTER (WHERE fecha_pago = $2) \
         FROM pagos",
    )
    .bind(mes)
    .bind(hoy)
    .fetch_one(pool)
    .await
}
