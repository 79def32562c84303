//! Payment listing, registration and bookkeeping endpoints.

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use sqlx::PgPool;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::{
        pago::{CreatePago, Pago, PagoResponse, PagosStats, RegistrarPago, UpdatePago},
        usuario::Usuario,
    },
    repositories::{cliente as cliente_repo, pago as pago_repo},
    utils::time::{hoy, mes_actual},
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct PagosListQuery {
    /// Restrict to payments settling this month (`YYYY-MM`).
    pub mes: Option<String>,
}

/// List view, newest first, optionally for a single month.
pub async fn list_pagos(
    State((pool, _config)): State<(PgPool, Config)>,
    Query(params): Query<PagosListQuery>,
) -> Result<Json<Vec<PagoResponse>>, AppError> {
    let pagos = match params.mes.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
        Some(mes) => pago_repo::list_by_mes(&pool, mes).await?,
        None => pago_repo::list(&pool).await?,
    };
    Ok(Json(pagos))
}

/// Collection totals for the current month and day.
pub async fn get_pagos_stats(
    State((pool, config)): State<(PgPool, Config)>,
) -> Result<Json<PagosStats>, AppError> {
    let mes = mes_actual(config.time_zone);
    let (total_mes, cantidad_pagos_mes, total_hoy, cantidad_pagos_hoy) =
        pago_repo::stats(&pool, &mes, hoy(config.time_zone)).await?;

    Ok(Json(PagosStats {
        mes,
        total_mes,
        cantidad_pagos_mes,
        total_hoy,
        cantidad_pagos_hoy,
    }))
}

/// Detail view.
pub async fn get_pago(
    State((pool, _config)): State<(PgPool, Config)>,
    Path(id): Path<Uuid>,
) -> Result<Json<PagoResponse>, AppError> {
    let pago = pago_repo::find_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Pago no encontrado".to_string()))?;
    Ok(Json(pago))
}

/// Records a payment without touching the client's monthly status.
/// The registration dialog flow is [`registrar_pago`].
pub async fn create_pago(
    State((pool, config)): State<(PgPool, Config)>,
    Extension(usuario): Extension<Usuario>,
    Json(payload): Json<CreatePago>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    if cliente_repo::find_by_id(&pool, payload.cliente_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Cliente no encontrado".to_string()));
    }

    let pago = Pago::new(
        payload.cliente_id,
        payload.monto,
        payload.fecha_pago.unwrap_or_else(|| hoy(config.time_zone)),
        payload.mes_correspondiente,
        payload.metodo_pago,
        payload.comprobante,
        payload.notas,
        Some(usuario.id),
    );
    pago_repo::insert(&pool, &pago).await?;
    Ok((StatusCode::CREATED, Json(pago)))
}

/// The payment registration dialog contract: defaults the amount to the
/// client's monthly fee, the date to today and the month to the current
/// one, then inserts the payment and flips `estado_del_mes` to `Pagado`
/// in a single transaction.
pub async fn registrar_pago(
    State((pool, config)): State<(PgPool, Config)>,
    Extension(usuario): Extension<Usuario>,
    Json(payload): Json<RegistrarPago>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cliente = cliente_repo::find_by_id(&pool, payload.cliente_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

    let pago = Pago::new(
        cliente.id,
        payload.monto.unwrap_or(cliente.pago_mensual),
        payload.fecha_pago.unwrap_or_else(|| hoy(config.time_zone)),
        payload
            .mes_correspondiente
            .unwrap_or_else(|| mes_actual(config.time_zone)),
        payload
            .metodo_pago
            .unwrap_or_else(|| "Efectivo".to_string()),
        payload.comprobante,
        payload.notas,
        Some(usuario.id),
    );
    pago_repo::registrar(&pool, &pago).await?;
    Ok((StatusCode::CREATED, Json(pago)))
}

pub async fn update_pago(
    State((pool, _config)): State<(PgPool, Config)>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePago>,
) -> Result<Json<Pago>, AppError> {
    payload.validate()?;

    let pago = pago_repo::update(&pool, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Pago no encontrado".to_string()))?;
    Ok(Json(pago))
}

/// Hard delete. Payments are the one entity without a soft-delete flag.
pub async fn delete_pago(
    State((pool, _config)): State<(PgPool, Config)>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = pago_repo::delete(&pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound("Pago no encontrado".to_string()));
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
