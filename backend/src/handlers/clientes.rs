//! List, detail and form endpoints for clients.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::{
        cliente::{Cliente, ClienteResponse, ClientesStats, CreateCliente, EstadoDelMes, UpdateCliente},
        pago::Pago,
    },
    repositories::{cliente as cliente_repo, pago as pago_repo},
    services::stats::clientes_stats,
    utils::time::hoy,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ClientesListQuery {
    /// Substring to search in nombre, apellido and email.
    pub q: Option<String>,
    /// Restrict to one monthly status.
    pub estado: Option<EstadoDelMes>,
}

/// Detail view model: the client, its payment history and the total
/// collected from it.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClienteDetalle {
    pub cliente: ClienteResponse,
    pub pagos: Vec<Pago>,
    pub total_pagado: Decimal,
}

/// List view. With `q` it searches, with `estado` it filters; plain it
/// returns every active client ordered by name.
pub async fn list_clientes(
    State((pool, _config)): State<(PgPool, Config)>,
    Query(params): Query<ClientesListQuery>,
) -> Result<Json<Vec<ClienteResponse>>, AppError> {
    let q = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty());

    let mut clientes = match q {
        Some(q) => cliente_repo::search(&pool, q).await?,
        None => match params.estado {
            Some(estado) => cliente_repo::filter_by_estado(&pool, estado).await?,
            None => cliente_repo::list_active(&pool).await?,
        },
    };

    if q.is_some() {
        if let Some(estado) = params.estado {
            clientes.retain(|c| c.estado_del_mes == estado);
        }
    }

    Ok(Json(clientes))
}

/// Aggregate counters for the list header.
pub async fn get_clientes_stats(
    State((pool, _config)): State<(PgPool, Config)>,
) -> Result<Json<ClientesStats>, AppError> {
    let (total, pagados) = cliente_repo::stats(&pool).await?;
    Ok(Json(clientes_stats(total, pagados)))
}

/// Detail view.
pub async fn get_cliente(
    State((pool, _config)): State<(PgPool, Config)>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClienteDetalle>, AppError> {
    let cliente = cliente_repo::find_detalle(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

    let pagos = pago_repo::list_by_cliente(&pool, id).await?;
    let total_pagado = pago_repo::total_by_cliente(&pool, id).await?;

    Ok(Json(ClienteDetalle {
        cliente,
        pagos,
        total_pagado,
    }))
}

pub async fn create_cliente(
    State((pool, config)): State<(PgPool, Config)>,
    Json(payload): Json<CreateCliente>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cliente = Cliente::new(payload, hoy(config.time_zone));
    cliente_repo::insert(&pool, &cliente).await?;

    let persisted = cliente_repo::find_detalle(&pool, cliente.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;
    Ok((StatusCode::CREATED, Json(persisted)))
}

pub async fn update_cliente(
    State((pool, _config)): State<(PgPool, Config)>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCliente>,
) -> Result<Json<ClienteResponse>, AppError> {
    payload.validate()?;

    cliente_repo::update(&pool, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

    let persisted = cliente_repo::find_detalle(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;
    Ok(Json(persisted))
}

/// Soft delete: the client disappears from listings but keeps its
/// payment history and trainer assignment.
pub async fn delete_cliente(
    State((pool, _config)): State<(PgPool, Config)>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = cliente_repo::soft_delete(&pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound("Cliente no encontrado".to_string()));
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
