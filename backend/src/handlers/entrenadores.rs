//! List, detail and form endpoints for trainers.

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
        cliente::ClienteResponse,
        entrenador::{CreateEntrenador, Entrenador, UpdateEntrenador},
    },
    repositories::{cliente as cliente_repo, entrenador as entrenador_repo},
    services::comisiones::comision_estimada,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct EntrenadoresListQuery {
    /// Substring to search in nombre and apellido.
    pub q: Option<String>,
}

/// Detail view model: the trainer, its assigned clients and the
/// estimated monthly commission.
#[derive(Debug, Serialize, ToSchema)]
pub struct EntrenadorDetalle {
    pub entrenador: Entrenador,
    pub clientes: Vec<ClienteResponse>,
    pub clientes_count: i64,
    pub comision_estimada: Decimal,
}

/// One row of the trainers overview table.
#[derive(Debug, Serialize, ToSchema)]
pub struct EntrenadorResumen {
    pub id: Uuid,
    pub nombre: String,
    pub apellido: String,
    pub comision_porcentaje: Decimal,
    pub clientes_count: i64,
    pub comision_estimada: Decimal,
}

/// List view, optionally filtered by a search term.
pub async fn list_entrenadores(
    State((pool, _config)): State<(PgPool, Config)>,
    Query(params): Query<EntrenadoresListQuery>,
) -> Result<Json<Vec<Entrenador>>, AppError> {
    let entrenadores = match params.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => entrenador_repo::search(&pool, q).await?,
        None => entrenador_repo::list_active(&pool).await?,
    };
    Ok(Json(entrenadores))
}

/// Overview with client counts and commission estimates per trainer.
/// One grouped query, regardless of how many trainers exist.
pub async fn resumen_entrenadores(
    State((pool, config)): State<(PgPool, Config)>,
) -> Result<Json<Vec<EntrenadorResumen>>, AppError> {
    let filas = entrenador_repo::clientes_por_entrenador(&pool).await?;

    let resumen = filas
        .into_iter()
        .map(|fila| {
            let estimado = comision_estimada(
                fila.clientes_count,
                config.pago_promedio_asumido,
                fila.comision_porcentaje,
            );
            EntrenadorResumen {
                id: fila.id,
                nombre: fila.nombre,
                apellido: fila.apellido,
                comision_porcentaje: fila.comision_porcentaje,
                clientes_count: fila.clientes_count,
                comision_estimada: estimado,
            }
        })
        .collect();

    Ok(Json(resumen))
}

/// Detail view.
pub async fn get_entrenador(
    State((pool, config)): State<(PgPool, Config)>,
    Path(id): Path<Uuid>,
) -> Result<Json<EntrenadorDetalle>, AppError> {
    let entrenador = entrenador_repo::find_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Entrenador no encontrado".to_string()))?;

    let clientes = cliente_repo::list_by_entrenador(&pool, id).await?;
    let clientes_count = entrenador_repo::count_clientes_activos(&pool, id).await?;
    let estimado = comision_estimada(
        clientes_count,
        config.pago_promedio_asumido,
        entrenador.comision_porcentaje,
    );

    Ok(Json(EntrenadorDetalle {
        entrenador,
        clientes,
        clientes_count,
        comision_estimada: estimado,
    }))
}

pub async fn create_entrenador(
    State((pool, _config)): State<(PgPool, Config)>,
    Json(payload): Json<CreateEntrenador>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let entrenador = Entrenador::new(payload);
    entrenador_repo::insert(&pool, &entrenador).await?;
    Ok((StatusCode::CREATED, Json(entrenador)))
}

pub async fn update_entrenador(
    State((pool, _config)): State<(PgPool, Config)>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEntrenador>,
) -> Result<Json<Entrenador>, AppError> {
    payload.validate()?;

    let entrenador = entrenador_repo::update(&pool, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Entrenador no encontrado".to_string()))?;
    Ok(Json(entrenador))
}

/// Soft delete: assigned clients keep pointing at the inactive trainer.
pub async fn delete_entrenador(
    State((pool, _config)): State<(PgPool, Config)>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = entrenador_repo::soft_delete(&pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound("Entrenador no encontrado".to_string()));
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
