//! Admin endpoints for gym systems.

use axum::{
    extract::{Path, Query, State},
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
    models::sistema::{CreateSistema, Sistema, UpdateSistema},
    repositories::sistema as sistema_repo,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SistemasListQuery {
    /// Substring to search in nombre.
    pub q: Option<String>,
    #[serde(default)]
    pub incluir_inactivos: bool,
}

pub async fn list_sistemas(
    State((pool, _config)): State<(PgPool, Config)>,
    Query(params): Query<SistemasListQuery>,
) -> Result<Json<Vec<Sistema>>, AppError> {
    let sistemas = match params.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => sistema_repo::search(&pool, q).await?,
        None => sistema_repo::list(&pool, params.incluir_inactivos).await?,
    };
    Ok(Json(sistemas))
}

pub async fn get_sistema(
    State((pool, _config)): State<(PgPool, Config)>,
    Path(id): Path<Uuid>,
) -> Result<Json<Sistema>, AppError> {
    let sistema = sistema_repo::find_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Sistema no encontrado".to_string()))?;
    Ok(Json(sistema))
}

pub async fn create_sistema(
    State((pool, _config)): State<(PgPool, Config)>,
    Json(payload): Json<CreateSistema>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let sistema = Sistema::new(payload);
    sistema_repo::insert(&pool, &sistema).await?;
    Ok((StatusCode::CREATED, Json(sistema)))
}

pub async fn update_sistema(
    State((pool, _config)): State<(PgPool, Config)>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSistema>,
) -> Result<Json<Sistema>, AppError> {
    payload.validate()?;

    let sistema = sistema_repo::update(&pool, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Sistema no encontrado".to_string()))?;
    Ok(Json(sistema))
}

pub async fn delete_sistema(
    State((pool, _config)): State<(PgPool, Config)>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = sistema_repo::soft_delete(&pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound("Sistema no encontrado".to_string()));
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
