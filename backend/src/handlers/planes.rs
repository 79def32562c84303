//! Admin endpoints for membership plans.

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
    models::plan::{CreatePlan, Plan, UpdatePlan},
    repositories::plan as plan_repo,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct PlanesListQuery {
    /// Substring to search in nombre.
    pub q: Option<String>,
    #[serde(default)]
    pub incluir_inactivos: bool,
}

pub async fn list_planes(
    State((pool, _config)): State<(PgPool, Config)>,
    Query(params): Query<PlanesListQuery>,
) -> Result<Json<Vec<Plan>>, AppError> {
    let planes = match params.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => plan_repo::search(&pool, q).await?,
        None => plan_repo::list(&pool, params.incluir_inactivos).await?,
    };
    Ok(Json(planes))
}

pub async fn get_plan(
    State((pool, _config)): State<(PgPool, Config)>,
    Path(id): Path<Uuid>,
) -> Result<Json<Plan>, AppError> {
    let plan = plan_repo::find_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Plan no encontrado".to_string()))?;
    Ok(Json(plan))
}

pub async fn create_plan(
    State((pool, _config)): State<(PgPool, Config)>,
    Json(payload): Json<CreatePlan>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let plan = Plan::new(payload);
    plan_repo::insert(&pool, &plan).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

pub async fn update_plan(
    State((pool, _config)): State<(PgPool, Config)>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePlan>,
) -> Result<Json<Plan>, AppError> {
    payload.validate()?;

    let plan = plan_repo::update(&pool, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Plan no encontrado".to_string()))?;
    Ok(Json(plan))
}

/// Soft delete. Clients keep their `plan_id`; the name simply stops
/// being offered for new signups.
pub async fn delete_plan(
    State((pool, _config)): State<(PgPool, Config)>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = plan_repo::soft_delete(&pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound("Plan no encontrado".to_string()));
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
