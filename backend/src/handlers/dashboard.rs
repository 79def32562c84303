//! Home view model: headline numbers for clients and collections.

use axum::{extract::State, Json};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;

use crate::{
    config::Config,
    error::AppError,
    models::{cliente::ClientesStats, pago::PagosStats},
    repositories::{cliente as cliente_repo, pago as pago_repo},
    services::stats::clientes_stats,
    utils::time::{hoy, mes_actual},
};

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub clientes: ClientesStats,
    pub pagos: PagosStats,
}

pub async fn get_dashboard(
    State((pool, config)): State<(PgPool, Config)>,
) -> Result<Json<DashboardResponse>, AppError> {
    let (total, pagados) = cliente_repo::stats(&pool).await?;

    let mes = mes_actual(config.time_zone);
    let (total_mes, cantidad_pagos_mes, total_hoy, cantidad_pagos_hoy) =
        pago_repo::stats(&pool, &mes, hoy(config.time_zone)).await?;

    Ok(Json(DashboardResponse {
        clientes: clientes_stats(total, pagados),
        pagos: PagosStats {
            mes,
            total_mes,
            cantidad_pagos_mes,
            total_hoy,
            cantidad_pagos_hoy,
        },
    }))
}
