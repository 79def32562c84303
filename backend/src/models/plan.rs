//! Models for membership plans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A membership plan. Clients reference plans by id; renaming a plan is
/// reflected everywhere at read time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Plan {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    pub fn new(input: CreatePlan) -> Self {
        let now = Utc::now();
        Plan {
            id: Uuid::new_v4(),
            nombre: input.nombre,
            descripcion: input.descripcion,
            activo: input.activo.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Payload for creating a plan.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePlan {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: Option<bool>,
}

/// Payload for updating portions of a plan.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePlan {
    #[validate(length(min = 1, max = 100))]
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub activo: Option<bool>,
}
