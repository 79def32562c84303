//! Models for gym systems (branch / membership tier labels).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A gym system. Same id-reference pattern as plans.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Sistema {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sistema {
    pub fn new(input: CreateSistema) -> Self {
        let now = Utc::now();
        Sistema {
            id: Uuid::new_v4(),
            nombre: input.nombre,
            descripcion: input.descripcion,
            activo: input.activo.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Payload for creating a sistema.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSistema {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: Option<bool>,
}

/// Payload for updating portions of a sistema.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSistema {
    #[validate(length(min = 1, max = 100))]
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub activo: Option<bool>,
}
