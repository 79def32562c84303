//! Models for trainers and their commission data.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::rules::validate_porcentaje;

/// Database representation of a trainer. Deletion is always soft
/// (`activo = false`) so clients keep their historical assignment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Entrenador {
    pub id: Uuid,
    pub nombre: String,
    pub apellido: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    /// Commission over collected monthly fees, 0-100.
    pub comision_porcentaje: Decimal,
    pub notas: Option<String>,
    pub imagen_url: Option<String>,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entrenador {
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }

    /// Builds a new trainer from a validated payload.
    pub fn new(input: CreateEntrenador) -> Self {
        let now = Utc::now();
        Entrenador {
            id: Uuid::new_v4(),
            nombre: input.nombre,
            apellido: input.apellido,
            email: input.email,
            telefono: input.telefono,
            fecha_nacimiento: input.fecha_nacimiento,
            comision_porcentaje: input.comision_porcentaje.unwrap_or_default(),
            notas: input.notas,
            imagen_url: input.imagen_url,
            activo: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Payload for creating a new trainer.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEntrenador {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    #[validate(length(min = 1, max = 100))]
    pub apellido: String,
    #[validate(email)]
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    #[validate(custom(function = validate_porcentaje))]
    pub comision_porcentaje: Option<Decimal>,
    pub notas: Option<String>,
    pub imagen_url: Option<String>,
}

/// Payload for updating portions of an existing trainer.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEntrenador {
    #[validate(length(min = 1, max = 100))]
    pub nombre: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub apellido: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    #[validate(custom(function = validate_porcentaje))]
    pub comision_porcentaje: Option<Decimal>,
    pub notas: Option<String>,
    pub imagen_url: Option<String>,
}

/// One row of the grouped clients-per-trainer count.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EntrenadorClientes {
    pub id: Uuid,
    pub nombre: String,
    pub apellido: String,
    pub comision_porcentaje: Decimal,
    pub clientes_count: i64,
}
