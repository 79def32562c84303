//! Models for gym clients and their monthly payment status.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::rules::validate_monto_no_negativo;

/// Database representation of a client.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Cliente {
    pub id: Uuid,
    pub nombre: String,
    pub apellido: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    /// Signup date, defaulted to "today" at creation time.
    pub fecha_inscripcion: NaiveDate,
    pub plan_id: Option<Uuid>,
    pub sistema_id: Option<Uuid>,
    /// Assigned trainer. Deactivating the trainer never rewrites this.
    pub entrenador: Option<Uuid>,
    pub pago_mensual: Decimal,
    /// Day of the month (1-31) the fee is due.
    pub dia_de_pago: i16,
    /// Cached label, flipped explicitly when a payment is registered.
    /// Never recomputed from payment history.
    pub estado_del_mes: EstadoDelMes,
    pub notas: Option<String>,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Monthly payment status stored on the client row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, ToSchema, Default)]
#[sqlx(type_name = "TEXT")]
pub enum EstadoDelMes {
    Pagado,
    #[default]
    Pendiente,
}

impl EstadoDelMes {
    /// Canonical label as stored in the database and shown in the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoDelMes::Pagado => "Pagado",
            EstadoDelMes::Pendiente => "Pendiente",
        }
    }
}

impl Serialize for EstadoDelMes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EstadoDelMes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "Pagado" => Ok(EstadoDelMes::Pagado),
            "Pendiente" => Ok(EstadoDelMes::Pendiente),
            // tolerate lowercased values from query strings
            "pagado" => Ok(EstadoDelMes::Pagado),
            "pendiente" => Ok(EstadoDelMes::Pendiente),
            other => Err(serde::de::Error::unknown_variant(
                other,
                &["Pagado", "Pendiente"],
            )),
        }
    }
}

/// Payload for creating a new client.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCliente {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    #[validate(length(min = 1, max = 100))]
    pub apellido: String,
    #[validate(email)]
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub fecha_inscripcion: Option<NaiveDate>,
    pub plan_id: Option<Uuid>,
    pub sistema_id: Option<Uuid>,
    pub entrenador: Option<Uuid>,
    #[validate(custom(function = validate_monto_no_negativo))]
    pub pago_mensual: Decimal,
    #[validate(range(min = 1, max = 31))]
    pub dia_de_pago: i16,
    pub estado_del_mes: Option<EstadoDelMes>,
    pub notas: Option<String>,
}

/// Payload for updating portions of an existing client.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCliente {
    #[validate(length(min = 1, max = 100))]
    pub nombre: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub apellido: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub fecha_inscripcion: Option<NaiveDate>,
    pub plan_id: Option<Uuid>,
    pub sistema_id: Option<Uuid>,
    pub entrenador: Option<Uuid>,
    #[validate(custom(function = validate_monto_no_negativo))]
    pub pago_mensual: Option<Decimal>,
    #[validate(range(min = 1, max = 31))]
    pub dia_de_pago: Option<i16>,
    pub estado_del_mes: Option<EstadoDelMes>,
    pub notas: Option<String>,
}

/// Client row as rendered in list and detail views, with plan, sistema
/// and trainer references resolved to display names. A dangling
/// reference degrades to `None` instead of failing the row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClienteResponse {
    pub id: Uuid,
    pub nombre: String,
    pub apellido: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub fecha_inscripcion: NaiveDate,
    pub plan_id: Option<Uuid>,
    pub plan: Option<String>,
    pub sistema_id: Option<Uuid>,
    pub sistema: Option<String>,
    pub entrenador: Option<Uuid>,
    pub entrenador_nombre: Option<String>,
    pub pago_mensual: Decimal,
    pub dia_de_pago: i16,
    pub estado_del_mes: EstadoDelMes,
    pub notas: Option<String>,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregate counters for the client list header and the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClientesStats {
    pub total_clientes: i64,
    pub clientes_pagados: i64,
    pub clientes_pendientes: i64,
    /// Share of active clients marked `Pagado`, rounded to the nearest
    /// whole percent.
    pub porcentaje_pagados: i64,
}

impl Cliente {
    /// Builds a new client from a validated payload. `hoy` is today's
    /// date in the gym timezone, used when no signup date was given.
    pub fn new(input: CreateCliente, hoy: NaiveDate) -> Self {
        let now = Utc::now();
        Cliente {
            id: Uuid::new_v4(),
            nombre: input.nombre,
            apellido: input.apellido,
            email: input.email,
            telefono: input.telefono,
            direccion: input.direccion,
            fecha_nacimiento: input.fecha_nacimiento,
            fecha_inscripcion: input.fecha_inscripcion.unwrap_or(hoy),
            plan_id: input.plan_id,
            sistema_id: input.sistema_id,
            entrenador: input.entrenador,
            pago_mensual: input.pago_mensual,
            dia_de_pago: input.dia_de_pago,
            estado_del_mes: input.estado_del_mes.unwrap_or_default(),
            notas: input.notas,
            activo: true,
            created_at: now,
            updated_at: now,
        }
    }
}
