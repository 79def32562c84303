//! Models for payment records.
//!
//! A pago belongs to exactly one client and carries both the date it was
//! collected and the month it pays for, so a February fee can be settled
//! in January or March. The list of pagos for a client is the audit
//! trail behind the cached `estado_del_mes` label.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::rules::{
    validate_mes_correspondiente, validate_metodo_pago, validate_monto_no_negativo,
};

/// Accepted payment methods, as offered by the registration dialog.
pub const METODOS_PAGO: &[&str] = &[
    "Efectivo",
    "Tarjeta de Crédito",
    "Tarjeta de Débito",
    "Transferencia",
    "Otro",
];

/// Database representation of a payment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Pago {
    pub id: Uuid,
    pub cliente_id: Uuid,
    pub monto: Decimal,
    /// Date the money was collected.
    pub fecha_pago: NaiveDate,
    /// Month the payment settles, `YYYY-MM`. Independent of `fecha_pago`.
    pub mes_correspondiente: String,
    pub metodo_pago: String,
    /// Optional receipt reference.
    pub comprobante: Option<String>,
    pub notas: Option<String>,
    /// Session user who recorded the payment.
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a payment directly (outside the registration
/// dialog). `fecha_pago` defaults to today when omitted.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePago {
    pub cliente_id: Uuid,
    #[validate(custom(function = validate_monto_no_negativo))]
    pub monto: Decimal,
    pub fecha_pago: Option<NaiveDate>,
    #[validate(custom(function = validate_mes_correspondiente))]
    pub mes_correspondiente: String,
    #[validate(custom(function = validate_metodo_pago))]
    pub metodo_pago: String,
    pub comprobante: Option<String>,
    pub notas: Option<String>,
}

/// Payload for updating portions of an existing payment.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePago {
    #[validate(custom(function = validate_monto_no_negativo))]
    pub monto: Option<Decimal>,
    pub fecha_pago: Option<NaiveDate>,
    #[validate(custom(function = validate_mes_correspondiente))]
    pub mes_correspondiente: Option<String>,
    #[validate(custom(function = validate_metodo_pago))]
    pub metodo_pago: Option<String>,
    pub comprobante: Option<String>,
    pub notas: Option<String>,
}

/// Payload of the payment registration dialog. Every field except the
/// client defaults server-side: amount to the client's monthly fee,
/// date to today, month to the current month, method to cash.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegistrarPago {
    pub cliente_id: Uuid,
    #[validate(custom(function = validate_monto_no_negativo))]
    pub monto: Option<Decimal>,
    pub fecha_pago: Option<NaiveDate>,
    #[validate(custom(function = validate_mes_correspondiente))]
    pub mes_correspondiente: Option<String>,
    #[validate(custom(function = validate_metodo_pago))]
    pub metodo_pago: Option<String>,
    pub comprobante: Option<String>,
    pub notas: Option<String>,
}

/// Payment row as rendered in list and detail views, with the client
/// reference resolved to a display name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PagoResponse {
    pub id: Uuid,
    pub cliente_id: Uuid,
    pub cliente_nombre: Option<String>,
    pub monto: Decimal,
    pub fecha_pago: NaiveDate,
    pub mes_correspondiente: String,
    pub metodo_pago: String,
    pub comprobante: Option<String>,
    pub notas: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Collection totals for the payments list header and the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PagosStats {
    /// Month the stats were computed for, `YYYY-MM`.
    pub mes: String,
    pub total_mes: Decimal,
    pub cantidad_pagos_mes: i64,
    pub total_hoy: Decimal,
    pub cantidad_pagos_hoy: i64,
}

impl Pago {
    /// Builds a payment record with all defaults already resolved.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        cliente_id: Uuid,
        monto: Decimal,
        fecha_pago: NaiveDate,
        mes_correspondiente: String,
        metodo_pago: String,
        comprobante: Option<String>,
        notas: Option<String>,
        created_by: Option<Uuid>,
    ) -> Self {
        let now = Utc::now();
        Pago {
            id: Uuid::new_v4(),
            cliente_id,
            monto,
            fecha_pago,
            mes_correspondiente,
            metodo_pago,
            comprobante,
            notas,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }
}
