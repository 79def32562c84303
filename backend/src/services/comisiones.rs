//! Trainer commission estimates.
//!
//! The estimate is a heuristic: it multiplies the trainer's active
//! client count by an assumed average monthly payment, not by the
//! actual fees of those clients.

use rust_decimal::Decimal;

/// Estimated monthly commission for a trainer:
/// `clientes_count * pago_promedio * comision_porcentaje / 100`,
/// rounded to two decimal places.
pub fn comision_estimada(
    clientes_count: i64,
    pago_promedio: Decimal,
    comision_porcentaje: Decimal,
) -> Decimal {
    (Decimal::from(clientes_count) * pago_promedio * comision_porcentaje / Decimal::from(100))
        .round_dp(2)
}
