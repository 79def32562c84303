//! Common validation rules shared across request payloads.

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::models::pago::METODOS_PAGO;

/// Rejects negative money amounts.
pub fn validate_monto_no_negativo(monto: &Decimal) -> Result<(), ValidationError> {
    if monto.is_sign_negative() {
        return Err(ValidationError::new("monto_negativo"));
    }
    Ok(())
}

/// Validates a commission percentage (0-100).
pub fn validate_porcentaje(porcentaje: &Decimal) -> Result<(), ValidationError> {
    if porcentaje.is_sign_negative() || *porcentaje > Decimal::from(100) {
        return Err(ValidationError::new("porcentaje_fuera_de_rango"));
    }
    Ok(())
}

/// Validates a month key in `YYYY-MM` format.
///
/// Requirements:
/// - Exactly seven characters, `-` separator
/// - Four digit year, two digit month between 01 and 12
pub fn validate_mes_correspondiente(mes: &str) -> Result<(), ValidationError> {
    let bytes = mes.as_bytes();
    if !mes.is_ascii() || bytes.len() != 7 || bytes[4] != b'-' {
        return Err(ValidationError::new("mes_formato_invalido"));
    }

    if !mes[..4].chars().all(|c| c.is_ascii_digit())
        || !mes[5..].chars().all(|c| c.is_ascii_digit())
    {
        return Err(ValidationError::new("mes_formato_invalido"));
    }

    match mes[5..].parse::<u8>() {
        Ok(m) if (1..=12).contains(&m) => Ok(()),
        _ => Err(ValidationError::new("mes_formato_invalido")),
    }
}

/// Validates that the payment method is one of the known options.
pub fn validate_metodo_pago(metodo: &str) -> Result<(), ValidationError> {
    if METODOS_PAGO.contains(&metodo) {
        Ok(())
    } else {
        Err(ValidationError::new("metodo_pago_desconocido"))
    }
}
