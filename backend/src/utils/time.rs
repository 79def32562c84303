//! Gym-local date helpers. Payment defaults ("today", "current month")
//! are taken in the configured gym timezone, not UTC.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Today's date in the given timezone.
pub fn hoy(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Current month key in `YYYY-MM` format, in the given timezone.
pub fn mes_actual(tz: Tz) -> String {
    Utc::now().with_timezone(&tz).format("%Y-%m").to_string()
}

/// Month key (`YYYY-MM`) for an arbitrary date.
pub fn mes_de(fecha: NaiveDate) -> String {
    fecha.format("%Y-%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mes_actual_has_expected_format() {
        let mes = mes_actual(chrono_tz::America::Santo_Domingo);
        assert_eq!(mes.len(), 7);
        assert_eq!(mes.as_bytes()[4], b'-');
    }

    #[test]
    fn mes_de_formats_with_zero_padding() {
        let fecha = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(mes_de(fecha), "2025-03");
    }
}
