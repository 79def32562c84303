use anyhow::anyhow;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub session_ttl_hours: u64,
    pub cookie_secure: bool,
    pub time_zone: Tz,
    /// Assumed average monthly payment used for trainer commission
    /// estimates when no per-client figure is available.
    pub pago_promedio_asumido: Decimal,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/gestion_gym".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        let session_ttl_hours = env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| "72".to_string())
            .parse()
            .unwrap_or(72);

        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let time_zone_name =
            env::var("APP_TIMEZONE").unwrap_or_else(|_| "America/Santo_Domingo".to_string());
        let time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid APP_TIMEZONE value: {}", time_zone_name))?;

        let pago_promedio_raw =
            env::var("PAGO_PROMEDIO_ASUMIDO").unwrap_or_else(|_| "2000".to_string());
        let pago_promedio_asumido = Decimal::from_str(&pago_promedio_raw)
            .map_err(|_| anyhow!("Invalid PAGO_PROMEDIO_ASUMIDO value: {}", pago_promedio_raw))?;

        Ok(Config {
            database_url,
            port,
            session_ttl_hours,
            cookie_secure,
            time_zone,
            pago_promedio_asumido,
        })
    }
}
