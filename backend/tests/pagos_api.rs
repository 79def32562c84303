use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

use gestion_gym_backend::models::cliente::EstadoDelMes;
use gestion_gym_backend::repositories::cliente as cliente_repo;
use gestion_gym_backend::{config::Config, router};

#[path = "support/mod.rs"]
mod support;

fn test_config() -> Config {
    Config {
        database_url: String::new(),
        port: 0,
        session_ttl_hours: 1,
        cookie_secure: false,
        time_zone: chrono_tz::America::Santo_Domingo,
        pago_promedio_asumido: rust_decimal::Decimal::from(2000),
    }
}

async fn abrir_sesion(app: &axum::Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({"email": "caja@example.com", "password": "super-secreta"})
                        .to_string(),
                ))
                .expect("build request"),
        )
        .await
        .expect("register");
    assert_eq!(response.status(), StatusCode::CREATED);
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap().to_string())
        .expect("session cookie")
}

#[tokio::test]
async fn registrar_defaults_amount_method_and_flips_estado() {
    let _guard = support::integration_guard().await;
    let Some(pool) = support::try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    support::truncate_all(&pool).await;

    let cliente = support::seed_cliente(&pool, support::cliente_input("Karla", "Padilla", "5000")).await;

    let app = router::app(pool.clone(), test_config());
    let cookie = abrir_sesion(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/pagos/registrar")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, &cookie)
                .body(Body::from(
                    serde_json::json!({"cliente_id": cliente.id}).to_string(),
                ))
                .expect("build request"),
        )
        .await
        .expect("registrar");
    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let pago: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    // defaults: monthly fee as amount, cash as method
    assert_eq!(pago["monto"], "5000");
    assert_eq!(pago["metodo_pago"], "Efectivo");
    assert_eq!(pago["cliente_id"], cliente.id.to_string());

    // the same write flipped the cached status
    let recargado = cliente_repo::find_by_id(&pool, cliente.id)
        .await
        .expect("find cliente")
        .expect("cliente exists");
    assert_eq!(recargado.estado_del_mes, EstadoDelMes::Pagado);
}

#[tokio::test]
async fn registrar_unknown_cliente_is_not_found() {
    let _guard = support::integration_guard().await;
    let Some(pool) = support::try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    support::truncate_all(&pool).await;

    let app = router::app(pool.clone(), test_config());
    let cookie = abrir_sesion(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/pagos/registrar")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, &cookie)
                .body(Body::from(
                    serde_json::json!({"cliente_id": support::otro_uuid()}).to_string(),
                ))
                .expect("build request"),
        )
        .await
        .expect("registrar");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
