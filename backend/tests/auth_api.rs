use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

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

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn register_login_me_logout_flow() {
    let _guard = support::integration_guard().await;
    let Some(pool) = support::try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    support::truncate_all(&pool).await;

    let app = router::app(pool.clone(), test_config());

    // signup opens a session
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            serde_json::json!({"email": "admin@example.com", "password": "super-secreta"}),
        ))
        .await
        .expect("register");
    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap().to_string())
        .expect("session cookie");
    let json = body_json(response).await;
    assert_eq!(json["email"], "admin@example.com");

    // the session cookie authenticates /me
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/auth/me")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("me");
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["email"], "admin@example.com");

    // logout drops the session
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("logout");
    assert_eq!(response.status(), StatusCode::OK);

    // the old cookie no longer works
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/auth/me")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("me after logout");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_rejects_bad_credentials_with_structured_error() {
    let _guard = support::integration_guard().await;
    let Some(pool) = support::try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    support::truncate_all(&pool).await;

    support::seed_usuario(&pool, "admin@example.com", "super-secreta").await;
    let app = router::app(pool.clone(), test_config());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            serde_json::json!({"email": "admin@example.com", "password": "equivocada"}),
        ))
        .await
        .expect("login");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert!(json["error"].as_str().unwrap().contains("incorrectos"));
}

#[tokio::test]
async fn register_validates_before_touching_the_database() {
    let _guard = support::integration_guard().await;
    let Some(pool) = support::try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    support::truncate_all(&pool).await;

    let app = router::app(pool.clone(), test_config());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            serde_json::json!({"email": "no-es-un-correo", "password": "corta"}),
        ))
        .await
        .expect("register");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let _guard = support::integration_guard().await;
    let Some(pool) = support::try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    support::truncate_all(&pool).await;

    support::seed_usuario(&pool, "admin@example.com", "super-secreta").await;
    let app = router::app(pool.clone(), test_config());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            serde_json::json!({"email": "admin@example.com", "password": "otra-clave-larga"}),
        ))
        .await
        .expect("register");
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn protected_routes_require_a_session() {
    let _guard = support::integration_guard().await;
    let Some(pool) = support::try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let app = router::app(pool.clone(), test_config());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/clientes")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("list clientes");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
