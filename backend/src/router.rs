//! Route table and shared layers.

use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware as app_middleware;
use crate::{config::Config, docs, handlers};

/// Builds the full application router. Everything except signup/login
/// sits behind the session middleware.
pub fn app(pool: PgPool, config: Config) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login));

    let protected_routes = Router::new()
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/auth/me", get(handlers::auth::me))
        .route("/api/dashboard", get(handlers::dashboard::get_dashboard))
        .route(
            "/api/clientes",
            get(handlers::clientes::list_clientes).post(handlers::clientes::create_cliente),
        )
        .route(
            "/api/clientes/stats",
            get(handlers::clientes::get_clientes_stats),
        )
        .route(
            "/api/clientes/{id}",
            get(handlers::clientes::get_cliente)
                .put(handlers::clientes::update_cliente)
                .delete(handlers::clientes::delete_cliente),
        )
        .route(
            "/api/entrenadores",
            get(handlers::entrenadores::list_entrenadores)
                .post(handlers::entrenadores::create_entrenador),
        )
        .route(
            "/api/entrenadores/resumen",
            get(handlers::entrenadores::resumen_entrenadores),
        )
        .route(
            "/api/entrenadores/{id}",
            get(handlers::entrenadores::get_entrenador)
                .put(handlers::entrenadores::update_entrenador)
                .delete(handlers::entrenadores::delete_entrenador),
        )
        .route(
            "/api/pagos",
            get(handlers::pagos::list_pagos).post(handlers::pagos::create_pago),
        )
        .route("/api/pagos/stats", get(handlers::pagos::get_pagos_stats))
        .route("/api/pagos/registrar", post(handlers::pagos::registrar_pago))
        .route(
            "/api/pagos/{id}",
            get(handlers::pagos::get_pago)
                .put(handlers::pagos::update_pago)
                .delete(handlers::pagos::delete_pago),
        )
        .route(
            "/api/planes",
            get(handlers::planes::list_planes).post(handlers::planes::create_plan),
        )
        .route(
            "/api/planes/{id}",
            get(handlers::planes::get_plan)
                .put(handlers::planes::update_plan)
                .delete(handlers::planes::delete_plan),
        )
        .route(
            "/api/sistemas",
            get(handlers::sistemas::list_sistemas).post(handlers::sistemas::create_sistema),
        )
        .route(
            "/api/sistemas/{id}",
            get(handlers::sistemas::get_sistema)
                .put(handlers::sistemas::update_sistema)
                .delete(handlers::sistemas::delete_sistema),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            (pool.clone(), config.clone()),
            app_middleware::auth,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(app_middleware::request_id))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PUT,
                            Method::DELETE,
                            Method::OPTIONS,
                        ])
                        .allow_headers(Any)
                        .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state((pool, config))
}
