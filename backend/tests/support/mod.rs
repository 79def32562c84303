#![allow(dead_code)]

use std::sync::OnceLock;

use rust_decimal::Decimal;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tokio::sync::Mutex;
use uuid::Uuid;

use gestion_gym_backend::models::{
    cliente::{Cliente, CreateCliente},
    entrenador::{CreateEntrenador, Entrenador},
    plan::{CreatePlan, Plan},
    sistema::{CreateSistema, Sistema},
    usuario::Usuario,
};
use gestion_gym_backend::repositories::{
    auth as auth_repo, cliente as cliente_repo, entrenador as entrenador_repo, plan as plan_repo,
    sistema as sistema_repo,
};
use gestion_gym_backend::utils::password::hash_password;

/// Serializes database-backed tests within one test binary.
pub async fn integration_guard() -> tokio::sync::MutexGuard<'static, ()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD.get_or_init(|| Mutex::new(())).lock().await
}

/// Connects to `TEST_DATABASE_URL` and brings the schema up to date.
/// Returns `None` when the variable is unset so suites can skip on
/// machines without a disposable Postgres.
pub async fn try_test_pool() -> Option<PgPool> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("connect to test database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    Some(pool)
}

pub async fn truncate_all(pool: &PgPool) {
    sqlx::query(
        "TRUNCATE pagos, clientes, entrenadores, planes, sistemas, sesiones, usuarios CASCADE",
    )
    .execute(pool)
    .await
    .expect("truncate tables");
}

pub fn cliente_input(nombre: &str, apellido: &str, pago_mensual: &str) -> CreateCliente {
    CreateCliente {
        nombre: nombre.to_string(),
        apellido: apellido.to_string(),
        email: None,
        telefono: None,
        direccion: None,
        fecha_nacimiento: None,
        fecha_inscripcion: None,
        plan_id: None,
        sistema_id: None,
        entrenador: None,
        pago_mensual: pago_mensual.parse().expect("decimal literal"),
        dia_de_pago: 5,
        estado_del_mes: None,
        notas: None,
    }
}

pub async fn seed_cliente(pool: &PgPool, input: CreateCliente) -> Cliente {
    let hoy = chrono::Utc::now().date_naive();
    let cliente = Cliente::new(input, hoy);
    cliente_repo::insert(pool, &cliente)
        .await
        .expect("insert cliente");
    cliente
}

pub async fn seed_entrenador(
    pool: &PgPool,
    nombre: &str,
    apellido: &str,
    comision_porcentaje: &str,
) -> Entrenador {
    let entrenador = Entrenador::new(CreateEntrenador {
        nombre: nombre.to_string(),
        apellido: apellido.to_string(),
        email: None,
        telefono: None,
        fecha_nacimiento: None,
        comision_porcentaje: Some(
            comision_porcentaje
                .parse::<Decimal>()
                .expect("decimal literal"),
        ),
        notas: None,
        imagen_url: None,
    });
    entrenador_repo::insert(pool, &entrenador)
        .await
        .expect("insert entrenador");
    entrenador
}

pub async fn seed_plan(pool: &PgPool, nombre: &str) -> Plan {
    let plan = Plan::new(CreatePlan {
        nombre: nombre.to_string(),
        descripcion: None,
        activo: None,
    });
    plan_repo::insert(pool, &plan).await.expect("insert plan");
    plan
}

pub async fn seed_sistema(pool: &PgPool, nombre: &str) -> Sistema {
    let sistema = Sistema::new(CreateSistema {
        nombre: nombre.to_string(),
        descripcion: None,
        activo: None,
    });
    sistema_repo::insert(pool, &sistema)
        .await
        .expect("insert sistema");
    sistema
}

pub async fn seed_usuario(pool: &PgPool, email: &str, password: &str) -> Usuario {
    let usuario = Usuario::new(
        email.to_string(),
        hash_password(password).expect("hash password"),
    );
    auth_repo::insert_usuario(pool, &usuario)
        .await
        .expect("insert usuario");
    usuario
}

pub fn otro_uuid() -> Uuid {
    Uuid::new_v4()
}
