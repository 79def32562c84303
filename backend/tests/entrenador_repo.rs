use rust_decimal::Decimal;
use std::str::FromStr;

use gestion_gym_backend::repositories::{cliente as cliente_repo, entrenador as entrenador_repo};
use gestion_gym_backend::services::comisiones::comision_estimada;

#[path = "support/mod.rs"]
mod support;

#[tokio::test]
async fn clientes_por_entrenador_counts_only_active_clients() {
    let _guard = support::integration_guard().await;
    let Some(pool) = support::try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    support::truncate_all(&pool).await;

    let ana = support::seed_entrenador(&pool, "Ana", "Ruiz", "15").await;
    let mario = support::seed_entrenador(&pool, "Mario", "Lopez", "10").await;

    for nombre in ["Karla", "Zeta", "Caro"] {
        let mut input = support::cliente_input(nombre, "Cliente", "2000");
        input.entrenador = Some(ana.id);
        support::seed_cliente(&pool, input).await;
    }
    // one of Ana's clients churns; the count must drop with it
    let clientes_ana = cliente_repo::list_by_entrenador(&pool, ana.id)
        .await
        .expect("list by entrenador");
    cliente_repo::soft_delete(&pool, clientes_ana[0].id)
        .await
        .expect("soft delete");

    let resumen = entrenador_repo::clientes_por_entrenador(&pool)
        .await
        .expect("grouped counts");
    assert_eq!(resumen.len(), 2);

    let fila_ana = resumen.iter().find(|f| f.id == ana.id).expect("ana row");
    assert_eq!(fila_ana.clientes_count, 2);

    let fila_mario = resumen.iter().find(|f| f.id == mario.id).expect("mario row");
    assert_eq!(fila_mario.clientes_count, 0);
}

#[tokio::test]
async fn trainer_and_client_end_to_end() {
    let _guard = support::integration_guard().await;
    let Some(pool) = support::try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    support::truncate_all(&pool).await;

    let ana = support::seed_entrenador(&pool, "Ana", "Ruiz", "15").await;

    let mut input = support::cliente_input("Karla", "Padilla", "5000");
    input.entrenador = Some(ana.id);
    let cliente = support::seed_cliente(&pool, input).await;

    // the client detail view shows the trainer's full name
    let detalle = cliente_repo::find_detalle(&pool, cliente.id)
        .await
        .expect("find detalle")
        .expect("cliente exists");
    assert_eq!(detalle.entrenador_nombre.as_deref(), Some("Ana Ruiz"));

    // the trainer's estimate applies her 15% to the assumed average
    let count = entrenador_repo::count_clientes_activos(&pool, ana.id)
        .await
        .expect("count");
    assert_eq!(count, 1);
    let estimado = comision_estimada(count, Decimal::from(2000), ana.comision_porcentaje);
    assert_eq!(estimado, Decimal::from_str("300.00").unwrap());
}

#[tokio::test]
async fn soft_delete_keeps_client_assignment() {
    let _guard = support::integration_guard().await;
    let Some(pool) = support::try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    support::truncate_all(&pool).await;

    let ana = support::seed_entrenador(&pool, "Ana", "Ruiz", "15").await;
    let mut input = support::cliente_input("Karla", "Padilla", "5000");
    input.entrenador = Some(ana.id);
    let cliente = support::seed_cliente(&pool, input).await;

    assert!(entrenador_repo::soft_delete(&pool, ana.id)
        .await
        .expect("soft delete"));

    let listado = entrenador_repo::list_active(&pool).await.expect("list");
    assert!(listado.iter().all(|e| e.id != ana.id));

    let leida = entrenador_repo::find_by_id(&pool, ana.id)
        .await
        .expect("find")
        .expect("row still present");
    assert!(!leida.activo);

    // the client still points at the now-inactive trainer
    let recargado = cliente_repo::find_by_id(&pool, cliente.id)
        .await
        .expect("find cliente")
        .expect("cliente exists");
    assert_eq!(recargado.entrenador, Some(ana.id));
}

#[tokio::test]
async fn search_matches_nombre_and_apellido() {
    let _guard = support::integration_guard().await;
    let Some(pool) = support::try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    support::truncate_all(&pool).await;

    support::seed_entrenador(&pool, "Ana", "Ruiz", "15").await;
    support::seed_entrenador(&pool, "Mario", "Lopez", "10").await;

    let por_nombre = entrenador_repo::search(&pool, "an").await.expect("search");
    assert_eq!(por_nombre.len(), 1);
    assert_eq!(por_nombre[0].nombre, "Ana");

    let por_apellido = entrenador_repo::search(&pool, "LOP").await.expect("search");
    assert_eq!(por_apellido.len(), 1);
    assert_eq!(por_apellido[0].apellido, "Lopez");
}
