use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use gestion_gym_backend::models::cliente::EstadoDelMes;
use gestion_gym_backend::models::pago::Pago;
use gestion_gym_backend::repositories::{cliente as cliente_repo, pago as pago_repo};

#[path = "support/mod.rs"]
mod support;

fn pago_de(cliente_id: uuid::Uuid, monto: &str, fecha: NaiveDate, mes: &str) -> Pago {
    Pago::new(
        cliente_id,
        Decimal::from_str(monto).expect("decimal literal"),
        fecha,
        mes.to_string(),
        "Efectivo".to_string(),
        None,
        None,
        None,
    )
}

#[tokio::test]
async fn total_by_cliente_sums_monto_and_defaults_to_zero() {
    let _guard = support::integration_guard().await;
    let Some(pool) = support::try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    support::truncate_all(&pool).await;

    let con_pago = support::seed_cliente(&pool, support::cliente_input("Karla", "Padilla", "15000")).await;
    let sin_pago = support::seed_cliente(&pool, support::cliente_input("Zeta", "Mejia", "3000")).await;

    let fecha = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
    pago_repo::insert(&pool, &pago_de(con_pago.id, "15000.00", fecha, "2025-03"))
        .await
        .expect("insert pago");

    let total = pago_repo::total_by_cliente(&pool, con_pago.id)
        .await
        .expect("total");
    assert_eq!(total, Decimal::from_str("15000.00").unwrap());

    let total_vacio = pago_repo::total_by_cliente(&pool, sin_pago.id)
        .await
        .expect("total");
    assert_eq!(total_vacio, Decimal::ZERO);
}

#[tokio::test]
async fn registrar_inserts_pago_and_flips_estado_atomically() {
    let _guard = support::integration_guard().await;
    let Some(pool) = support::try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    support::truncate_all(&pool).await;

    let cliente = support::seed_cliente(&pool, support::cliente_input("Karla", "Padilla", "5000")).await;
    assert_eq!(cliente.estado_del_mes, EstadoDelMes::Pendiente);

    let fecha = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
    let pago = pago_de(cliente.id, "5000", fecha, "2025-04");
    pago_repo::registrar(&pool, &pago).await.expect("registrar");

    let recargado = cliente_repo::find_by_id(&pool, cliente.id)
        .await
        .expect("find cliente")
        .expect("cliente exists");
    assert_eq!(recargado.estado_del_mes, EstadoDelMes::Pagado);

    let pagos = pago_repo::list_by_cliente(&pool, cliente.id)
        .await
        .expect("list pagos");
    assert_eq!(pagos.len(), 1);
    assert_eq!(pagos[0].mes_correspondiente, "2025-04");
}

#[tokio::test]
async fn registrar_for_missing_cliente_leaves_no_pago_behind() {
    let _guard = support::integration_guard().await;
    let Some(pool) = support::try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    support::truncate_all(&pool).await;

    let fecha = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
    let pago = pago_de(support::otro_uuid(), "5000", fecha, "2025-04");

    let resultado = pago_repo::registrar(&pool, &pago).await;
    assert!(resultado.is_err());

    // the whole registration rolled back: no orphan payment row
    let existe = pago_repo::find_by_id(&pool, pago.id).await.expect("find");
    assert!(existe.is_none());
}

#[tokio::test]
async fn list_orders_by_fecha_pago_descending() {
    let _guard = support::integration_guard().await;
    let Some(pool) = support::try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    support::truncate_all(&pool).await;

    let cliente = support::seed_cliente(&pool, support::cliente_input("Karla", "Padilla", "5000")).await;

    let temprano = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    let tarde = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
    pago_repo::insert(&pool, &pago_de(cliente.id, "5000", temprano, "2025-01"))
        .await
        .expect("insert");
    pago_repo::insert(&pool, &pago_de(cliente.id, "5000", tarde, "2025-02"))
        .await
        .expect("insert");

    let pagos = pago_repo::list(&pool).await.expect("list");
    assert_eq!(pagos.len(), 2);
    assert_eq!(pagos[0].fecha_pago, tarde);
    assert_eq!(pagos[1].fecha_pago, temprano);
    // the list view resolves the client name
    assert_eq!(pagos[0].cliente_nombre.as_deref(), Some("Karla Padilla"));
}

#[tokio::test]
async fn stats_totals_by_month_and_day() {
    let _guard = support::integration_guard().await;
    let Some(pool) = support::try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    support::truncate_all(&pool).await;

    let cliente = support::seed_cliente(&pool, support::cliente_input("Karla", "Padilla", "5000")).await;

    let dia = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
    let otro_dia = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
    pago_repo::insert(&pool, &pago_de(cliente.id, "5000", dia, "2025-03"))
        .await
        .expect("insert");
    pago_repo::insert(&pool, &pago_de(cliente.id, "2500.50", otro_dia, "2025-03"))
        .await
        .expect("insert");
    pago_repo::insert(&pool, &pago_de(cliente.id, "9999", otro_dia, "2025-02"))
        .await
        .expect("insert");

    let (total_mes, cantidad_mes, total_dia, cantidad_dia) =
        pago_repo::stats(&pool, "2025-03", dia).await.expect("stats");

    assert_eq!(total_mes, Decimal::from_str("7500.50").unwrap());
    assert_eq!(cantidad_mes, 2);
    assert_eq!(total_dia, Decimal::from(5000));
    assert_eq!(cantidad_dia, 1);
}

#[tokio::test]
async fn delete_removes_the_row() {
    let _guard = support::integration_guard().await;
    let Some(pool) = support::try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    support::truncate_all(&pool).await;

    let cliente = support::seed_cliente(&pool, support::cliente_input("Karla", "Padilla", "5000")).await;
    let fecha = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
    let pago = pago_de(cliente.id, "5000", fecha, "2025-03");
    pago_repo::insert(&pool, &pago).await.expect("insert");

    assert!(pago_repo::delete(&pool, pago.id).await.expect("delete"));
    assert!(pago_repo::find_by_id(&pool, pago.id)
        .await
        .expect("find")
        .is_none());
    assert!(!pago_repo::delete(&pool, pago.id).await.expect("delete"));
}
