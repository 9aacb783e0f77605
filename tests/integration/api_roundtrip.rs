//! Serve the built-in records over HTTP and read them back through the client

use std::time::Duration;

use pretty_assertions::assert_eq;
use quantika::api::InventoryClient;
use quantika::report::{build_report, ReportKind, ReportOptions};
use quantika::server;
use serde_json::json;
use quantika::filters::{ProductFilter, Selector};
use quantika::store::{seed, Stores};
use tokio::net::TcpListener;

use crate::common::logging::{init_test_logging, log_test_step};
use crate::common::test_data::date;

async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server::serve(listener, Stores::in_memory()));
    format!("http://{}", addr)
}

#[test_log::test(tokio::test)]
async fn test_client_reads_every_endpoint() {
    init_test_logging();
    log_test_step("Fetching all collections over HTTP");

    let base = spawn_server().await;
    let client = InventoryClient::new(&base, Duration::from_secs(5)).unwrap();
    let stores = Stores::from_source(client);

    let products = stores.products.fetch_products().await.unwrap();
    let movements = stores.movements.fetch_movements().await.unwrap();
    let users = stores.users.fetch_users().await.unwrap();

    assert_eq!(products, seed::products());
    assert_eq!(movements, seed::movements());
    assert_eq!(users, seed::users());
}

#[test_log::test(tokio::test)]
async fn test_wire_format_uses_portuguese_keys() {
    let base = spawn_server().await;

    let body: serde_json::Value = reqwest::get(format!("{}/api/produtos", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let first = &body[0];
    assert_eq!(first["nome"], "Ácido Sulfúrico");
    assert_eq!(first["quantidade"], json!(150));
    assert_eq!(first["estoqueMinimo"], json!(50));
    assert_eq!(first["status"], "normal");
    assert_eq!(first["qualidade"], "aprovado");

    let movements: serde_json::Value = reqwest::get(format!("{}/api/movimentacoes", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(movements[0]["quantidade"], json!(50));
    assert_eq!(movements[0]["observacoes"], "Reposição mensal");
    assert_eq!(movements[1]["tipo"], "saida");
    assert_eq!(movements[1]["produtoId"], 2);

    let health = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert!(health.status().is_success());
}

#[test_log::test(tokio::test)]
async fn test_dashboard_report_over_http() {
    let base = spawn_server().await;
    let stores = Stores::from_source(InventoryClient::new(&base, Duration::from_secs(5)).unwrap());
    let options = ReportOptions {
        product_filter: ProductFilter::default(),
        movement_type: Selector::All,
        quality: Selector::All,
        today: date(2024, 1, 20),
        expiry_window_days: 30,
    };

    let lines = build_report(ReportKind::Dashboard, &stores, &options).await.unwrap();
    assert_eq!(lines[1], "  Total de Produtos:   8");
    assert_eq!(lines[4], "  Qualidade Aprovada:  4");
    // Five products need attention
    assert_eq!(lines.len(), 7 + 5);
}
