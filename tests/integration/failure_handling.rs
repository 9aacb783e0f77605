//! HTTP failures surface as typed errors and never clobber what a view shows

use std::time::Duration;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use quantika::api::InventoryClient;
use quantika::store::{seed, StoreError, Stores};
use quantika::ui::dashboard::DashboardView;
use quantika::ui::movements::MovementsView;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::logging::{init_test_logging, log_test_step};
use crate::common::test_data::date;

fn stores_for(server: &MockServer) -> Stores {
    Stores::from_source(InventoryClient::new(&server.uri(), Duration::from_secs(5)).unwrap())
}

#[test_log::test(tokio::test)]
async fn test_server_error_maps_to_status() {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/produtos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = stores_for(&server).products.fetch_products().await;
    assert_matches!(result, Err(StoreError::Status { status: 500, .. }));
}

#[test_log::test(tokio::test)]
async fn test_unknown_status_value_is_a_decode_error() {
    let server = MockServer::start().await;
    let mut product = serde_json::to_value(&seed::products()[0]).unwrap();
    product["status"] = json!("esgotado");
    Mock::given(method("GET"))
        .and(path("/api/produtos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([product])))
        .mount(&server)
        .await;

    let result = stores_for(&server).products.fetch_products().await;
    assert_matches!(result, Err(StoreError::Decode { .. }));
}

#[test_log::test(tokio::test)]
async fn test_dashboard_keeps_snapshot_when_refresh_fails() {
    init_test_logging();
    log_test_step("Loading dashboard from built-in records, then refreshing against a failing API");

    let mut view = DashboardView::new(30);
    view.load_at(&Stores::in_memory(), date(2024, 1, 20)).await;
    let before = view.snapshot.clone();
    assert_eq!(before.stats.total_products, 8);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    view.load_at(&stores_for(&server), date(2024, 1, 20)).await;
    assert_eq!(view.snapshot, before);
    assert!(view.loaded);
}

#[test_log::test(tokio::test)]
async fn test_movements_need_both_collections() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/movimentacoes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seed::movements()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/produtos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut view = MovementsView::new();
    view.load(&stores_for(&server)).await;
    assert!(view.movements.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_movement_for_unknown_product_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/movimentacoes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 7,
            "produtoId": 99,
            "tipo": "entrada",
            "quantidade": 12,
            "data": "2024-01-18",
            "usuario": "Mireli Scarton"
        }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/produtos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seed::products()))
        .mount(&server)
        .await;

    let mut view = MovementsView::new();
    view.load(&stores_for(&server)).await;

    assert_eq!(view.movements.len(), 1);
    let movement = &view.movements[0];
    assert!(movement.product.is_none());
    assert_eq!(movement.product_label(), "Produto ID 99");
    assert_eq!(movement.unit_label(), "un");
    assert_eq!(movement.signed_quantity(), "+12");
    assert_eq!(movement.movement.notes, "");
}
