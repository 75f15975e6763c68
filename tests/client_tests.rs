//! Integration tests for `MoySkladClient`.
//!
//! Every test points the client at a wiremock server and checks the path,
//! query and body of the outgoing request together with the parsed reply.

use moysklad_api::api::entities::stock::{
    CurrentStockParams, StockMode, StockReportParams, StockType,
};
use moysklad_api::api::entities::{
    CreateCustomEntityElement, CreateDemand, CreateProduct, Product, UpdateProduct,
    UpdateStore,
};
use moysklad_api::api::{EntityRef, Field, ListParams, PositionInput, RequestError};
use moysklad_api::{BaseUrl, HttpError, MoySkladClient, MoySkladConfig};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> MoySkladClient {
    let config = MoySkladConfig::builder()
        .login("admin@company")
        .password("secret")
        .base_url(server.uri())
        .auto_retry_count(1)
        .auto_retry_delay(0.0)
        .build()
        .unwrap();
    MoySkladClient::new(config).unwrap()
}

fn product_json(server: &MockServer, id: &str, name: &str) -> serde_json::Value {
    json!({
        "meta": {
            "href": format!("{}/entity/product/{id}", server.uri()),
            "type": "product",
            "mediaType": "application/json"
        },
        "id": id,
        "name": name,
        "salePrices": [
            {"value": 15000.0, "priceType": {"name": "Цена продажи"}}
        ],
        "archived": false
    })
}

// ============================================================================
// Catalog CRUD
// ============================================================================

#[tokio::test]
async fn test_get_products_returns_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity/product"))
        .and(query_param("limit", "2"))
        .and(query_param("filter", "archived=false;pathName=Чай"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"href": format!("{}/entity/product", server.uri()), "size": 2, "limit": 2, "offset": 0},
            "rows": [
                product_json(&server, "p-1", "Чай зелёный"),
                product_json(&server, "p-2", "Чай чёрный")
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = ListParams::new()
        .limit(2)
        .filter("archived=false")
        .filter("pathName=Чай");

    let page = assert_ok!(client.get_products(params).await);
    assert_eq!(page.total(), Some(2));
    assert!(!page.has_next_page());
    let names: Vec<_> = page.rows.iter().filter_map(|p| p.name.as_deref()).collect();
    assert_eq!(names, vec!["Чай зелёный", "Чай чёрный"]);
    assert_eq!(page.rows[0].sale_prices.as_ref().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_get_product_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity/product/p-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(product_json(&server, "p-1", "Чай зелёный")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let product = assert_ok!(client.get_product("p-1").await);

    assert_eq!(product.id.as_deref(), Some("p-1"));
    assert_eq!(product.meta.as_ref().and_then(|m| m.id()), Some("p-1"));
}

#[tokio::test]
async fn test_create_product_sends_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/entity/product"))
        .and(body_json(json!({"name": "Чай зелёный", "article": "TEA-01"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(product_json(&server, "p-9", "Чай зелёный")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut request = CreateProduct::new("Чай зелёный");
    request.article = "TEA-01".to_string().into();

    let product = assert_ok!(client.create_product(&request).await);
    assert_eq!(product.id.as_deref(), Some("p-9"));
}

#[tokio::test]
async fn test_update_product_sends_null_for_cleared_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/entity/product/p-1"))
        .and(body_json(json!({"name": "Чай улун", "description": null})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(product_json(&server, "p-1", "Чай улун")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut update = UpdateProduct::new("p-1");
    update.name = "Чай улун".to_string().into();
    update.description = Field::Null;

    let product = assert_ok!(client.update_product(&update).await);
    assert_eq!(product.name.as_deref(), Some("Чай улун"));
}

#[tokio::test]
async fn test_update_store_with_parent_reference() {
    let server = MockServer::start().await;
    let base = BaseUrl::new(server.uri()).unwrap();
    let parent_href = format!("{}/entity/store/s-0", server.uri());
    Mock::given(method("PUT"))
        .and(path("/entity/store/s-1"))
        .and(body_json(json!({
            "parent": {"meta": {"href": parent_href, "type": "store", "mediaType": "application/json"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "s-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut update = UpdateStore::new("s-1");
    update.parent = EntityRef::entity(&base, "store", "s-0").into();

    let store = assert_ok!(client.update_store(&update).await);
    assert_eq!(store.id.as_deref(), Some("s-1"));
}

#[tokio::test]
async fn test_delete_product_returns_unit() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/entity/product/p-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_ok!(client.delete_product("p-1").await);
}

#[tokio::test]
async fn test_not_found_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity/product/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"error": "Объект с UUID 'missing' не найден", "code": 1021}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = assert_err!(client.get_product("missing").await);

    assert_eq!(err.status(), Some(404));
    match err {
        RequestError::Http(HttpError::Api(e)) => assert_eq!(e.code(), Some(1021)),
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_wrong_reply_shape_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity/product"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rows": "not a list"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = assert_err!(client.get_products(ListParams::new()).await);
    assert!(matches!(err, RequestError::Decode { .. }));
}

// ============================================================================
// Paging
// ============================================================================

#[tokio::test]
async fn test_list_all_entities_follows_next_href() {
    let server = MockServer::start().await;
    let next = format!("{}/entity/product?limit=1&offset=1", server.uri());

    Mock::given(method("GET"))
        .and(path("/entity/product"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"href": format!("{}/entity/product", server.uri()), "size": 2, "limit": 1, "offset": 1},
            "rows": [product_json(&server, "p-2", "Второй")]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/entity/product"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {
                "href": format!("{}/entity/product", server.uri()),
                "size": 2, "limit": 1, "offset": 0,
                "nextHref": next
            },
            "rows": [product_json(&server, "p-1", "Первый")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let rows = assert_ok!(
        client
            .list_all_entities::<Product>(ListParams::new().limit(1))
            .await
    );

    let ids: Vec<_> = rows.iter().filter_map(|p| p.id.as_deref()).collect();
    assert_eq!(ids, vec!["p-1", "p-2"]);
}

// ============================================================================
// Documents
// ============================================================================

#[tokio::test]
async fn test_create_demand_with_positions() {
    let server = MockServer::start().await;
    let base = BaseUrl::new(server.uri()).unwrap();
    let href = |kind: &str, id: &str| format!("{}/entity/{kind}/{id}", server.uri());
    let meta = |kind: &str, id: &str| {
        json!({"meta": {"href": href(kind, id), "type": kind, "mediaType": "application/json"}})
    };

    Mock::given(method("POST"))
        .and(path("/entity/demand"))
        .and(body_json(json!({
            "organization": meta("organization", "o-1"),
            "agent": meta("counterparty", "c-1"),
            "store": meta("store", "s-1"),
            "positions": [
                {"assortment": meta("product", "p-1"), "quantity": 2.0}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "d-1", "name": "00001"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut request = CreateDemand::new(
        EntityRef::entity(&base, "organization", "o-1"),
        EntityRef::entity(&base, "counterparty", "c-1"),
        EntityRef::entity(&base, "store", "s-1"),
    );
    request.positions = vec![PositionInput::new(
        EntityRef::entity(&base, "product", "p-1"),
        2.0,
    )]
    .into();

    let demand = assert_ok!(client.create_demand(&request).await);
    assert_eq!(demand.name.as_deref(), Some("00001"));
}

#[tokio::test]
async fn test_get_supply_positions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity/supply/sp-1/positions"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rows": [
                {"id": "pos-1", "quantity": 10.0, "price": 5000.0},
                {"id": "pos-2", "quantity": 1.5, "price": 120.0}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let positions = assert_ok!(
        client
            .get_supply_positions("sp-1", ListParams::new().limit(50))
            .await
    );

    assert_eq!(positions.rows.len(), 2);
    assert_eq!(positions.rows[1].quantity, Some(1.5));
}

// ============================================================================
// Custom entities
// ============================================================================

#[tokio::test]
async fn test_create_custom_entity_element_uses_directory_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/entity/customentity/dir-1"))
        .and(body_json(json!({"name": "Красный", "code": "RED"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "el-1", "name": "Красный"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut request = CreateCustomEntityElement::new("dir-1", "Красный");
    request.code = "RED".to_string().into();

    let element = assert_ok!(client.create_custom_entity_element(&request).await);
    assert_eq!(element.id.as_deref(), Some("el-1"));
}

#[tokio::test]
async fn test_delete_custom_entity_element() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/entity/customentity/dir-1/el-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_ok!(client.delete_custom_entity_element("dir-1", "el-1").await);
}

// ============================================================================
// Stock reports
// ============================================================================

#[tokio::test]
async fn test_stock_report_repeats_filter_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/report/stock/all"))
        .and(query_param("filter", "store=h1;store=h2;stockMode=all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rows": [{"name": "Чай", "stock": 12.0, "reserve": 2.0}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = StockReportParams::new()
        .store("h1")
        .store("h2")
        .stock_mode(StockMode::All);

    let report = assert_ok!(client.get_stock_report(params).await);
    assert_eq!(report.rows[0].stock, Some(12.0));
}

#[tokio::test]
async fn test_current_stock_joins_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/report/stock/all/current"))
        .and(query_param("filter", "assortmentId=a,b;storeId=c"))
        .and(query_param("stockType", "freeStock"))
        .and(query_param("include", "zeroLines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"assortmentId": "a", "freeStock": 3.0},
            {"assortmentId": "b", "freeStock": 0.0}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = CurrentStockParams::new()
        .assortment_id("a")
        .assortment_id("b")
        .store_id("c")
        .stock_type(StockType::FreeStock)
        .include_zero_lines(true);

    let rows = assert_ok!(client.get_current_stock(params).await);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].assortment_id.as_deref(), Some("a"));
    assert_eq!(rows[0].free_stock, Some(3.0));
}
