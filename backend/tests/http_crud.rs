//! End-to-end route tests over the in-memory repositories.
//!
//! Each test builds the full route table, including the trace middleware,
//! against a fresh `InMemoryStore`.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use storefront::Trace;
use storefront::inbound::http::configure;
use storefront::inbound::http::error::route_not_found;
use storefront::inbound::http::state::HttpState;
use storefront::outbound::memory::InMemoryStore;

#[fixture]
fn store() -> InMemoryStore {
    InMemoryStore::new()
}

async fn app(
    store: InMemoryStore,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let store = Arc::new(store);
    let state = HttpState::new(store.clone(), store.clone(), store);
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(configure)
            .default_service(web::to(route_not_found)),
    )
    .await
}

async fn send<S>(app: &S, request: test::TestRequest) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let body = test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, value)
}

fn id_of(body: &Value, key: &str) -> String {
    body[key]["id"].as_str().expect("id present").to_owned()
}

#[rstest]
#[actix_web::test]
async fn created_user_can_be_read_back_by_email(store: InMemoryStore) {
    let app = app(store).await;

    let (status, created) = send(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Ann", "email": "ann@x.com", "password": "p1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!id_of(&created, "user").is_empty());

    let (status, fetched) = send(&app, test::TestRequest::get().uri("/users/ann@x.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["user"]["name"], "Ann");
    assert_eq!(fetched["user"]["email"], "ann@x.com");
    assert_eq!(fetched["user"]["id"], created["user"]["id"]);
}

#[rstest]
#[actix_web::test]
async fn partial_user_update_keeps_other_fields(store: InMemoryStore) {
    let app = app(store).await;
    send(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Ann", "email": "ann@x.com", "password": "p1" })),
    )
    .await;

    let (status, updated) = send(
        &app,
        test::TestRequest::put()
            .uri("/users/ann@x.com")
            .set_json(json!({ "name": "Annie" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["user"]["name"], "Annie");
    assert_eq!(updated["user"]["email"], "ann@x.com");
}

#[rstest]
#[actix_web::test]
async fn deleting_an_unknown_user_leaves_others_alone(store: InMemoryStore) {
    let app = app(store).await;
    send(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Ann", "email": "ann@x.com", "password": "p1" })),
    )
    .await;

    let (status, body) = send(
        &app,
        test::TestRequest::delete().uri("/users/unknown@x.com"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert!(body["traceId"].is_string());

    let (status, _) = send(&app, test::TestRequest::get().uri("/users/ann@x.com")).await;
    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn deleted_user_is_gone(store: InMemoryStore) {
    let app = app(store).await;
    send(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Ann", "email": "ann@x.com", "password": "p1" })),
    )
    .await;

    let (status, body) = send(&app, test::TestRequest::delete().uri("/users/ann@x.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, _) = send(&app, test::TestRequest::get().uri("/users/ann@x.com")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn malformed_user_body_creates_nothing(store: InMemoryStore) {
    let app = app(store).await;

    let (status, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": \"Ann\", \"email\":"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid request body");

    let (status, _) = send(&app, test::TestRequest::get().uri("/users/ann@x.com")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn created_product_can_be_read_back_by_id(store: InMemoryStore) {
    let app = app(store).await;

    let (_, created) = send(
        &app,
        test::TestRequest::post()
            .uri("/products")
            .set_json(json!({ "name": "Widget", "price": 500 })),
    )
    .await;
    let id = id_of(&created, "product");

    let (status, fetched) = send(
        &app,
        test::TestRequest::get().uri(&format!("/product/{id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["product"]["name"], "Widget");
    assert_eq!(fetched["product"]["price"], 500);
}

#[rstest]
#[actix_web::test]
async fn product_listing_grows_with_creates(store: InMemoryStore) {
    let app = app(store).await;

    let (status, empty) = send(&app, test::TestRequest::post().uri("/getProducts")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty, json!({ "products": [] }));

    for name in ["Widget", "Gadget"] {
        send(
            &app,
            test::TestRequest::post()
                .uri("/products")
                .set_json(json!({ "name": name, "price": 1 })),
        )
        .await;
    }

    let (_, listed) = send(&app, test::TestRequest::post().uri("/getProducts")).await;
    let names: Vec<&str> = listed["products"]
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|product| product["name"].as_str())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Widget") && names.contains(&"Gadget"));
}

#[rstest]
#[case("/product/not-an-id")]
#[case("/order/not-an-id")]
#[actix_web::test]
async fn malformed_identifiers_are_client_errors(store: InMemoryStore, #[case] uri: &str) {
    let app = app(store).await;
    let (status, body) = send(&app, test::TestRequest::get().uri(uri)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid argument id");
}

#[rstest]
#[actix_web::test]
async fn order_status_update_leaves_amounts_unchanged(store: InMemoryStore) {
    let app = app(store).await;

    let (_, created) = send(
        &app,
        test::TestRequest::post().uri("/createOrder").set_json(json!({
            "order_number": "O1",
            "price": 10,
            "qty": 2,
            "total": 20,
            "customer_id": "c1",
            "status": "pending"
        })),
    )
    .await;
    let id = id_of(&created, "order");

    let (status, updated) = send(
        &app,
        test::TestRequest::put()
            .uri(&format!("/order/{id}"))
            .set_json(json!({ "status": "shipped" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["order"]["status"], "shipped");

    let (_, fetched) = send(&app, test::TestRequest::get().uri(&format!("/order/{id}"))).await;
    let order = &fetched["order"];
    assert_eq!(order["id"], id.as_str());
    assert_eq!(order["status"], "shipped");
    assert_eq!(order["order_number"], "O1");
    assert_eq!(
        (&order["price"], &order["qty"], &order["total"]),
        (&json!(10), &json!(2), &json!(20))
    );
}

#[rstest]
#[actix_web::test]
async fn null_order_fields_are_treated_as_unsupplied(store: InMemoryStore) {
    let app = app(store).await;

    let (status, created) = send(
        &app,
        test::TestRequest::post().uri("/createOrder").set_json(json!({
            "order_number": "O1",
            "price": 10,
            "qty": 2,
            "total": 20,
            "customer_id": "c1",
            "status": "pending",
            "remark": null
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["order"]["remark"], "");
    let id = id_of(&created, "order");

    let (status, updated) = send(
        &app,
        test::TestRequest::put()
            .uri(&format!("/order/{id}"))
            .set_json(json!({ "status": "shipped", "remark": null, "total": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["order"]["status"], "shipped");
    assert_eq!(updated["order"]["total"], 20);
}

#[rstest]
#[actix_web::test]
async fn null_user_fields_leave_stored_values(store: InMemoryStore) {
    let app = app(store).await;
    send(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Ann", "email": "ann@x.com", "password": "p1" })),
    )
    .await;

    let (status, updated) = send(
        &app,
        test::TestRequest::put()
            .uri("/users/ann@x.com")
            .set_json(json!({ "name": null, "password": "p2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["user"]["name"], "Ann");
}

#[rstest]
#[case("/users/")]
#[case("/no/such/route")]
#[actix_web::test]
async fn unmatched_routes_answer_with_an_error_body(store: InMemoryStore, #[case] uri: &str) {
    let app = app(store).await;
    let (status, body) = send(&app, test::TestRequest::get().uri(uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "not found");
    assert!(body["traceId"].is_string());
}

#[rstest]
#[actix_web::test]
async fn updating_an_unknown_order_is_not_found(store: InMemoryStore) {
    let app = app(store).await;
    let (status, body) = send(
        &app,
        test::TestRequest::put()
            .uri("/order/000000000000000000000000")
            .set_json(json!({ "status": "shipped" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "order not found");
}

#[rstest]
#[actix_web::test]
async fn responses_carry_a_trace_id_header(store: InMemoryStore) {
    let app = app(store).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post().uri("/getProducts").to_request(),
    )
    .await;
    assert!(response.headers().contains_key("trace-id"));
}
