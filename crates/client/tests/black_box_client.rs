use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::{Value, json};

use backoffice_auth::{BearerToken, LoginRequest, Role, Session};
use backoffice_client::{
    ApiClient, CatalogProvider, ClientConfig, ClientError, SubmissionTarget, submit_order,
};
use backoffice_core::{CustomerId, OrderId, ProductId};
use backoffice_customers::Customer;
use backoffice_orders::{ComposeError, OrderComposer, OrderForm, OrderStatus};

const TOKEN: &str = "tok-admin";
const CUSTOMER_ID: &str = "0190a1b2-0000-7000-8000-0000000000c1";
const TRUCK_ID: &str = "0190a1b2-0000-7000-8000-000000000001";
const DOLL_ID: &str = "0190a1b2-0000-7000-8000-000000000002";
const ORDER_ID: &str = "0190a1b2-0000-7000-8000-0000000000a1";

/// Requests the stub received on the order routes: (method, body).
type Recorded = Arc<Mutex<Vec<(&'static str, Value)>>>;

struct TestServer {
    base_url: String,
    recorded: Recorded,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let recorded: Recorded = Arc::default();
        let app = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/products", get(products))
            .route("/api/analytics", get(analytics))
            .route("/api/orders", get(list_orders))
            .route("/api/customers/:id", get(missing_customer))
            .route("/api/customers/:id/orders", post(create_order))
            .route("/api/customers/:id/orders/:order_id", axum::routing::put(update_order))
            .route("/api/reports/customer/:id/pdf", get(report))
            .with_state(recorded.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}/api", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            recorded,
            handle,
        }
    }

    fn client(&self) -> ApiClient {
        ApiClient::new(&ClientConfig::new(self.base_url.clone()).unwrap()).unwrap()
    }

    fn recorded(&self) -> Vec<(&'static str, Value)> {
        self.recorded.lock().unwrap().clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid or expired token" }))).into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] != "secret" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "message": "Invalid credentials" } })),
        )
            .into_response();
    }
    Json(json!({
        "success": true,
        "data": {
            "id": "0190a1b2-0000-7000-8000-0000000000f1",
            "email": body["email"],
            "role": "admin",
            "username": "ada",
            "token": TOKEN
        }
    }))
    .into_response()
}

async fn products(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let stamp = "2024-05-01T00:00:00Z";
    Json(json!({
        "data": [
            {
                "id": TRUCK_ID, "name": "Dump Truck", "price": "19.99", "category": "trucks",
                "stockQuantity": 4, "createdAt": stamp, "updatedAt": stamp
            },
            {
                "id": DOLL_ID, "name": "Rag Doll", "price": 5, "category": "dolls",
                "stockQuantity": 0, "createdAt": stamp, "updatedAt": stamp
            }
        ]
    }))
    .into_response()
}

async fn analytics(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({
        "data": {
            "totalCustomers": 3,
            "ordersByDay": [{ "day": "2024-05-01", "count": 2 }],
            "locationData": [{ "country": "Canada", "count": 2 }],
            "typeDistribution": [{ "category": "trucks", "count": 2 }]
        }
    }))
    .into_response()
}

async fn missing_customer(Path(_id): Path<String>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": { "message": "Customer not found" } })),
    )
        .into_response()
}

fn order_echo(customer_id: &str, order_id: &str, body: &Value) -> Value {
    json!({
        "data": {
            "id": order_id,
            "customerId": customer_id,
            "orderDate": "2024-05-01T00:00:00Z",
            "status": body["status"],
            "totalAmount": body["totalAmount"],
            "createdAt": "2024-05-01T00:00:00Z",
            "updatedAt": "2024-05-01T00:00:00Z",
            "scheduledDeliveryDate": "2024-05-15T00:00:00Z",
            "deliveryStreet": body["deliveryStreet"],
            "deliveryCity": body["deliveryCity"],
            // Blank state/postal are omitted from the payload and stored as NULL.
            "deliveryState": body["deliveryState"],
            "deliveryPostal": body["deliveryPostal"],
            "deliveryCountry": body["deliveryCountry"]
        }
    })
}

async fn list_orders(State(recorded): State<Recorded>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let orders: Vec<Value> = recorded
        .lock()
        .unwrap()
        .iter()
        .map(|(_, body)| order_echo(CUSTOMER_ID, ORDER_ID, body)["data"].clone())
        .collect();
    Json(json!({ "data": orders })).into_response()
}

async fn create_order(
    State(recorded): State<Recorded>,
    Path(customer_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let echo = order_echo(&customer_id, ORDER_ID, &body);
    recorded.lock().unwrap().push(("POST", body));
    (StatusCode::CREATED, Json(echo)).into_response()
}

async fn update_order(
    State(recorded): State<Recorded>,
    Path((customer_id, order_id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let echo = order_echo(&customer_id, &order_id, &body);
    recorded.lock().unwrap().push(("PUT", body));
    Json(echo).into_response()
}

async fn report(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    ([("content-type", "application/pdf")], b"%PDF-1.4 stub".to_vec()).into_response()
}

fn credentials(password: &str) -> LoginRequest {
    LoginRequest {
        email: "ada@example.com".to_string(),
        password: password.to_string(),
    }
}

fn customer() -> Customer {
    serde_json::from_value(json!({
        "id": CUSTOMER_ID,
        "name": "Toy Barn",
        "email": "orders@toybarn.example",
        "street": "1 Main St",
        "city": "Halifax",
        "country": "Canada",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

#[tokio::test]
async fn login_compose_and_create_order() {
    let server = TestServer::spawn().await;
    let client = server.client();

    let session = client.login(&credentials("secret")).await.unwrap();
    assert_eq!(session.role(), Role::Admin);
    assert_eq!(session.token().as_str(), TOKEN);

    let catalog = client.fetch_catalog(&session).await.unwrap();
    assert_eq!(catalog.len(), 2);

    let truck: ProductId = TRUCK_ID.parse().unwrap();
    let doll: ProductId = DOLL_ID.parse().unwrap();
    let mut composer = OrderComposer::new(catalog);
    composer.set_line_product(0, Some(truck)).unwrap();
    composer.set_line_quantity(0, "2").unwrap();
    let second = composer.add_line();
    composer.set_line_product(second, Some(doll)).unwrap();
    composer.set_line_quantity(second, "3").unwrap();
    assert_eq!(composer.total().to_string(), "54.98");

    let customer = customer();
    let form = OrderForm::for_customer(&customer, today());
    let order = submit_order(
        &client,
        &session,
        &composer,
        &form,
        customer.id,
        SubmissionTarget::Create,
    )
    .await
    .unwrap();

    assert_eq!(order.total_amount.to_string(), "54.98");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.delivery_state, "");
    assert_eq!(order.delivery_postal, "");

    let listed = client.list_orders(&session).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].delivery_city, "Halifax");

    let recorded = server.recorded();
    assert_eq!(recorded.len(), 1);
    let (method, body) = &recorded[0];
    assert!(body.get("deliveryState").is_none());
    assert_eq!(*method, "POST");
    assert_eq!(body["customerId"], CUSTOMER_ID);
    assert_eq!(body["deliveryCity"], "Halifax");
    assert_eq!(body["scheduledDeliveryDate"], "2024-05-15");
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["items"][0]["totalPrice"], "39.98");
    assert_eq!(body["items"][1]["unitPrice"], "5.00");
}

#[tokio::test]
async fn update_target_replaces_existing_order() {
    let server = TestServer::spawn().await;
    let client = server.client();
    let session = client.login(&credentials("secret")).await.unwrap();
    let catalog = client.fetch_catalog(&session).await.unwrap();

    let mut composer = OrderComposer::new(catalog);
    composer
        .set_line_product(0, Some(TRUCK_ID.parse().unwrap()))
        .unwrap();
    composer.set_line_quantity(0, "1").unwrap();

    let order_id: OrderId = ORDER_ID.parse().unwrap();
    let form = OrderForm::for_customer(&customer(), today());
    let order = submit_order(
        &client,
        &session,
        &composer,
        &form,
        customer().id,
        SubmissionTarget::Update(order_id),
    )
    .await
    .unwrap();

    assert_eq!(order.id, order_id);
    let recorded = server.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, "PUT");
    assert_eq!(recorded[0].1["totalAmount"], "19.99");
}

#[tokio::test]
async fn invalid_order_never_reaches_the_server() {
    let server = TestServer::spawn().await;
    let client = server.client();
    let session = client.login(&credentials("secret")).await.unwrap();
    let catalog = client.fetch_catalog(&session).await.unwrap();
    let form = OrderForm::for_customer(&customer(), today());

    let mut empty = OrderComposer::new(catalog.clone());
    empty.remove_line(0).unwrap();
    let err = submit_order(
        &client,
        &session,
        &empty,
        &form,
        customer().id,
        SubmissionTarget::Create,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ClientError::Rejected(ComposeError::EmptyOrder)));

    let mut zero = OrderComposer::new(catalog);
    zero.set_line_product(0, Some(TRUCK_ID.parse().unwrap()))
        .unwrap();
    zero.set_line_quantity(0, "abc").unwrap();
    let err = submit_order(
        &client,
        &session,
        &zero,
        &form,
        customer().id,
        SubmissionTarget::Create,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ClientError::Rejected(ComposeError::InvalidLines(_))));

    assert!(server.recorded().is_empty());
}

#[tokio::test]
async fn server_messages_surface_in_errors() {
    let server = TestServer::spawn().await;
    let client = server.client();

    let err = client.login(&credentials("wrong")).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized { .. }));
    assert_eq!(err.to_string(), "Login failed: Invalid credentials");

    let session = client.login(&credentials("secret")).await.unwrap();
    let missing: CustomerId = CUSTOMER_ID.parse().unwrap();
    let err = client.get_customer(&session, missing).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(!err.is_retryable());
    assert_eq!(err.to_string(), "Fetch customer failed: Customer not found");

    let stale = Session::new(session.user().clone(), BearerToken::new("stale"));
    let err = client.list_products(&stale).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Fetch products failed: Invalid or expired token"
    );
}

#[tokio::test]
async fn dashboard_and_report_downloads() {
    let server = TestServer::spawn().await;
    let client = server.client();
    let session = client.login(&credentials("secret")).await.unwrap();

    let dashboard = client.fetch_dashboard(&session).await.unwrap();
    assert_eq!(dashboard.total_customers, 3);
    assert_eq!(dashboard.total_orders(), 2);

    let pdf = client
        .customer_report_pdf(&session, CUSTOMER_ID.parse().unwrap())
        .await
        .unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[tokio::test]
async fn unreachable_server_is_reported_as_retryable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&ClientConfig::new(format!("http://{addr}/api")).unwrap()).unwrap();
    let err = client.login(&credentials("secret")).await.unwrap_err();
    assert!(matches!(err, ClientError::Unreachable { .. }));
    assert!(err.is_retryable());
    assert_eq!(err.to_string(), "Login failed: unable to reach server");
}
