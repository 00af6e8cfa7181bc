//! Drives `ApiClient` against an in-process axum server standing in for the
//! Flex ERP API.

use std::sync::{Arc, Mutex};

use api::{
    ApiClient, ApiError, ChangeLogParams, CreateFieldAliasRequest, CreateSkuRequest,
    CreateTransactionRequest, CreateUserRequest, Direction, InventoryListParams, SkuListParams,
    TransactionListParams, UpdateFieldAliasRequest, UpdateUserRequest, UserListParams,
};
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

const TOKEN: &str = "good-token";
const ORG: &str = "1100401179193344001";

/// Requests seen by the fake server, as `METHOD path?query` and bodies.
#[derive(Clone, Default)]
struct Seen {
    requests: Arc<Mutex<Vec<String>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl Seen {
    fn log(&self, line: String) {
        self.requests.lock().unwrap().push(line);
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn last_body(&self) -> Option<Value> {
        self.bodies.lock().unwrap().last().cloned()
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        == Some(TOKEN)
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid token"}))).into_response()
}

fn with_query(path: String, query: Option<String>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{path}?{q}"),
        _ => path,
    }
}

fn login_body() -> Value {
    json!({
        "token": TOKEN,
        "user": {"id": 2, "organization_id": 1100401179193344001u64,
                 "email": "ana@example.com", "name": "Ana", "role": "admin"},
        "organization": {"id": ORG, "name": "Acme"}
    })
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] == "secret" {
        Json(login_body()).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid credentials"}))).into_response()
    }
}

async fn me(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut body = login_body();
    body["token"] = json!("");
    Json(body).into_response()
}

async fn list_skus(
    State(seen): State<Seen>,
    Path(org): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    seen.log(with_query(format!("GET /api/v1/orgs/{org}/skus"), query));
    Json(json!({"skus": [
        {"id": 1, "sku_code": "ELEC-001", "product_name": "Cable",
         "category": "Electronics", "is_active": true},
        {"id": "2", "sku_code": "FUR-001", "product_name": "Desk",
         "category": null, "is_active": false}
    ]}))
    .into_response()
}

async fn create_sku(State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    seen.bodies.lock().unwrap().push(body.clone());
    if body["sku_code"] == "DUP-001" {
        return (StatusCode::CONFLICT, Json(json!({"error": "SKU code already exists"})))
            .into_response();
    }
    (StatusCode::CREATED, Json(json!({"id": 9, "sku_code": body["sku_code"]}))).into_response()
}

async fn sku_status(
    State(seen): State<Seen>,
    Path((org, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    seen.log(format!("PATCH /api/v1/orgs/{org}/skus/{id}/status"));
    seen.bodies.lock().unwrap().push(body);
    Json(json!({})).into_response()
}

async fn list_inventory(State(seen): State<Seen>, RawQuery(query): RawQuery) -> Response {
    seen.log(with_query("GET inventory".into(), query));
    // The server encodes an empty list as null.
    Json(Value::Null).into_response()
}

async fn manual_cost() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "").into_response()
}

async fn create_transaction(State(seen): State<Seen>, Json(body): Json<Value>) -> Response {
    seen.bodies.lock().unwrap().push(body);
    (StatusCode::CREATED, Json(json!({"id": 1}))).into_response()
}

async fn transaction_summary(State(seen): State<Seen>, RawQuery(query): RawQuery) -> Response {
    seen.log(with_query("GET summary".into(), query));
    Json(json!([
        {"transaction_type": "in", "total_transactions": 3, "total_quantity": 40, "total_value": 120.5},
        {"transaction_type": "out", "total_transactions": 1, "total_quantity": 5, "total_value": 15.0}
    ]))
    .into_response()
}

async fn list_transactions(
    State(seen): State<Seen>,
    Path(org): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    seen.log(with_query(format!("GET /api/v1/orgs/{org}/transactions"), query));
    Json(json!([{
        "id": 31, "sku_id": 4, "transaction_type": "in", "quantity": 10,
        "unit_cost": 2.5, "total_cost": 25.0, "reference_number": "PO-1001",
        "notes": null, "created_by": 2, "created_at": "2024-05-20T09:30:00Z",
        "sku_code": "TOOL-004", "product_name": "Bolt", "category": "Tools",
        "created_by_name": "Ana"
    }]))
    .into_response()
}

async fn list_users(
    State(seen): State<Seen>,
    Path(org): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    seen.log(with_query(format!("GET /api/v1/orgs/{org}/users"), query));
    Json(json!({
        "users": [{"id": 12, "email": "ana@example.com", "name": "Ana",
                   "role": "admin", "is_active": true, "last_login_at": null}],
        "pagination": {"page": 1, "limit": 20, "total": 1}
    }))
    .into_response()
}

async fn list_roles(State(seen): State<Seen>, Path(org): Path<String>) -> Response {
    seen.log(format!("GET /api/v1/orgs/{org}/users/roles"));
    Json(json!({"roles": [
        {"name": "admin", "description": "Full access",
         "permissions": [{"resource": "skus", "actions": ["read", "write"]}]},
        {"name": "viewer", "description": "Read only", "permissions": null}
    ]}))
    .into_response()
}

async fn create_user(
    State(seen): State<Seen>,
    Path(org): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    seen.log(format!("POST /api/v1/orgs/{org}/users"));
    seen.bodies.lock().unwrap().push(body);
    (StatusCode::CREATED, Json(json!({"id": 13}))).into_response()
}

async fn update_user(
    State(seen): State<Seen>,
    Path((org, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    seen.log(format!("PUT /api/v1/orgs/{org}/users/{id}"));
    seen.bodies.lock().unwrap().push(body);
    Json(json!({"id": id})).into_response()
}

async fn delete_user(State(seen): State<Seen>, Path((_org, id)): Path<(String, String)>) -> Response {
    seen.log(format!("DELETE user {id}"));
    StatusCode::NO_CONTENT.into_response()
}

async fn list_change_logs(
    State(seen): State<Seen>,
    Path(org): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    seen.log(with_query(format!("GET /api/v1/orgs/{org}/change-logs"), query));
    Json(json!([{
        "id": "77", "user_id": 2, "entity_type": "inventory", "entity_id": 4,
        "sku_id": 4, "change_type": "manual_cost_update", "field_name": "weighted_cost",
        "old_value": "2.50", "new_value": "3.00", "reason": null,
        "created_at": "2024-05-20T10:00:00Z", "user_name": "Ana",
        "sku_code": "TOOL-004", "sku_name": "Bolt"
    }]))
    .into_response()
}

async fn activity_summary(
    State(seen): State<Seen>,
    Path(org): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    seen.log(with_query(format!("GET /api/v1/orgs/{org}/activity-summary"), query));
    Json(Value::Null).into_response()
}

async fn table_fields(
    State(seen): State<Seen>,
    Path((org, table)): Path<(String, String)>,
) -> Response {
    if table != "skus" {
        return (StatusCode::BAD_REQUEST, format!("unsupported table: {table}\n")).into_response();
    }
    seen.log(format!("GET /api/v1/orgs/{org}/tables/{table}/fields"));
    Json(json!({
        "table_name": "skus",
        "fields": [
            {"id": 5, "table_name": "skus", "field_name": "supplier",
             "display_name": "Vendor", "is_hidden": true, "sort_order": 2},
            {"id": 6, "table_name": "skus", "field_name": "sku_code",
             "display_name": "Code", "description": "Catalog code", "sort_order": 0}
        ],
        "metadata": {"total_fields": 2, "hidden_fields": 1, "custom_aliases": 2,
                     "last_updated": "2024-05-19T08:00:00Z"}
    }))
    .into_response()
}

async fn initialize_fields(
    State(seen): State<Seen>,
    Path((org, table)): Path<(String, String)>,
    body: String,
) -> Response {
    seen.log(format!(
        "POST /api/v1/orgs/{org}/tables/{table}/fields/initialize ({} bytes)",
        body.len()
    ));
    Json(json!({"initialized": 8})).into_response()
}

async fn create_field_alias(
    State(seen): State<Seen>,
    Path(org): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    seen.log(format!("POST /api/v1/orgs/{org}/field-aliases"));
    seen.bodies.lock().unwrap().push(body);
    (StatusCode::CREATED, Json(json!({"id": 7}))).into_response()
}

async fn update_field_alias(
    State(seen): State<Seen>,
    Path((org, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    seen.log(format!("PATCH /api/v1/orgs/{org}/field-aliases/{id}"));
    seen.bodies.lock().unwrap().push(body);
    Json(json!({"id": id})).into_response()
}

async fn start_server() -> (String, Seen) {
    let seen = Seen::default();
    let app = Router::new()
        .route("/health", get(|| async { Json(json!({"status": "ok", "time": "now"})) }))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        .route("/api/v1/orgs/{org}/skus", get(list_skus).post(create_sku))
        .route("/api/v1/orgs/{org}/skus/{id}/status", patch(sku_status))
        .route("/api/v1/orgs/{org}/inventory", get(list_inventory))
        .route("/api/v1/orgs/{org}/inventory/sku/{sku}/cost", patch(manual_cost))
        .route(
            "/api/v1/orgs/{org}/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route("/api/v1/orgs/{org}/transactions/summary", get(transaction_summary))
        .route("/api/v1/orgs/{org}/users", get(list_users).post(create_user))
        .route("/api/v1/orgs/{org}/users/roles", get(list_roles))
        .route("/api/v1/orgs/{org}/users/{id}", put(update_user).delete(delete_user))
        .route("/api/v1/orgs/{org}/change-logs", get(list_change_logs))
        .route("/api/v1/orgs/{org}/activity-summary", get(activity_summary))
        .route("/api/v1/orgs/{org}/tables/{table}/fields", get(table_fields))
        .route(
            "/api/v1/orgs/{org}/tables/{table}/fields/initialize",
            post(initialize_fields),
        )
        .route("/api/v1/orgs/{org}/field-aliases", post(create_field_alias))
        .route("/api/v1/orgs/{org}/field-aliases/{id}", patch(update_field_alias))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), seen)
}

fn session_client(base_url: &str) -> ApiClient {
    ApiClient::new(base_url).with_token(TOKEN).with_org(ORG)
}

#[tokio::test]
async fn test_health_is_public() {
    let (base_url, _) = start_server().await;
    let health = ApiClient::new(&base_url).health().await.unwrap();
    assert!(health.is_ok());
}

#[tokio::test]
async fn test_login_and_restore() {
    let (base_url, _) = start_server().await;
    let client = ApiClient::new(&base_url);

    let resp = client.login("ana@example.com", "secret").await.unwrap();
    assert_eq!(resp.token, TOKEN);
    assert_eq!(resp.organization.id, ORG);
    assert_eq!(resp.user.organization_id, ORG);

    let me = client.with_token(resp.token).me().await.unwrap();
    assert_eq!(me.user.name, "Ana");
}

#[tokio::test]
async fn test_bad_password_is_not_a_session_error() {
    let (base_url, _) = start_server().await;
    let err = ApiClient::new(&base_url)
        .login("ana@example.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Http { status: 401, message: "Invalid credentials".into() }
    );
}

#[tokio::test]
async fn test_rejected_token_is_unauthorized() {
    let (base_url, _) = start_server().await;
    let client = ApiClient::new(&base_url).with_token("stale").with_org(ORG);
    let err = client.list_skus(&SkuListParams::default()).await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
    assert!(err.is_auth_failure());

    let err = ApiClient::new(&base_url).with_token("stale").me().await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
}

#[tokio::test]
async fn test_no_session_sends_nothing() {
    let (base_url, seen) = start_server().await;
    let client = ApiClient::new(&base_url).with_token(TOKEN);
    let err = client.list_skus(&SkuListParams::default()).await.unwrap_err();
    assert_eq!(err, ApiError::NoSession);
    assert!(seen.requests().is_empty());
}

#[tokio::test]
async fn test_list_skus_query_and_ids() {
    let (base_url, seen) = start_server().await;
    let params = SkuListParams {
        include_deactivated: true,
        search: "desk".into(),
        ..Default::default()
    };
    let skus = session_client(&base_url).list_skus(&params).await.unwrap();
    assert_eq!(skus.len(), 2);
    assert_eq!(skus[0].id, "1");
    assert_eq!(skus[1].id, "2");
    assert!(skus[1].category.is_none());

    assert_eq!(
        seen.requests(),
        [format!("GET /api/v1/orgs/{ORG}/skus?includeDeactivated=true&search=desk")]
    );

    session_client(&base_url)
        .list_skus(&SkuListParams::default())
        .await
        .unwrap();
    assert_eq!(seen.requests()[1], format!("GET /api/v1/orgs/{ORG}/skus"));
}

#[tokio::test]
async fn test_create_sku_surfaces_server_error() {
    let (base_url, seen) = start_server().await;
    let client = session_client(&base_url);

    let req = CreateSkuRequest {
        sku_code: "ELEC-002".into(),
        product_name: "Charger".into(),
        ..Default::default()
    };
    client.create_sku(&req).await.unwrap();
    assert_eq!(
        seen.last_body(),
        Some(json!({"sku_code": "ELEC-002", "product_name": "Charger"}))
    );

    let dup = CreateSkuRequest { sku_code: "DUP-001".into(), ..req };
    let err = client.create_sku(&dup).await.unwrap_err();
    assert_eq!(err.to_string(), "SKU code already exists");
    assert_eq!(err.status(), Some(409));
}

#[tokio::test]
async fn test_set_sku_status() {
    let (base_url, seen) = start_server().await;
    session_client(&base_url).set_sku_status("7", false).await.unwrap();
    assert_eq!(seen.requests(), [format!("PATCH /api/v1/orgs/{ORG}/skus/7/status")]);
    assert_eq!(seen.last_body(), Some(json!({"is_active": false})));
}

#[tokio::test]
async fn test_null_inventory_is_empty() {
    let (base_url, seen) = start_server().await;
    let lines = session_client(&base_url)
        .list_inventory(&InventoryListParams::default())
        .await
        .unwrap();
    assert!(lines.is_empty());
    assert_eq!(seen.requests(), ["GET inventory?page=1&limit=50"]);
}

#[tokio::test]
async fn test_empty_error_body_uses_fallback() {
    let (base_url, _) = start_server().await;
    let err = session_client(&base_url)
        .set_manual_cost("3", 12.5)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to update manual cost");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_plain_text_error_body() {
    let (base_url, _) = start_server().await;
    let err = session_client(&base_url)
        .table_fields("suppliers")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "unsupported table: suppliers");
}

#[tokio::test]
async fn test_transactions() {
    let (base_url, seen) = start_server().await;
    let client = session_client(&base_url);

    let req = CreateTransactionRequest {
        sku_id: "4".into(),
        transaction_type: Direction::Out,
        quantity: 2,
        unit_cost: 3.0,
        reference_number: None,
        notes: Some("damaged".into()),
    };
    client.create_transaction(&req).await.unwrap();
    assert_eq!(
        seen.last_body(),
        Some(json!({
            "sku_id": 4, "transaction_type": "out", "quantity": 2,
            "unit_cost": 3.0, "notes": "damaged"
        }))
    );

    let params = TransactionListParams {
        transaction_type: Some(Direction::In),
        category: "Electronics".into(),
        ..Default::default()
    };
    let summary = client.transaction_summary(&params).await.unwrap();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].transaction_type, Direction::In);
    assert_eq!(summary[0].total_quantity, 40);
    assert_eq!(seen.requests(), ["GET summary?category=Electronics"]);
}

#[tokio::test]
async fn test_delete_user_accepts_no_content() {
    let (base_url, seen) = start_server().await;
    session_client(&base_url).delete_user("12").await.unwrap();
    assert_eq!(seen.requests(), ["DELETE user 12"]);
}

#[tokio::test]
async fn test_list_transactions_sends_every_filter() {
    let (base_url, seen) = start_server().await;
    let params = TransactionListParams {
        transaction_type: Some(Direction::Out),
        sku_id: Some("4".into()),
        category: "Tools".into(),
        search: "bolt".into(),
        start_date: "2024-05-01".into(),
        end_date: "2024-05-31".into(),
        ..Default::default()
    };
    let list = session_client(&base_url).list_transactions(&params).await.unwrap();
    assert_eq!(
        seen.requests(),
        [format!(
            "GET /api/v1/orgs/{ORG}/transactions?transaction_type=out&sku_id=4&category=Tools\
             &search=bolt&page=1&limit=50&start_date=2024-05-01&end_date=2024-05-31"
        )]
    );
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, "31");
    assert_eq!(list[0].sku_id, "4");
    assert_eq!(list[0].created_by.as_deref(), Some("2"));
    assert!(list[0].notes.is_none());
}

#[tokio::test]
async fn test_user_management() {
    let (base_url, seen) = start_server().await;
    let client = session_client(&base_url);

    let params = UserListParams {
        role: "admin".into(),
        is_active: Some(true),
        search: "ana".into(),
    };
    let users = client.list_users(&params).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, "12");
    assert!(users[0].last_login_at.is_none());

    let roles = client.list_roles().await.unwrap();
    assert_eq!(roles.len(), 2);
    assert_eq!(roles[0].permissions[0].actions, ["read", "write"]);
    assert!(roles[1].permissions.is_empty());

    let create = CreateUserRequest {
        email: "bo@example.com".into(),
        name: "Bo".into(),
        role: "viewer".into(),
    };
    client.create_user(&create).await.unwrap();
    assert_eq!(
        seen.last_body(),
        Some(json!({"email": "bo@example.com", "name": "Bo", "role": "viewer"}))
    );

    let update = UpdateUserRequest {
        name: "Bo".into(),
        role: "manager".into(),
        is_active: Some(false),
    };
    client.update_user("13", &update).await.unwrap();
    assert_eq!(
        seen.last_body(),
        Some(json!({"name": "Bo", "role": "manager", "is_active": false}))
    );

    assert_eq!(
        seen.requests(),
        [
            format!("GET /api/v1/orgs/{ORG}/users?role=admin&is_active=true&search=ana"),
            format!("GET /api/v1/orgs/{ORG}/users/roles"),
            format!("POST /api/v1/orgs/{ORG}/users"),
            format!("PUT /api/v1/orgs/{ORG}/users/13"),
        ]
    );
}

#[tokio::test]
async fn test_activity_logs() {
    let (base_url, seen) = start_server().await;
    let client = session_client(&base_url);

    let logs = client.list_change_logs(&ChangeLogParams::default()).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].id, "77");
    assert_eq!(logs[0].entity_id.as_deref(), Some("4"));
    assert_eq!(logs[0].new_value.as_deref(), Some("3.00"));

    // The server writes null when nothing happened in the window.
    let summary = client.activity_summary(7).await.unwrap();
    assert_eq!(summary, Default::default());

    assert_eq!(
        seen.requests(),
        [
            format!("GET /api/v1/orgs/{ORG}/change-logs?last_days=30&limit=100"),
            format!("GET /api/v1/orgs/{ORG}/activity-summary?last_days=7"),
        ]
    );
}

#[tokio::test]
async fn test_field_aliases() {
    let (base_url, seen) = start_server().await;
    let client = session_client(&base_url);

    let table = client.table_fields("skus").await.unwrap();
    assert_eq!(table.table_name, "skus");
    let names: Vec<String> = table.sorted_fields().into_iter().map(|f| f.field_name).collect();
    assert_eq!(names, ["sku_code", "supplier"]);
    assert_eq!(table.metadata.map(|m| m.hidden_fields), Some(1));

    let create = CreateFieldAliasRequest {
        table_name: "skus".into(),
        field_name: "barcode".into(),
        display_name: "EAN".into(),
        description: None,
        is_hidden: false,
        sort_order: 3,
    };
    client.create_field_alias(&create).await.unwrap();
    assert_eq!(
        seen.last_body(),
        Some(json!({
            "table_name": "skus", "field_name": "barcode", "display_name": "EAN",
            "is_hidden": false, "sort_order": 3
        }))
    );

    let update = UpdateFieldAliasRequest {
        display_name: "Vendor".into(),
        description: String::new(),
        is_hidden: false,
        sort_order: 1,
    };
    client.update_field_alias("5", &update).await.unwrap();
    assert_eq!(
        seen.last_body(),
        Some(json!({"display_name": "Vendor", "description": "", "is_hidden": false, "sort_order": 1}))
    );

    client.initialize_table_fields("skus").await.unwrap();

    assert_eq!(
        seen.requests(),
        [
            format!("GET /api/v1/orgs/{ORG}/tables/skus/fields"),
            format!("POST /api/v1/orgs/{ORG}/field-aliases"),
            format!("PATCH /api/v1/orgs/{ORG}/field-aliases/5"),
            format!("POST /api/v1/orgs/{ORG}/tables/skus/fields/initialize (0 bytes)"),
        ]
    );
}
