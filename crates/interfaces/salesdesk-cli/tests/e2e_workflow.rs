use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use salesdesk_app_core::{Console, FavoriteChannel, FilePersistence};
use salesdesk_cli::commands::{self, SaleInput};
use salesdesk_cli::render::NameStyle;
use salesdesk_infra::NoCredentials;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;

#[derive(Default)]
struct Store {
    sales: Vec<Value>,
    salespeople: Vec<Value>,
    next_id: i64,
}

type Shared = Arc<Mutex<Store>>;

fn seeded() -> Shared {
    Arc::new(Mutex::new(Store {
        sales: vec![json!({
            "id": 1, "customer_first_name": "Alice B.", "customer_last_name": "TechCorp",
            "date": "2023-10-01", "total": 100000.0, "salesperson_id": 1
        })],
        salespeople: vec![
            json!({"id": 1, "first_name": "John", "last_name": "Doe", "department": "Electronics",
                   "hire_date": "2020-01-15", "salary": 60000.0}),
            json!({"id": 2, "first_name": "Jane", "last_name": "Smith", "department": "Furniture",
                   "hire_date": "2019-03-22", "salary": 55000.0}),
        ],
        next_id: 2,
    }))
}

fn id_of(v: &Value) -> String {
    v["id"].to_string()
}

async fn start_mock_server(store: Shared) -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route(
            "/sale",
            get(|State(s): State<Shared>| async move { Json(Value::from(s.lock().unwrap().sales.clone())) })
                .post(|State(s): State<Shared>, Json(mut body): Json<Value>| async move {
                    let mut store = s.lock().unwrap();
                    body["id"] = json!(store.next_id);
                    store.next_id += 1;
                    store.sales.push(body.clone());
                    (StatusCode::CREATED, Json(body))
                }),
        )
        .route(
            "/sale/:id",
            axum::routing::put(
                |State(s): State<Shared>, Path(id): Path<String>, Json(body): Json<Value>| async move {
                    let mut store = s.lock().unwrap();
                    match store.sales.iter_mut().find(|v| id_of(v) == id) {
                        Some(existing) => {
                            *existing = body;
                            existing["id"] = json!(id.parse::<i64>().unwrap());
                            StatusCode::NO_CONTENT
                        }
                        None => StatusCode::NOT_FOUND,
                    }
                },
            )
            .delete(|State(s): State<Shared>, Path(id): Path<String>| async move {
                s.lock().unwrap().sales.retain(|v| id_of(v) != id);
                StatusCode::OK
            }),
        )
        .route(
            "/salesperson",
            get(|State(s): State<Shared>| async move {
                Json(Value::from(s.lock().unwrap().salespeople.clone()))
            }),
        )
        .route(
            "/salesperson/:id",
            get(|State(s): State<Shared>, Path(id): Path<String>| async move {
                let store = s.lock().unwrap();
                match store.salespeople.iter().find(|v| id_of(v) == id) {
                    Some(sp) => Json(sp.clone()).into_response(),
                    None => StatusCode::NOT_FOUND.into_response(),
                }
            })
            .delete(|State(s): State<Shared>, Path(id): Path<String>| async move {
                s.lock().unwrap().salespeople.retain(|v| id_of(v) != id);
                StatusCode::OK
            }),
        )
        .with_state(store);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}

fn console_for(addr: SocketAddr) -> Console {
    Console::connect(
        &format!("http://{addr}"),
        Duration::from_secs(5),
        Arc::new(NoCredentials),
    )
    .unwrap()
}

fn text(out: Vec<u8>) -> String {
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn sales_lifecycle_against_server() {
    let store = seeded();
    let (addr, server) = start_mock_server(store.clone()).await;
    let console = console_for(addr);
    let style = NameStyle::default();

    let mut out = Vec::new();
    commands::cmd_list_sales(&console, style, false, &mut out)
        .await
        .unwrap();
    let listing = text(out);
    assert!(listing.contains(":: 1 sale(s)"));
    assert!(listing.contains("Alice B. TechCorp"));

    let input = SaleInput {
        customer_first_name: "Hank G.".into(),
        customer_last_name: "AlphaBeta".into(),
        date: "2023-10-20".into(),
        total: 300000.0,
        salesperson_id: 2,
    };
    let mut out = Vec::new();
    commands::cmd_add_sale(&console, input.clone(), style, &mut out)
        .await
        .unwrap();
    let added = text(out);
    assert!(added.contains(":: Created sale #2"));
    assert!(added.contains(":: 2 sale(s)"));

    let stored = store.lock().unwrap().sales[1].clone();
    assert_eq!(stored["customer_first_name"], "Hank G.");
    assert_eq!(stored["salesperson_id"], 2);

    let mut out = Vec::new();
    let edited = SaleInput {
        total: 310000.0,
        ..input
    };
    commands::cmd_update_sale(&console, 2, edited, style, &mut out)
        .await
        .unwrap();
    assert!(text(out).contains("310000.00"));

    let mut out = Vec::new();
    commands::cmd_delete_sale(&console, 1, style, &mut out)
        .await
        .unwrap();
    let after = text(out);
    assert!(after.contains(":: 1 sale(s)"));
    assert!(!after.contains("Alice B."));

    server.abort();
}

#[tokio::test]
async fn salespeople_listing_and_delete() {
    let store = seeded();
    let (addr, server) = start_mock_server(store.clone()).await;
    let console = console_for(addr);
    let style = NameStyle {
        alternate: true,
        lower_first: false,
    };

    let mut out = Vec::new();
    commands::cmd_list_salespeople(&console, style, false, &mut out)
        .await
        .unwrap();
    let listing = text(out);
    assert!(listing.contains(":: 2 salespeople"));
    assert!(listing.contains("JoHn dOe"));

    let mut out = Vec::new();
    commands::cmd_delete_salesperson(&console, 1, style, &mut out)
        .await
        .unwrap();
    let after = text(out);
    assert!(after.contains(":: 1 salespeople"));
    assert!(!after.contains("JoHn"));
    assert_eq!(store.lock().unwrap().salespeople.len(), 1);

    server.abort();
}

#[tokio::test]
async fn list_json_uses_camel_case_records() {
    let (addr, server) = start_mock_server(seeded()).await;
    let console = console_for(addr);

    let mut out = Vec::new();
    commands::cmd_list_sales(&console, NameStyle::default(), true, &mut out)
        .await
        .unwrap();
    let parsed: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed[0]["customerFirstName"], "Alice B.");
    assert_eq!(parsed[0]["salespersonId"], 1);

    server.abort();
}

#[tokio::test]
async fn open_detail_routes_show_record_or_failure() {
    let (addr, server) = start_mock_server(seeded()).await;
    let console = console_for(addr);
    let style = NameStyle::default();

    let mut out = Vec::new();
    commands::cmd_open(&console, "salesperson/2", style, &mut out)
        .await
        .unwrap();
    let found = text(out);
    assert!(found.contains(":: Salesperson #2"));
    assert!(found.contains("Jane Smith"));

    let mut out = Vec::new();
    commands::cmd_open(&console, "salesperson/99", style, &mut out)
        .await
        .unwrap();
    assert!(text(out).contains("Could not load salesperson '99' (status 404)"));

    let mut out = Vec::new();
    let err = commands::cmd_open(&console, "inventory", style, &mut out)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("inventory"));

    server.abort();
}

#[tokio::test]
async fn dot_segment_detail_ids_fail_instead_of_listing() {
    let (addr, server) = start_mock_server(seeded()).await;
    let console = console_for(addr);

    for path in ["salesperson/..", "salesperson/."] {
        let mut out = Vec::new();
        commands::cmd_open(&console, path, NameStyle::default(), &mut out)
            .await
            .unwrap();
        let shown = text(out);
        assert!(shown.contains("(status 0)"), "{path}: {shown}");
        assert!(!shown.contains("John"));
    }

    server.abort();
}

#[tokio::test]
async fn unreachable_service_reports_status_zero() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let console = console_for(addr);

    let mut out = Vec::new();
    commands::cmd_open(&console, "salesperson/1", NameStyle::default(), &mut out)
        .await
        .unwrap();
    assert!(text(out).contains("(status 0)"));

    let mut out = Vec::new();
    assert!(
        commands::cmd_list_sales(&console, NameStyle::default(), false, &mut out)
            .await
            .is_err()
    );
}

#[tokio::test]
async fn demo_runs_row_events_offline() {
    let favorites = FavoriteChannel::new();

    let mut out = Vec::new();
    commands::cmd_demo(&favorites, NameStyle::default(), &mut out)
        .await
        .unwrap();
    let shown = text(out);
    assert!(shown.contains(":: 4 salespeople"));
    assert!(shown.contains(":: Favorite: John"));
    assert!(shown.contains(":: 3 salespeople"));
    assert!(shown.contains("60500"));
    let (_, final_listing) = shown.split_once(":: Favorite:").unwrap();
    assert!(!final_listing.contains("Emily"));
    assert!(final_listing.contains("* #1"));
    assert_eq!(favorites.current(), "John");
}

#[test]
fn config_set_then_show() {
    let dir = tempdir().unwrap();
    let persistence = FilePersistence::in_dir(dir.path());

    let saved = commands::cmd_config_set(
        &persistence,
        Some("http://records.internal:9000".into()),
        Some(1_000),
    )
    .unwrap();
    assert_eq!(saved.base_url, "http://records.internal:9000");
    assert_eq!(
        saved.request_timeout_secs,
        salesdesk_config::MAX_REQUEST_TIMEOUT_SECS
    );

    let mut out = Vec::new();
    commands::cmd_config_show(&persistence, &mut out).unwrap();
    let shown = text(out);
    assert!(shown.contains("Base URL:  http://records.internal:9000"));
    assert!(shown.contains("settings.json"));

    assert!(commands::cmd_config_set(&persistence, Some("not a url".into()), None).is_err());
    assert_eq!(
        persistence.load_settings().unwrap().base_url,
        "http://records.internal:9000"
    );
}
