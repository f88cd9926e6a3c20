mod common;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{ids, task};
use http_body_util::BodyExt;
use reqwest::Client;
use taskboard::board::BoardController;
use taskboard::config::ServerConfig;
use taskboard::drag::DropTarget;
use taskboard::server::router::{build_router, AppState};
use taskboard::server::{ServerHandle, TaskServer};
use taskboard::store::{FlatFileStore, HttpTaskStore, SnapshotSource, StoreError, TaskSource, TaskStore};
use taskboard::sync::PersistenceSync;
use taskboard::task::ColumnId;
use tempfile::TempDir;
use tower::ServiceExt;

async fn start_server(temp: &TempDir) -> (SocketAddr, ServerHandle) {
    let config = ServerConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        data_file: temp.path().join("public").join("data.json"),
    };
    let mut server = TaskServer::new(&config);
    let addr = server.bind(&config.bind_addr).await.expect("Failed to bind");
    let handle = server.handle();

    tokio::spawn(async move {
        let _ = server.run().await;
    });

    (addr, handle)
}

#[tokio::test]
async fn health_endpoint() {
    let temp = TempDir::new().unwrap();
    let (addr, handle) = start_server(&temp).await;

    let resp = Client::new()
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "taskboard");

    handle.shutdown();
}

#[tokio::test]
async fn empty_store_lists_no_tasks() {
    let temp = TempDir::new().unwrap();
    let (addr, handle) = start_server(&temp).await;

    let resp = Client::new()
        .get(format!("http://{}/api/tasks", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "[]");

    handle.shutdown();
}

#[tokio::test]
async fn http_store_round_trip() {
    let temp = TempDir::new().unwrap();
    let (addr, handle) = start_server(&temp).await;
    let store = HttpTaskStore::new(&format!("http://{}", addr), Duration::from_secs(5)).unwrap();

    let tasks = vec![task("a", ColumnId::Review), task("b", ColumnId::Backlog)];
    store.save_all(&tasks).await.unwrap();
    assert_eq!(store.load_all().await.unwrap(), tasks);

    // The file on disk is the same list, pretty-printed.
    let on_disk = FlatFileStore::new(temp.path().join("public").join("data.json"))
        .load_all()
        .await
        .unwrap();
    assert_eq!(on_disk, tasks);

    handle.shutdown();
}

#[tokio::test]
async fn put_replaces_like_post() {
    let temp = TempDir::new().unwrap();
    let (addr, handle) = start_server(&temp).await;
    let url = format!("http://{}/api/tasks", addr);
    let client = Client::new();

    let resp = client
        .put(&url)
        .json(&vec![task("only", ColumnId::Done)])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let ack: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(ack["success"], true);

    let listed: Vec<taskboard::task::Task> = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(ids(&listed), vec!["only"]);

    handle.shutdown();
}

#[tokio::test]
async fn non_array_payload_is_rejected() {
    let temp = TempDir::new().unwrap();
    let app = build_router(AppState::new(FlatFileStore::new(temp.path().join("data.json"))));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/tasks")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"tasks": []}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Invalid tasks data");
    assert!(!temp.path().join("data.json").exists());
}

#[tokio::test]
async fn corrupt_data_file_is_a_server_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("data.json");
    std::fs::write(&path, "[{broken").unwrap();
    let app = build_router(AppState::new(FlatFileStore::new(path)));

    let response = app
        .oneshot(Request::builder().uri("/api/tasks").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Failed to parse tasks");
}

#[tokio::test]
async fn board_controller_against_live_server() {
    let temp = TempDir::new().unwrap();
    let (addr, handle) = start_server(&temp).await;
    let base = format!("http://{}", addr);

    let seed = HttpTaskStore::new(&base, Duration::from_secs(5)).unwrap();
    seed.save_all(&[
        task("a", ColumnId::Backlog),
        task("b", ColumnId::Backlog),
        task("c", ColumnId::InProgress),
    ])
    .await
    .unwrap();

    let store = HttpTaskStore::new(&base, Duration::from_secs(5)).unwrap();
    let mut board = BoardController::start(PersistenceSync::new(Arc::new(store))).await;
    assert_eq!(board.board().len(), 3);

    board.drag_start("a");
    board.drag_over(DropTarget::Task("c".into()));
    board.drag_end(Some(DropTarget::Task("c".into())));
    board.settle().await;

    let persisted = seed.load_all().await.unwrap();
    assert_eq!(ids(&persisted), vec!["b", "c", "a"]);
    assert_eq!(persisted[2].status, ColumnId::InProgress);

    handle.shutdown();
}

#[tokio::test]
async fn unreachable_server_falls_back_to_snapshot() {
    let temp = TempDir::new().unwrap();
    let snapshot_path = temp.path().join("snapshot.json");
    std::fs::write(
        &snapshot_path,
        serde_json::to_string(&vec![task("snap", ColumnId::Review)]).unwrap(),
    )
    .unwrap();

    // Bind and drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let store = HttpTaskStore::new(&format!("http://127.0.0.1:{}", port), Duration::from_secs(2)).unwrap();
    let sync = PersistenceSync::new(Arc::new(store))
        .with_fallback(Arc::new(SnapshotSource::new(snapshot_path)));

    let board = BoardController::start(sync).await;
    assert_eq!(ids(board.board().tasks()), vec!["snap"]);
}

#[tokio::test]
async fn server_error_status_triggers_snapshot_fallback() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("public");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("data.json"), "[{broken").unwrap();
    let (addr, handle) = start_server(&temp).await;
    let base = format!("http://{}", addr);

    let store = HttpTaskStore::new(&base, Duration::from_secs(5)).unwrap();
    let err = store.load_all().await.unwrap_err();
    assert!(matches!(err, StoreError::Status { status: 500, .. }), "got {err:?}");

    let snapshot_path = temp.path().join("snapshot.json");
    let snapshot = vec![task("s1", ColumnId::Backlog), task("s2", ColumnId::Done)];
    std::fs::write(&snapshot_path, serde_json::to_string(&snapshot).unwrap()).unwrap();

    let sync = PersistenceSync::new(Arc::new(store)).with_fallback(Arc::new(SnapshotSource::new(snapshot_path)));
    let board = BoardController::start(sync).await;
    assert_eq!(board.board().tasks(), snapshot.as_slice());

    handle.shutdown();
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = axum::Router::new().route("/api/tasks", axum::routing::get(|| async { "not json" }));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let store = HttpTaskStore::new(&format!("http://{}", addr), Duration::from_secs(5)).unwrap();
    let err = store.load_all().await.unwrap_err();
    assert!(err.is_decode(), "got {err:?}");
}
