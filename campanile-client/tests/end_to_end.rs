use anyhow::Result;
use campanile_client::{ApiClient, ApiConfig, FetchError, LoadState, NotificationsScreen};
use campanile_server::{connect_pool, routes, run_migrations, sqlite_url_for_path, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;

// Avvia il server reale su una porta effimera e restituisce il base URL.
// Il TempDir del database va tenuto vivo per tutta la durata del test.
async fn spawn_server(td: &TempDir) -> Result<String> {
    let db_path = td.path().join("campanile.db");
    let url = sqlite_url_for_path(db_path.as_path())?;
    let pool = connect_pool(&url).await?;
    run_migrations(&pool).await?;

    let state = Arc::new(AppState { pool });
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app.into_make_service()).await;
    });

    Ok(format!("http://{}", addr))
}

/*
    Obiettivo test: percorso completo submit -> list. Il submit risponde 201
    con id assegnato e imageUrl null; la lista dell'utente mette l'elemento
    appena creato per primo (è il più recente).
*/
#[tokio::test]
async fn submit_then_list_returns_created_item_first() -> Result<()> {
    let td = TempDir::new()?;
    let base_url = spawn_server(&td).await?;
    let http = reqwest::Client::new();

    // un elemento più vecchio, poi quello atteso in testa
    let resp = http
        .post(format!("{}/api/notifications", base_url))
        .json(&json!({"title": "Welcome", "message": "Welcome to the app", "userId": 1}))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 201);

    let resp = http
        .post(format!("{}/api/notifications", base_url))
        .json(&json!({"title": "Service", "message": "Sunday 9am", "userId": 1}))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 201);
    let body: Value = resp.json().await?;
    assert_eq!(body["success"], true);
    assert!(body["notification"]["id"].is_i64(), "id must be assigned");
    assert!(body["notification"]["imageUrl"].is_null());

    let api = ApiClient::new(ApiConfig { base_url });
    let notifications = api.fetch_notifications(1).await?;
    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0].title, "Service");
    assert_eq!(notifications[1].title, "Welcome");
    assert!(notifications[0].created_at >= notifications[1].created_at);
    Ok(())
}

/*
    Obiettivo test: il submit con campi mancanti risponde 400 con la busta
    {success:false, message}; uno userId non numerico nel path risponde 400
    e il client espone il motivo dichiarato dal server.
*/
#[tokio::test]
async fn validation_failures_surface_as_client_errors() -> Result<()> {
    let td = TempDir::new()?;
    let base_url = spawn_server(&td).await?;
    let http = reqwest::Client::new();

    let resp = http
        .post(format!("{}/api/notifications", base_url))
        .json(&json!({"message": "no title", "userId": 1}))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "title, message and userId are required");

    // userId non intero nel path: 400 e il motivo dichiarato dal server
    // arriva fino al FetchError del client
    match fetch_with_raw_user_id(&base_url, "abc").await {
        Err(FetchError::Status { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid userId");
        }
        other => panic!("expected status error, got {:?}", other.map(|v| v.len())),
    }
    Ok(())
}

// fetch con lo userId passato com'è nel path, per esercitare il 400 del server
async fn fetch_with_raw_user_id(
    base_url: &str,
    raw: &str,
) -> Result<Vec<campanile_core::Notification>, FetchError> {
    let url = format!("{}/api/notifications/user/{}", base_url, raw);
    let resp = reqwest::get(&url).await?;
    let status = resp.status();
    if !status.is_success() {
        let message = match resp.json::<campanile_core::ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => format!("request failed with status {}", status.as_u16()),
        };
        return Err(FetchError::Status { status: status.as_u16(), message });
    }
    let body: campanile_core::ListNotificationsResponse = resp.json().await?;
    Ok(body.notifications)
}

/*
    Obiettivo test: utente senza notifiche -> 200 con lista vuota; la
    schermata finisce in Loaded/vuota, non in errore.
*/
#[tokio::test]
async fn empty_list_is_a_success_response() -> Result<()> {
    let td = TempDir::new()?;
    let base_url = spawn_server(&td).await?;

    let api = ApiClient::new(ApiConfig { base_url });
    let mut screen = NotificationsScreen::new();
    screen.refresh(&api, 42).await;

    assert_eq!(*screen.state(), LoadState::Loaded);
    assert!(screen.is_empty());
    Ok(())
}

/*
    Obiettivo test: server irraggiungibile -> FetchError di rete, e la
    schermata passa in Error senza perdere i dati già caricati.
*/
#[tokio::test]
async fn unreachable_server_yields_error_state() -> Result<()> {
    let td = TempDir::new()?;
    let base_url = spawn_server(&td).await?;
    let http = reqwest::Client::new();

    let resp = http
        .post(format!("{}/api/notifications", base_url))
        .json(&json!({"title": "Prayer", "message": "Wednesday 7pm", "userId": 3}))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 201);

    let api = ApiClient::new(ApiConfig { base_url });
    let mut screen = NotificationsScreen::new();
    screen.refresh(&api, 3).await;
    assert_eq!(screen.items().len(), 1);

    // porta chiusa: nessun listener
    let dead = ApiClient::new(ApiConfig { base_url: "http://127.0.0.1:1".to_string() });
    screen.refresh(&dead, 3).await;

    assert!(matches!(screen.state(), LoadState::Error { .. }));
    assert_eq!(screen.items().len(), 1, "last good data retained");
    Ok(())
}
