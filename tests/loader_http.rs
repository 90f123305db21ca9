//! Integration tests for the HTTP people source against a local upstream

use axum::{http::StatusCode, routing::get, Json, Router};
use roster::loader::FETCH_FAILED_MESSAGE;
use roster::presentation::ElementId;
use roster::{App, AppSettings, Document, FetchError, HttpPeopleSource, PeopleSource, ViewMode};
use serde_json::json;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use url::Url;

async fn spawn_upstream(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn source(addr: SocketAddr, path: &str) -> HttpPeopleSource {
    let url = Url::parse(&format!("http://{}{}", addr, path)).unwrap();
    HttpPeopleSource::new(url).with_timeout(Duration::from_secs(5))
}

fn upstream() -> Router {
    Router::new()
        .route(
            "/users",
            get(|| async {
                Json(json!([
                    {"id": 1, "name": "Leanne Graham", "email": "Sincere@april.biz", "username": "Bret"},
                    {"id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv", "phone": "010-692"},
                    {"id": 3, "name": "<script>x</script>", "email": "Nathan@yesenia.net"}
                ]))
            }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/garbage", get(|| async { "not json" }))
}

#[tokio::test]
async fn test_fetch_people_success() {
    let addr = spawn_upstream(upstream()).await;
    let people = source(addr, "/users").fetch_people().await.unwrap();

    assert_eq!(people.len(), 3);
    assert_eq!(people[0].name, "Leanne Graham");
    assert_eq!(people[1].email, "Shanna@melissa.tv");
}

#[tokio::test]
async fn test_fetch_people_http_error() {
    let addr = spawn_upstream(upstream()).await;
    let err = source(addr, "/broken").fetch_people().await.unwrap_err();
    assert!(matches!(err, FetchError::Status(500)));
}

#[tokio::test]
async fn test_fetch_people_not_found() {
    let addr = spawn_upstream(upstream()).await;
    let err = source(addr, "/missing").fetch_people().await.unwrap_err();
    assert!(matches!(err, FetchError::Status(404)));
}

#[tokio::test]
async fn test_fetch_people_bad_body() {
    let addr = spawn_upstream(upstream()).await;
    let err = source(addr, "/garbage").fetch_people().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_people_connection_refused() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = source(addr, "/users").fetch_people().await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}

#[tokio::test]
async fn test_app_with_http_500_shows_banner() {
    let addr = spawn_upstream(upstream()).await;
    let mut app = App::new(Document::new(), AppSettings::default());
    app.start();

    assert!(app.load_people(&source(addr, "/broken")).await.is_err());

    assert!(app.store().people().is_empty());
    assert!(!app.store().is_loading());
    assert!(!app.view().is_hidden(ElementId::ErrorBanner));
    assert!(app.view().is_hidden(ElementId::Loading));
    assert!(app.view().to_html().contains(FETCH_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_app_renders_fetched_people_escaped() {
    let addr = spawn_upstream(upstream()).await;
    let mut app = App::new(Document::new(), AppSettings::default());
    app.start();
    app.switch_view(ViewMode::List);

    app.load_people(&source(addr, "/users")).await.unwrap();

    let list = app.view().markup(ElementId::ViewContainer(ViewMode::List));
    assert_eq!(list.matches("data-person-id=").count(), 3);
    assert!(!list.contains("<script>"));
    assert!(list.contains("&lt;script&gt;"));
}
