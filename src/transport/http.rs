//! Local preview shell
//!
//! Serves the controller's `Document` as a page and turns form posts into
//! controller events. Every route is registered once in `router`; the
//! controller sits behind a single mutex so no two renders interleave.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use crate::app::{App, AppSettings, Event, Outcome};
use crate::config::Config;
use crate::core::ViewMode;
use crate::form::FormFields;
use crate::loader::PeopleSource;
use crate::navigation::Page;
use crate::presentation::{Document, Presentation};

/// Shared shell state
pub struct Shell {
    app: Mutex<App<Document>>,
    source: Arc<dyn PeopleSource>,
    wakeup: std::sync::Mutex<Option<JoinHandle<()>>>,
}

impl Shell {
    /// Build the controller and bring the page to its initial state
    pub fn new(settings: AppSettings, source: Arc<dyn PeopleSource>) -> Arc<Self> {
        let mut app = App::new(Document::new(), settings);
        app.start();
        Arc::new(Self {
            app: Mutex::new(app),
            source,
            wakeup: std::sync::Mutex::new(None),
        })
    }

    /// Stop pending wake-ups and drop controller deadlines
    pub async fn teardown(&self) {
        if let Ok(mut wakeup) = self.wakeup.lock() {
            if let Some(handle) = wakeup.take() {
                handle.abort();
            }
        }
        self.app.lock().await.cancel_timers();
        tracing::debug!("Shell torn down");
    }
}

/// Start a fetch unless one is already running. Returns immediately.
pub async fn spawn_load(shell: &Arc<Shell>) {
    if !shell.app.lock().await.begin_load() {
        return;
    }
    let shell = Arc::clone(shell);
    tokio::spawn(async move {
        tracing::info!("Loading people from {}", shell.source.describe());
        let result = shell.source.fetch_people().await;
        let mut app = shell.app.lock().await;
        let _ = app.finish_load(result);
    });
}

/// Schedule a single wake-up for the controller's next deadline, replacing
/// any previously scheduled one
fn schedule_wakeup(shell: &Arc<Shell>, app: &App<Document>) {
    let Ok(mut slot) = shell.wakeup.lock() else {
        return;
    };
    if let Some(previous) = slot.take() {
        previous.abort();
    }
    let Some(deadline) = app.next_deadline() else {
        return;
    };

    let weak = Arc::downgrade(shell);
    *slot = Some(tokio::spawn(async move {
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        if let Some(shell) = weak.upgrade() {
            shell.app.lock().await.tick(Instant::now());
        }
    }));
}

/// Route table
pub fn router(shell: Arc<Shell>) -> Router {
    Router::new()
        .route("/", get(page))
        .route("/health", get(health))
        .route("/navigate/:page", post(navigate))
        .route("/location", post(follow_location))
        .route("/view/:mode", post(switch_view))
        .route("/submit", post(submit))
        .route("/form/clear", post(clear_form))
        .route("/reload", post(reload))
        .route("/banner/dismiss", post(dismiss_banner))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(shell)
}

/// Serve on an already-bound listener until `shutdown` resolves
pub async fn serve(
    listener: TcpListener,
    shell: Arc<Shell>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    spawn_load(&shell).await;
    axum::serve(listener, router(Arc::clone(&shell)))
        .with_graceful_shutdown(shutdown)
        .await?;
    shell.teardown().await;
    Ok(())
}

/// Run the preview shell until Ctrl-C
pub async fn run_http_server(config: &Config, source: Arc<dyn PeopleSource>) -> Result<()> {
    let shell = Shell::new(AppSettings::from(config), source);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Preview shell listening on http://{}", addr);

    serve(listener, shell, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
        tracing::info!("Shutting down");
    })
    .await
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    loading: bool,
    people: usize,
    submitted: usize,
    error: Option<String>,
    page: Page,
    view: ViewMode,
}

/// Back to the page, keeping the location fragment in step
fn back_to_page(app: &App<Document>) -> Redirect {
    match app.view().fragment() {
        Some(fragment) => Redirect::to(&format!("/#{}", fragment)),
        None => Redirect::to("/"),
    }
}

fn not_found(message: String) -> Response {
    (StatusCode::NOT_FOUND, message).into_response()
}

async fn page(State(shell): State<Arc<Shell>>) -> Html<String> {
    let mut app = shell.app.lock().await;
    app.tick(Instant::now());
    let html = app.view().to_html();
    app.view_mut().clear_scroll_target();
    Html(html)
}

async fn health(State(shell): State<Arc<Shell>>) -> Json<HealthResponse> {
    let app = shell.app.lock().await;
    let store = app.store();
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        loading: store.is_loading(),
        people: store.people().len(),
        submitted: store.submitted().len(),
        error: store.error().map(str::to_string),
        page: app.page(),
        view: store.view_mode(),
    })
}

async fn navigate(State(shell): State<Arc<Shell>>, Path(page): Path<String>) -> Response {
    let Ok(page) = page.parse::<Page>() else {
        return not_found(format!("Unknown page: {}", page));
    };
    let mut app = shell.app.lock().await;
    app.dispatch(Event::Navigate(page), Instant::now());
    back_to_page(&app).into_response()
}

#[derive(Debug, Deserialize)]
struct LocationForm {
    fragment: String,
}

/// The browser moved through history; record where it is and follow it
async fn follow_location(
    State(shell): State<Arc<Shell>>,
    Form(location): Form<LocationForm>,
) -> StatusCode {
    let fragment = location.fragment.trim().trim_start_matches('#');
    let mut app = shell.app.lock().await;
    app.view_mut().set_fragment(fragment);
    app.dispatch(Event::FragmentChanged(fragment.to_string()), Instant::now());
    StatusCode::NO_CONTENT
}

async fn switch_view(State(shell): State<Arc<Shell>>, Path(mode): Path<String>) -> Response {
    let Ok(mode) = mode.parse::<ViewMode>() else {
        return not_found(format!("Unknown view mode: {}", mode));
    };
    let mut app = shell.app.lock().await;
    app.dispatch(Event::SwitchView(mode), Instant::now());
    back_to_page(&app).into_response()
}

async fn submit(State(shell): State<Arc<Shell>>, Form(fields): Form<FormFields>) -> Redirect {
    let mut app = shell.app.lock().await;
    if let Outcome::Rejected(errors) = app.dispatch(Event::Submit(fields), Instant::now()) {
        tracing::debug!("Form rejected with {} error(s)", errors.len());
    }
    schedule_wakeup(&shell, &app);
    back_to_page(&app)
}

async fn clear_form(State(shell): State<Arc<Shell>>) -> Redirect {
    let mut app = shell.app.lock().await;
    app.dispatch(Event::ClearForm, Instant::now());
    back_to_page(&app)
}

async fn reload(State(shell): State<Arc<Shell>>) -> Redirect {
    spawn_load(&shell).await;
    let app = shell.app.lock().await;
    back_to_page(&app)
}

async fn dismiss_banner(State(shell): State<Arc<Shell>>) -> Redirect {
    let mut app = shell.app.lock().await;
    app.dispatch(Event::DismissError, Instant::now());
    back_to_page(&app)
}
