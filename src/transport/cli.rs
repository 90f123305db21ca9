//! CLI entry points

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::app::{App, AppSettings};
use crate::config::Config;
use crate::core::ViewMode;
use crate::loader::{HttpPeopleSource, PeopleSource};
use crate::navigation::Page;
use crate::presentation::Document;

fn http_source(config: &Config) -> HttpPeopleSource {
    HttpPeopleSource::new(config.source.endpoint.clone())
        .with_timeout(Duration::from_secs(config.source.timeout_secs))
}

/// Run the local preview shell
pub async fn run_serve(config: &Config) -> Result<()> {
    let source: Arc<dyn PeopleSource> = Arc::new(http_source(config));
    super::http::run_http_server(config, source).await
}

/// Load once and emit the rendered page
///
/// A failed fetch is not an error here: the page is still produced, with the
/// error banner showing.
pub async fn run_snapshot(
    config: &Config,
    page: Option<Page>,
    view: Option<ViewMode>,
    out: Option<&Path>,
) -> Result<()> {
    let document = match page {
        Some(page) => Document::with_fragment(page.as_str()),
        None => Document::new(),
    };
    let mut app = App::new(document, AppSettings::from(config));
    app.start();
    if let Some(mode) = view {
        app.switch_view(mode);
    }

    let source = http_source(config);
    if let Err(e) = app.load_people(&source).await {
        tracing::warn!("Snapshot rendered without people: {}", e);
    }

    let html = app.teardown().to_html();
    match out {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote snapshot to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
