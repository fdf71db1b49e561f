//! Library preview server command.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use tailor_elements::ElementJson;

use crate::config::ManifestFile;
use crate::preview::PreviewEngine;

struct AppState {
    page: String,
    library: Vec<ElementJson>,
}

/// Run the serve command: expose the element library over HTTP.
///
/// `/library.json` serves the wire record the editor client consumes;
/// `/` serves a human-readable preview page.
pub async fn run(config: PathBuf, port: u16, open_browser: bool) -> Result<()> {
    let manifest = ManifestFile::load(&config)?;

    let registry = manifest.registry()?;
    let extensions = manifest.extensions();
    let library = registry.library(&extensions);

    let page = PreviewEngine::new().render_library(&manifest.library.title, &library)?;

    let state = Arc::new(AppState { page, library });

    let app = Router::new()
        .route("/", get(page_handler))
        .route("/library.json", get(library_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .context("Invalid address")?;

    tracing::info!("Serving element library at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    if open_browser {
        let url = format!("http://{}", addr);
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;

    Ok(())
}

async fn page_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.clone())
}

async fn library_handler(State(state): State<Arc<AppState>>) -> Json<Vec<ElementJson>> {
    Json(state.library.clone())
}
