//! HTTP front-end: router wiring and server bootstrap.

mod endpoints;
mod handlers;
mod page;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;

use crate::gateway::Gateway;
use endpoints::{
    CALLBACK_ENDPOINT, CREATE_ENDPOINT, INDEX_ENDPOINT, LOGOUT_ENDPOINT, PARSE_ENDPOINT,
    REPO_DETAILS_ENDPOINT,
};
use handlers::{
    handle_callback, handle_create, handle_index, handle_logout, handle_parse, handle_repo_details,
};

/// State shared by all handlers.
pub struct AppState {
    gateway: Gateway,
    templates: minijinja::Environment<'static>,
}

impl AppState {
    pub fn new(gateway: Gateway) -> anyhow::Result<Self> {
        Ok(Self {
            gateway,
            templates: page::templates().context("failed to load page templates")?,
        })
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(INDEX_ENDPOINT, get(handle_index))
        .route(CALLBACK_ENDPOINT, get(handle_callback))
        .route(LOGOUT_ENDPOINT, get(handle_logout))
        .route(PARSE_ENDPOINT, get(handle_parse))
        .route(CREATE_ENDPOINT, post(handle_create))
        .route(REPO_DETAILS_ENDPOINT, get(handle_repo_details))
        .with_state(state)
}

/// Serve until Ctrl-C.
pub async fn run(gateway: Gateway, bind: SocketAddr, open_browser: bool) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(gateway)?);
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    let local_addr = listener
        .local_addr()
        .context("failed to resolve bound address")?;

    let url = format!("http://{local_addr}/");
    tracing::info!(%url, "quickissue listening");
    if open_browser && let Err(e) = open::that(&url) {
        tracing::warn!(error = %e, "failed to open browser");
    }

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("server exited unexpectedly")?;

    tracing::info!("quickissue stopped");
    Ok(())
}
