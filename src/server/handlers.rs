//! Route handlers. Each one answers with a redirect, a page or a JSON
//! payload; failures are folded into the payload.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use super::AppState;
use super::endpoints::INDEX_ENDPOINT;
use super::page::render_index_page;
use crate::gateway::{CreateIssueResponse, RepoDetailsResponse};
use crate::parser::{self, ParsedCommand};

#[derive(Debug, Default, Deserialize)]
pub(super) struct CallbackQuery {
    #[serde(default)]
    code: String,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ParseQuery {
    #[serde(default)]
    cmd: String,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct RepoDetailsQuery {
    #[serde(default)]
    full_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct CreateIssueRequest {
    #[serde(default)]
    command: String,
    #[serde(default)]
    description: String,
}

pub(super) async fn handle_index(State(state): State<Arc<AppState>>) -> Response {
    let session = state.gateway.session().snapshot().await;
    match render_index_page(&state.templates, &session, &state.gateway.authorize_url()) {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to render index page");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}

pub(super) async fn handle_callback(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CallbackQuery>,
) -> Redirect {
    if query.code.is_empty() {
        tracing::warn!("OAuth callback without code");
    } else if let Err(e) = state.gateway.authenticate(&query.code).await {
        tracing::warn!(error = %e, "authentication failed");
    }
    Redirect::to(INDEX_ENDPOINT)
}

pub(super) async fn handle_logout(State(state): State<Arc<AppState>>) -> Redirect {
    state.gateway.logout().await;
    Redirect::to(INDEX_ENDPOINT)
}

pub(super) async fn handle_parse(Query(query): Query<ParseQuery>) -> Json<ParsedCommand> {
    Json(parser::parse(&query.cmd))
}

pub(super) async fn handle_create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateIssueRequest>, JsonRejection>,
) -> Json<CreateIssueResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "invalid create request body");
            return Json(CreateIssueResponse::error(rejection.body_text()));
        }
    };
    Json(
        state
            .gateway
            .create_issue(&request.command, &request.description)
            .await,
    )
}

pub(super) async fn handle_repo_details(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RepoDetailsQuery>,
) -> Json<RepoDetailsResponse> {
    Json(state.gateway.repo_details(&query.full_name).await)
}
