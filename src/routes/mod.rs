//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One page, three tabs. `GET /` renders the caller's workspace; every
//! button on the page is an HTML form that POSTs to one of the action routes
//! below, which update the session and answer `303 See Other` back to the
//! page so the browser re-renders it. Downloads and a small JSON API sit
//! beside the form routes.

pub mod api;
pub mod doc;
pub mod export;
pub mod page;
pub mod session;
pub mod sheet;
pub mod slides;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum_extra::extract::cookie::CookieJar;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::render::Tab;
use crate::services::ai::AiError;
use crate::state::AppState;
use crate::workspace::{WorkspaceCommand, WorkspaceError};
use session::Session;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(page::index))
        .route("/sheet", post(sheet::save_grid))
        .route("/sheet/cell", post(sheet::set_cell))
        .route("/sheet/row", post(sheet::add_row))
        .route("/sheet/row/delete", post(sheet::delete_row))
        .route("/sheet/column", post(sheet::add_column))
        .route("/sheet/column/rename", post(sheet::rename_column))
        .route("/sheet/column/delete", post(sheet::delete_column))
        .route("/sheet/insights", post(sheet::generate_insights))
        .route("/doc", post(doc::save_document))
        .route("/doc/generate", post(doc::generate_content))
        .route("/slides/prev", post(slides::previous))
        .route("/slides/next", post(slides::next))
        .route("/slides/select", post(slides::select))
        .route("/slides/current", post(slides::update_current))
        .route("/slides/new", post(slides::add_slide))
        .route("/slides/generate", post(slides::generate_slide))
        .route("/slides/delete", post(slides::delete_slide))
        .route("/slides/export", post(slides::export_deck))
        .route(&format!("/export/{}", export::TABLE_FILENAME), get(export::export_table))
        .route(&format!("/export/{}", export::DOCUMENT_FILENAME), get(export::export_document))
        .route("/api/workspace", get(api::get_workspace))
        .route("/api/table", get(api::get_table).put(api::put_table))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Redirect back to the page after a form action.
pub(crate) fn back_to(tab: Tab) -> Redirect {
    Redirect::to(&tab.href())
}

/// Apply `command` to the caller's workspace and send them back to `tab`.
pub(crate) async fn commit(
    state: &AppState,
    session: Session,
    tab: Tab,
    command: WorkspaceCommand,
) -> Result<(CookieJar, Redirect), RouteError> {
    commit_all(state, session, tab, vec![command]).await
}

/// Like `commit`, for a button that first saves the editor fields it was
/// submitted with. The commands land together or not at all.
pub(crate) async fn commit_all(
    state: &AppState,
    session: Session,
    tab: Tab,
    commands: Vec<WorkspaceCommand>,
) -> Result<(CookieJar, Redirect), RouteError> {
    state.sessions.apply_all(&session.token, commands).await?;
    Ok((session.jar, back_to(tab)))
}

// =============================================================================
// ERRORS
// =============================================================================

/// Failure of a route handler, rendered as a plain-text status response.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
    #[error(transparent)]
    Ai(#[from] AiError),
    #[error("bad form: {0}")]
    BadForm(String),
}

pub(crate) fn workspace_error_to_status(err: &WorkspaceError) -> StatusCode {
    match err {
        WorkspaceError::RowOutOfRange { .. }
        | WorkspaceError::ColumnOutOfRange { .. }
        | WorkspaceError::SlideNotFound(_) => StatusCode::NOT_FOUND,
        WorkspaceError::BlankColumnName
        | WorkspaceError::DuplicateColumn(_)
        | WorkspaceError::RaggedRow { .. } => StatusCode::BAD_REQUEST,
        WorkspaceError::LastSlide | WorkspaceError::SlideIdsExhausted => StatusCode::CONFLICT,
    }
}

impl RouteError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Workspace(err) => workspace_error_to_status(err),
            Self::Ai(_) => StatusCode::BAD_GATEWAY,
            Self::BadForm(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
