//! JSON API — workspace snapshot and bulk table edits.

use axum::extract::State;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::routes::RouteError;
use crate::routes::session::Session;
use crate::state::AppState;
use crate::workspace::grid::Table;
use crate::workspace::{Workspace, WorkspaceCommand};

#[derive(Debug, Deserialize)]
pub struct TableBody {
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

/// `GET /api/workspace` — the caller's whole workspace.
pub async fn get_workspace(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let workspace = state.sessions.snapshot(&session.token).await;
    (session.jar, Json(Workspace::clone(&workspace)))
}

/// `GET /api/table`
pub async fn get_table(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let workspace = state.sessions.snapshot(&session.token).await;
    (session.jar, Json(workspace.table.clone()))
}

/// `PUT /api/table` — replace the table; answers with the stored result.
pub async fn put_table(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<TableBody>,
) -> Result<(CookieJar, Json<Table>), RouteError> {
    let command = WorkspaceCommand::ReplaceTable { columns: body.columns, rows: body.rows };
    let workspace = state.sessions.apply(&session.token, command).await?;
    tracing::info!(rows = workspace.table.row_count(), "table replaced via api");
    Ok((session.jar, Json(workspace.table.clone())))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
