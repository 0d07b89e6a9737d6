//! Downloads — CSV of the grid, Markdown of the document.

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;

use crate::routes::session::Session;
use crate::state::AppState;

pub const TABLE_FILENAME: &str = "neocel_data.csv";
pub const DOCUMENT_FILENAME: &str = "neocel_document.md";

/// `GET /export/neocel_data.csv` — the table with a header row, no index column.
pub async fn export_table(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let workspace = state.sessions.snapshot(&session.token).await;
    let body = workspace.table.to_csv();
    tracing::info!(rows = workspace.table.row_count(), "table exported");
    (session.jar, attachment_headers("text/csv; charset=utf-8", TABLE_FILENAME), body)
}

/// `GET /export/neocel_document.md` — the document buffer, verbatim.
pub async fn export_document(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let workspace = state.sessions.snapshot(&session.token).await;
    let body = workspace.document.to_markdown();
    tracing::info!(bytes = body.len(), "document exported");
    (session.jar, attachment_headers("text/markdown; charset=utf-8", DOCUMENT_FILENAME), body)
}

fn attachment_headers(content_type: &'static str, filename: &str) -> [(axum::http::HeaderName, String); 2] {
    [
        (CONTENT_TYPE, content_type.to_owned()),
        (CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
    ]
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
