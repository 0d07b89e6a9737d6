//! Document tab routes.

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::render::Tab;
use crate::routes::session::Session;
use crate::routes::{RouteError, commit};
use crate::services::ai;
use crate::state::AppState;
use crate::workspace::WorkspaceCommand;

#[derive(Debug, Deserialize)]
pub struct DocumentForm {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct PromptForm {
    #[serde(default)]
    pub prompt: String,
    /// Editor contents when submitted from the document form.
    pub content: Option<String>,
}

/// `POST /doc` — overwrite the buffer with the editor contents.
pub async fn save_document(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<DocumentForm>,
) -> Result<(CookieJar, Redirect), RouteError> {
    commit(&state, session, Tab::Doc, WorkspaceCommand::ReplaceDocument { text: form.content }).await
}

/// `POST /doc/generate` — append generated content to the buffer.
///
/// Editor contents sent along are saved first, so they survive a generator
/// failure and the generated text lands after them.
pub async fn generate_content(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PromptForm>,
) -> Result<(CookieJar, Redirect), RouteError> {
    if let Some(draft) = form.content {
        state.sessions.apply(&session.token, WorkspaceCommand::ReplaceDocument { text: draft }).await?;
    }

    let text = ai::document_content(state.generator.as_ref(), &form.prompt).await?;
    tracing::info!(chars = text.len(), "document content generated");
    commit(&state, session, Tab::Doc, WorkspaceCommand::AppendDocument { text }).await
}
