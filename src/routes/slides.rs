//! Presentation tab routes.
//!
//! Every button on the slide tab sits in one form with the title and content
//! editors, so each action first saves whatever the editors hold. A request
//! without editor fields skips that step.

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::render::Tab;
use crate::routes::session::Session;
use crate::routes::{RouteError, commit, commit_all};
use crate::services::ai;
use crate::state::AppState;
use crate::workspace::WorkspaceCommand;
use crate::workspace::deck::SlideId;

/// Editor fields carried by the navigation and deck buttons.
#[derive(Debug, Default, Deserialize)]
pub struct EditorFields {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl EditorFields {
    fn save(self) -> Option<WorkspaceCommand> {
        match (self.title, self.content) {
            (Some(title), Some(content)) => Some(WorkspaceCommand::UpdateSlide { title, content }),
            _ => None,
        }
    }

    fn then(self, command: WorkspaceCommand) -> Vec<WorkspaceCommand> {
        let mut commands: Vec<WorkspaceCommand> = self.save().into_iter().collect();
        commands.push(command);
        commands
    }
}

// Numeric fields cannot share a struct with `#[serde(flatten)]` under form
// encoding, so the editor fields are spelled out here.
#[derive(Debug, Deserialize)]
pub struct SelectForm {
    pub id: u32,
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SlideForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct TopicForm {
    #[serde(default)]
    pub topic: String,
    pub title: Option<String>,
    pub content: Option<String>,
}

type Action = Result<(CookieJar, Redirect), RouteError>;

/// `POST /slides/prev` — "← Prev".
pub async fn previous(State(state): State<AppState>, session: Session, Form(editor): Form<EditorFields>) -> Action {
    commit_all(&state, session, Tab::Slides, editor.then(WorkspaceCommand::PreviousSlide)).await
}

/// `POST /slides/next` — "Next →".
pub async fn next(State(state): State<AppState>, session: Session, Form(editor): Form<EditorFields>) -> Action {
    commit_all(&state, session, Tab::Slides, editor.then(WorkspaceCommand::NextSlide)).await
}

/// `POST /slides/select` — jump to a slide from the outline.
pub async fn select(State(state): State<AppState>, session: Session, Form(form): Form<SelectForm>) -> Action {
    let editor = EditorFields { title: form.title, content: form.content };
    let command = WorkspaceCommand::SelectSlide { id: SlideId(form.id) };
    commit_all(&state, session, Tab::Slides, editor.then(command)).await
}

/// `POST /slides/current` — save the title and content editors.
pub async fn update_current(State(state): State<AppState>, session: Session, Form(form): Form<SlideForm>) -> Action {
    let command = WorkspaceCommand::UpdateSlide { title: form.title, content: form.content };
    commit(&state, session, Tab::Slides, command).await
}

/// `POST /slides/new` — "Add New Slide".
pub async fn add_slide(State(state): State<AppState>, session: Session, Form(editor): Form<EditorFields>) -> Action {
    commit_all(&state, session, Tab::Slides, editor.then(WorkspaceCommand::AddSlide)).await
}

/// `POST /slides/generate` — "Create Slide with AI".
///
/// Editor contents are saved before the generator runs.
pub async fn generate_slide(State(state): State<AppState>, session: Session, Form(form): Form<TopicForm>) -> Action {
    let editor = EditorFields { title: form.title, content: form.content };
    if let Some(save) = editor.save() {
        state.sessions.apply(&session.token, save).await?;
    }

    let content = ai::slide_content(state.generator.as_ref(), &form.topic).await?;
    tracing::info!(topic = %form.topic, "slide generated");
    commit(&state, session, Tab::Slides, WorkspaceCommand::CreateSlide { title: form.topic, content }).await
}

/// `POST /slides/delete` — remove the current slide.
pub async fn delete_slide(State(state): State<AppState>, session: Session, Form(editor): Form<EditorFields>) -> Action {
    commit_all(&state, session, Tab::Slides, editor.then(WorkspaceCommand::DeleteSlide)).await
}

/// `POST /slides/export` — "Export to PPTX" placeholder; only sets a notice.
pub async fn export_deck(State(state): State<AppState>, session: Session, Form(editor): Form<EditorFields>) -> Action {
    commit_all(&state, session, Tab::Slides, editor.then(WorkspaceCommand::ExportDeck)).await
}

#[cfg(test)]
#[path = "slides_test.rs"]
mod tests;
