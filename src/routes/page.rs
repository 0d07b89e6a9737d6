//! Page route — render the caller's workspace.

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use serde::Deserialize;

use crate::render::{self, Tab};
use crate::routes::session::Session;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub tab: Option<String>,
}

/// `GET /` — draw all three tabs with `?tab=` selecting the visible one.
pub async fn index(State(state): State<AppState>, session: Session, Query(query): Query<PageQuery>) -> impl IntoResponse {
    let tab = query.tab.as_deref().map_or(Tab::Sheet, Tab::from_query);
    let workspace = state.sessions.snapshot(&session.token).await;
    (session.jar, Html(render::render_page(&workspace, tab)))
}
