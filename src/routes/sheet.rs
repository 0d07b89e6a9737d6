//! Spreadsheet tab routes.

use std::collections::HashMap;

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

/// Upper bound on `rows * cols` accepted from a grid form.
pub const MAX_GRID_CELLS: usize = 100_000;

#[derive(Debug, Deserialize)]
pub struct CellForm {
    pub row: usize,
    pub col: usize,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameColumnForm {
    pub col: usize,
    #[serde(default)]
    pub name: String,
}

/// Raw fields of a grid-form submission.
///
/// Every button inside the grid form posts the whole grid along with its own
/// field (`row`, `col`, `name` or `prompt`), so typed-but-unsaved cells are
/// saved before the button's action runs.
type GridFields = HashMap<String, String>;

type Action = Result<(CookieJar, Redirect), RouteError>;

/// `POST /sheet` — save the whole grid editor at once.
///
/// The form carries `rows` and `cols` counts, `col_{c}` header inputs and
/// `cell_{r}_{c}` cell inputs; missing cells are stored empty.
pub async fn save_grid(State(state): State<AppState>, session: Session, Form(fields): Form<GridFields>) -> Action {
    let (columns, rows) = grid_from_form(&fields)?;
    commit(&state, session, Tab::Sheet, WorkspaceCommand::ReplaceTable { columns, rows }).await
}

/// `POST /sheet/cell` — overwrite one cell.
pub async fn set_cell(State(state): State<AppState>, session: Session, Form(form): Form<CellForm>) -> Action {
    let command = WorkspaceCommand::SetCell { row: form.row, col: form.col, value: form.value };
    commit(&state, session, Tab::Sheet, command).await
}

/// `POST /sheet/row` — append an empty row.
pub async fn add_row(State(state): State<AppState>, session: Session, Form(fields): Form<GridFields>) -> Action {
    commit_with_grid(&state, session, &fields, WorkspaceCommand::AddRow).await
}

/// `POST /sheet/row/delete`
pub async fn delete_row(State(state): State<AppState>, session: Session, Form(fields): Form<GridFields>) -> Action {
    let row = form_usize(&fields, "row")?;
    commit_with_grid(&state, session, &fields, WorkspaceCommand::DeleteRow { row }).await
}

/// `POST /sheet/column`
pub async fn add_column(State(state): State<AppState>, session: Session, Form(fields): Form<GridFields>) -> Action {
    let name = fields.get("name").cloned().unwrap_or_default();
    commit_with_grid(&state, session, &fields, WorkspaceCommand::AddColumn { name }).await
}

/// `POST /sheet/column/rename`
pub async fn rename_column(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RenameColumnForm>,
) -> Action {
    let command = WorkspaceCommand::RenameColumn { col: form.col, name: form.name };
    commit(&state, session, Tab::Sheet, command).await
}

/// `POST /sheet/column/delete`
pub async fn delete_column(State(state): State<AppState>, session: Session, Form(fields): Form<GridFields>) -> Action {
    let col = form_usize(&fields, "col")?;
    commit_with_grid(&state, session, &fields, WorkspaceCommand::DeleteColumn { col }).await
}

/// `POST /sheet/insights` — ask the generator about the current table.
///
/// Pending grid edits are saved first, so the insights describe what is on
/// screen. They stay saved even if the generator then fails.
pub async fn generate_insights(
    State(state): State<AppState>,
    session: Session,
    Form(fields): Form<GridFields>,
) -> Action {
    if let Some(save) = pending_grid(&fields)? {
        state.sessions.apply(&session.token, save).await?;
    }
    let workspace = state.sessions.snapshot(&session.token).await;
    let prompt = fields.get("prompt").map_or("", String::as_str);
    let text = ai::data_insights(state.generator.as_ref(), &workspace.table, prompt).await?;
    commit(&state, session, Tab::Sheet, WorkspaceCommand::SetInsights { text }).await
}

async fn commit_with_grid(state: &AppState, session: Session, fields: &GridFields, command: WorkspaceCommand) -> Action {
    let mut commands: Vec<WorkspaceCommand> = pending_grid(fields)?.into_iter().collect();
    commands.push(command);
    commit_all(state, session, Tab::Sheet, commands).await
}

// =============================================================================
// GRID FORM PARSING
// =============================================================================

pub(crate) fn grid_from_form(fields: &GridFields) -> Result<(Vec<String>, Vec<Vec<String>>), RouteError> {
    let row_count = form_usize(fields, "rows")?;
    let col_count = form_usize(fields, "cols")?;
    if row_count.saturating_mul(col_count) > MAX_GRID_CELLS {
        return Err(RouteError::BadForm(format!("grid of {row_count}x{col_count} exceeds {MAX_GRID_CELLS} cells")));
    }

    let columns = (0..col_count)
        .map(|c| fields.get(&format!("col_{c}")).cloned().unwrap_or_default())
        .collect();
    let rows = (0..row_count)
        .map(|r| {
            (0..col_count)
                .map(|c| fields.get(&format!("cell_{r}_{c}")).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    Ok((columns, rows))
}

/// The grid carried by a submission from the grid form, if any.
fn pending_grid(fields: &GridFields) -> Result<Option<WorkspaceCommand>, RouteError> {
    if !fields.contains_key("rows") {
        return Ok(None);
    }
    let (columns, rows) = grid_from_form(fields)?;
    Ok(Some(WorkspaceCommand::ReplaceTable { columns, rows }))
}

fn form_usize(fields: &GridFields, key: &str) -> Result<usize, RouteError> {
    let raw = fields
        .get(key)
        .ok_or_else(|| RouteError::BadForm(format!("missing {key}")))?;
    raw.trim()
        .parse()
        .map_err(|_| RouteError::BadForm(format!("invalid {key}: {raw:?}")))
}

#[cfg(test)]
#[path = "sheet_test.rs"]
mod tests;
