//! Workspace — one session's grid, document and deck.
//!
//! DESIGN
//! ======
//! A `Workspace` is an immutable snapshot. Every user interaction becomes a
//! `WorkspaceCommand`, and `Workspace::apply` builds the next snapshot from
//! the current one. The session store swaps the stored `Arc` wholesale, so a
//! render that already holds a snapshot is never affected by a later edit.
//!
//! AI output is produced before a command is built; commands only carry the
//! resulting text, which keeps `apply` synchronous and deterministic.

pub mod deck;
pub mod document;
pub mod grid;

use serde::Serialize;

use deck::{Deck, NEW_SLIDE_TITLE, SlideId};
use document::Document;
use grid::Table;

/// Notice shown after the placeholder slide export.
pub const EXPORT_DECK_NOTICE: &str = "Export functionality would be implemented here";

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("row {row} out of range ({rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },
    #[error("column {col} out of range ({columns} columns)")]
    ColumnOutOfRange { col: usize, columns: usize },
    #[error("column name must not be blank")]
    BlankColumnName,
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("slide not found: {0}")]
    SlideNotFound(SlideId),
    #[error("cannot delete the last slide")]
    LastSlide,
    #[error("no slide ids left")]
    SlideIdsExhausted,
}

// =============================================================================
// COMMANDS
// =============================================================================

/// A single state transition requested by the UI.
#[derive(Debug, Clone)]
pub enum WorkspaceCommand {
    SetCell { row: usize, col: usize, value: String },
    AddRow,
    DeleteRow { row: usize },
    AddColumn { name: String },
    RenameColumn { col: usize, name: String },
    DeleteColumn { col: usize },
    ReplaceTable { columns: Vec<String>, rows: Vec<Vec<String>> },
    SetInsights { text: String },
    ReplaceDocument { text: String },
    AppendDocument { text: String },
    PreviousSlide,
    NextSlide,
    SelectSlide { id: SlideId },
    UpdateSlide { title: String, content: String },
    AddSlide,
    CreateSlide { title: String, content: String },
    DeleteSlide,
    ExportDeck,
}

// =============================================================================
// WORKSPACE
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Workspace {
    pub table: Table,
    pub document: Document,
    pub deck: Deck,
    /// Last output of the data assistant, shown above the grid.
    pub insights: Option<String>,
    /// One-shot message from the previous action.
    pub notice: Option<String>,
}

impl Workspace {
    /// Build the snapshot that results from `command`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command refers to a row, column or slide that
    /// does not exist, or would break a table or deck invariant.
    pub fn apply(&self, command: WorkspaceCommand) -> Result<Self, WorkspaceError> {
        let mut next = self.clone();
        next.notice = None;

        match command {
            WorkspaceCommand::SetCell { row, col, value } => next.table = self.table.set_cell(row, col, value)?,
            WorkspaceCommand::AddRow => next.table = self.table.push_row(),
            WorkspaceCommand::DeleteRow { row } => next.table = self.table.remove_row(row)?,
            WorkspaceCommand::AddColumn { name } => next.table = self.table.push_column(&name)?,
            WorkspaceCommand::RenameColumn { col, name } => next.table = self.table.rename_column(col, &name)?,
            WorkspaceCommand::DeleteColumn { col } => next.table = self.table.remove_column(col)?,
            WorkspaceCommand::ReplaceTable { columns, rows } => next.table = Table::new(columns, rows)?,
            WorkspaceCommand::SetInsights { text } => next.insights = Some(text),
            WorkspaceCommand::ReplaceDocument { text } => next.document = self.document.replace(text),
            WorkspaceCommand::AppendDocument { text } => next.document = self.document.append(&text),
            WorkspaceCommand::PreviousSlide => next.deck = self.deck.previous(),
            WorkspaceCommand::NextSlide => next.deck = self.deck.next(),
            WorkspaceCommand::SelectSlide { id } => next.deck = self.deck.select(id)?,
            WorkspaceCommand::UpdateSlide { title, content } => next.deck = self.deck.update_current(title, content),
            WorkspaceCommand::AddSlide => next.deck = self.deck.push_slide(NEW_SLIDE_TITLE.into(), String::new())?,
            WorkspaceCommand::CreateSlide { title, content } => next.deck = self.deck.push_slide(title, content)?,
            WorkspaceCommand::DeleteSlide => next.deck = self.deck.remove_current()?,
            WorkspaceCommand::ExportDeck => next.notice = Some(EXPORT_DECK_NOTICE.into()),
        }

        Ok(next)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
