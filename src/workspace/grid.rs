//! Grid — the spreadsheet tab's untyped table.
//!
//! DESIGN
//! ======
//! Cells are plain strings with no typing or formula evaluation. Every row
//! holds exactly `columns.len()` cells; each edit returns a new `Table`
//! rather than mutating in place so the session store can swap snapshots.

use serde::Serialize;

use super::WorkspaceError;

/// Column names a fresh session starts with.
pub const DEFAULT_COLUMNS: [&str; 3] = ["A", "B", "C"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Default for Table {
    fn default() -> Self {
        Self { columns: DEFAULT_COLUMNS.iter().map(|c| (*c).to_owned()).collect(), rows: Vec::new() }
    }
}

impl Table {
    /// Build a table from raw parts, checking names and row widths.
    ///
    /// # Errors
    ///
    /// Returns an error if a column name is blank or repeated, or if any row
    /// does not have one cell per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, WorkspaceError> {
        for (idx, name) in columns.iter().enumerate() {
            check_column_name(&columns[..idx], name)?;
        }
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(WorkspaceError::RaggedRow { row: idx, expected: columns.len(), found: row.len() });
            }
        }
        Ok(Self { columns, rows })
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Overwrite a single cell.
    ///
    /// # Errors
    ///
    /// Returns an error if `row` or `col` is out of range.
    pub fn set_cell(&self, row: usize, col: usize, value: String) -> Result<Self, WorkspaceError> {
        self.check_row(row)?;
        self.check_col(col)?;
        let mut next = self.clone();
        next.rows[row][col] = value;
        Ok(next)
    }

    /// Append an empty row.
    #[must_use]
    pub fn push_row(&self) -> Self {
        let mut next = self.clone();
        next.rows.push(vec![String::new(); self.columns.len()]);
        next
    }

    /// Remove a row by index.
    ///
    /// # Errors
    ///
    /// Returns an error if `row` is out of range.
    pub fn remove_row(&self, row: usize) -> Result<Self, WorkspaceError> {
        self.check_row(row)?;
        let mut next = self.clone();
        next.rows.remove(row);
        Ok(next)
    }

    /// Append a column; existing rows gain an empty cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or already used.
    pub fn push_column(&self, name: &str) -> Result<Self, WorkspaceError> {
        let name = name.trim();
        check_column_name(&self.columns, name)?;
        let mut next = self.clone();
        next.columns.push(name.to_owned());
        for row in &mut next.rows {
            row.push(String::new());
        }
        Ok(next)
    }

    /// Rename a column in place.
    ///
    /// # Errors
    ///
    /// Returns an error if `col` is out of range or the new name is blank or
    /// collides with another column.
    pub fn rename_column(&self, col: usize, name: &str) -> Result<Self, WorkspaceError> {
        self.check_col(col)?;
        let name = name.trim();
        if self.columns[col] == name {
            return Ok(self.clone());
        }
        check_column_name(&self.columns, name)?;
        let mut next = self.clone();
        next.columns[col] = name.to_owned();
        Ok(next)
    }

    /// Remove a column and its cells.
    ///
    /// # Errors
    ///
    /// Returns an error if `col` is out of range.
    pub fn remove_column(&self, col: usize) -> Result<Self, WorkspaceError> {
        self.check_col(col)?;
        let mut next = self.clone();
        next.columns.remove(col);
        for row in &mut next.rows {
            row.remove(col);
        }
        Ok(next)
    }

    /// Serialize as CSV: header row of column names, then one record per row.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        write_record(&mut out, &self.columns);
        for row in &self.rows {
            write_record(&mut out, row);
        }
        out
    }

    fn check_row(&self, row: usize) -> Result<(), WorkspaceError> {
        if row < self.rows.len() {
            Ok(())
        } else {
            Err(WorkspaceError::RowOutOfRange { row, rows: self.rows.len() })
        }
    }

    fn check_col(&self, col: usize) -> Result<(), WorkspaceError> {
        if col < self.columns.len() {
            Ok(())
        } else {
            Err(WorkspaceError::ColumnOutOfRange { col, columns: self.columns.len() })
        }
    }
}

fn check_column_name(existing: &[String], name: &str) -> Result<(), WorkspaceError> {
    if name.trim().is_empty() {
        return Err(WorkspaceError::BlankColumnName);
    }
    if existing.iter().any(|c| c == name) {
        return Err(WorkspaceError::DuplicateColumn(name.to_owned()));
    }
    Ok(())
}

// =============================================================================
// CSV
// =============================================================================

fn write_record(out: &mut String, fields: &[String]) {
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        write_field(out, field);
    }
    out.push('\n');
}

fn write_field(out: &mut String, field: &str) {
    let needs_quote = field.contains([',', '"', '\r', '\n']);
    if !needs_quote {
        out.push_str(field);
        return;
    }
    out.push('"');
    out.push_str(&field.replace('"', "\"\""));
    out.push('"');
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod tests;
