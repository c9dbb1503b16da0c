//! Generic client-side table: columns, rows, selection and sorting over a
//! static row list.
//!
//! The table knows nothing about pages. [`PaginatedTable`](crate::paginated::PaginatedTable)
//! feeds it whatever the pagination controller currently displays.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::selection::{Selection, SelectionMode};

// =============================================================================
// Column
// =============================================================================

/// A table column definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Identifier passed to [`TableRow::cell`].
    pub id: String,
    /// Header text.
    pub header: String,
    /// Fixed width in characters. `None` sizes to content.
    #[serde(default)]
    pub width: Option<usize>,
    /// Whether the column can be sorted.
    #[serde(default = "default_sortable")]
    pub sortable: bool,
}

fn default_sortable() -> bool {
    true
}

impl Column {
    /// Create a new sortable column with the given id and header.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            width: None,
            sortable: true,
        }
    }

    /// Set a fixed width for this column.
    pub fn fixed(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Exclude this column from sorting.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

// =============================================================================
// TableRow
// =============================================================================

/// Trait for rows that can be displayed in a table.
///
/// ```ignore
/// #[derive(Clone)]
/// struct Task {
///     id: String,
///     host: String,
/// }
///
/// impl TableRow for Task {
///     type Key = String;
///
///     fn key(&self) -> String {
///         self.id.clone()
///     }
///
///     fn cell(&self, column_id: &str) -> String {
///         match column_id {
///             "id" => self.id.clone(),
///             "host" => self.host.clone(),
///             _ => String::new(),
///         }
///     }
/// }
/// ```
pub trait TableRow: Clone {
    /// The key type used to identify this row.
    type Key: Clone + Eq + Hash + ToString;

    /// Return a unique key for this row.
    fn key(&self) -> Self::Key;

    /// Cell text for the given column.
    fn cell(&self, column_id: &str) -> String;

    /// Ordering used when sorting by `column_id`. Compares cell text by default.
    fn compare(&self, other: &Self, column_id: &str) -> Ordering {
        self.cell(column_id).cmp(&other.cell(column_id))
    }
}

// =============================================================================
// TableState
// =============================================================================

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Rows, columns, selection and sort state of a table.
#[derive(Debug, Clone)]
pub struct TableState<T: TableRow> {
    rows: Vec<T>,
    columns: Vec<Column>,
    selection: Selection<T::Key>,
    sort: Option<(usize, SortOrder)>,
}

impl<T: TableRow> TableState<T> {
    /// Create an empty table with the given columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            rows: Vec::new(),
            columns,
            selection: Selection::default(),
            sort: None,
        }
    }

    /// Set the selection mode.
    pub fn with_selection(mut self, mode: SelectionMode) -> Self {
        self.selection = Selection::new(mode);
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace all rows.
    ///
    /// The current sort is re-applied and selected keys that are no longer
    /// present are dropped.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.apply_sort();

        let present: HashSet<T::Key> = self.rows.iter().map(TableRow::key).collect();
        self.selection.retain(|key| present.contains(key));
    }

    /// Get the index of a row by key.
    pub fn index_of(&self, key: &T::Key) -> Option<usize> {
        self.rows.iter().position(|row| &row.key() == key)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selection(&self) -> &Selection<T::Key> {
        &self.selection
    }

    /// Toggle selection of the row with `key`. Unknown keys are ignored.
    pub fn toggle_select(&mut self, key: &T::Key) -> bool {
        if self.index_of(key).is_none() {
            return false;
        }
        self.selection.toggle(key.clone())
    }

    pub fn is_selected(&self, key: &T::Key) -> bool {
        self.selection.is_selected(key)
    }

    /// Selected rows in display order.
    pub fn selected_rows(&self) -> Vec<&T> {
        self.rows
            .iter()
            .filter(|row| self.selection.is_selected(&row.key()))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    pub fn sort(&self) -> Option<(usize, SortOrder)> {
        self.sort
    }

    /// Sort by column. Ignored for unknown or unsortable columns.
    pub fn set_sort(&mut self, column_index: usize, order: SortOrder) {
        if self.is_sortable(column_index) {
            self.sort = Some((column_index, order));
            self.apply_sort();
        }
    }

    /// Toggle sort for a column.
    ///
    /// Flips the direction if the column is already sorted, otherwise sorts
    /// ascending. Returns the new sort state.
    pub fn toggle_sort(&mut self, column_index: usize) -> Option<(usize, SortOrder)> {
        if !self.is_sortable(column_index) {
            return None;
        }
        let order = match self.sort {
            Some((idx, order)) if idx == column_index => order.reversed(),
            _ => SortOrder::Ascending,
        };
        self.set_sort(column_index, order);
        self.sort
    }

    /// Forget the sort. Row order stays as it is until the next `set_rows`.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    fn is_sortable(&self, column_index: usize) -> bool {
        self.columns
            .get(column_index)
            .is_some_and(|column| column.sortable)
    }

    fn apply_sort(&mut self) {
        let Some((index, order)) = self.sort else {
            return;
        };
        let Some(column) = self.columns.get(index) else {
            return;
        };
        let column_id = column.id.clone();
        self.rows.sort_by(|a, b| {
            let ordering = a.compare(b, &column_id);
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }
}
