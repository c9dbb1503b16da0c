//! Table configuration.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::selection::SelectionMode;
use crate::table::Column;

const DEFAULT_PAGE_SIZE: u32 = 25;

/// Construction-time configuration of a paginated table.
///
/// ```ignore
/// let config = TableConfig::new(50)
///     .paginate(true)
///     .column(Column::new("id", "Task"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Show pagination controls from the start.
    pub paginate: bool,

    /// Items requested per page. Must be non-zero.
    pub page_size: u32,

    /// Column definitions for the table base.
    pub columns: Vec<Column>,

    /// Row selection mode for the table base.
    pub selection: SelectionMode,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            paginate: false,
            page_size: DEFAULT_PAGE_SIZE,
            columns: Vec::new(),
            selection: SelectionMode::default(),
        }
    }
}

impl TableConfig {
    /// Create a new config with the given page size.
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            ..Default::default()
        }
    }

    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Show pagination controls.
    pub fn paginate(mut self, paginate: bool) -> Self {
        self.paginate = paginate;
        self
    }

    /// Append a column.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Set the selection mode.
    pub fn selection(mut self, mode: SelectionMode) -> Self {
        self.selection = mode;
        self
    }

    /// Validated page size.
    pub fn page_size(&self) -> Result<NonZeroU32, ConfigError> {
        NonZeroU32::new(self.page_size).ok_or(ConfigError::ZeroPageSize)
    }
}
