//! Rendering strategies.

use crate::controller::PaginationView;
use crate::selection::SelectionMode;
use crate::table::{Column, TableRow, TableState};

/// Turns a table and its pagination view into output.
pub trait TableRenderer<T: TableRow> {
    fn render(&self, table: &TableState<T>, pagination: &PaginationView<'_, T>) -> String;
}

/// Renders a table as aligned plain text followed by a pager line.
///
/// ```text
/// ID    NAME
/// 41    alpha
/// 42    beta
///
/// ‹ [3] ›
/// ```
///
/// The pager shows only the active page. The previous arrow appears when
/// the active page is past 1; the next arrow appears while another page is
/// offered.
#[derive(Debug, Clone)]
pub struct PlainTextRenderer {
    gap: usize,
    empty_text: String,
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self {
            gap: 2,
            empty_text: "(no rows)".to_string(),
        }
    }
}

impl PlainTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spaces between columns.
    pub fn gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    /// Text shown instead of rows when the table is empty.
    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    fn column_widths<T: TableRow>(&self, table: &TableState<T>) -> Vec<usize> {
        table
            .columns()
            .iter()
            .map(|column| match column.width {
                Some(width) => width,
                None => table
                    .rows()
                    .iter()
                    .map(|row| row.cell(&column.id).chars().count())
                    .chain(std::iter::once(column.header.chars().count()))
                    .max()
                    .unwrap_or(0),
            })
            .collect()
    }

    fn line(&self, cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
        let gap = " ".repeat(self.gap);
        cells
            .zip(widths)
            .map(|(cell, &width)| {
                let cell: String = cell.chars().take(width).collect();
                format!("{cell:<width$}")
            })
            .collect::<Vec<_>>()
            .join(gap.as_str())
            .trim_end()
            .to_string()
    }

    fn pager(pagination: &PaginationView<'_, impl Sized>) -> String {
        let prev = if pagination.active_page > 1 { "‹" } else { " " };
        let next = if pagination.active_page < pagination.page_indicator_count {
            "›"
        } else {
            " "
        };
        format!("{prev} [{}] {next}", pagination.active_page)
            .trim_end()
            .to_string()
    }
}

impl<T: TableRow> TableRenderer<T> for PlainTextRenderer {
    fn render(&self, table: &TableState<T>, pagination: &PaginationView<'_, T>) -> String {
        let widths = self.column_widths(table);
        let marks = table.selection().mode() != SelectionMode::None;
        let mark = |selected: bool| match (marks, selected) {
            (false, _) => "",
            (true, true) => "* ",
            (true, false) => "  ",
        };

        let mut lines = Vec::with_capacity(table.len() + 3);
        let header = self.line(
            table.columns().iter().map(|c: &Column| c.header.clone()),
            &widths,
        );
        lines.push(format!("{}{header}", mark(false)));

        if table.is_empty() {
            lines.push(self.empty_text.clone());
        }
        for row in table.rows() {
            let cells = table.columns().iter().map(|c| row.cell(&c.id));
            let selected = table.is_selected(&row.key());
            lines.push(format!("{}{}", mark(selected), self.line(cells, &widths)));
        }

        if pagination.pagination_visible {
            lines.push(String::new());
            lines.push(Self::pager(pagination));
        }

        lines.join("\n")
    }
}
