//! A table base composed with a pagination controller.

use crate::config::TableConfig;
use crate::controller::PaginationController;
use crate::error::ConfigError;
use crate::render::TableRenderer;
use crate::source::DataSource;
use crate::table::{TableRow, TableState};

/// Server-paginated table.
///
/// The table base sorts and selects whatever the controller currently
/// displays; the renderer decides what that looks like.
pub struct PaginatedTable<T: TableRow, P, D, R> {
    table: TableState<T>,
    controller: PaginationController<T, P, D>,
    renderer: R,
}

impl<T, P, D, R> PaginatedTable<T, P, D, R>
where
    T: TableRow,
    P: Clone,
    D: DataSource<P>,
    R: TableRenderer<T>,
{
    pub fn new(
        config: &TableConfig,
        params: Vec<P>,
        source: D,
        renderer: R,
    ) -> Result<Self, ConfigError> {
        let controller = PaginationController::new(config, params, source)?;
        let table = TableState::new(config.columns.clone()).with_selection(config.selection);
        Ok(Self {
            table,
            controller,
            renderer,
        })
    }

    pub fn table(&self) -> &TableState<T> {
        &self.table
    }

    /// Mutable access to the table base, for sorting and selection.
    pub fn table_mut(&mut self) -> &mut TableState<T> {
        &mut self.table
    }

    pub fn controller(&self) -> &PaginationController<T, P, D> {
        &self.controller
    }

    pub fn load_initial(&self) {
        self.controller.load_initial();
    }

    /// Forward a pager selection to the controller.
    pub fn select_page(&mut self, selected: u32) {
        self.controller.on_page_select(selected);
    }

    /// Hand a freshly delivered batch to the controller and refresh the rows.
    pub fn receive(&mut self, batch: Vec<T>, paginate: bool) {
        self.controller.receive_entries(batch, paginate);
        self.table
            .set_rows(self.controller.state().display_items().to_vec());
    }

    pub fn render(&self) -> String {
        self.renderer.render(&self.table, &self.controller.view())
    }
}
