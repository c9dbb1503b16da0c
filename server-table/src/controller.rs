//! Pagination controller: owns the pagination state and talks to the data
//! source.

use std::num::NonZeroU32;

use log::debug;

use crate::config::TableConfig;
use crate::error::ConfigError;
use crate::pagination::{PaginationEvent, PaginationState, Transition, reduce};
use crate::source::{DataSource, FetchRequest};

/// What the display surface needs to draw the current page.
///
/// Page selections go back through
/// [`PaginationController::on_page_select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView<'a, T> {
    pub display_items: &'a [T],
    pub pagination_visible: bool,
    pub page_indicator_count: u32,
    pub active_page: u32,
}

/// Drives the pagination state machine against a [`DataSource`].
///
/// Every transition runs through [`reduce`]; fetches it asks for are
/// triggered on the source with the controller's query parameters and page
/// size. The controller never waits for a fetch.
#[derive(Debug)]
pub struct PaginationController<T, P, D> {
    state: PaginationState<T>,
    params: Vec<P>,
    page_size: NonZeroU32,
    source: D,
    /// Whether the last batch handed to `receive_entries` held items.
    entries_non_empty: bool,
}

impl<T, P, D> PaginationController<T, P, D>
where
    P: Clone,
    D: DataSource<P>,
{
    /// Create a controller on page 1.
    ///
    /// Fails if the configured page size is zero.
    pub fn new(config: &TableConfig, params: Vec<P>, source: D) -> Result<Self, ConfigError> {
        let page_size = config.page_size()?;
        Ok(Self {
            state: PaginationState::new(config.paginate),
            params,
            page_size,
            source,
            entries_non_empty: false,
        })
    }

    pub fn state(&self) -> &PaginationState<T> {
        &self.state
    }

    pub fn params(&self) -> &[P] {
        &self.params
    }

    /// Replace the query parameters used by later fetches.
    ///
    /// Nothing is re-fetched.
    pub fn set_params(&mut self, params: Vec<P>) {
        self.params = params;
    }

    pub fn page_size(&self) -> NonZeroU32 {
        self.page_size
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    /// Request the current page. A fresh controller asks for page 1.
    pub fn load_initial(&self) {
        self.dispatch(self.state.current_page());
    }

    /// The user picked `selected` in the pager.
    pub fn on_page_select(&mut self, selected: u32) {
        self.apply(PaginationEvent::PageSelected(selected));
    }

    /// The data source replaced `previous` with `next`.
    ///
    /// `paginate` is the owner's current wish for pagination controls; it can
    /// switch them on but never off.
    pub fn on_data_received(&mut self, previous: &[T], next: Vec<T>, paginate: bool) {
        self.apply(PaginationEvent::DataReceived {
            previous_non_empty: !previous.is_empty(),
            batch: next,
            paginate,
        });
    }

    /// Like [`on_data_received`](Self::on_data_received), with the previous
    /// batch being whatever was last passed here.
    pub fn receive_entries(&mut self, next: Vec<T>, paginate: bool) {
        let previous_non_empty = self.entries_non_empty;
        self.entries_non_empty = !next.is_empty();
        self.apply(PaginationEvent::DataReceived {
            previous_non_empty,
            batch: next,
            paginate,
        });
    }

    pub fn view(&self) -> PaginationView<'_, T> {
        PaginationView {
            display_items: self.state.display_items(),
            pagination_visible: self.state.paginate_enabled(),
            page_indicator_count: self.state.page_indicator_count(),
            active_page: self.state.current_page(),
        }
    }

    fn apply(&mut self, event: PaginationEvent<T>) {
        let Transition { state, fetch } = reduce(std::mem::take(&mut self.state), event);
        self.state = state;
        if let Some(page) = fetch {
            self.dispatch(page);
        }
    }

    fn dispatch(&self, page: u32) {
        debug!("dispatching fetch for page {page}");
        self.source.trigger(FetchRequest {
            params: self.params.clone(),
            page_size: self.page_size,
            page,
        });
    }
}
