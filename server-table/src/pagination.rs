//! Pagination state machine.
//!
//! The server is only ever asked for one page at a time and never reports a
//! total, so the end of the data is discovered by walking past it: a forward
//! fetch that comes back empty moves the page back by one and marks the end.
//!
//! [`reduce`] is pure. It returns the next state together with the page that
//! must be fetched, if any; issuing that fetch is the caller's job.

use log::debug;

/// Pagination state of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState<T> {
    current_page: u32,
    at_end: bool,
    display_items: Vec<T>,
    paginate_enabled: bool,
}

impl<T> PaginationState<T> {
    /// Initial state: page 1, end not reached, nothing displayed.
    pub fn new(paginate_enabled: bool) -> Self {
        Self {
            current_page: 1,
            at_end: false,
            display_items: Vec::new(),
            paginate_enabled,
        }
    }

    /// Page displayed or being fetched. Always at least 1.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// True right after a forward fetch returned no items.
    pub fn at_end(&self) -> bool {
        self.at_end
    }

    pub fn display_items(&self) -> &[T] {
        &self.display_items
    }

    pub fn paginate_enabled(&self) -> bool {
        self.paginate_enabled
    }

    /// Number of page indicators to offer.
    ///
    /// One page beyond the current one is always offered until an empty
    /// result proves the end.
    pub fn page_indicator_count(&self) -> u32 {
        if self.at_end {
            self.current_page
        } else {
            self.current_page.saturating_add(1)
        }
    }
}

impl<T> Default for PaginationState<T> {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationEvent<T> {
    /// The user picked a page in the pager.
    ///
    /// Only the direction relative to the current page matters.
    PageSelected(u32),

    /// The data source replaced the current batch.
    DataReceived {
        /// Whether the batch this one replaces held any items.
        previous_non_empty: bool,
        /// The new batch.
        batch: Vec<T>,
        /// Whether the owner now asks for pagination controls.
        paginate: bool,
    },
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<T> {
    /// The next state.
    pub state: PaginationState<T>,
    /// Page to request from the data source.
    pub fetch: Option<u32>,
}

impl<T> Transition<T> {
    fn unchanged(state: PaginationState<T>) -> Self {
        Self { state, fetch: None }
    }
}

/// Apply `event` to `state`.
pub fn reduce<T>(state: PaginationState<T>, event: PaginationEvent<T>) -> Transition<T> {
    match event {
        PaginationEvent::PageSelected(selected) => select_page(state, selected),
        PaginationEvent::DataReceived {
            previous_non_empty,
            batch,
            paginate,
        } => receive_batch(state, previous_non_empty, batch, paginate),
    }
}

fn select_page<T>(state: PaginationState<T>, selected: u32) -> Transition<T> {
    let forward = selected > state.current_page;

    if forward {
        let target = state.current_page.saturating_add(1);
        debug!("page select {selected}: forward to page {target}");
        return Transition {
            state: PaginationState {
                current_page: target,
                ..state
            },
            fetch: Some(target),
        };
    }

    if state.current_page == 1 {
        debug!("page select {selected}: already on first page, ignoring");
        return Transition::unchanged(state);
    }

    let target = state.current_page - 1;
    debug!("page select {selected}: back to page {target}");
    Transition {
        state: PaginationState {
            current_page: target,
            at_end: false,
            ..state
        },
        fetch: Some(target),
    }
}

fn receive_batch<T>(
    state: PaginationState<T>,
    previous_non_empty: bool,
    batch: Vec<T>,
    paginate: bool,
) -> Transition<T> {
    let paginate_enabled = state.paginate_enabled || paginate;
    if paginate_enabled && !state.paginate_enabled {
        debug!("pagination enabled");
    }

    // Walked one page past the end: step back and re-request the last page.
    if previous_non_empty && batch.is_empty() && state.current_page > 1 {
        let target = state.current_page - 1;
        debug!(
            "page {} came back empty, end reached; re-fetching page {target}",
            state.current_page
        );
        return Transition {
            state: PaginationState {
                current_page: target,
                at_end: true,
                paginate_enabled,
                ..state
            },
            fetch: Some(target),
        };
    }

    if !batch.is_empty() {
        debug!(
            "page {}: displaying {} items",
            state.current_page,
            batch.len()
        );
        return Transition::unchanged(PaginationState {
            display_items: batch,
            paginate_enabled,
            ..state
        });
    }

    debug!(
        "page {}: empty batch, keeping {} displayed items",
        state.current_page,
        state.display_items.len()
    );
    Transition::unchanged(PaginationState {
        paginate_enabled,
        ..state
    })
}
