//! Server-paginated table.
//!
//! A generic client-side [`TableState`](table::TableState) composed with a
//! [`PaginationController`](controller::PaginationController) that requests
//! pages from a [`DataSource`](source::DataSource) and reconciles the batches
//! that arrive later.

pub mod config;
pub mod controller;
pub mod error;
pub mod paginated;
pub mod pagination;
pub mod render;
pub mod selection;
pub mod source;
pub mod table;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::config::TableConfig;
    pub use crate::controller::{PaginationController, PaginationView};
    pub use crate::error::{ConfigError, Error, FetchError, Result};
    pub use crate::paginated::PaginatedTable;
    pub use crate::pagination::{PaginationEvent, PaginationState, Transition, reduce};
    pub use crate::render::{PlainTextRenderer, TableRenderer};
    pub use crate::selection::{Selection, SelectionMode};
    pub use crate::source::{
        BatchDelivery, ChannelSource, DataSource, FetchRequest, FetchWorker, PageFetcher,
    };
    pub use crate::table::{Column, SortOrder, TableRow, TableState};
}
