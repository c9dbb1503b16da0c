//! Data source seam.
//!
//! The controller only ever *triggers* fetches; results come back later as a
//! new batch handed to the controller by whoever owns it. [`FetchWorker`]
//! closes that loop on a tokio task for callers that have an async backend.

use std::num::NonZeroU32;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::FetchError;

/// One outbound fetch: query parameters, page size and the 1-based page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest<P> {
    pub params: Vec<P>,
    pub page_size: NonZeroU32,
    pub page: u32,
}

/// One-way fetch trigger.
///
/// Implementations must not block. Nothing is returned; the batch arrives
/// later through [`PaginationController::receive_entries`](crate::controller::PaginationController::receive_entries).
pub trait DataSource<P> {
    fn trigger(&self, request: FetchRequest<P>);
}

impl<P, F> DataSource<P> for F
where
    F: Fn(FetchRequest<P>),
{
    fn trigger(&self, request: FetchRequest<P>) {
        self(request)
    }
}

/// A [`DataSource`] that queues requests on a tokio channel.
#[derive(Debug)]
pub struct ChannelSource<P> {
    tx: mpsc::UnboundedSender<FetchRequest<P>>,
}

impl<P> ChannelSource<P> {
    /// Create a source and the receiving end of its request queue.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<FetchRequest<P>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl<P> Clone for ChannelSource<P> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<P> DataSource<P> for ChannelSource<P> {
    fn trigger(&self, request: FetchRequest<P>) {
        let page = request.page;
        if self.tx.send(request).is_err() {
            warn!("fetch for page {page} dropped: request queue closed");
        }
    }
}

// =============================================================================
// Async backend
// =============================================================================

/// Backend that produces the batch for one request.
///
/// An empty batch means the page holds no items.
#[async_trait]
pub trait PageFetcher<P, T>: Send + Sync
where
    P: Send + Sync,
    T: Send,
{
    async fn fetch(&self, request: &FetchRequest<P>) -> Result<Vec<T>, FetchError>;
}

/// A batch produced for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchDelivery<T> {
    /// Page the batch was requested for.
    pub page: u32,
    pub items: Vec<T>,
}

/// Serves queued [`FetchRequest`]s with a [`PageFetcher`].
///
/// Requests are served one at a time in arrival order. In-flight requests
/// are never cancelled, so a response for a page the user already left is
/// still delivered.
pub struct FetchWorker<F> {
    fetcher: F,
}

impl<F> FetchWorker<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Run the worker on a new task.
    ///
    /// Returns the task handle and the receiving end of the deliveries.
    pub fn spawn<P, T>(
        self,
        requests: mpsc::UnboundedReceiver<FetchRequest<P>>,
    ) -> (JoinHandle<()>, mpsc::UnboundedReceiver<BatchDelivery<T>>)
    where
        F: PageFetcher<P, T> + 'static,
        P: Send + Sync + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(self.run(requests, tx));
        (handle, rx)
    }

    /// Serve requests until either channel closes.
    pub async fn run<P, T>(
        self,
        mut requests: mpsc::UnboundedReceiver<FetchRequest<P>>,
        deliveries: mpsc::UnboundedSender<BatchDelivery<T>>,
    ) where
        F: PageFetcher<P, T>,
        P: Send + Sync,
        T: Send,
    {
        while let Some(request) = requests.recv().await {
            debug!(
                "fetching page {} ({} per page)",
                request.page, request.page_size
            );
            let items = match self.fetcher.fetch(&request).await {
                Ok(items) => items,
                Err(e) => {
                    warn!("fetch for page {} failed: {e}", request.page);
                    continue;
                }
            };

            let delivery = BatchDelivery {
                page: request.page,
                items,
            };
            if let Err(e) = deliver(&deliveries, delivery) {
                debug!("fetch worker stopping: {e}");
                return;
            }
        }
        debug!("fetch worker stopping: request queue closed");
    }
}

fn deliver<T>(
    deliveries: &mpsc::UnboundedSender<BatchDelivery<T>>,
    delivery: BatchDelivery<T>,
) -> Result<(), FetchError> {
    deliveries.send(delivery).map_err(|_| FetchError::Closed)
}
