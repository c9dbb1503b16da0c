//! Simulated paged task backend.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use server_table::error::FetchError;
use server_table::source::{FetchRequest, PageFetcher};
use server_table::table::TableRow;

const LATENCY: Duration = Duration::from_millis(150);
const HOSTS: [&str; 3] = ["worker-a", "worker-b", "worker-c"];

#[derive(Debug, Clone)]
pub struct TaskRow {
    pub id: u32,
    pub host: &'static str,
    pub state: &'static str,
}

impl TableRow for TaskRow {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn cell(&self, column_id: &str) -> String {
        match column_id {
            "id" => format!("task-{:04}", self.id),
            "host" => self.host.to_string(),
            "state" => self.state.to_string(),
            _ => String::new(),
        }
    }
}

/// Serves `total` tasks whose state matches the first query parameter.
pub struct SimulatedBackend {
    total: u32,
}

impl SimulatedBackend {
    pub fn new(total: u32) -> Self {
        Self { total }
    }

    fn task(id: u32, state: &'static str) -> TaskRow {
        TaskRow {
            id,
            host: HOSTS[id as usize % HOSTS.len()],
            state,
        }
    }
}

#[async_trait]
impl PageFetcher<String, TaskRow> for SimulatedBackend {
    async fn fetch(&self, request: &FetchRequest<String>) -> Result<Vec<TaskRow>, FetchError> {
        tokio::time::sleep(LATENCY).await;

        let state: &'static str = match request.params.first().map(String::as_str) {
            Some("active") | None => "RUNNING",
            Some("paused") => "PAUSED",
            Some(other) => {
                return Err(FetchError::backend(format!("unknown state filter {other}")));
            }
        };

        let size = request.page_size.get();
        let first = request.page.saturating_sub(1).saturating_mul(size) + 1;
        let last = first.saturating_add(size).min(self.total + 1);
        debug!("backend serving tasks {first}..{last}");
        Ok((first..last).map(|id| Self::task(id, state)).collect())
    }
}
