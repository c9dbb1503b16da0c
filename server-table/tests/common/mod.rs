#![allow(dead_code)]

use std::cell::RefCell;

use server_table::source::{DataSource, FetchRequest};
use server_table::table::TableRow;

/// A row used across the tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u32,
    pub host: String,
}

impl Task {
    pub fn new(id: u32, host: &str) -> Self {
        Self {
            id,
            host: host.to_string(),
        }
    }
}

impl TableRow for Task {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn cell(&self, column_id: &str) -> String {
        match column_id {
            "id" => self.id.to_string(),
            "host" => self.host.clone(),
            _ => String::new(),
        }
    }

    fn compare(&self, other: &Self, column_id: &str) -> std::cmp::Ordering {
        match column_id {
            "id" => self.id.cmp(&other.id),
            _ => self.cell(column_id).cmp(&other.cell(column_id)),
        }
    }
}

/// Tasks `first..first + count`.
pub fn tasks(first: u32, count: u32) -> Vec<Task> {
    (first..first + count)
        .map(|id| Task::new(id, &format!("host-{id}")))
        .collect()
}

/// Records every triggered fetch.
#[derive(Debug, Default)]
pub struct Recorder {
    requests: RefCell<Vec<FetchRequest<String>>>,
}

impl Recorder {
    pub fn requests(&self) -> Vec<FetchRequest<String>> {
        self.requests.borrow().clone()
    }

    pub fn pages(&self) -> Vec<u32> {
        self.requests.borrow().iter().map(|r| r.page).collect()
    }

    pub fn last_page(&self) -> Option<u32> {
        self.requests.borrow().last().map(|r| r.page)
    }
}

impl DataSource<String> for Recorder {
    fn trigger(&self, request: FetchRequest<String>) {
        self.requests.borrow_mut().push(request);
    }
}
