mod backend;

use std::cell::Cell;
use std::fs::File;
use std::rc::Rc;
use std::time::Duration;

use log::{info, warn};
use server_table::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

use backend::SimulatedBackend;

const CONFIG: &str = r#"{
    "paginate": true,
    "page_size": 4,
    "selection": "single",
    "columns": [
        { "id": "id", "header": "TASK" },
        { "id": "host", "header": "HOST" },
        { "id": "state", "header": "STATE", "sortable": false }
    ]
}"#;

const DELIVERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Scripted pager clicks.
#[derive(Debug, Clone, Copy)]
enum Click {
    Next,
    Prev,
}

#[tokio::main]
async fn main() {
    let log_file = File::create("server-table-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let total = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(10);

    if let Err(e) = run(total).await {
        eprintln!("Error: {}", e);
    }
}

async fn run(total: u32) -> server_table::Result<()> {
    let config = TableConfig::from_json(CONFIG)?;

    let (channel, requests) = ChannelSource::new();
    let (worker, mut deliveries) =
        FetchWorker::new(SimulatedBackend::new(total)).spawn(requests);

    // Count dispatches so the loop knows how many deliveries to wait for.
    let issued = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&issued);
    let source = move |request: FetchRequest<String>| {
        counter.set(counter.get() + 1);
        channel.trigger(request);
    };

    let mut table = PaginatedTable::new(
        &config,
        vec!["active".to_string()],
        source,
        PlainTextRenderer::new(),
    )?;

    // Walk forward until the pager stops offering a next page, then step back.
    let mut clicks = std::iter::repeat_n(Click::Next, total as usize + 1)
        .chain(std::iter::once(Click::Prev));
    let mut received = 0usize;

    table.load_initial();
    loop {
        while received < issued.get() {
            let delivery = tokio::select! {
                delivery = tokio::time::timeout(DELIVERY_TIMEOUT, deliveries.recv()) => delivery,
                _ = tokio::signal::ctrl_c() => {
                    info!("interrupted");
                    return Ok(());
                }
            };
            let Ok(Some(delivery)) = delivery else {
                warn!("no delivery within {DELIVERY_TIMEOUT:?}, stopping");
                return Ok(());
            };
            received += 1;
            info!("page {} delivered with {} rows", delivery.page, delivery.items.len());
            table.receive(delivery.items, true);
            println!("{}\n", table.render());
        }

        let view = table.controller().view();
        let (active, offered) = (view.active_page, view.page_indicator_count);
        match clicks.next() {
            Some(Click::Next) if active < offered => table.select_page(active + 1),
            Some(Click::Next) => continue,
            Some(Click::Prev) => table.select_page(active.saturating_sub(1)),
            None => break,
        }
    }

    drop(table);
    if let Err(e) = worker.await {
        warn!("fetch worker ended abnormally: {e}");
    }
    Ok(())
}
