use std::path::PathBuf;

use chrono::Utc;
use tracing::info;

use slotgrid::engine::{Axis, layout};
use slotgrid::snapshot;
use slotgrid::window::TimeWindow;

/// Headless harness: load (or seed) the snapshot, lay out the current week,
/// save back. Any front end replaces this loop with its own render cycle.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let data_file: PathBuf = std::env::var("SLOTGRID_DATA_FILE")
        .unwrap_or_else(|_| "./slotgrid.json".into())
        .into();

    let store = snapshot::load(&data_file)?;
    info!(
        "loaded {} users, {} tools, {} reservations",
        store.users.len(),
        store.tools.len(),
        store.reservations.len()
    );

    let window = TimeWindow::week(Utc::now().date_naive());
    let blocks = layout(&window, Axis::DayRows, &store.reservations, &store.tools);
    info!(
        "week of {}: {} visible blocks",
        window.days()[0],
        blocks.len()
    );
    for block in &blocks {
        let tool = store
            .tool(block.tool_id)
            .map(|t| t.name.as_str())
            .unwrap_or("?");
        info!(
            "  {} · lane {} offset {:.3} extent {:.3}",
            tool, block.lane, block.offset, block.extent
        );
    }

    snapshot::save(&data_file, &store)?;
    info!("snapshot saved to {}", data_file.display());
    Ok(())
}
