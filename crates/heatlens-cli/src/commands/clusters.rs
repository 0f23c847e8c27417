//! Clusters command: display-shell projections of the registry.

use anyhow::Result;
use heatlens_core::config::ExplorerConfig;
use heatlens_core::registry::ClusterRegistry;

use crate::output::{ClusterRow, OutputWriter};

pub fn execute(
    registry: &ClusterRegistry,
    config: &ExplorerConfig,
    output: &OutputWriter,
) -> Result<()> {
    let summaries = registry.summaries(&config.breakpoints.value);

    if output.is_json() {
        output.json(&summaries);
        return Ok(());
    }

    let rows: Vec<ClusterRow> = summaries.iter().map(ClusterRow::from).collect();
    output.table(rows);
    Ok(())
}
