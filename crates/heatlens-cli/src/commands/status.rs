//! Status command: effective configuration with provenance.

use anyhow::Result;
use heatlens_core::config::ExplorerConfig;

use crate::output::{source_label, ConfigRow, OutputWriter};

pub fn execute(config: &ExplorerConfig, output: &OutputWriter) -> Result<()> {
    let inspection = config.to_inspection_map();

    if output.is_json() {
        let json: serde_json::Map<String, serde_json::Value> = inspection
            .iter()
            .map(|(key, (value, source))| {
                (
                    key.clone(),
                    serde_json::json!({
                        "value": value,
                        "source": source_label(*source),
                    }),
                )
            })
            .collect();
        output.json(&json);
        return Ok(());
    }

    let mut rows: Vec<ConfigRow> = inspection
        .into_iter()
        .map(|(key, (value, source))| ConfigRow {
            key,
            value,
            source: source_label(source).to_string(),
        })
        .collect();
    rows.sort_by(|a, b| a.key.cmp(&b.key));
    output.table(rows);
    Ok(())
}
