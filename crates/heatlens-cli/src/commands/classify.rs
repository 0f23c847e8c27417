//! Classify command: zone for one primary-metric value.

use anyhow::Result;
use heatlens_core::config::ExplorerConfig;

use crate::cli::ClassifyArgs;
use crate::output::{zone_badge, OutputWriter};

pub fn execute(args: ClassifyArgs, config: &ExplorerConfig, output: &OutputWriter) -> Result<()> {
    let breakpoints = &config.breakpoints.value;
    let zone = breakpoints.classify(args.value);

    if output.is_json() {
        let (b1, b2, b3) = breakpoints.as_triple();
        output.json(&serde_json::json!({
            "value": args.value,
            "zone": zone.label(),
            "breakpoints": [b1, b2, b3],
        }));
        return Ok(());
    }

    output.success(format!("{} -> {}", args.value, zone_badge(zone)));
    Ok(())
}
