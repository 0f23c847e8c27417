//! Compose command: run the layer compositor over the registry.

use anyhow::Result;
use heatlens_core::config::ExplorerConfig;
use heatlens_core::registry::ClusterRegistry;
use heatlens_engine::{compose, ComposeParams, LayerVisibility};

use crate::cli::ComposeArgs;
use crate::output::OutputWriter;

pub fn execute(
    args: ComposeArgs,
    registry: &ClusterRegistry,
    config: &ExplorerConfig,
    output: &OutputWriter,
) -> Result<()> {
    let mut visibility = LayerVisibility::explorer_default();
    for name in &args.disable {
        let kind = name.parse()?;
        if visibility.is_active(kind)? {
            visibility.toggle(kind)?;
        }
    }

    let scene = compose(
        registry,
        &visibility,
        ComposeParams {
            breakpoints: &config.breakpoints.value,
            domains: &config.domains.value,
            style: &config.style.value,
        },
    );

    if output.is_json() {
        output.json(&scene);
        return Ok(());
    }

    output.info(format!(
        "{} heat layer(s), {} marker(s), {} polygon(s)",
        scene.heat.len(),
        scene.markers.len(),
        scene.polygons.len()
    ));
    for layer in &scene.heat {
        let peak = layer
            .samples
            .iter()
            .map(|s| s.weight)
            .fold(f64::NEG_INFINITY, f64::max);
        output.info(format!(
            "  {}: {} sample(s), peak weight {:.2}",
            layer.kind,
            layer.samples.len(),
            peak
        ));
    }
    Ok(())
}
