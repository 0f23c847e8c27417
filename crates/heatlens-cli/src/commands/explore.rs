//! Explore command: drive a full engine session against the configured
//! surface and report what the map ends up showing.

use std::sync::Arc;

use anyhow::Result;
use heatlens_core::config::{ExplorerConfig, SurfaceKind};
use heatlens_core::models::ClusterId;
use heatlens_core::ports::MapSurface;
use heatlens_core::registry::ClusterRegistry;
use heatlens_engine::{EngineEventKind, Explorer};
use heatlens_surface::{CanvasProbe, CanvasSurface, PlaceholderSurface, SurfacePhase};

use crate::cli::ExploreArgs;
use crate::output::OutputWriter;

pub async fn execute(
    args: ExploreArgs,
    registry: Arc<ClusterRegistry>,
    config: ExplorerConfig,
    output: &OutputWriter,
) -> Result<()> {
    // Keep a probe when the canvas is mounted so the session can report
    // the drawn scene and camera.
    let (surface, probe): (Box<dyn MapSurface>, Option<CanvasProbe>) = match config.surface.value {
        SurfaceKind::Canvas => {
            let canvas = CanvasSurface::new();
            let probe = canvas.probe();
            (Box::new(canvas), Some(probe))
        }
        SurfaceKind::Placeholder => (Box::new(PlaceholderSurface::new()), None),
    };

    let mut explorer = Explorer::new(registry, config, surface);
    explorer.mount();
    explorer.settle().await;

    for name in &args.toggle {
        explorer.toggle_layer_named(name)?;
    }

    explorer.select(&ClusterId::new(args.select.clone()))?;

    let events = explorer.drain_events();
    let phase = explorer.surface_phase();
    let selected = explorer.selected_cluster().cloned();
    let camera = probe.as_ref().and_then(|p| p.camera());

    if output.is_json() {
        output.json(&serde_json::json!({
            "phase": format!("{:?}", phase),
            "selected": selected,
            "camera": camera,
            "events": events,
        }));
        explorer.unmount();
        return Ok(());
    }

    for event in &events {
        match &event.kind {
            EngineEventKind::SurfaceReady => output.success("surface ready"),
            EngineEventKind::SurfaceInitFailed { reason } => {
                output.warning(format!("surface unavailable, placeholder view: {reason}"))
            }
        }
    }

    if let Some(cluster) = &selected {
        output.success(format!(
            "selected {} ({}) at ({}, {})",
            cluster.name, cluster.id, cluster.coordinate.lat, cluster.coordinate.lng
        ));
    }

    match (phase, camera) {
        (SurfacePhase::Ready, Some(camera)) => output.info(format!(
            "camera over ({:.4}, {:.4}) at zoom {}",
            camera.center.lat, camera.center.lng, camera.zoom
        )),
        _ => output.info("no interactive surface; selection shown in list view"),
    }

    explorer.unmount();
    Ok(())
}
