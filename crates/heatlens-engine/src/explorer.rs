//! Selection synchronizer and engine facade.
//!
//! `Explorer` owns the state containers and the surface host, and serializes
//! every mutation through `&mut self`: list clicks, marker clicks, hover,
//! and layer toggles all settle fully before the next event is processed.

use std::sync::Arc;

use heatlens_core::config::ExplorerConfig;
use heatlens_core::models::{
    CameraPose, Cluster, ClusterId, ClusterSummary, FocusRequest, LayerKind, SceneDrawables,
};
use heatlens_core::ports::MapSurface;
use heatlens_core::registry::ClusterRegistry;
use heatlens_core::Result;
use heatlens_surface::{build_surface, SurfaceEvent, SurfaceHost, SurfacePhase};

use crate::compositor::{compose, ComposeParams};
use crate::events::{EngineEvent, EngineEventKind, EventQueue};
use crate::layers::LayerVisibility;
use crate::selection::SelectionState;

pub struct Explorer {
    registry: Arc<ClusterRegistry>,
    config: ExplorerConfig,
    visibility: LayerVisibility,
    selection: SelectionState,
    host: SurfaceHost,
    events: EventQueue,
}

impl Explorer {
    pub fn new(
        registry: Arc<ClusterRegistry>,
        config: ExplorerConfig,
        surface: Box<dyn MapSurface>,
    ) -> Self {
        Self {
            registry,
            config,
            visibility: LayerVisibility::explorer_default(),
            selection: SelectionState::new(),
            host: SurfaceHost::new(surface),
            events: EventQueue::new(),
        }
    }

    /// Build with the surface adapter named by the configuration.
    pub fn from_config(registry: Arc<ClusterRegistry>, config: ExplorerConfig) -> Self {
        let surface = build_surface(config.surface.value);
        Self::new(registry, config, surface)
    }

    /// Mount the map view: stage the initial scene and start surface
    /// initialization. Credential-less surfaces initialize immediately so
    /// the static fallback mirrors selection; surfaces that need a map
    /// token stay uninitialized until one is configured, and list-based
    /// navigation carries the UI.
    pub fn mount(&mut self) {
        self.redraw();
        match self.config.map_token.value.clone() {
            Some(token) => self.host.begin_initialize(&token),
            None if !self.host.requires_credential() => self.host.begin_initialize(""),
            None => {}
        }
    }

    /// Commit a selection: align both ids, redraw the marker highlight, and
    /// fly the camera to the cluster's representative coordinate at detail
    /// zoom. Unknown ids are rejected with `ClusterNotFound` and leave all
    /// state unchanged.
    pub fn select(&mut self, id: &ClusterId) -> Result<()> {
        let center = self.registry.get(id)?.coordinate;
        self.selection.select(id.clone());
        self.redraw();
        self.host.focus(FocusRequest {
            center,
            zoom: self.config.detail_zoom.value,
        });
        Ok(())
    }

    /// Dismiss the popup. The committed selection, and with it the detail
    /// panel, stays put.
    pub fn deselect(&mut self) {
        self.selection.clear_marker();
        self.redraw();
    }

    /// Marker click on the map: same commitment as a list click.
    pub fn marker_clicked(&mut self, id: &ClusterId) -> Result<()> {
        self.select(id)
    }

    pub fn hover_entered(&mut self, id: &ClusterId) -> Result<()> {
        self.registry.get(id)?;
        self.selection.hover(id.clone());
        self.redraw();
        Ok(())
    }

    pub fn hover_left(&mut self) {
        self.selection.clear_marker();
        self.redraw();
    }

    /// Toggle one layer and redraw. Idempotent in pairs.
    pub fn toggle_layer(&mut self, kind: LayerKind) -> Result<bool> {
        let now_active = self.visibility.toggle(kind)?;
        self.redraw();
        Ok(now_active)
    }

    /// Toggle by display-shell layer name, rejecting unknown names.
    pub fn toggle_layer_named(&mut self, name: &str) -> Result<bool> {
        self.toggle_layer(name.parse()?)
    }

    /// Detail-panel content, read fresh from the registry so it can never
    /// go stale.
    pub fn selected_cluster(&self) -> Option<&Cluster> {
        let id = self.selection.selected()?;
        self.registry.get(id).ok()
    }

    /// List projections for the display shell.
    pub fn summaries(&self) -> Vec<ClusterSummary> {
        self.registry.summaries(&self.config.breakpoints.value)
    }

    /// The current drawable set, highlight included.
    pub fn current_scene(&self) -> SceneDrawables {
        let mut scene = compose(
            &self.registry,
            &self.visibility,
            ComposeParams {
                breakpoints: &self.config.breakpoints.value,
                domains: &self.config.domains.value,
                style: &self.config.style.value,
            },
        );
        if let Some(active) = self.selection.active_marker() {
            for marker in &mut scene.markers {
                marker.highlighted = &marker.cluster == active;
            }
        }
        scene
    }

    /// Take pending notifications (surface ready/failed) for the host
    /// shell's toast presentation.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        for event in self.host.drain_events() {
            self.events.emit(match event {
                SurfaceEvent::Ready => EngineEventKind::SurfaceReady,
                SurfaceEvent::InitFailed { reason } => {
                    EngineEventKind::SurfaceInitFailed { reason }
                }
            });
        }
        self.events.drain()
    }

    /// Unmount the map view, releasing the surface whatever its phase.
    pub fn unmount(&mut self) {
        self.host.destroy();
    }

    /// Wait for in-flight surface initialization (test and CLI use). The
    /// host replays the latest staged scene itself on ready.
    pub async fn settle(&mut self) {
        self.host.settled().await;
    }

    pub fn surface_phase(&self) -> SurfacePhase {
        self.host.phase()
    }

    pub fn last_focus(&self) -> Option<(u64, FocusRequest)> {
        self.host.last_focus()
    }

    pub fn overview(&self) -> CameraPose {
        self.config.overview.value
    }

    pub fn visibility(&self) -> &LayerVisibility {
        &self.visibility
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn registry(&self) -> &ClusterRegistry {
        &self.registry
    }

    fn redraw(&mut self) {
        let scene = self.current_scene();
        self.host.apply(&scene);
    }
}
