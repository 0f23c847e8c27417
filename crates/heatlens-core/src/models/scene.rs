//! Drawable primitives handed from the compositor to a rendering surface.
//!
//! These are plain value types: a surface adapter translates them into its
//! own draw calls. Identical compositor inputs always produce equal
//! `SceneDrawables`, which is what makes scenes diffable in tests.

use serde::{Deserialize, Serialize};

use super::cluster::{ClusterId, Metrics};
use super::geometry::Coordinate;
use super::layer::LayerKind;
use super::zone::Zone;

/// One heatmap sample: a position with a normalized weight in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedPoint {
    pub coordinate: Coordinate,
    pub weight: f64,
}

/// A weighted-point set for one active heat layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatLayer {
    pub kind: LayerKind,
    pub samples: Vec<WeightedPoint>,
    pub radius_px: u32,
    pub opacity: f64,
}

/// One marker per cluster, always rendered regardless of layer state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub cluster: ClusterId,
    pub name: String,
    pub coordinate: Coordinate,
    pub zone: Zone,
    /// Popup payload shown while this marker is the active one.
    pub metrics: Metrics,
    /// Set for the marker matching the transient active-marker id.
    pub highlighted: bool,
}

/// A cluster boundary polygon. Rendered dimmed rather than hidden while the
/// boundaries layer is inactive, to preserve spatial context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonOverlay {
    pub cluster: ClusterId,
    pub ring: Vec<Coordinate>,
    pub zone: Zone,
    pub opacity: f64,
}

/// Everything a surface needs for one full draw.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneDrawables {
    pub heat: Vec<HeatLayer>,
    pub markers: Vec<Marker>,
    pub polygons: Vec<PolygonOverlay>,
}

impl SceneDrawables {
    pub fn marker_for(&self, id: &ClusterId) -> Option<&Marker> {
        self.markers.iter().find(|m| &m.cluster == id)
    }

    pub fn highlighted_marker(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.highlighted)
    }
}

/// A camera position over the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub center: Coordinate,
    pub zoom: f64,
}

/// A bounded-duration camera transition request. Fire-and-forget: a newer
/// request supersedes any in-flight one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusRequest {
    pub center: Coordinate,
    pub zoom: f64,
}

/// Render hints applied uniformly to composed drawables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub heat_radius_px: u32,
    pub heat_opacity: f64,
    /// Polygon fill opacity while the boundaries layer is active.
    pub boundary_opacity: f64,
    /// Polygon fill opacity while it is not.
    pub boundary_dimmed_opacity: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            heat_radius_px: 50,
            heat_opacity: 0.6,
            boundary_opacity: 0.45,
            boundary_dimmed_opacity: 0.15,
        }
    }
}
