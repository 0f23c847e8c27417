pub mod cluster;
pub mod geometry;
pub mod layer;
pub mod scene;
pub mod zone;

pub use cluster::{Cluster, ClusterId, ClusterSummary, MetricDomain, MetricDomains, Metrics};
pub use geometry::{Boundary, Coordinate};
pub use layer::LayerKind;
pub use scene::{
    CameraPose, FocusRequest, HeatLayer, Marker, PolygonOverlay, RenderStyle, SceneDrawables,
    WeightedPoint,
};
pub use zone::{Zone, ZoneBreakpoints};
