//! Layer compositor.
//!
//! Pure translation of registry + visibility into drawable primitives.
//! Identical inputs yield equal `SceneDrawables`; there is no caching
//! because the cluster set is small and static.

use heatlens_core::models::{
    HeatLayer, LayerKind, Marker, MetricDomains, Metrics, PolygonOverlay, RenderStyle,
    SceneDrawables, WeightedPoint, ZoneBreakpoints,
};
use heatlens_core::registry::ClusterRegistry;

use crate::layers::LayerVisibility;

#[derive(Debug, Clone, Copy)]
pub struct ComposeParams<'a> {
    pub breakpoints: &'a ZoneBreakpoints,
    pub domains: &'a MetricDomains,
    pub style: &'a RenderStyle,
}

/// Normalized heat weight of one cluster under one layer, in `[0, 1]`.
///
/// Inverse metrics (vegetation cover) flip after normalization, so sparse
/// vegetation reads hot. Returns `None` for layers without a metric.
pub fn weight_for(kind: LayerKind, metrics: &Metrics, domains: &MetricDomains) -> Option<f64> {
    let value = kind.metric_of(metrics)?;
    let domain = domains.for_layer(kind)?;
    let normalized = domain.normalize(value);
    Some(if kind.is_inverse() {
        1.0 - normalized
    } else {
        normalized
    })
}

/// Produce the full drawable set for the current registry and visibility.
pub fn compose(
    registry: &ClusterRegistry,
    visibility: &LayerVisibility,
    params: ComposeParams<'_>,
) -> SceneDrawables {
    let heat = visibility
        .active()
        .filter(|kind| kind.is_heat())
        .map(|kind| HeatLayer {
            kind,
            samples: heat_samples(registry, kind, params.domains),
            radius_px: params.style.heat_radius_px,
            opacity: params.style.heat_opacity,
        })
        .collect();

    // Markers render unconditionally, one per cluster.
    let markers = registry
        .list()
        .iter()
        .map(|cluster| Marker {
            cluster: cluster.id.clone(),
            name: cluster.name.clone(),
            coordinate: cluster.coordinate,
            zone: cluster.zone(params.breakpoints),
            metrics: cluster.metrics,
            highlighted: false,
        })
        .collect();

    // Polygons dim rather than disappear while their owning layer is off.
    let boundaries_active = visibility.is_active(LayerKind::Boundaries).unwrap_or(false);
    let polygon_opacity = if boundaries_active {
        params.style.boundary_opacity
    } else {
        params.style.boundary_dimmed_opacity
    };

    let polygons = registry
        .list()
        .iter()
        .filter_map(|cluster| {
            let boundary = cluster.boundary.as_ref()?;
            if let Err(e) = boundary.validate(cluster.id.as_str()) {
                tracing::warn!("skipping polygon: {e}");
                return None;
            }
            Some(PolygonOverlay {
                cluster: cluster.id.clone(),
                ring: boundary.ring().to_vec(),
                zone: cluster.zone(params.breakpoints),
                opacity: polygon_opacity,
            })
        })
        .collect();

    SceneDrawables {
        heat,
        markers,
        polygons,
    }
}

fn heat_samples(
    registry: &ClusterRegistry,
    kind: LayerKind,
    domains: &MetricDomains,
) -> Vec<WeightedPoint> {
    registry
        .list()
        .iter()
        .filter_map(|cluster| {
            let weight = weight_for(kind, &cluster.metrics, domains)?;
            Some(WeightedPoint {
                coordinate: cluster.coordinate,
                weight,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatlens_core::models::{Boundary, Cluster, ClusterId, Coordinate, Zone};

    fn params_defaults() -> (ZoneBreakpoints, MetricDomains, RenderStyle) {
        (
            ZoneBreakpoints::default(),
            MetricDomains::default(),
            RenderStyle::default(),
        )
    }

    fn compose_builtin(visibility: &LayerVisibility) -> SceneDrawables {
        let registry = ClusterRegistry::builtin();
        let (bp, domains, style) = params_defaults();
        compose(
            &registry,
            visibility,
            ComposeParams {
                breakpoints: &bp,
                domains: &domains,
                style: &style,
            },
        )
    }

    #[test]
    fn vegetation_weight_inverts() {
        let metrics = Metrics {
            uhi_score: 8.0,
            health_risk: 7.0,
            vegetation_pct: 80.0,
        };
        let w = weight_for(LayerKind::Vegetation, &metrics, &MetricDomains::default()).unwrap();
        assert!((w - 0.2).abs() < 1e-12);
    }

    #[test]
    fn direct_weights_do_not_invert() {
        let metrics = Metrics {
            uhi_score: 8.5,
            health_risk: 7.2,
            vegetation_pct: 22.0,
        };
        let domains = MetricDomains::default();
        let uhi = weight_for(LayerKind::UhiIntensity, &metrics, &domains).unwrap();
        let health = weight_for(LayerKind::HealthRisk, &metrics, &domains).unwrap();
        assert!((uhi - 0.85).abs() < 1e-12);
        assert!((health - 0.72).abs() < 1e-12);
    }

    #[test]
    fn out_of_domain_weights_clamp() {
        let metrics = Metrics {
            uhi_score: 12.0,
            health_risk: -3.0,
            vegetation_pct: 130.0,
        };
        let domains = MetricDomains::default();
        assert_eq!(
            weight_for(LayerKind::UhiIntensity, &metrics, &domains),
            Some(1.0)
        );
        assert_eq!(
            weight_for(LayerKind::HealthRisk, &metrics, &domains),
            Some(0.0)
        );
        assert_eq!(
            weight_for(LayerKind::Vegetation, &metrics, &domains),
            Some(0.0)
        );
    }

    #[test]
    fn inactive_heat_layers_are_omitted() {
        let mut visibility = LayerVisibility::explorer_default();
        visibility.toggle(LayerKind::HealthRisk).unwrap();

        let scene = compose_builtin(&visibility);
        let kinds: Vec<LayerKind> = scene.heat.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LayerKind::UhiIntensity, LayerKind::Vegetation]);
    }

    #[test]
    fn markers_render_regardless_of_visibility() {
        let mut visibility = LayerVisibility::explorer_default();
        for kind in LayerKind::ALL {
            if visibility.is_active(kind).unwrap() {
                visibility.toggle(kind).unwrap();
            }
        }

        let scene = compose_builtin(&visibility);
        assert!(scene.heat.is_empty());
        assert_eq!(scene.markers.len(), 7);
        assert_eq!(scene.markers[0].zone, Zone::Hot);
    }

    #[test]
    fn polygons_dim_when_boundaries_inactive() {
        let active = compose_builtin(&LayerVisibility::explorer_default());
        assert!(!active.polygons.is_empty());
        assert_eq!(active.polygons[0].opacity, RenderStyle::default().boundary_opacity);

        let mut visibility = LayerVisibility::explorer_default();
        visibility.toggle(LayerKind::Boundaries).unwrap();
        let dimmed = compose_builtin(&visibility);
        assert_eq!(dimmed.polygons.len(), active.polygons.len());
        assert_eq!(
            dimmed.polygons[0].opacity,
            RenderStyle::default().boundary_dimmed_opacity
        );
    }

    #[test]
    fn malformed_boundary_omitted_without_failing() {
        let clusters = vec![Cluster {
            id: ClusterId::new("broken"),
            name: "Broken".to_string(),
            coordinate: Coordinate::new(19.0, 75.0),
            metrics: Metrics {
                uhi_score: 7.0,
                health_risk: 6.0,
                vegetation_pct: 30.0,
            },
            boundary: Some(Boundary::new(vec![
                Coordinate::new(19.0, 75.0),
                Coordinate::new(19.1, 75.1),
            ])),
        }];
        let registry = ClusterRegistry::from_clusters(clusters).unwrap();
        let (bp, domains, style) = params_defaults();
        let scene = compose(
            &registry,
            &LayerVisibility::explorer_default(),
            ComposeParams {
                breakpoints: &bp,
                domains: &domains,
                style: &style,
            },
        );
        assert!(scene.polygons.is_empty());
        assert_eq!(scene.markers.len(), 1);
    }

    #[test]
    fn identical_inputs_compose_identical_scenes() {
        let visibility = LayerVisibility::explorer_default();
        assert_eq!(compose_builtin(&visibility), compose_builtin(&visibility));
    }
}
