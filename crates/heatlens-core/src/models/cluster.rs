//! Cluster records: the unit of analysis for the map explorer.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::geometry::{Boundary, Coordinate};
use super::layer::LayerKind;
use super::zone::{Zone, ZoneBreakpoints};
use crate::error::{HeatlensError, Result};

/// Stable short identifier for a cluster, unique within a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterId(String);

impl ClusterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an id from a display name (lowercased, spaces to dashes).
    ///
    /// Used when loading legacy records that carry only a name.
    pub fn from_name(name: &str) -> Self {
        let slug: String = name
            .trim()
            .chars()
            .map(|c| {
                if c.is_whitespace() {
                    '-'
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect();
        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed set of per-cluster metric scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Urban Heat Island intensity score.
    pub uhi_score: f64,
    /// Heat-related health risk score.
    pub health_risk: f64,
    /// Vegetation cover percentage. Less vegetation means worse heat
    /// exposure, so heatmap weighting inverts this metric.
    pub vegetation_pct: f64,
}

/// Declared numeric range of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricDomain {
    pub min: f64,
    pub max: f64,
}

impl MetricDomain {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !(min < max) {
            return Err(HeatlensError::ConfigInvalid {
                key: "metric_domain".to_string(),
                reason: format!("expected min < max, got [{min}, {max}]"),
            });
        }
        Ok(Self { min, max })
    }

    /// Normalize a value into `[0, 1]`, clamping out-of-domain values.
    pub fn normalize(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Domains for every metric, keyed by the layer that renders it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricDomains {
    pub uhi: MetricDomain,
    pub health: MetricDomain,
    pub vegetation: MetricDomain,
}

impl MetricDomains {
    pub fn for_layer(&self, kind: LayerKind) -> Option<MetricDomain> {
        match kind {
            LayerKind::UhiIntensity => Some(self.uhi),
            LayerKind::HealthRisk => Some(self.health),
            LayerKind::Vegetation => Some(self.vegetation),
            LayerKind::Boundaries => None,
        }
    }
}

impl Default for MetricDomains {
    fn default() -> Self {
        Self {
            uhi: MetricDomain {
                min: 0.0,
                max: 10.0,
            },
            health: MetricDomain {
                min: 0.0,
                max: 10.0,
            },
            vegetation: MetricDomain {
                min: 0.0,
                max: 100.0,
            },
        }
    }
}

/// A region record: representative point, metric scores, optional boundary.
///
/// Immutable once registered; all run-time variability lives in the
/// visibility and selection state containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: ClusterId,
    pub name: String,
    pub coordinate: Coordinate,
    pub metrics: Metrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Boundary>,
}

impl Cluster {
    /// Zone under the given breakpoints, derived from the UHI score.
    pub fn zone(&self, breakpoints: &ZoneBreakpoints) -> Zone {
        breakpoints.classify(self.metrics.uhi_score)
    }

    pub fn summary(&self, breakpoints: &ZoneBreakpoints) -> ClusterSummary {
        ClusterSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            zone: self.zone(breakpoints),
            metrics: self.metrics,
        }
    }
}

/// Read-only projection handed to the display shell for list rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub id: ClusterId,
    pub name: String,
    pub zone: Zone,
    pub metrics: Metrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster() -> Cluster {
        Cluster {
            id: ClusterId::new("pune"),
            name: "Pune".to_string(),
            coordinate: Coordinate::new(18.5204, 73.8567),
            metrics: Metrics {
                uhi_score: 7.8,
                health_risk: 6.5,
                vegetation_pct: 28.0,
            },
            boundary: None,
        }
    }

    #[test]
    fn id_from_name_slugifies() {
        assert_eq!(ClusterId::from_name("Nagpur Wardha").as_str(), "nagpur-wardha");
        assert_eq!(ClusterId::from_name("  Pune ").as_str(), "pune");
    }

    #[test]
    fn zone_derives_from_uhi_score() {
        assert_eq!(cluster().zone(&ZoneBreakpoints::default()), Zone::ModeratelyHot);
    }

    #[test]
    fn normalize_clamps_out_of_domain() {
        let d = MetricDomain::new(0.0, 10.0).unwrap();
        assert_eq!(d.normalize(-5.0), 0.0);
        assert_eq!(d.normalize(15.0), 1.0);
        assert!((d.normalize(2.5) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn degenerate_domain_rejected() {
        assert!(MetricDomain::new(10.0, 10.0).is_err());
        assert!(MetricDomain::new(10.0, 0.0).is_err());
    }

    #[test]
    fn cluster_round_trips_through_json() {
        let json = serde_json::to_string(&cluster()).unwrap();
        let parsed: Cluster = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cluster());
    }
}
