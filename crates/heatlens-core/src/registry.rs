//! Immutable cluster registry.
//!
//! The registry is constructed once and never mutated afterwards; every
//! consumer (compositor, synchronizer, display shell) reads it through a
//! shared reference. `list` preserves insertion order.

use std::collections::HashMap;
use std::io::Read;

use serde::Deserialize;

use crate::error::{HeatlensError, Result};
use crate::models::{Boundary, Cluster, ClusterId, ClusterSummary, Coordinate, Metrics, ZoneBreakpoints};

#[derive(Debug, Clone)]
pub struct ClusterRegistry {
    clusters: Vec<Cluster>,
    by_id: HashMap<ClusterId, usize>,
}

impl ClusterRegistry {
    /// Build a registry, rejecting duplicate ids.
    pub fn from_clusters(clusters: Vec<Cluster>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(clusters.len());
        for (idx, cluster) in clusters.iter().enumerate() {
            if by_id.insert(cluster.id.clone(), idx).is_some() {
                return Err(HeatlensError::DuplicateCluster {
                    id: cluster.id.to_string(),
                });
            }
        }
        Ok(Self { clusters, by_id })
    }

    /// Load a registry from a JSON array of cluster records.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<ClusterRecord> = serde_json::from_reader(reader)
            .map_err(|e| HeatlensError::Serialization(e.to_string()))?;
        Self::from_clusters(records.into_iter().map(ClusterRecord::into_cluster).collect())
    }

    /// Clusters in insertion order.
    pub fn list(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn get(&self, id: &ClusterId) -> Result<&Cluster> {
        self.by_id
            .get(id)
            .map(|&idx| &self.clusters[idx])
            .ok_or_else(|| HeatlensError::ClusterNotFound { id: id.to_string() })
    }

    pub fn contains(&self, id: &ClusterId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Display-shell projections in registry order.
    pub fn summaries(&self, breakpoints: &ZoneBreakpoints) -> Vec<ClusterSummary> {
        self.clusters.iter().map(|c| c.summary(breakpoints)).collect()
    }

    /// The seven Maharashtra regional clusters shipped with the explorer.
    pub fn builtin() -> Self {
        let clusters = vec![
            builtin_cluster(
                "Mumbai",
                19.076,
                72.8777,
                8.5,
                7.2,
                22.0,
                Some(vec![
                    (19.30, 72.77),
                    (19.30, 73.05),
                    (18.89, 73.05),
                    (18.89, 72.77),
                ]),
            ),
            builtin_cluster(
                "Pune",
                18.5204,
                73.8567,
                7.8,
                6.5,
                28.0,
                Some(vec![
                    (18.72, 73.65),
                    (18.72, 74.05),
                    (18.32, 74.05),
                    (18.32, 73.65),
                ]),
            ),
            builtin_cluster("Nagpur-Wardha", 21.1458, 79.0882, 8.2, 7.0, 25.0, None),
            builtin_cluster("Nashik-Ahmednagar", 19.9975, 73.7898, 7.5, 6.3, 30.0, None),
            builtin_cluster("Solapur-Sangli", 17.6599, 75.9064, 7.3, 6.0, 32.0, None),
            builtin_cluster("Aurangabad-Jalna", 19.8762, 75.3433, 7.9, 6.8, 26.0, None),
            builtin_cluster("Kolhapur-Ichalkarangi", 16.705, 74.2433, 6.8, 5.5, 35.0, None),
        ];
        // Builtin ids are distinct by construction.
        Self::from_clusters(clusters).expect("builtin registry has unique ids")
    }
}

fn builtin_cluster(
    name: &str,
    lat: f64,
    lng: f64,
    uhi_score: f64,
    health_risk: f64,
    vegetation_pct: f64,
    ring: Option<Vec<(f64, f64)>>,
) -> Cluster {
    Cluster {
        id: ClusterId::from_name(name),
        name: name.to_string(),
        coordinate: Coordinate::new(lat, lng),
        metrics: Metrics {
            uhi_score,
            health_risk,
            vegetation_pct,
        },
        boundary: ring.map(|points| {
            Boundary::new(
                points
                    .into_iter()
                    .map(|(lat, lng)| Coordinate::new(lat, lng))
                    .collect(),
            )
        }),
    }
}

/// On-disk cluster record. The id is optional: legacy exports carry only a
/// display name, from which the id is derived.
#[derive(Debug, Deserialize)]
struct ClusterRecord {
    #[serde(default)]
    id: Option<ClusterId>,
    name: String,
    coordinate: Coordinate,
    metrics: Metrics,
    #[serde(default)]
    boundary: Option<Boundary>,
}

impl ClusterRecord {
    fn into_cluster(self) -> Cluster {
        let id = self.id.unwrap_or_else(|| ClusterId::from_name(&self.name));
        Cluster {
            id,
            name: self.name,
            coordinate: self.coordinate,
            metrics: self.metrics,
            boundary: self.boundary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Zone;

    #[test]
    fn builtin_has_seven_clusters_in_insertion_order() {
        let registry = ClusterRegistry::builtin();
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.list()[0].id.as_str(), "mumbai");
        assert_eq!(registry.list()[6].id.as_str(), "kolhapur-ichalkarangi");
    }

    #[test]
    fn get_unknown_id_fails_not_found() {
        let registry = ClusterRegistry::builtin();
        let err = registry.get(&ClusterId::new("atlantis")).unwrap_err();
        assert!(matches!(err, HeatlensError::ClusterNotFound { id } if id == "atlantis"));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let a = builtin_cluster("Mumbai", 19.0, 72.0, 8.0, 7.0, 22.0, None);
        let b = builtin_cluster("Mumbai", 19.1, 72.1, 8.1, 7.1, 23.0, None);
        let err = ClusterRegistry::from_clusters(vec![a, b]).unwrap_err();
        assert!(matches!(err, HeatlensError::DuplicateCluster { .. }));
    }

    #[test]
    fn summaries_reflect_breakpoints() {
        let registry = ClusterRegistry::builtin();
        let summaries = registry.summaries(&ZoneBreakpoints::default());
        assert_eq!(summaries[0].zone, Zone::Hot); // Mumbai, 8.5
        assert_eq!(summaries[6].zone, Zone::Cold); // Kolhapur, 6.8
    }

    #[test]
    fn loads_records_without_explicit_ids() {
        let json = r#"[
            {
                "name": "Test Region",
                "coordinate": { "lat": 10.0, "lng": 20.0 },
                "metrics": { "uhi_score": 5.0, "health_risk": 4.0, "vegetation_pct": 40.0 }
            }
        ]"#;
        let registry = ClusterRegistry::from_json_reader(json.as_bytes()).unwrap();
        assert!(registry.contains(&ClusterId::new("test-region")));
    }

    #[test]
    fn malformed_json_reports_serialization_error() {
        let err = ClusterRegistry::from_json_reader("{not json".as_bytes()).unwrap_err();
        assert!(matches!(err, HeatlensError::Serialization(_)));
    }
}
