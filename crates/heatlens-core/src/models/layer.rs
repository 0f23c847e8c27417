//! Thematic layer vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::cluster::Metrics;
use crate::error::HeatlensError;

/// The fixed set of thematic layers the explorer knows about.
///
/// The first three are heat layers driven by one metric each; `Boundaries`
/// owns polygon rendering and contributes no heat samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerKind {
    UhiIntensity,
    HealthRisk,
    Vegetation,
    Boundaries,
}

impl LayerKind {
    pub const ALL: [LayerKind; 4] = [
        LayerKind::UhiIntensity,
        LayerKind::HealthRisk,
        LayerKind::Vegetation,
        LayerKind::Boundaries,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LayerKind::UhiIntensity => "uhi-intensity",
            LayerKind::HealthRisk => "health-risk",
            LayerKind::Vegetation => "vegetation",
            LayerKind::Boundaries => "boundaries",
        }
    }

    /// Whether this layer renders as a weighted-point heatmap.
    pub fn is_heat(self) -> bool {
        !matches!(self, LayerKind::Boundaries)
    }

    /// Whether the driving metric reads inversely (higher value = cooler).
    ///
    /// Vegetation cover is the inverse case: less vegetation is worse, so
    /// its heat weight is `1 - normalized(value)`.
    pub fn is_inverse(self) -> bool {
        matches!(self, LayerKind::Vegetation)
    }

    /// The metric value this layer visualizes, if any.
    pub fn metric_of(self, metrics: &Metrics) -> Option<f64> {
        match self {
            LayerKind::UhiIntensity => Some(metrics.uhi_score),
            LayerKind::HealthRisk => Some(metrics.health_risk),
            LayerKind::Vegetation => Some(metrics.vegetation_pct),
            LayerKind::Boundaries => None,
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LayerKind {
    type Err = HeatlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uhi" | "uhi-intensity" | "intensity" => Ok(LayerKind::UhiIntensity),
            "health" | "health-risk" => Ok(LayerKind::HealthRisk),
            "vegetation" => Ok(LayerKind::Vegetation),
            "boundaries" | "zones" => Ok(LayerKind::Boundaries),
            other => Err(HeatlensError::UnknownLayer {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!("uhi".parse::<LayerKind>().unwrap(), LayerKind::UhiIntensity);
        assert_eq!(
            "Health-Risk".parse::<LayerKind>().unwrap(),
            LayerKind::HealthRisk
        );
        assert_eq!(
            "vegetation".parse::<LayerKind>().unwrap(),
            LayerKind::Vegetation
        );
        assert_eq!("zones".parse::<LayerKind>().unwrap(), LayerKind::Boundaries);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "precipitation".parse::<LayerKind>().unwrap_err();
        assert!(matches!(err, HeatlensError::UnknownLayer { name } if name == "precipitation"));
    }

    #[test]
    fn only_vegetation_is_inverse() {
        for kind in LayerKind::ALL {
            assert_eq!(kind.is_inverse(), kind == LayerKind::Vegetation);
        }
    }

    #[test]
    fn boundaries_carries_no_metric() {
        let m = Metrics {
            uhi_score: 8.0,
            health_risk: 7.0,
            vegetation_pct: 30.0,
        };
        assert_eq!(LayerKind::Boundaries.metric_of(&m), None);
        assert_eq!(LayerKind::UhiIntensity.metric_of(&m), Some(8.0));
    }
}
