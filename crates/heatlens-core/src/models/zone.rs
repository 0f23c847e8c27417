//! Thermal zone classification.
//!
//! A cluster's zone is derived by thresholding its primary metric (the UHI
//! score) against three ascending breakpoints. Classification is total over
//! all finite values and monotonic in the metric.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{HeatlensError, Result};

/// Ordered thermal zones, coldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Zone {
    Cold,
    Warm,
    ModeratelyHot,
    Hot,
}

impl Zone {
    /// Rank within the ordering, 0 = coldest.
    pub fn rank(self) -> u8 {
        match self {
            Zone::Cold => 0,
            Zone::Warm => 1,
            Zone::ModeratelyHot => 2,
            Zone::Hot => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Zone::Cold => "cold",
            Zone::Warm => "warm",
            Zone::ModeratelyHot => "moderately-hot",
            Zone::Hot => "hot",
        }
    }

    /// Marker tint used by rendering surfaces.
    pub fn marker_color(self) -> &'static str {
        match self {
            Zone::Cold => "green",
            Zone::Warm => "yellow",
            Zone::ModeratelyHot => "orange",
            Zone::Hot => "red",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ascending breakpoints separating the four zones.
///
/// Upper bounds are closed: a value exactly equal to a breakpoint classifies
/// into the lower zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneBreakpoints {
    b1: f64,
    b2: f64,
    b3: f64,
}

impl ZoneBreakpoints {
    pub fn new(b1: f64, b2: f64, b3: f64) -> Result<Self> {
        if !(b1 < b2 && b2 < b3) {
            return Err(HeatlensError::ConfigInvalid {
                key: "breakpoints".to_string(),
                reason: format!("expected strictly ascending triple, got {b1}, {b2}, {b3}"),
            });
        }
        Ok(Self { b1, b2, b3 })
    }

    pub fn classify(&self, value: f64) -> Zone {
        if value <= self.b1 {
            Zone::Cold
        } else if value <= self.b2 {
            Zone::Warm
        } else if value <= self.b3 {
            Zone::ModeratelyHot
        } else {
            Zone::Hot
        }
    }

    pub fn as_triple(&self) -> (f64, f64, f64) {
        (self.b1, self.b2, self.b3)
    }
}

impl Default for ZoneBreakpoints {
    /// Defaults reproduce the reference Maharashtra dataset's zone labels.
    fn default() -> Self {
        Self {
            b1: 7.0,
            b2: 7.75,
            b3: 8.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_into_all_four_zones() {
        let bp = ZoneBreakpoints::new(3.0, 6.0, 8.0).unwrap();
        assert_eq!(bp.classify(2.0), Zone::Cold);
        assert_eq!(bp.classify(4.5), Zone::Warm);
        assert_eq!(bp.classify(7.0), Zone::ModeratelyHot);
        assert_eq!(bp.classify(9.0), Zone::Hot);
    }

    #[test]
    fn breakpoint_value_falls_into_lower_zone() {
        let bp = ZoneBreakpoints::new(3.0, 6.0, 8.0).unwrap();
        assert_eq!(bp.classify(3.0), Zone::Cold);
        assert_eq!(bp.classify(6.0), Zone::Warm);
        assert_eq!(bp.classify(8.0), Zone::ModeratelyHot);
    }

    #[test]
    fn total_over_extremes() {
        let bp = ZoneBreakpoints::default();
        assert_eq!(bp.classify(f64::NEG_INFINITY), Zone::Cold);
        assert_eq!(bp.classify(f64::INFINITY), Zone::Hot);
    }

    #[test]
    fn rejects_non_ascending_triples() {
        assert!(ZoneBreakpoints::new(6.0, 3.0, 8.0).is_err());
        assert!(ZoneBreakpoints::new(3.0, 3.0, 8.0).is_err());
    }

    #[test]
    fn defaults_match_reference_dataset_labels() {
        let bp = ZoneBreakpoints::default();
        assert_eq!(bp.classify(6.8), Zone::Cold);
        assert_eq!(bp.classify(7.3), Zone::Warm);
        assert_eq!(bp.classify(7.5), Zone::Warm);
        assert_eq!(bp.classify(7.8), Zone::ModeratelyHot);
        assert_eq!(bp.classify(7.9), Zone::ModeratelyHot);
        assert_eq!(bp.classify(8.2), Zone::Hot);
        assert_eq!(bp.classify(8.5), Zone::Hot);
    }

    #[test]
    fn zone_serializes_kebab_case() {
        let json = serde_json::to_string(&Zone::ModeratelyHot).unwrap();
        assert_eq!(json, "\"moderately-hot\"");
    }
}
