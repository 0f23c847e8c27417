//! Property tests for the pure classification and normalization functions.

use heatlens_core::models::{MetricDomain, ZoneBreakpoints};
use proptest::prelude::*;

proptest! {
    #[test]
    fn classification_is_deterministic(v in -100.0f64..100.0) {
        let bp = ZoneBreakpoints::new(3.0, 6.0, 8.0).unwrap();
        prop_assert_eq!(bp.classify(v), bp.classify(v));
    }

    #[test]
    fn classification_is_monotonic(a in -100.0f64..100.0, b in -100.0f64..100.0) {
        let bp = ZoneBreakpoints::new(3.0, 6.0, 8.0).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(bp.classify(lo).rank() <= bp.classify(hi).rank());
    }

    #[test]
    fn normalization_stays_in_unit_interval(v in -1000.0f64..1000.0) {
        let domain = MetricDomain::new(0.0, 10.0).unwrap();
        let w = domain.normalize(v);
        prop_assert!((0.0..=1.0).contains(&w));
    }

    #[test]
    fn in_domain_values_normalize_linearly(v in 0.0f64..=10.0) {
        let domain = MetricDomain::new(0.0, 10.0).unwrap();
        prop_assert!((domain.normalize(v) - v / 10.0).abs() < 1e-12);
    }
}
