use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::ChartDataset;

/// Shared vertical value range used to place every series on one scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` inside the domain, `0.0` at `min` and `1.0` at `max`.
    ///
    /// A flat domain has no usable span and maps everything to `0.0`.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        let span = self.span();
        if span == 0.0 || !span.is_finite() {
            return 0.0;
        }
        (value - self.min) / span
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Scans every sample of every series for the global minimum and maximum.
///
/// Non-finite samples are skipped. When nothing is left to scan the domain
/// falls back to `(0, 0)`.
#[must_use]
pub fn compute_domain(dataset: &ChartDataset) -> ValueDomain {
    let mut finite = dataset
        .values()
        .filter(|value| value.is_finite())
        .map(OrderedFloat);

    let Some(first) = finite.next() else {
        return ValueDomain::default();
    };

    let (min, max) = finite.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    });
    ValueDomain::new(min.into_inner(), max.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_flat_domain_is_zero() {
        let domain = ValueDomain::new(4.0, 4.0);
        assert_eq!(domain.normalize(4.0), 0.0);
        assert_eq!(domain.normalize(100.0), 0.0);
    }

    #[test]
    fn normalize_maps_bounds_to_unit_interval() {
        let domain = ValueDomain::new(4.0, 54.0);
        assert_eq!(domain.normalize(4.0), 0.0);
        assert_eq!(domain.normalize(54.0), 1.0);
        assert_eq!(domain.normalize(29.0), 0.5);
    }
}
