use derive_more::{Add, Sum};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Represents the cost for traversing a graph edge, in seconds of travel
/// time at the legal speed of the underlying way. Wraps an ordered float
/// so that costs provide a total ordering for the search frontier.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord, Add, Sum, Serialize, Deserialize,
)]
pub struct Cost(OrderedFloat<f64>);

impl Cost {
    /// represents zero cost, unit of the addition operation
    pub const ZERO: Cost = Cost(OrderedFloat(0.0));

    /// represents the maximum possible cost
    pub const INFINITY: Cost = Cost(OrderedFloat(f64::MAX));

    /// helper to construct a Cost from an f64
    pub fn new(value: f64) -> Cost {
        Cost(OrderedFloat(value))
    }

    pub fn as_f64(&self) -> f64 {
        self.0.into_inner()
    }
}

impl From<f64> for Cost {
    fn from(f: f64) -> Self {
        Cost(OrderedFloat(f))
    }
}

impl From<Cost> for f64 {
    fn from(val: Cost) -> Self {
        val.0.into_inner()
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_total() {
        let mut costs = vec![Cost::new(3.0), Cost::ZERO, Cost::new(1.5), Cost::INFINITY];
        costs.sort();
        assert_eq!(costs[0], Cost::ZERO);
        assert_eq!(costs[1], Cost::new(1.5));
        assert_eq!(costs[3], Cost::INFINITY);
    }

    #[test]
    fn test_sum() {
        let total: Cost = vec![Cost::new(5.0), Cost::new(7.0)].into_iter().sum();
        assert_eq!(total, Cost::new(12.0));
    }
}
