//! Configuration for the total order

use crate::domain::value_objects::SelfConstraintPolicy;
use serde::{Deserialize, Serialize};

/// Total order configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    /// Largest item count accepted at construction.
    /// The descendant cache is quadratic in the item count (4 096 items is 2 MiB).
    /// Values below 1 act as 1.
    pub max_items: usize,
    /// Handling of constraints that name the same item twice
    pub self_constraints: SelfConstraintPolicy,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            max_items: 4_096,
            self_constraints: SelfConstraintPolicy::Reject,
        }
    }
}

impl OrderConfig {
    /// Effective item count bound, never below 1
    pub fn item_limit(&self) -> usize {
        self.max_items.max(1)
    }

    /// Builder-style method to set the item count bound
    pub fn with_max_items(mut self, max: usize) -> Self {
        self.max_items = max;
        self
    }

    /// Builder-style method to set the self-constraint policy
    pub fn with_self_constraints(mut self, policy: SelfConstraintPolicy) -> Self {
        self.self_constraints = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OrderConfig::default();
        assert_eq!(config.max_items, 4_096);
        assert_eq!(config.self_constraints, SelfConstraintPolicy::Reject);
    }

    #[test]
    fn test_builder_methods() {
        let config = OrderConfig::default()
            .with_max_items(8)
            .with_self_constraints(SelfConstraintPolicy::Ignore);
        assert_eq!(config.max_items, 8);
        assert_eq!(config.self_constraints, SelfConstraintPolicy::Ignore);
    }

    #[test]
    fn test_zero_bound_acts_as_one() {
        let config = OrderConfig::default().with_max_items(0);
        assert_eq!(config.item_limit(), 1);
        assert_eq!(OrderConfig::default().item_limit(), 4_096);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: OrderConfig = serde_json::from_str(r#"{"self_constraints":"ignore"}"#).unwrap();
        assert_eq!(config.max_items, 4_096);
        assert_eq!(config.self_constraints, SelfConstraintPolicy::Ignore);
    }
}
