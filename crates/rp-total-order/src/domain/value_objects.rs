//! Value objects for the total order

use serde::{Deserialize, Serialize};

/// Item identifier, an index in `0..n`
pub type ItemId = usize;

/// Precedence constraint between two items
///
/// After the constraint is applied, `must_precede` sits somewhere before
/// `must_follow` in the order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constraint {
    /// Item that must come first (the stronger side of a pairwise margin)
    pub must_precede: ItemId,
    /// Item that must come after
    pub must_follow: ItemId,
}

impl Constraint {
    pub fn new(must_precede: ItemId, must_follow: ItemId) -> Self {
        Self {
            must_precede,
            must_follow,
        }
    }

    pub fn is_self_referential(&self) -> bool {
        self.must_precede == self.must_follow
    }
}

impl From<(ItemId, ItemId)> for Constraint {
    fn from((must_precede, must_follow): (ItemId, ItemId)) -> Self {
        Self::new(must_precede, must_follow)
    }
}

/// Outcome of applying a single constraint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// The order already satisfied the constraint; nothing moved
    AlreadyOrdered,
    /// `must_precede` was moved to sit immediately before `must_follow`
    Relocated,
}

impl Placement {
    pub fn is_relocated(&self) -> bool {
        matches!(self, Placement::Relocated)
    }
}

/// What to do with a constraint whose two sides are the same item
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfConstraintPolicy {
    /// Fail with an invalid-item error
    #[default]
    Reject,
    /// Treat as already satisfied
    Ignore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_from_tuple() {
        let c: Constraint = (4, 0).into();
        assert_eq!(c.must_precede, 4);
        assert_eq!(c.must_follow, 0);
    }

    #[test]
    fn test_self_referential() {
        assert!(Constraint::new(3, 3).is_self_referential());
        assert!(!Constraint::new(3, 2).is_self_referential());
    }

    #[test]
    fn test_default_policy_rejects() {
        assert_eq!(SelfConstraintPolicy::default(), SelfConstraintPolicy::Reject);
    }
}
