//! Error types for the total order

use std::fmt;
use thiserror::Error;

use super::value_objects::ItemId;

/// All errors that can occur while building or mutating a total order
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Requested item count is outside `1..=max`
    #[error("Invalid item count: {count} (must be between 1 and {max})")]
    Construction { count: usize, max: usize },

    /// A constraint names an item that cannot take part in it
    #[error("Invalid item {item}: {reason}")]
    InvalidItem {
        item: ItemId,
        reason: InvalidItemReason,
    },
}

impl OrderError {
    pub(crate) fn out_of_range(item: ItemId, count: usize) -> Self {
        Self::InvalidItem {
            item,
            reason: InvalidItemReason::OutOfRange { count },
        }
    }

    pub(crate) fn self_constraint(item: ItemId) -> Self {
        Self::InvalidItem {
            item,
            reason: InvalidItemReason::SelfConstraint,
        }
    }
}

/// Why an item was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidItemReason {
    /// Id is not in `0..count`
    OutOfRange { count: usize },
    /// Both sides of the constraint name the same item
    SelfConstraint,
}

impl fmt::Display for InvalidItemReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { count } => write!(f, "not in 0..{}", count),
            Self::SelfConstraint => f.write_str("an item cannot precede itself"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_error_display() {
        let err = OrderError::Construction { count: 0, max: 10 };
        assert_eq!(
            err.to_string(),
            "Invalid item count: 0 (must be between 1 and 10)"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let err = OrderError::out_of_range(7, 5);
        assert_eq!(err.to_string(), "Invalid item 7: not in 0..5");
    }

    #[test]
    fn test_self_constraint_display() {
        let err = OrderError::self_constraint(3);
        assert_eq!(
            err.to_string(),
            "Invalid item 3: an item cannot precede itself"
        );
    }
}
