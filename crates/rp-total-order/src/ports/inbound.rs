//! Inbound port: the ranking API offered to callers

use crate::domain::entities::TotalOrder;
use crate::domain::errors::OrderError;
use crate::domain::value_objects::{Constraint, ItemId};

/// Ranking API (driving port).
///
/// Callers compute pairwise margins and sort them weakest first before
/// calling in; this API only turns that sequence into a final order.
pub trait RankingApi {
    /// Rank `item_count` items under the given constraints.
    ///
    /// Constraints are applied in slice order, so later ones win conflicts.
    fn rank(&self, item_count: usize, constraints: &[Constraint])
        -> Result<Vec<ItemId>, OrderError>;

    /// Build an identity-ordered total order over `item_count` items.
    fn build_order(&self, item_count: usize) -> Result<TotalOrder, OrderError>;

    /// Apply constraints to an existing order, returning the relocation count.
    fn apply_constraints(
        &self,
        order: &mut TotalOrder,
        constraints: &[Constraint],
    ) -> Result<usize, OrderError>;
}
