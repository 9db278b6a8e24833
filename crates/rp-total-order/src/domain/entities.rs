//! Core entity: the incrementally maintained total order
//!
//! The order is a doubly linked chain over item indices with a cached head.
//! Alongside it, every item keeps a bitset of the items currently after it,
//! so "is `a` already before `b`" is a single bit lookup.

use bitvec::prelude::*;
use tracing::{debug, trace, warn};

use super::errors::OrderError;
use super::value_objects::{Constraint, ItemId, Placement, SelfConstraintPolicy};
use crate::algorithms::relocate::relocate_before;
use crate::algorithms::traversal::OrderIter;
use crate::config::OrderConfig;

/// Set of items positioned after a given item, indexed by item id
pub(crate) type DescendantSet = BitVec<usize, Lsb0>;

/// Strict total order over `0..n`, mutated by precedence constraints
///
/// Constraints are applied in the order they arrive. A constraint that
/// already holds is a no-op; any other constraint moves `must_precede` to sit
/// immediately before `must_follow`, overriding earlier decisions. Feed
/// constraints from weakest to strongest so the strongest win.
#[derive(Clone, Debug)]
pub struct TotalOrder {
    /// Successor of each item, `None` at the tail
    pub(crate) next: Vec<Option<ItemId>>,
    /// Predecessor of each item, `None` at the head
    pub(crate) prev: Vec<Option<ItemId>>,
    /// First item in the chain
    pub(crate) head: ItemId,
    /// `descendants[x]` has bit `y` set iff `y` is after `x`
    pub(crate) descendants: Vec<DescendantSet>,
    config: OrderConfig,
}

impl TotalOrder {
    /// Create an order over `item_count` items in identity order, using the
    /// default config
    pub fn new(item_count: usize) -> Result<Self, OrderError> {
        Self::with_config(item_count, OrderConfig::default())
    }

    /// Create an order over `item_count` items in identity order
    pub fn with_config(item_count: usize, config: OrderConfig) -> Result<Self, OrderError> {
        let max = config.item_limit();
        if item_count < 1 || item_count > max {
            return Err(OrderError::Construction {
                count: item_count,
                max,
            });
        }

        let next = (0..item_count)
            .map(|i| if i + 1 < item_count { Some(i + 1) } else { None })
            .collect();
        let prev = (0..item_count).map(|i| i.checked_sub(1)).collect();
        let descendants = (0..item_count)
            .map(|i| {
                let mut bits: DescendantSet = bitvec![usize, Lsb0; 0; item_count];
                bits[i + 1..].fill(true);
                bits
            })
            .collect();

        Ok(Self {
            next,
            prev,
            head: 0,
            descendants,
            config,
        })
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.next.len()
    }

    /// Always `false`: construction rejects empty orders
    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }

    /// First item in the current order
    pub fn head(&self) -> ItemId {
        self.head
    }

    pub fn config(&self) -> &OrderConfig {
        &self.config
    }

    /// Item immediately after `item`, `None` if `item` is last
    pub fn successor(&self, item: ItemId) -> Result<Option<ItemId>, OrderError> {
        self.check_item(item)?;
        Ok(self.next[item])
    }

    /// Item immediately before `item`, `None` if `item` is first
    pub fn predecessor(&self, item: ItemId) -> Result<Option<ItemId>, OrderError> {
        self.check_item(item)?;
        Ok(self.prev[item])
    }

    /// All items currently after `item`, in ascending id order
    pub fn descendants(&self, item: ItemId) -> Result<Vec<ItemId>, OrderError> {
        self.check_item(item)?;
        Ok(self.descendants[item].iter_ones().collect())
    }

    /// Whether `a` is currently somewhere before `b`
    pub fn precedes(&self, a: ItemId, b: ItemId) -> Result<bool, OrderError> {
        self.check_item(a)?;
        self.check_item(b)?;
        Ok(self.is_before(a, b))
    }

    /// Walk the current order from the head
    pub fn iter(&self) -> OrderIter<'_> {
        OrderIter::new(self)
    }

    /// Current order as an owned vector
    pub fn to_vec(&self) -> Vec<ItemId> {
        self.iter().collect()
    }

    /// Make `must_precede` come before `must_follow`.
    ///
    /// Validation happens before any mutation, so a rejected constraint
    /// leaves the order untouched.
    pub fn insert_constraint(
        &mut self,
        must_precede: ItemId,
        must_follow: ItemId,
    ) -> Result<Placement, OrderError> {
        if let Err(err) = self
            .check_item(must_precede)
            .and_then(|_| self.check_item(must_follow))
        {
            warn!(must_precede, must_follow, %err, "Rejected constraint");
            return Err(err);
        }

        let constraint = Constraint::new(must_precede, must_follow);
        if constraint.is_self_referential() {
            return match self.config.self_constraints {
                SelfConstraintPolicy::Ignore => {
                    trace!(item = must_precede, "Ignoring self-referential constraint");
                    Ok(Placement::AlreadyOrdered)
                }
                SelfConstraintPolicy::Reject => {
                    let err = OrderError::self_constraint(must_precede);
                    warn!(must_precede, must_follow, %err, "Rejected constraint");
                    Err(err)
                }
            };
        }

        if self.is_before(must_precede, must_follow) {
            trace!(must_precede, must_follow, "Constraint already satisfied");
            return Ok(Placement::AlreadyOrdered);
        }

        let repaired = relocate_before(self, must_precede, must_follow);

        debug!(
            must_precede,
            must_follow,
            repaired,
            head = self.head,
            "Relocated item"
        );

        Ok(Placement::Relocated)
    }

    /// Apply constraints in sequence, weakest first.
    ///
    /// Stops at the first invalid constraint; earlier constraints stay
    /// applied. Returns how many constraints caused a relocation.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(item_count = self.len(), constraint_count = tracing::field::Empty)
    )]
    pub fn insert_constraints<I>(&mut self, constraints: I) -> Result<usize, OrderError>
    where
        I: IntoIterator,
        I::Item: Into<Constraint>,
    {
        let span = tracing::Span::current();
        let mut applied = 0usize;
        let mut relocated = 0usize;

        for constraint in constraints {
            let Constraint {
                must_precede,
                must_follow,
            } = constraint.into();

            match self.insert_constraint(must_precede, must_follow) {
                Ok(placement) => {
                    if placement.is_relocated() {
                        relocated += 1;
                    }
                    applied += 1;
                }
                Err(err) => {
                    span.record("constraint_count", applied);
                    return Err(err);
                }
            }
        }

        span.record("constraint_count", applied);
        debug!(applied, relocated, "Applied constraint batch");
        Ok(relocated)
    }

    pub(crate) fn check_item(&self, item: ItemId) -> Result<(), OrderError> {
        if item < self.len() {
            Ok(())
        } else {
            Err(OrderError::out_of_range(item, self.len()))
        }
    }

    /// Cache lookup; both ids must be valid
    pub(crate) fn is_before(&self, a: ItemId, b: ItemId) -> bool {
        self.descendants[a][b]
    }
}
