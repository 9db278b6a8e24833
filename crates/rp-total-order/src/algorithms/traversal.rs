//! Lazy traversal of the current order

use std::iter::FusedIterator;

use crate::domain::entities::TotalOrder;
use crate::domain::value_objects::ItemId;

/// Iterator over the items of a [`TotalOrder`], head first.
///
/// Borrows the order, so it always reflects the state at creation and the
/// order cannot change mid-walk. Create a fresh one to walk again.
#[derive(Clone, Debug)]
pub struct OrderIter<'a> {
    order: &'a TotalOrder,
    cursor: Option<ItemId>,
    remaining: usize,
}

impl<'a> OrderIter<'a> {
    pub(crate) fn new(order: &'a TotalOrder) -> Self {
        Self {
            order,
            cursor: Some(order.head),
            remaining: order.len(),
        }
    }
}

impl Iterator for OrderIter<'_> {
    type Item = ItemId;

    fn next(&mut self) -> Option<ItemId> {
        // `remaining` bounds the walk even if the links were ever cyclic
        if self.remaining == 0 {
            return None;
        }
        let current = self.cursor?;
        self.cursor = self.order.next[current];
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for OrderIter<'_> {}

impl FusedIterator for OrderIter<'_> {}

impl<'a> IntoIterator for &'a TotalOrder {
    type Item = ItemId;
    type IntoIter = OrderIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_is_exact_size() {
        let order = TotalOrder::new(4).unwrap();
        let mut iter = order.iter();

        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);
    }

    #[test]
    fn test_iter_is_fused() {
        let order = TotalOrder::new(1).unwrap();
        let mut iter = order.iter();

        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_restarts_from_head() {
        let mut order = TotalOrder::new(3).unwrap();
        order.insert_constraint(2, 1).unwrap();

        let first: Vec<_> = order.iter().collect();
        let second: Vec<_> = (&order).into_iter().collect();

        assert_eq!(first, vec![0, 2, 1]);
        assert_eq!(first, second);
    }
}
