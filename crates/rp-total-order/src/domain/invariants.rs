//! Domain invariants for the total order
//!
//! Each check walks the raw links rather than trusting the cache, so they
//! can verify the cache.

use super::entities::TotalOrder;
use super::value_objects::ItemId;

/// INVARIANT-1: Single Chain
/// Following `next` from the head visits every item exactly once, ends at a
/// `None` tail, and every `prev` link mirrors a `next` link.
pub fn invariant_single_chain(order: &TotalOrder) -> bool {
    let n = order.len();
    let mut seen = vec![false; n];
    let mut expected_prev: Option<ItemId> = None;
    let mut cursor = Some(order.head);
    let mut visited = 0;

    while let Some(item) = cursor {
        if item >= n || seen[item] || order.prev[item] != expected_prev {
            return false;
        }
        seen[item] = true;
        visited += 1;
        expected_prev = Some(item);
        cursor = order.next[item];
    }

    visited == n
}

/// INVARIANT-2: Exact Descendants
/// Every descendant set equals the suffix of the chain after its item.
/// Assumes INVARIANT-1.
pub fn invariant_exact_descendants(order: &TotalOrder) -> bool {
    let chain: Vec<ItemId> = order.iter().collect();

    for (pos, &item) in chain.iter().enumerate() {
        let cached = &order.descendants[item];
        if cached.len() != order.len() || cached.count_ones() != chain.len() - pos - 1 {
            return false;
        }
        if !chain[pos + 1..].iter().all(|&after| cached[after]) {
            return false;
        }
    }

    true
}

/// INVARIANT-3: Unique Head
/// The head is the one and only item without a predecessor.
pub fn invariant_unique_head(order: &TotalOrder) -> bool {
    let mut heads = (0..order.len()).filter(|&item| order.prev[item].is_none());
    heads.next() == Some(order.head) && heads.next().is_none()
}

/// INVARIANT-4: Permutation
/// Traversal yields each of `0..n` exactly once.
pub fn invariant_permutation(order: &TotalOrder) -> bool {
    let mut ids: Vec<ItemId> = order.iter().collect();
    ids.sort_unstable();
    ids.len() == order.len() && ids.iter().enumerate().all(|(i, &id)| i == id)
}

/// All invariants, chain first so the cache check can rely on it
pub fn check_all(order: &TotalOrder) -> bool {
    invariant_single_chain(order)
        && invariant_unique_head(order)
        && invariant_permutation(order)
        && invariant_exact_descendants(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_order_satisfies_all() {
        let order = TotalOrder::new(6).unwrap();
        assert!(check_all(&order));
    }

    #[test]
    fn test_stale_descendant_detected() {
        let mut order = TotalOrder::new(3).unwrap();
        order.descendants[2].set(0, true);

        assert!(invariant_single_chain(&order));
        assert!(!invariant_exact_descendants(&order));
    }

    #[test]
    fn test_missing_descendant_detected() {
        let mut order = TotalOrder::new(3).unwrap();
        order.descendants[0].set(2, false);

        assert!(!invariant_exact_descendants(&order));
    }

    #[test]
    fn test_broken_prev_link_detected() {
        let mut order = TotalOrder::new(3).unwrap();
        order.prev[2] = Some(0);

        assert!(!invariant_single_chain(&order));
    }

    #[test]
    fn test_cyclic_links_detected() {
        let mut order = TotalOrder::new(3).unwrap();
        order.next[2] = Some(0);

        assert!(!invariant_single_chain(&order));
    }

    #[test]
    fn test_second_head_detected() {
        let mut order = TotalOrder::new(3).unwrap();
        order.prev[1] = None;

        assert!(!invariant_unique_head(&order));
    }
}
