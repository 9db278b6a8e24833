//! Relocation of a single item in the total order
//!
//! Moves `must_precede` from wherever it sits to immediately before
//! `must_follow`, keeping the chain links, the head and every descendant set
//! exact. Only the moved item and the items it jumps over change their
//! descendant sets: everything before `must_follow` already had the moved item
//! after it, and everything after its old slot never did.

use crate::domain::entities::TotalOrder;
use crate::domain::value_objects::ItemId;

/// Move `must_precede` to sit directly in front of `must_follow`.
///
/// Both ids must be valid and distinct, and `must_follow` must currently be
/// before `must_precede`. Returns the number of descendant sets that dropped
/// the moved item.
pub(crate) fn relocate_before(
    order: &mut TotalOrder,
    must_precede: ItemId,
    must_follow: ItemId,
) -> usize {
    debug_assert_ne!(must_precede, must_follow);
    debug_assert!(order.is_before(must_follow, must_precede));

    let old_prev = detach(order, must_precede);
    let repaired = repair_gap(order, old_prev, must_precede, must_follow);
    splice_before(order, must_precede, must_follow);

    // Gap repair already cleared the moved item from `must_follow`, so the
    // copy cannot list the moved item as its own descendant.
    let mut moved = order.descendants[must_follow].clone();
    moved.set(must_follow, true);
    order.descendants[must_precede] = moved;

    debug_assert!(
        crate::domain::invariants::check_all(order),
        "total order inconsistent after moving {} before {}",
        must_precede,
        must_follow
    );

    repaired
}

/// Unlink `item`, joining its neighbours. Returns its old predecessor.
fn detach(order: &mut TotalOrder, item: ItemId) -> Option<ItemId> {
    let prev = order.prev[item].take();
    let next = order.next[item].take();

    match prev {
        Some(p) => order.next[p] = next,
        None => {
            // Only reachable with an inconsistent cache; keep the chain sound anyway.
            if let Some(n) = next {
                order.head = n;
            }
        }
    }
    if let Some(n) = next {
        order.prev[n] = prev;
    }

    prev
}

/// Walk back from the moved item's old predecessor to `must_follow`
/// inclusive, dropping the moved item from each visited descendant set.
fn repair_gap(
    order: &mut TotalOrder,
    start: Option<ItemId>,
    moved: ItemId,
    stop: ItemId,
) -> usize {
    let mut repaired = 0;
    let mut cursor = start;

    while let Some(item) = cursor {
        order.descendants[item].set(moved, false);
        repaired += 1;
        if item == stop {
            break;
        }
        cursor = order.prev[item];
    }

    repaired
}

/// Link a detached `item` in directly before `anchor`
fn splice_before(order: &mut TotalOrder, item: ItemId, anchor: ItemId) {
    let before = order.prev[anchor];

    order.prev[item] = before;
    order.next[item] = Some(anchor);
    order.prev[anchor] = Some(item);

    match before {
        Some(b) => order.next[b] = Some(item),
        None => order.head = item,
    }
}
