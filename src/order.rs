//! Ordering primitives shared by every ordered collection in the model.
//!
//! Cards within a list and lists within a board obey the same contract: the
//! stored `position` equals the array index once a structural operation has
//! completed. Both levels reposition items through [`rotate_move`] and restore
//! the contract through [`renumber`], so the two levels cannot drift apart.

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;

/// An item that stores its own index within the owning collection.
pub trait Positioned {
    /// The stored position.
    fn position(&self) -> usize;
    /// Overwrite the stored position.
    fn set_position(&mut self, position: usize);
}

/// Rewrite every item's `position` from its array index.
pub fn renumber<T: Positioned>(items: &mut [T]) {
    for (i, item) in items.iter_mut().enumerate() {
        item.set_position(i);
    }
}

/// True when every item's stored position matches its index.
#[must_use]
pub fn positions_consistent<T: Positioned>(items: &[T]) -> bool {
    items.iter().enumerate().all(|(i, item)| item.position() == i)
}

/// Move the element at `from` so that it ends up at `to`, shifting the
/// elements in between by one.
///
/// Forward moves rotate `[from, to]` left by one; backward moves rotate
/// `[to, from]` right by one. Returns `false` without touching the slice when
/// either index is out of range or the indices are equal.
pub fn rotate_move<T>(items: &mut [T], from: usize, to: usize) -> bool {
    let len = items.len();
    if from >= len || to >= len || from == to {
        return false;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
    true
}

/// Clamp an insertion index into `[0, len]`.
#[must_use]
pub fn clamp_insert_index(index: usize, len: usize) -> usize {
    index.min(len)
}

/// Translate an insertion slot into the final index of an item moved within
/// its own collection.
///
/// `target` names a gap between items (0 = before the first, `len` = after
/// the last). Removing the source shifts every later index down by one, so a
/// forward move lands one slot earlier than the raw gap index.
#[must_use]
pub fn same_collection_destination(source: usize, target: usize, len: usize) -> usize {
    let mut dest = clamp_insert_index(target, len);
    if source < dest {
        dest -= 1;
    }
    dest.min(len.saturating_sub(1))
}
