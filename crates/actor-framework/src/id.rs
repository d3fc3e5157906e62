//! # Sequential Identifiers
//!
//! Registries hand out integer identifiers: the next id is always one past the
//! largest id currently stored, starting at [`SequentialId::first`].

/// An identifier that can be allocated by scanning the store for its maximum.
pub trait SequentialId: Copy + Ord {
    /// The identifier given to the first entity of an empty store.
    fn first() -> Self;

    /// The identifier that follows `self`, or `None` once the space is used up.
    fn successor(self) -> Option<Self>;
}

impl SequentialId for u32 {
    fn first() -> Self {
        1
    }

    fn successor(self) -> Option<Self> {
        self.checked_add(1)
    }
}

impl SequentialId for u64 {
    fn first() -> Self {
        1
    }

    fn successor(self) -> Option<Self> {
        self.checked_add(1)
    }
}

/// Returns the id a new entity should receive given the ids already in use,
/// or `None` when the largest id has no successor.
///
/// ```rust
/// use actor_framework::id::next_id;
///
/// assert_eq!(next_id::<u64>(std::iter::empty()), Some(1));
/// assert_eq!(next_id([3_u64, 1, 7]), Some(8));
/// ```
pub fn next_id<I: SequentialId>(ids: impl IntoIterator<Item = I>) -> Option<I> {
    match ids.into_iter().max() {
        Some(max) => max.successor(),
        None => Some(I::first()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_one_past_the_maximum() {
        assert_eq!(next_id::<u32>([]), Some(1));
        assert_eq!(next_id([1_u32]), Some(2));
        // Gaps are not filled; the maximum wins.
        assert_eq!(next_id([5_u32, 2]), Some(6));
    }

    #[test]
    fn next_id_after_the_largest_value_is_none() {
        assert_eq!(next_id([u32::MAX, 4]), None);
        assert_eq!(u64::MAX.successor(), None);
        assert_eq!((u64::MAX - 1).successor(), Some(u64::MAX));
    }
}
