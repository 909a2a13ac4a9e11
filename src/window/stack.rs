/// Ordered collection of unique items. Index 0 is the bottom; the last index
/// is the top. Items are compared with `PartialEq`, which for window handles
/// means identity.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PartialEq> Stack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `item` on top. Already-present items stay where they are.
    pub fn push(&mut self, item: T) -> bool {
        if self.items.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove and return the topmost item.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Remove `item` if present.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let index = self.index_of(item)?;
        Some(self.items.remove(index))
    }

    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Relocate `item` to `target`, shifting the others to stay contiguous.
    ///
    /// A target outside `0..len` (including negative values) means the top.
    /// Non-members are ignored. Returns the index the item ended up at.
    pub fn move_to(&mut self, item: &T, target: isize) -> Option<usize> {
        let from = self.index_of(item)?;
        let len = self.items.len();
        let to = usize::try_from(target)
            .ok()
            .filter(|to| *to < len)
            .unwrap_or(len - 1);
        let moved = self.items.remove(from);
        self.items.insert(to, moved);
        Some(to)
    }

    /// Scan from the top down and return the first item matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().rev().find(|item| predicate(*item))
    }

    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bottom-to-top iteration (paint order).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T: PartialEq> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(items: &[i32]) -> Stack<i32> {
        let mut stack = Stack::new();
        for item in items {
            stack.push(*item);
        }
        stack
    }

    #[test]
    fn push_never_duplicates() {
        let mut stack = stack_of(&[1, 2, 3]);
        assert!(!stack.push(2));
        assert!(!stack.push(1));
        assert_eq!(stack.as_slice(), &[1, 2, 3]);
        assert!(stack.push(4));
        assert_eq!(stack.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn pop_and_remove() {
        let mut stack = stack_of(&[1, 2, 3]);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.remove(&1), Some(1));
        assert_eq!(stack.remove(&42), None);
        assert_eq!(stack.as_slice(), &[2]);
        stack.pop();
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn item_and_index_of_are_bounds_checked() {
        let stack = stack_of(&[7, 8]);
        assert_eq!(stack.item(1), Some(&8));
        assert_eq!(stack.item(2), None);
        assert_eq!(stack.index_of(&7), Some(0));
        assert_eq!(stack.index_of(&9), None);
    }

    #[test]
    fn move_preserves_relative_order_for_every_target() {
        let base = [10, 11, 12, 13, 14];
        for from in 0..base.len() {
            for target in 0..base.len() {
                let mut stack = stack_of(&base);
                let item = base[from];
                assert_eq!(stack.move_to(&item, target as isize), Some(target));
                assert_eq!(stack.item(target), Some(&item));
                let others: Vec<i32> = stack.iter().copied().filter(|v| *v != item).collect();
                let expected: Vec<i32> = base.iter().copied().filter(|v| *v != item).collect();
                assert_eq!(others, expected, "from {from} to {target}");
            }
        }
    }

    #[test]
    fn out_of_range_targets_mean_top() {
        for target in [-1isize, -7, 5, 99] {
            let mut stack = stack_of(&[1, 2, 3, 4, 5]);
            assert_eq!(stack.move_to(&2, target), Some(4));
            assert_eq!(stack.as_slice(), &[1, 3, 4, 5, 2]);
        }
    }

    #[test]
    fn moving_a_non_member_is_ignored() {
        let mut stack = stack_of(&[1, 2]);
        assert_eq!(stack.move_to(&3, 0), None);
        assert_eq!(stack.as_slice(), &[1, 2]);
    }

    #[test]
    fn find_scans_top_down() {
        let stack = stack_of(&[2, 4, 5, 6, 7]);
        assert_eq!(stack.find(|v| v % 2 == 0), Some(&6));
        assert_eq!(stack.find(|v| *v > 100), None);
    }
}
