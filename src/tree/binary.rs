//! Plain owned binary tree built from a level-order array

/// A binary tree node with owned children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTree {
    pub value: i32,
    pub left: Option<Box<BinaryTree>>,
    pub right: Option<Box<BinaryTree>>,
}

impl BinaryTree {
    /// Build a tree from a heap-indexed level-order array.
    ///
    /// The node at index `i` has its children at `2i + 1` and `2i + 2`.
    /// `None` entries and indices past the end of the array are absent
    /// children. Returns `None` when the array is empty or the root is `None`.
    pub fn from_level_order(values: &[Option<i32>]) -> Option<BinaryTree> {
        build_at(values, 0)
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |n| n.node_count())
            + self.right.as_ref().map_or(0, |n| n.node_count())
    }

    /// Number of levels (a single node has height 1)
    pub fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.height());
        let right = self.right.as_ref().map_or(0, |n| n.height());
        1 + left.max(right)
    }

    /// Flatten back into a heap-indexed level-order array with trailing
    /// `None`s removed
    pub fn to_level_order(&self) -> Vec<Option<i32>> {
        let mut slots = Vec::new();
        fill_slots(self, 0, &mut slots);
        while slots.last().is_some_and(|v| v.is_none()) {
            slots.pop();
        }
        slots
    }
}

fn build_at(values: &[Option<i32>], index: usize) -> Option<BinaryTree> {
    let value = (*values.get(index)?)?;
    // Indices grow as 2i + 1, so overflow means we are far past the end
    let left_index = index.checked_mul(2).and_then(|i| i.checked_add(1));
    let left = left_index.and_then(|i| build_at(values, i)).map(Box::new);
    let right = left_index
        .and_then(|i| i.checked_add(1))
        .and_then(|i| build_at(values, i))
        .map(Box::new);
    Some(BinaryTree { value, left, right })
}

fn fill_slots(node: &BinaryTree, index: usize, slots: &mut Vec<Option<i32>>) {
    if slots.len() <= index {
        slots.resize(index + 1, None);
    }
    slots[index] = Some(node.value);
    if let Some(left) = &node.left {
        fill_slots(left, 2 * index + 1, slots);
    }
    if let Some(right) = &node.right {
        fill_slots(right, 2 * index + 2, slots);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_complete_prefix() {
        let tree = BinaryTree::from_level_order(&[Some(1), Some(2), Some(3), Some(4), Some(5)])
            .unwrap();

        assert_eq!(tree.value, 1);
        let left = tree.left.as_ref().unwrap();
        assert_eq!(left.value, 2);
        assert_eq!(left.left.as_ref().unwrap().value, 4);
        assert_eq!(left.right.as_ref().unwrap().value, 5);
        let right = tree.right.as_ref().unwrap();
        assert_eq!(right.value, 3);
        assert!(right.left.is_none());
        assert!(right.right.is_none());
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_null_entries_are_absent() {
        let tree = BinaryTree::from_level_order(&[Some(1), None, Some(3), None, None, Some(6)])
            .unwrap();

        assert!(tree.left.is_none());
        let right = tree.right.as_ref().unwrap();
        assert_eq!(right.left.as_ref().unwrap().value, 6);
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn test_children_of_null_are_ignored() {
        // Index 3 would be the left child of the missing node at index 1
        let tree = BinaryTree::from_level_order(&[Some(1), None, Some(3), Some(4)]).unwrap();
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn test_empty_and_null_root() {
        assert!(BinaryTree::from_level_order(&[]).is_none());
        assert!(BinaryTree::from_level_order(&[None, Some(2)]).is_none());
    }

    #[test]
    fn test_level_order_roundtrip_trims_trailing_nulls() {
        let input = vec![Some(1), None, Some(3), None, None, Some(6), None];
        let tree = BinaryTree::from_level_order(&input).unwrap();
        assert_eq!(
            tree.to_level_order(),
            vec![Some(1), None, Some(3), None, None, Some(6)]
        );
    }
}
