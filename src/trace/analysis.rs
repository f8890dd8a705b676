//! Direct diameter computation, independent of the step generator
//!
//! Used to check generated traces and to draw the settled longest path once
//! playback reaches the final step.

use crate::tree::{DecoratedTree, NodeHandle};

/// Subtree depth per handle (empty = 0, leaf = 1).
///
/// Handles are pre-order, so every child has a larger handle than its parent
/// and a reverse sweep sees children first.
pub fn subtree_depths(tree: &DecoratedTree) -> Vec<usize> {
    let mut depths = vec![0; tree.len()];
    for index in (0..tree.len()).rev() {
        let node = tree.get(NodeHandle(index));
        let left = node.left.map_or(0, |h| depths[h.0]);
        let right = node.right.map_or(0, |h| depths[h.0]);
        depths[index] = left.max(right) + 1;
    }
    depths
}

fn child_depths(tree: &DecoratedTree, depths: &[usize], handle: NodeHandle) -> (usize, usize) {
    let node = tree.get(handle);
    (
        node.left.map_or(0, |h| depths[h.0]),
        node.right.map_or(0, |h| depths[h.0]),
    )
}

/// Number of edges on the longest path between any two nodes
pub fn diameter(tree: &DecoratedTree) -> usize {
    let depths = subtree_depths(tree);
    tree.iter()
        .map(|(handle, _)| {
            let (l, r) = child_depths(tree, &depths, handle);
            l + r
        })
        .max()
        .unwrap_or(0)
}

/// One longest path, ordered from its left end to its right end
pub fn longest_path(tree: &DecoratedTree) -> Vec<NodeHandle> {
    let depths = subtree_depths(tree);
    let apex = tree
        .iter()
        .map(|(handle, _)| {
            let (l, r) = child_depths(tree, &depths, handle);
            (handle, l + r)
        })
        // max_by_key keeps the last maximum; reverse so the earliest wins
        .rev()
        .max_by_key(|&(_, span)| span)
        .map(|(handle, _)| handle);

    match apex {
        Some(apex) => path_through(tree, &depths, apex),
        None => Vec::new(),
    }
}

/// Longest path whose highest node is `apex`
pub fn longest_path_through(tree: &DecoratedTree, apex: NodeHandle) -> Vec<NodeHandle> {
    let depths = subtree_depths(tree);
    path_through(tree, &depths, apex)
}

fn path_through(tree: &DecoratedTree, depths: &[usize], apex: NodeHandle) -> Vec<NodeHandle> {
    let node = tree.get(apex);
    let mut path = deepest_chain(tree, depths, node.left);
    path.reverse();
    path.push(apex);
    path.extend(deepest_chain(tree, depths, node.right));
    path
}

/// Follow the deeper child (left on ties) down to a leaf
fn deepest_chain(
    tree: &DecoratedTree,
    depths: &[usize],
    start: Option<NodeHandle>,
) -> Vec<NodeHandle> {
    let mut chain = Vec::new();
    let mut current = start;
    while let Some(handle) = current {
        chain.push(handle);
        let node = tree.get(handle);
        let left = node.left.map_or(0, |h| depths[h.0]);
        let right = node.right.map_or(0, |h| depths[h.0]);
        current = if left >= right { node.left } else { node.right };
    }
    chain
}
