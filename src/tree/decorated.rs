//! Decorated tree: path-addressed nodes with parent links and depth
//!
//! Every node of a [`BinaryTree`] is copied into an arena and given a
//! [`NodeId`] that spells out its path from the root (`root`, `root-L`,
//! `root-L-R`, ...). Steps refer to nodes by id only, so they never hold live
//! references into the tree; renderers resolve ids back to nodes with
//! [`DecoratedTree::find`].
//!
//! Arena handles ([`NodeHandle`]) are assigned in pre-order, so two
//! structurally identical trees produce identical handles and ids.

use super::binary::BinaryTree;
use super::constants::{LEFT_MARKER, RIGHT_MARKER, ROOT_ID};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Path-encoded node identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Id of the root node
    pub fn root() -> Self {
        NodeId(ROOT_ID.to_string())
    }

    /// Id of this node's left child
    pub fn left(&self) -> Self {
        NodeId(format!("{}{}", self.0, LEFT_MARKER))
    }

    /// Id of this node's right child
    pub fn right(&self) -> Self {
        NodeId(format!("{}{}", self.0, RIGHT_MARKER))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

/// Index of a node inside a [`DecoratedTree`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub usize);

/// A tree node with its id, value, links and depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedNode {
    pub id: NodeId,
    pub value: i32,
    pub left: Option<NodeHandle>,
    pub right: Option<NodeHandle>,
    /// Non-owning back link; `None` for the root
    pub parent: Option<NodeHandle>,
    /// Distance from the root (root = 0)
    pub depth: usize,
}

/// Arena of decorated nodes in pre-order
#[derive(Debug, Clone, Default)]
pub struct DecoratedTree {
    nodes: Vec<DecoratedNode>,
    index: FxHashMap<NodeId, NodeHandle>,
}

/// Decorate a binary tree. An absent tree yields an empty decorated tree.
pub fn decorate(tree: Option<&BinaryTree>) -> DecoratedTree {
    let mut decorated = DecoratedTree::default();
    if let Some(root) = tree {
        decorated.push_subtree(root, NodeId::root(), None, 0);
    }
    decorated
}

impl DecoratedTree {
    fn push_subtree(
        &mut self,
        node: &BinaryTree,
        id: NodeId,
        parent: Option<NodeHandle>,
        depth: usize,
    ) -> NodeHandle {
        let handle = NodeHandle(self.nodes.len());
        self.index.insert(id.clone(), handle);
        self.nodes.push(DecoratedNode {
            id: id.clone(),
            value: node.value,
            left: None,
            right: None,
            parent,
            depth,
        });

        // Pre-order: the whole left subtree is numbered before the right one
        if let Some(left) = &node.left {
            let child = self.push_subtree(left, id.left(), Some(handle), depth + 1);
            self.nodes[handle.0].left = Some(child);
        }
        if let Some(right) = &node.right {
            let child = self.push_subtree(right, id.right(), Some(handle), depth + 1);
            self.nodes[handle.0].right = Some(child);
        }

        handle
    }

    /// Root handle, if the tree is non-empty
    pub fn root(&self) -> Option<NodeHandle> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeHandle(0))
        }
    }

    pub fn get(&self, handle: NodeHandle) -> &DecoratedNode {
        &self.nodes[handle.0]
    }

    /// Resolve an id back to its node handle
    pub fn find(&self, id: &NodeId) -> Option<NodeHandle> {
        self.index.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in pre-order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (NodeHandle, &DecoratedNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeHandle(i), node))
    }

    /// Largest depth of any node (0 for a single node or an empty tree)
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DecoratedTree {
        let tree =
            BinaryTree::from_level_order(&[Some(1), Some(2), Some(3), Some(4), Some(5)]);
        decorate(tree.as_ref())
    }

    #[test]
    fn test_absent_tree_is_empty() {
        let decorated = decorate(None);
        assert!(decorated.is_empty());
        assert!(decorated.root().is_none());
    }

    #[test]
    fn test_ids_follow_preorder_paths() {
        let decorated = sample();
        let ids: Vec<&str> = decorated.iter().map(|(_, n)| n.id.as_str()).collect();
        assert_eq!(ids, vec!["root", "root-L", "root-L-L", "root-L-R", "root-R"]);

        let values: Vec<i32> = decorated.iter().map(|(_, n)| n.value).collect();
        assert_eq!(values, vec![1, 2, 4, 5, 3]);
    }

    #[test]
    fn test_parent_links_and_depth() {
        let decorated = sample();
        let root = decorated.root().unwrap();
        assert_eq!(decorated.get(root).depth, 0);
        assert!(decorated.get(root).parent.is_none());

        let four = decorated.find(&NodeId::from("root-L-L")).unwrap();
        let node = decorated.get(four);
        assert_eq!(node.value, 4);
        assert_eq!(node.depth, 2);
        let parent = node.parent.unwrap();
        assert_eq!(decorated.get(parent).id.as_str(), "root-L");
        assert_eq!(decorated.get(parent).left, Some(four));

        assert_eq!(decorated.max_depth(), 2);
    }

    #[test]
    fn test_same_shape_same_ids() {
        let a = decorate(BinaryTree::from_level_order(&[Some(1), None, Some(2)]).as_ref());
        let b = decorate(BinaryTree::from_level_order(&[Some(9), None, Some(-4)]).as_ref());

        let ids_a: Vec<_> = a.iter().map(|(_, n)| (n.id.clone(), n.depth)).collect();
        let ids_b: Vec<_> = b.iter().map(|(_, n)| (n.id.clone(), n.depth)).collect();
        assert_eq!(ids_a, ids_b);
    }
}
