//! Character-grid layout for drawing a decorated tree
//!
//! Nodes get one column slot each in in-order sequence, so every left
//! subtree sits strictly left of its parent and every right subtree strictly
//! right. Rows are `depth * row_gap`, leaving `row_gap - 1` rows between
//! levels for edge glyphs.
//!
//! Positions live in a separate [`TreeLayout`] keyed by [`NodeHandle`]; the
//! decorated tree is never modified.

use crate::tree::{DecoratedTree, NodeHandle};

/// Spacing parameters for [`layout`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Horizontal cells per node slot
    pub column_width: usize,
    /// Vertical cells per tree level
    pub row_gap: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            column_width: 6,
            row_gap: 2,
        }
    }
}

/// Center cell of a node label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

/// Grid positions for every node of one tree
#[derive(Debug, Clone, Default)]
pub struct TreeLayout {
    positions: Vec<Position>,
    width: usize,
    height: usize,
}

impl TreeLayout {
    pub fn position(&self, handle: NodeHandle) -> Position {
        self.positions[handle.0]
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.height
    }
}

/// Assign grid coordinates to every node
pub fn layout(tree: &DecoratedTree, options: LayoutOptions) -> TreeLayout {
    let column_width = options.column_width.max(1);
    let row_gap = options.row_gap.max(1);

    let mut positions = vec![Position { x: 0, y: 0 }; tree.len()];
    let Some(root) = tree.root() else {
        return TreeLayout::default();
    };

    // Iterative in-order walk
    let mut stack: Vec<NodeHandle> = Vec::new();
    let mut current = Some(root);
    let mut slot = 0;
    while current.is_some() || !stack.is_empty() {
        while let Some(handle) = current {
            stack.push(handle);
            current = tree.get(handle).left;
        }
        let Some(handle) = stack.pop() else {
            break;
        };
        let node = tree.get(handle);
        positions[handle.0] = Position {
            x: slot * column_width + column_width / 2,
            y: node.depth * row_gap,
        };
        slot += 1;
        current = node.right;
    }

    TreeLayout {
        positions,
        width: slot * column_width,
        height: tree.max_depth() * row_gap + 1,
    }
}
