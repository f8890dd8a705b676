//! Tree canvas pane
//!
//! Draws the decorated tree onto a character grid using the positions from
//! [`TreeLayout`], then paints the highlights carried by the current step:
//!
//! - current node: inverted orange
//! - root-to-current path and its edges: blue
//! - edge carrying a parameter or return value: orange
//! - apex of the best diameter so far: green
//! - on the final step, the whole settled longest path: green background
//! - left·right child depths beside the current node once both are known
//!
//! Connectors between a parent (row `y`) and its children use the row below
//! the parent:
//!
//! ```text
//!        1
//!   ┌────┴────┐
//!   2         3
//! ```

use crate::layout::TreeLayout;
use crate::trace::{AlgorithmStep, Animation};
use crate::tree::{DecoratedTree, NodeHandle, NodeId};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Scroll state for the tree pane
#[derive(Debug, Clone)]
pub struct TreeScrollState {
    pub offset_x: usize,
    pub offset_y: usize,
    /// Keep the current node in view automatically
    pub follow: bool,
}

impl Default for TreeScrollState {
    fn default() -> Self {
        TreeScrollState {
            offset_x: 0,
            offset_y: 0,
            follow: true,
        }
    }
}

/// Everything the tree pane needs for one frame
pub struct TreeRenderData<'a> {
    pub tree: &'a DecoratedTree,
    pub layout: &'a TreeLayout,
    pub step: Option<&'a AlgorithmStep>,
    /// Settled longest path, drawn only on the final step
    pub final_path: &'a [NodeHandle],
}

/// A fixed-size grid of styled cells
pub(crate) struct Canvas {
    width: usize,
    cells: Vec<Vec<(char, Style)>>,
}

impl Canvas {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            cells: vec![vec![(' ', Style::default()); width]; height],
        }
    }

    fn put(&mut self, x: usize, y: usize, ch: char, style: Style) {
        if let Some(row) = self.cells.get_mut(y) {
            if let Some(cell) = row.get_mut(x) {
                *cell = (ch, style);
            }
        }
    }

    #[cfg(test)]
    fn glyph(&self, x: usize, y: usize) -> char {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .map_or(' ', |cell| cell.0)
    }

    /// Write `text` centered on column `x`
    fn put_centered(&mut self, x: usize, y: usize, text: &str, style: Style) {
        let len = text.chars().count();
        let start = x.saturating_sub(len / 2);
        for (i, ch) in text.chars().enumerate() {
            self.put(start + i, y, ch, style);
        }
    }

    /// Visible window as ratatui lines
    pub(crate) fn window(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Vec<Line<'static>> {
        self.cells
            .iter()
            .skip(y)
            .take(height)
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .iter()
                    .skip(x)
                    .take(width)
                    .map(|(ch, style)| Span::styled(ch.to_string(), *style))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    /// Plain text of one row, trailing spaces trimmed
    #[cfg(test)]
    pub(crate) fn row_text(&self, y: usize) -> String {
        self.cells
            .get(y)
            .map(|row| row.iter().map(|c| c.0).collect::<String>())
            .unwrap_or_default()
            .trim_end()
            .to_string()
    }
}

/// Node and edge highlight sets derived from one step
struct Highlights {
    path: FxHashSet<NodeId>,
    edges: FxHashSet<(NodeId, NodeId)>,
    active_edge: Option<(NodeId, NodeId)>,
    current: Option<NodeId>,
    best: FxHashSet<NodeId>,
    settled: FxHashSet<NodeHandle>,
}

impl Highlights {
    fn from_step(step: Option<&AlgorithmStep>, final_path: &[NodeHandle]) -> Self {
        let Some(step) = step else {
            return Highlights {
                path: FxHashSet::default(),
                edges: FxHashSet::default(),
                active_edge: None,
                current: None,
                best: FxHashSet::default(),
                settled: FxHashSet::default(),
            };
        };

        let active_edge = match &step.animation {
            Animation::ParamPass {
                from, to: Some(to), ..
            } => Some((from.clone(), to.clone())),
            Animation::ReturnValue {
                from: Some(from),
                to: Some(to),
                ..
            } => Some((to.clone(), from.clone())),
            Animation::RecursionExit {
                from, to: Some(to), ..
            } => Some((to.clone(), from.clone())),
            _ => None,
        };

        Highlights {
            path: step.highlighted_node_ids.iter().cloned().collect(),
            edges: step
                .highlighted_edges
                .iter()
                .map(|e| (e.parent_id.clone(), e.child_id.clone()))
                .collect(),
            active_edge,
            current: step.current_node_id.clone(),
            best: step.diameter_path_so_far.iter().cloned().collect(),
            settled: final_path.iter().copied().collect(),
        }
    }

    fn edge_style(&self, parent: &NodeId, child: &NodeId, settled: bool) -> Style {
        let key = (parent.clone(), child.clone());
        if self.active_edge.as_ref() == Some(&key) {
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD)
        } else if settled {
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD)
        } else if self.edges.contains(&key) {
            Style::default().fg(DEFAULT_THEME.primary)
        } else {
            Style::default().fg(DEFAULT_THEME.border_normal)
        }
    }

    fn node_style(&self, handle: NodeHandle, id: &NodeId) -> Style {
        if self.current.as_ref() == Some(id) {
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else if self.settled.contains(&handle) {
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else if self.path.contains(id) {
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD)
        } else if self.best.contains(id) {
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        }
    }
}

/// Draw the whole tree with highlights onto a canvas
pub(crate) fn draw_tree(data: &TreeRenderData) -> Canvas {
    let layout = data.layout;
    let tree = data.tree;
    let mut canvas = Canvas::new(layout.width(), layout.height());
    let highlights = Highlights::from_step(data.step, data.final_path);

    // Edges first so labels win where they overlap
    for (handle, node) in tree.iter() {
        let parent_pos = layout.position(handle);
        let connector_row = parent_pos.y + 1;
        let mut junction_style = Style::default().fg(DEFAULT_THEME.border_normal);

        for child in [node.left, node.right].into_iter().flatten() {
            let child_node = tree.get(child);
            let child_pos = layout.position(child);
            let settled =
                highlights.settled.contains(&handle) && highlights.settled.contains(&child);
            let style = highlights.edge_style(&node.id, &child_node.id, settled);
            if style.fg != Some(DEFAULT_THEME.border_normal) {
                junction_style = style;
            }

            let (from, to, corner) = if child_pos.x < parent_pos.x {
                (child_pos.x, parent_pos.x, '┌')
            } else {
                (parent_pos.x + 1, child_pos.x + 1, '┐')
            };
            for x in from..to {
                canvas.put(x, connector_row, '─', style);
            }
            canvas.put(child_pos.x, connector_row, corner, style);
            // Vertical drop for row gaps wider than one connector row
            for y in connector_row + 1..child_pos.y {
                canvas.put(child_pos.x, y, '│', style);
            }
        }

        let junction = match (node.left.is_some(), node.right.is_some()) {
            (true, true) => Some('┴'),
            (true, false) => Some('┘'),
            (false, true) => Some('└'),
            (false, false) => None,
        };
        if let Some(junction) = junction {
            canvas.put(parent_pos.x, connector_row, junction, junction_style);
        }
    }

    // Child depths of the current node, written to its right; nodes win on overlap
    if let Some(step) = data.step {
        let current = step.current_node_id.as_ref().and_then(|id| tree.find(id));
        if let (Some(handle), Some(l), Some(r)) =
            (current, step.left_child_depth, step.right_child_depth)
        {
            let pos = layout.position(handle);
            let label_len = tree.get(handle).value.to_string().chars().count();
            let style = Style::default().fg(DEFAULT_THEME.return_value);
            let text = format!("{}·{}", l, r);
            for (i, ch) in text.chars().enumerate() {
                canvas.put(pos.x + label_len - label_len / 2 + 1 + i, pos.y, ch, style);
            }
        }
    }

    for (handle, node) in tree.iter() {
        let pos = layout.position(handle);
        let style = highlights.node_style(handle, &node.id);
        canvas.put_centered(pos.x, pos.y, &node.value.to_string(), style);
    }

    canvas
}

/// Render the tree pane
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    data: &TreeRenderData,
    is_focused: bool,
    scroll_state: &mut TreeScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = match data.step {
        Some(step) => format!(" Tree · diameter {} ", step.current_best_diameter),
        None => " Tree ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if data.tree.is_empty() {
        let paragraph = Paragraph::new("(empty tree)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let canvas = draw_tree(data);
    let visible_width = area.width.saturating_sub(2).max(1) as usize;
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Center the current node when following
    if scroll_state.follow {
        let focus = data
            .step
            .and_then(|s| s.current_node_id.as_ref().or(s.highlighted_node_ids.last()))
            .and_then(|id| data.tree.find(id))
            .or_else(|| data.tree.root());
        if let Some(handle) = focus {
            let pos = data.layout.position(handle);
            scroll_state.offset_x = pos.x.saturating_sub(visible_width / 2);
            scroll_state.offset_y = pos.y.saturating_sub(visible_height / 2);
        }
    }

    let max_x = canvas.width.saturating_sub(visible_width);
    let max_y = data.layout.height().saturating_sub(visible_height);
    scroll_state.offset_x = scroll_state.offset_x.min(max_x);
    scroll_state.offset_y = scroll_state.offset_y.min(max_y);

    let lines = canvas.window(
        scroll_state.offset_x,
        scroll_state.offset_y,
        visible_width,
        visible_height,
    );
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout, LayoutOptions};
    use crate::trace::generate_steps;
    use crate::tree::build_decorated;

    #[test]
    fn test_draws_labels_and_connectors() {
        let tree = build_decorated(&[Some(1), Some(2), Some(3)]).unwrap();
        let grid = layout(&tree, LayoutOptions::default());
        let data = TreeRenderData {
            tree: &tree,
            layout: &grid,
            step: None,
            final_path: &[],
        };
        let canvas = draw_tree(&data);

        assert_eq!(canvas.row_text(0), "         1");
        assert_eq!(canvas.row_text(1), "   ┌─────┴─────┐");
        assert_eq!(canvas.row_text(2), "   2           3");
    }

    #[test]
    fn test_single_child_junction() {
        let tree = build_decorated(&[Some(1), None, Some(2)]).unwrap();
        let grid = layout(&tree, LayoutOptions::default());
        let data = TreeRenderData {
            tree: &tree,
            layout: &grid,
            step: None,
            final_path: &[],
        };
        let canvas = draw_tree(&data);
        assert_eq!(canvas.glyph(3, 1), '└');
        assert_eq!(canvas.glyph(9, 1), '┐');
    }

    #[test]
    fn test_current_node_is_highlighted() {
        let tree = build_decorated(&[Some(1), Some(2), Some(3)]).unwrap();
        let grid = layout(&tree, LayoutOptions::default());
        let steps = generate_steps(&tree);
        let enter_root = &steps[2];
        let data = TreeRenderData {
            tree: &tree,
            layout: &grid,
            step: Some(enter_root),
            final_path: &[],
        };
        let canvas = draw_tree(&data);
        let root_cell = canvas.cells[0][9];
        assert_eq!(root_cell.0, '1');
        assert_eq!(root_cell.1.bg, Some(DEFAULT_THEME.secondary));
    }

    #[test]
    fn test_child_depths_beside_current_node() {
        let tree = build_decorated(&[Some(1), Some(2), Some(3)]).unwrap();
        let grid = layout(&tree, LayoutOptions::default());
        let steps = generate_steps(&tree);
        let root_compare = &steps[21];
        assert_eq!(root_compare.left_child_depth, Some(1));
        let data = TreeRenderData {
            tree: &tree,
            layout: &grid,
            step: Some(root_compare),
            final_path: &[],
        };
        let canvas = draw_tree(&data);
        assert_eq!(canvas.row_text(0), "         1 1·1");
    }
}
