//! Narration pane: what the algorithm is doing right now

use crate::trace::{AlgorithmStep, Animation};
use crate::tree::{DecoratedTree, NodeId};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn value_of(tree: &DecoratedTree, id: &NodeId) -> String {
    tree.find(id)
        .map_or_else(|| id.to_string(), |h| tree.get(h).value.to_string())
}

fn label_style() -> Style {
    Style::default().fg(DEFAULT_THEME.comment)
}

/// Build the narration lines for one step
pub(crate) fn narration_lines(step: &AlgorithmStep, tree: &DecoratedTree) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        step.description.clone(),
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::BOLD),
    ))];

    let summary = step.animation.summary();
    if !summary.is_empty() {
        let color = match step.animation {
            Animation::ReturnValue { .. } | Animation::RecursionExit { .. } => {
                DEFAULT_THEME.return_value
            }
            Animation::UpdateDiameter { .. } => DEFAULT_THEME.success,
            _ => DEFAULT_THEME.secondary,
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:?}: ", step.animation_kind()), label_style()),
            Span::styled(summary, Style::default().fg(color)),
        ]));
    }

    if let (Some(left), Some(right)) = (step.left_child_depth, step.right_child_depth) {
        lines.push(Line::from(vec![
            Span::styled("Depths: ", label_style()),
            Span::styled(
                format!("left {}  right {}", left, right),
                Style::default().fg(DEFAULT_THEME.return_value),
            ),
        ]));
    }

    let path: Vec<String> = step
        .highlighted_node_ids
        .iter()
        .map(|id| value_of(tree, id))
        .collect();
    if !path.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Call path: ", label_style()),
            Span::styled(path.join(" → "), Style::default().fg(DEFAULT_THEME.primary)),
        ]));
    }

    let best = match step.diameter_path_so_far.first() {
        Some(apex) => format!(
            "{} (through node {})",
            step.current_best_diameter,
            value_of(tree, apex)
        ),
        None => step.current_best_diameter.to_string(),
    };
    lines.push(Line::from(vec![
        Span::styled("Best diameter: ", label_style()),
        Span::styled(
            best,
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    lines
}

/// Render the narration pane
pub fn render_narration_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&AlgorithmStep>,
    tree: &DecoratedTree,
) {
    let block = Block::default()
        .title(" What's happening ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let paragraph = match step {
        Some(step) => Paragraph::new(narration_lines(step, tree)),
        None => Paragraph::new("(no steps)").style(Style::default().fg(DEFAULT_THEME.comment)),
    };
    frame.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}
