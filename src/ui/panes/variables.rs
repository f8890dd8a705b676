//! Variables pane: the step's variable values, grouped by code line

use crate::trace::AlgorithmStep;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the variables pane
pub fn render_variables_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&AlgorithmStep>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Variables ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let variables = step.map(|s| s.variables.as_slice()).unwrap_or_default();
    if variables.is_empty() {
        let paragraph = Paragraph::new("(no variables)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let current_line = step.map_or(0, |s| s.source_line_number);
    let name_width = variables.iter().map(|v| v.name.len()).max().unwrap_or(0);

    let all_items: Vec<ListItem> = variables
        .iter()
        .map(|v| {
            let value_style = if v.source_line == current_line {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.number)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<width$}", v.name, width = name_width),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(v.value.clone(), value_style),
                Span::styled(
                    format!("   line {}", v.source_line),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ]))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
