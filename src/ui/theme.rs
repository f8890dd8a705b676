//! Color palette shared by every pane

use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,         // call path, step counter
    pub secondary: Color,       // current node, active edge
    pub comment: Color,         // hints, separators
    pub success: Color,         // best diameter, settled path
    pub error: Color,           // rejected input, END badge
    pub keyword: Color,         // listing keywords
    pub number: Color,          // numeric literals and values
    pub border_focused: Color,  // focused pane border
    pub border_normal: Color,   // other borders, idle edges
    pub current_line_bg: Color, // executing listing line, status bar
    pub function: Color,        // function names in the listing
    pub type_name: Color,       // type names in the listing
    pub return_value: Color,    // returned depths
    pub annotation: Color,      // inline `name = value` beside the listing
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),         // blue
    secondary: Color::Rgb(250, 179, 135),       // orange
    comment: Color::Rgb(108, 112, 134),         // grey
    success: Color::Rgb(166, 227, 161),         // green
    error: Color::Rgb(243, 139, 168),           // red
    keyword: Color::Rgb(203, 166, 247),         // mauve
    number: Color::Rgb(250, 179, 135),          // orange
    border_focused: Color::Rgb(249, 226, 175),  // yellow
    border_normal: Color::Rgb(88, 91, 112),     // dark grey
    current_line_bg: Color::Rgb(50, 50, 70),    // raised background
    function: Color::Rgb(249, 226, 175),        // yellow
    type_name: Color::Rgb(148, 226, 213),       // teal
    return_value: Color::Rgb(245, 194, 231),    // pink
    annotation: Color::Rgb(186, 194, 222),      // light grey
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_roles_are_distinguishable() {
        let t = DEFAULT_THEME;
        // Idle edges must not look like path or active edges
        assert_ne!(t.border_normal, t.primary);
        assert_ne!(t.border_normal, t.secondary);
        assert_ne!(t.border_normal, t.success);
        assert_ne!(t.border_focused, t.border_normal);
        assert_ne!(t.keyword, t.primary);
    }
}
