use crate::snapshot::Highlight;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub type_name: Color,
    pub bar_idle: Color,
    pub bar_compare: Color,
    pub bar_swap: Color,
    pub bar_sorted: Color,
}

impl Theme {
    /// Bar color for a highlight class
    pub fn bar_color(&self, highlight: Highlight) -> Color {
        match highlight {
            Highlight::Idle => self.bar_idle,
            Highlight::Comparison => self.bar_compare,
            Highlight::Swap => self.bar_swap,
            Highlight::Sorted => self.bar_sorted,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    function: Color::Rgb(249, 226, 175),       // Yellow for procedure names
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal
    bar_idle: Color::Rgb(0, 243, 255),         // Neon blue
    bar_compare: Color::Rgb(250, 204, 21),     // Yellow
    bar_swap: Color::Rgb(188, 19, 254),        // Purple
    bar_sorted: Color::Rgb(10, 255, 10),       // Green
};
