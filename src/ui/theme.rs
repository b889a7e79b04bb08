use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub bar: Color,       // Idle value bars
    pub comparing: Color, // Indices under comparison
    pub swapped: Color,   // Indices just written
    pub visited: Color,   // Settled graph nodes
    pub frontier: Color,  // Most recently visited node
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current step
    bar: Color::Rgb(137, 180, 250),
    comparing: Color::Rgb(250, 179, 135),
    swapped: Color::Rgb(166, 227, 161),
    visited: Color::Rgb(148, 226, 213), // Teal
    frontier: Color::Rgb(249, 226, 175),
};
