use ratatui::style::Color;

// Centralized panel colors. Kept as small helpers so a future theme layer
// can remap them in one place.

pub fn panel_bg() -> Color {
    Color::DarkGray
}
pub fn panel_fg() -> Color {
    Color::White
}
pub fn panel_border() -> Color {
    Color::Gray
}

// Rows
pub fn row_active_bg() -> Color {
    Color::Gray
}
pub fn row_active_fg() -> Color {
    Color::Black
}
pub fn row_disabled_fg() -> Color {
    Color::DarkGray
}
pub fn divider_fg() -> Color {
    Color::DarkGray
}

// Search box / empty states
pub fn search_fg() -> Color {
    Color::Yellow
}
pub fn empty_fg() -> Color {
    Color::DarkGray
}

// Trigger button in the demo
pub fn trigger_bg() -> Color {
    Color::Blue
}
pub fn trigger_fg() -> Color {
    Color::White
}
