use crossterm::style::Color;

// Teletext palette
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn detail_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn live_fg() -> Color {
    Color::AnsiValue(201)
} // Bright magenta
pub fn highlight_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
