use ratatui::style::{Color, Modifier, Style};

// ── Colour constants ──────────────────────────────────────────────────
pub const COLOR_PROMPT: Color = Color::Cyan;
pub const COLOR_MATCH: Color = Color::Green;
pub const COLOR_MARK: Color = Color::Magenta;
pub const COLOR_SELECTED_BG: Color = Color::DarkGray;
pub const COLOR_INFO: Color = Color::Yellow;
pub const COLOR_HINT: Color = Color::DarkGray;

// ── Icon constants ────────────────────────────────────────────────────
pub const PROMPT: &str = "> ";
pub const ICON_CURSOR: &str = "▶";
pub const ICON_MARKED: &str = "●";

// ── Helpers ───────────────────────────────────────────────────────────

pub fn match_style() -> Style {
    Style::default()
        .fg(COLOR_MATCH)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTED_BG)
        .add_modifier(Modifier::BOLD)
}
