use ratatui::style::{Color, Modifier, Style};

// Centralized window chrome colors.

pub fn desktop_bg() -> Color {
    Color::Reset
}

pub fn window_bg() -> Color {
    Color::Reset
}

pub fn border_focused() -> Color {
    Color::White
}

pub fn border_unfocused() -> Color {
    Color::DarkGray
}

pub fn title_fg() -> Color {
    Color::White
}

pub fn button_fg() -> Color {
    Color::Yellow
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(border_focused())
            .bg(window_bg())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(border_unfocused()).bg(window_bg())
    }
}

pub fn title_style(focused: bool) -> Style {
    let style = Style::default().fg(title_fg()).bg(window_bg());
    if focused {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

pub fn button_style() -> Style {
    Style::default().fg(button_fg()).bg(window_bg())
}
