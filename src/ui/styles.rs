//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Panels
// =============================================================================

pub fn active_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn inactive_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Landing title and the welcome header.
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn alert_border_style() -> Style {
    Style::default().fg(Color::Red)
}

// =============================================================================
// Transcript
// =============================================================================

pub fn user_label_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn assistant_label_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

pub fn message_time_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn message_text_style() -> Style {
    Style::default().fg(Color::White)
}

// =============================================================================
// Inputs
// =============================================================================

pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Pending attachment badge above the composer.
pub fn attachment_badge_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::Yellow)
}
