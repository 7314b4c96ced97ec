//! Text field and attachment badge rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{attachment::PendingAttachment, text_input::TextInputState};

use super::styles;

/// Prompt symbol shown before the input text.
const PROMPT_SYMBOL: &str = "> ";

/// A bordered single-line input.
pub struct InputField<'a> {
    pub title: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
}

pub fn render_input(frame: &mut Frame<'_>, area: Rect, input: &TextInputState, field: &InputField<'_>) {
    let border_style = if field.focused {
        styles::active_border_style()
    } else {
        styles::inactive_border_style()
    };

    let paragraph = Paragraph::new(build_input_line(input, field.placeholder, field.focused)).block(
        Block::default()
            .title(field.title.to_owned())
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);

    if field.focused {
        let offset = PROMPT_SYMBOL.len() + input.cursor_columns();
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(offset.min(u16::MAX as usize) as u16);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Placeholder only shows while the field is empty and unfocused.
fn build_input_line(input: &TextInputState, placeholder: &str, focused: bool) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if input.is_empty() && !focused {
        return Line::from(vec![
            prompt,
            Span::styled(placeholder.to_owned(), styles::input_placeholder_style()),
        ]);
    }

    Line::from(vec![
        prompt,
        Span::styled(input.text().to_owned(), styles::input_text_style()),
    ])
}

pub fn render_attachment_badge(frame: &mut Frame<'_>, area: Rect, attachment: &PendingAttachment) {
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", attachment.badge_label()),
            styles::attachment_badge_style(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
