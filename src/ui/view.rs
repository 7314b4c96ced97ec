use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::{
    domain::{screen::Screen, widget_state::WidgetState},
    usecases::navigate::welcome_text,
};

use super::{
    composer::{render_attachment_badge, render_input, InputField},
    styles,
    transcript_rendering::{build_transcript_lines, first_visible_line},
};

pub fn render(frame: &mut Frame<'_>, state: &mut WidgetState, assistant_name: &str) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    match state.screen() {
        Screen::Landing => render_landing(frame, content_area, assistant_name),
        Screen::NameEntry => render_name_entry(frame, content_area, state),
        Screen::Chat => render_chat(frame, content_area, state, assistant_name),
    }

    let status = Paragraph::new(Span::styled(status_line(state), styles::hint_style()));
    frame.render_widget(status, status_area);

    if let Some(alert) = state.alert() {
        render_alert(frame, content_area, alert);
    }
}

fn render_landing(frame: &mut Frame<'_>, area: Rect, assistant_name: &str) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Chat with {assistant_name}"),
            styles::title_style(),
        )),
        Line::default(),
        Line::from("Ask questions about your documents, or attach a file."),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter to get started",
            styles::hint_style(),
        )),
    ];

    let panel = Paragraph::new(lines)
        .centered()
        .block(Block::default().borders(Borders::ALL).border_style(styles::inactive_border_style()));
    frame.render_widget(panel, centered(area, 60, 9));
}

fn render_name_entry(frame: &mut Frame<'_>, area: Rect, state: &WidgetState) {
    let box_area = centered(area, 50, 5);
    let [question_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(3)])
        .areas(box_area);

    frame.render_widget(
        Paragraph::new(Span::styled("What should we call you?", styles::title_style())),
        question_area,
    );

    render_input(
        frame,
        input_area,
        state.name_input(),
        &InputField {
            title: "Your name",
            placeholder: "Enter your name",
            focused: state.name_focus().is_focused(),
        },
    );
}

fn render_chat(frame: &mut Frame<'_>, area: Rect, state: &mut WidgetState, assistant_name: &str) {
    let badge_height = u16::from(state.pending_attachment().is_some());
    let [header_area, transcript_area, badge_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(badge_height),
            Constraint::Length(3),
        ])
        .areas(area);

    let welcome = state.user_name().map(welcome_text).unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Span::styled(welcome, styles::title_style())),
        header_area,
    );

    render_transcript(frame, transcript_area, state, assistant_name);

    if let Some(attachment) = state.pending_attachment() {
        render_attachment_badge(frame, badge_area, attachment);
    }

    match state.file_prompt() {
        Some(prompt) => render_input(
            frame,
            input_area,
            prompt,
            &InputField {
                title: "Attach file (Enter: select, Esc: cancel)",
                placeholder: "Path to file",
                focused: true,
            },
        ),
        None => render_input(
            frame,
            input_area,
            state.composer(),
            &InputField {
                title: "Message",
                placeholder: "Type a message",
                focused: state.alert().is_none(),
            },
        ),
    }
}

fn render_transcript(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &mut WidgetState,
    assistant_name: &str,
) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let viewport_height = area.height.saturating_sub(2) as usize;

    let lines = build_transcript_lines(state.transcript().messages(), assistant_name, inner_width);
    state
        .transcript_mut()
        .clamp_scroll(lines.len(), viewport_height);
    let top = first_visible_line(lines.len(), viewport_height, state.transcript().scroll_back());

    let panel = Paragraph::new(lines)
        .scroll((top.min(u16::MAX as usize) as u16, 0))
        .block(
            Block::default()
                .title("Conversation")
                .borders(Borders::ALL)
                .border_style(styles::inactive_border_style()),
        );
    frame.render_widget(panel, area);
}

fn render_alert(frame: &mut Frame<'_>, area: Rect, alert: &str) {
    let popup = centered(area, 44, 5);
    let body = vec![
        Line::from(alert.to_owned()),
        Line::from(Span::styled("Press any key", styles::hint_style())),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(body).wrap(Wrap { trim: true }).block(
            Block::default()
                .title("Alert")
                .borders(Borders::ALL)
                .border_style(styles::alert_border_style()),
        ),
        popup,
    );
}

/// A `width` x `height` rectangle centered in `area`, clipped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

fn status_line(state: &WidgetState) -> String {
    let hint = match state.screen() {
        Screen::Landing => "Enter: get started | q: quit",
        Screen::NameEntry => "Enter: continue | Ctrl+C: quit",
        Screen::Chat if state.file_prompt().is_some() => "Enter: select file | Esc: cancel",
        Screen::Chat => {
            "Enter/Ctrl+S: send | Ctrl+O: attach | PgUp/PgDn: scroll | Ctrl+C: quit"
        }
    };

    let mut parts = vec![format!("screen: {}", state.screen().as_label())];
    if let Some(session) = state.established_session() {
        parts.push(format!("session: {session}"));
    }
    if state.is_awaiting_reply() {
        parts.push("waiting for reply...".to_owned());
    }
    parts.push(hint.to_owned());
    parts.join(" | ")
}
