//! Transcript layout.
//!
//! Each message becomes a header line (time and author), its text wrapped to
//! the panel width and indented, then a blank spacer line.

use chrono::{Local, TimeZone};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::message::{Message, Role};

use super::styles;

const TEXT_INDENT: &str = "  ";
const USER_LABEL: &str = "You";

pub fn build_transcript_lines(
    messages: &[Message],
    assistant_name: &str,
    width: usize,
) -> Vec<Line<'static>> {
    let text_width = width.saturating_sub(TEXT_INDENT.len()).max(1);
    let mut lines = Vec::new();

    for message in messages {
        let (label, label_style) = match message.role {
            Role::User => (USER_LABEL, styles::user_label_style()),
            Role::Assistant => (assistant_name, styles::assistant_label_style()),
        };

        lines.push(Line::from(vec![
            Span::styled(format_time(message.timestamp_ms), styles::message_time_style()),
            Span::raw(" "),
            Span::styled(label.to_owned(), label_style),
        ]));

        for row in wrap_text(&message.text, text_width) {
            lines.push(Line::from(vec![
                Span::raw(TEXT_INDENT),
                Span::styled(row, styles::message_text_style()),
            ]));
        }

        lines.push(Line::default());
    }

    lines
}

/// Index of the first line to show so the newest entry sits at the bottom,
/// shifted up by `scroll_back` lines.
pub fn first_visible_line(total_lines: usize, viewport_height: usize, scroll_back: usize) -> usize {
    total_lines.saturating_sub(viewport_height.saturating_add(scroll_back))
}

const TAB_STOP: &str = "    ";

/// Greedy word wrap by display width.
///
/// Spacing inside a row is kept as typed, including leading indentation.
/// Whitespace at a soft break is dropped and words wider than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.replace('\t', TAB_STOP);
        let mut row = String::new();
        let mut row_width = 0;

        for run in whitespace_runs(&paragraph) {
            let run_width = run.width();
            if row_width + run_width <= width {
                row.push_str(run);
                row_width += run_width;
                continue;
            }

            let is_space = run.starts_with(char::is_whitespace);
            if !row.is_empty() && (is_space || run_width <= width) {
                rows.push(take_row(&mut row));
                row_width = 0;
                if !is_space {
                    row.push_str(run);
                    row_width = run_width;
                }
                continue;
            }

            for ch in run.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if row_width + ch_width > width && !row.is_empty() {
                    rows.push(take_row(&mut row));
                    row_width = 0;
                }
                row.push(ch);
                row_width += ch_width;
            }
        }

        rows.push(row);
    }

    rows
}

/// Splits `text` into alternating runs of whitespace and non-whitespace.
fn whitespace_runs(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let is_space = first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|(_, ch)| ch.is_whitespace() != is_space)
            .map_or(rest.len(), |(idx, _)| idx);
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some(run)
    })
}

/// Ends a row at a soft break; trailing spaces there are not shown.
fn take_row(row: &mut String) -> String {
    let trimmed_len = row.trim_end().len();
    row.truncate(trimmed_len);
    std::mem::take(row)
}

fn format_time(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms) {
        chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => {
            dt.format("%H:%M").to_string()
        }
        chrono::LocalResult::None => "--:--".to_owned(),
    }
}
