use super::message::Message;

/// Append-only conversation shown to the user.
///
/// The view follows the newest entry unless the user scrolled back; any
/// append snaps it back to the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    /// Rendered lines hidden below the viewport.
    scroll_back: usize,
}

impl Transcript {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
        self.scroll_back = 0;
    }

    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    /// Clamps the scroll position once the renderer knows the line count.
    pub fn clamp_scroll(&mut self, total_lines: usize, viewport_height: usize) {
        let max = total_lines.saturating_sub(viewport_height);
        self.scroll_back = self.scroll_back.min(max);
    }
}
