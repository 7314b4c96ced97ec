use super::reply::AgentReply;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    /// Outcome of an outbound agent request, delivered back to the UI loop.
    AgentReplied {
        request_id: u64,
        reply: AgentReply,
    },
}

/// A key press normalized away from the terminal backend.
///
/// Printable keys carry the character itself (`"a"`, `"?"`); named keys use
/// lowercase names such as `"enter"`, `"esc"`, `"backspace"`, `"pageup"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// Returns the character for single-character keys without modifiers.
    pub fn printable_char(&self) -> Option<char> {
        if self.ctrl {
            return None;
        }

        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }
}
