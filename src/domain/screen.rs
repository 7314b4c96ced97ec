use std::time::Instant;

/// The three mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    NameEntry,
    Chat,
}

impl Screen {
    pub fn as_label(&self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::NameEntry => "name",
            Screen::Chat => "chat",
        }
    }
}

/// Focus state of the name field, which receives focus after a short delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameFocus {
    #[default]
    Unfocused,
    Scheduled {
        due_at: Instant,
    },
    Focused,
}

impl NameFocus {
    pub fn is_focused(&self) -> bool {
        matches!(self, NameFocus::Focused)
    }

    /// Promotes a due schedule to focus. Returns true on the transition.
    pub fn resolve(&mut self, now: Instant) -> bool {
        match *self {
            NameFocus::Scheduled { due_at } if now >= due_at => {
                *self = NameFocus::Focused;
                true
            }
            _ => false,
        }
    }
}
