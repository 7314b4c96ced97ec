use std::fmt;

/// Opaque backend-issued token correlating exchanges with one conversation.
///
/// Empty until the first successful exchange; never generated locally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_established(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
