/// Author of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub timestamp_ms: i64,
}

impl Message {
    pub fn user(text: impl Into<String>, timestamp_ms: i64) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            timestamp_ms,
        }
    }

    pub fn assistant(text: impl Into<String>, timestamp_ms: i64) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            timestamp_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_tag_role() {
        assert_eq!(Message::user("hi", 0).role, Role::User);
        assert_eq!(Message::assistant("hello", 0).role, Role::Assistant);
    }
}
