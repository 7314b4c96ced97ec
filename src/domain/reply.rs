//! Outcome of one exchange with the agent backend.

use super::session::SessionId;

/// Prefix used for every error surfaced in the transcript.
pub const ERROR_PREFIX: &str = "Error:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentReply {
    /// 2xx response carrying the session and the assistant's answer.
    Success {
        session_id: SessionId,
        content: String,
    },
    /// Non-2xx response; carries the backend's `error` text.
    ServerError(String),
    /// The request could not complete or the response was unusable.
    TransportError(String),
}

impl AgentReply {
    /// Text appended to the transcript as an assistant message.
    pub fn transcript_text(&self) -> String {
        match self {
            AgentReply::Success { content, .. } => content.clone(),
            AgentReply::ServerError(message) | AgentReply::TransportError(message) => {
                format!("{ERROR_PREFIX} {message}")
            }
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, AgentReply::Success { .. })
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AgentReply::Success { .. } => "success",
            AgentReply::ServerError(_) => "server_error",
            AgentReply::TransportError(_) => "transport_error",
        }
    }
}
