//! JSON bodies returned by `POST /api/agent/`.

use serde::Deserialize;

use crate::domain::{reply::AgentReply, session::SessionId};

use super::AgentTransportError;

#[derive(Debug, Deserialize)]
struct SuccessBody {
    session_id: WireSessionId,
    assistant_message: WireMessage,
}

/// The backend keys sessions by database id, so both encodings show up.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireSessionId {
    Text(String),
    Number(serde_json::Number),
}

impl From<WireSessionId> for SessionId {
    fn from(value: WireSessionId) -> Self {
        match value {
            WireSessionId::Text(text) => SessionId::new(text),
            WireSessionId::Number(number) => SessionId::new(number.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireMessage {
    content: String,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Maps an HTTP status and raw body onto an exchange outcome.
pub(super) fn interpret(status: u16, body: &[u8]) -> Result<AgentReply, AgentTransportError> {
    let invalid = |error: serde_json::Error| AgentTransportError::InvalidResponse {
        status,
        details: error.to_string(),
    };

    if (200..300).contains(&status) {
        let body: SuccessBody = serde_json::from_slice(body).map_err(invalid)?;
        tracing::debug!(
            role = body.assistant_message.role.as_deref().unwrap_or("assistant"),
            created_at = body.assistant_message.created_at.as_deref(),
            "agent reply decoded"
        );
        return Ok(AgentReply::Success {
            session_id: body.session_id.into(),
            content: body.assistant_message.content,
        });
    }

    let body: ErrorBody = serde_json::from_slice(body).map_err(invalid)?;
    let message = body.error.unwrap_or_else(|| format!("HTTP {status}"));
    Ok(AgentReply::ServerError(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_success_with_string_session() {
        let reply = interpret(
            200,
            br#"{"session_id": "abc123", "assistant_message": {"content": "hi"}}"#,
        )
        .expect("body should decode");

        assert_eq!(
            reply,
            AgentReply::Success {
                session_id: SessionId::new("abc123"),
                content: "hi".to_owned(),
            }
        );
    }

    #[test]
    fn decodes_numeric_session_and_extra_fields() {
        let body = br#"{
            "session_id": 17,
            "user_message": {"id": 3, "role": "user", "content": "q", "created_at": "2024-01-01T00:00:00Z"},
            "assistant_message": {"id": 4, "role": "assistant", "content": "a", "created_at": "2024-01-01T00:00:01Z"}
        }"#;

        let reply = interpret(200, body).expect("body should decode");

        assert_eq!(
            reply,
            AgentReply::Success {
                session_id: SessionId::new("17"),
                content: "a".to_owned(),
            }
        );
    }

    #[test]
    fn non_success_status_carries_server_error() {
        let reply = interpret(400, br#"{"error": "bad request"}"#).expect("body should decode");

        assert_eq!(reply, AgentReply::ServerError("bad request".to_owned()));
    }

    #[test]
    fn non_success_without_error_field_falls_back_to_status() {
        let reply = interpret(500, b"{}").expect("body should decode");

        assert_eq!(reply, AgentReply::ServerError("HTTP 500".to_owned()));
    }

    #[test]
    fn html_error_page_is_invalid_response() {
        let error = interpret(502, b"<html>Bad Gateway</html>").expect_err("must not decode");

        assert!(matches!(
            error,
            AgentTransportError::InvalidResponse { status: 502, .. }
        ));
    }

    #[test]
    fn success_missing_assistant_message_is_invalid_response() {
        let error = interpret(200, br#"{"session_id": "abc"}"#).expect_err("must not decode");

        assert!(error.to_string().contains("assistant_message"));
    }
}
