//! Agent backend adapter: request model, wire format and HTTP transport.

pub mod http;
mod wire;

use thiserror::Error;

use crate::domain::attachment::PendingAttachment;

/// Returns the agent module name for smoke checks.
pub fn module_name() -> &'static str {
    "agent"
}

/// One outbound exchange, as assembled by the message dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRequest {
    /// Trimmed user text; may be empty when only a file is sent.
    pub message: String,
    pub session_id: Option<String>,
    pub attachment: Option<PendingAttachment>,
}

/// Delivers requests to the backend without blocking the caller.
///
/// Implementations report the outcome asynchronously as
/// [`AppEvent::AgentReplied`](crate::domain::events::AppEvent::AgentReplied)
/// carrying the same `request_id`.
pub trait AgentTransport {
    fn submit(&self, request_id: u64, request: AgentRequest);
}

/// Failures that happen before a usable response is in hand.
#[derive(Debug, Error)]
pub enum AgentTransportError {
    #[error("failed to read attachment {name}: {source}")]
    AttachmentRead {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{}", describe_chain(.0))]
    Request(#[source] reqwest::Error),
    #[error("invalid response from agent (HTTP {status}): {details}")]
    InvalidResponse { status: u16, details: String },
}

/// Joins an error with its sources, e.g. `error sending request: connection refused`.
fn describe_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut description = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}
