//! Message dispatch: one user send turns into one agent request.
//!
//! `send_message` echoes the user's input into the transcript and hands the
//! request to an [`AgentTransport`]; `apply_reply` settles it once the
//! transport reports back. Only one request may be in flight at a time.

use crate::{
    agent::{AgentRequest, AgentTransport},
    domain::{message::Message, reply::AgentReply, widget_state::WidgetState},
};

use super::attach;

const SEND_REJECTED_BUSY: &str = "SEND_REJECTED_BUSY";
const STALE_REPLY_DISCARDED: &str = "STALE_REPLY_DISCARDED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing to send: blank text and no attachment.
    Skipped,
    /// A previous request has not settled yet; input is kept.
    Busy,
    Dispatched { request_id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyDisposition {
    Applied,
    /// The reply does not belong to the in-flight request.
    Stale,
}

pub fn send_message(
    state: &mut WidgetState,
    transport: &dyn AgentTransport,
    timestamp_ms: i64,
) -> SendOutcome {
    let text = state.composer().trimmed().to_owned();
    let attachment = state.pending_attachment().cloned();

    if text.is_empty() && attachment.is_none() {
        return SendOutcome::Skipped;
    }

    if let Some(in_flight) = state.in_flight() {
        tracing::debug!(
            code = SEND_REJECTED_BUSY,
            in_flight,
            "send ignored while a reply is pending"
        );
        return SendOutcome::Busy;
    }

    if !text.is_empty() {
        state
            .transcript_mut()
            .append(Message::user(text.clone(), timestamp_ms));
    }

    if let Some(attachment) = &attachment {
        state
            .transcript_mut()
            .append(Message::user(attachment.transcript_note(), timestamp_ms));
    }

    state.composer_mut().clear();

    let request = AgentRequest {
        message: text,
        session_id: state
            .established_session()
            .map(|session| session.as_str().to_owned()),
        attachment,
    };
    let request_id = state.begin_request();
    transport.submit(request_id, request);

    SendOutcome::Dispatched { request_id }
}

/// Appends the outcome of `request_id` and resets the attachment.
///
/// A success also replaces the session identifier; errors leave it alone.
pub fn apply_reply(
    state: &mut WidgetState,
    request_id: u64,
    reply: AgentReply,
    timestamp_ms: i64,
) -> ReplyDisposition {
    if !state.finish_request(request_id) {
        tracing::warn!(
            code = STALE_REPLY_DISCARDED,
            request_id,
            in_flight = ?state.in_flight(),
            "discarding reply for a request that is not in flight"
        );
        return ReplyDisposition::Stale;
    }

    let text = reply.transcript_text();
    if let AgentReply::Success { session_id, .. } = reply {
        state.adopt_session(session_id);
    }

    state
        .transcript_mut()
        .append(Message::assistant(text, timestamp_ms));
    attach::reset_attachment(state);

    ReplyDisposition::Applied
}
