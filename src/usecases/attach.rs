//! Attachment selection through the path prompt.

use crate::domain::{attachment::PendingAttachment, screen::Screen, widget_state::WidgetState};

pub fn open_file_prompt(state: &mut WidgetState) {
    if state.screen() == Screen::Chat {
        state.open_file_prompt();
    }
}

pub fn cancel_file_prompt(state: &mut WidgetState) {
    state.close_file_prompt();
}

/// Confirms the prompt. A blank path is treated as a cancelled picker.
///
/// Any non-blank path is accepted and replaces a previously pending file;
/// readability is only checked when the file is sent.
pub fn confirm_file_prompt(state: &mut WidgetState) -> Option<&PendingAttachment> {
    let raw = state.close_file_prompt()?;
    select_file(state, &raw)
}

pub fn select_file<'a>(state: &'a mut WidgetState, raw_path: &str) -> Option<&'a PendingAttachment> {
    let path = raw_path.trim();
    if path.is_empty() {
        return None;
    }

    let attachment = PendingAttachment::new(path);
    tracing::debug!(file_name = %attachment.file_name(), "attachment selected");
    state.set_pending_attachment(attachment);
    state.pending_attachment()
}

/// Drops the pending file, resets the prompt and hides the badge.
pub fn reset_attachment(state: &mut WidgetState) {
    state.clear_pending_attachment();
    state.close_file_prompt();
}
