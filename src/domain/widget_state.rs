use super::{
    attachment::PendingAttachment,
    screen::{NameFocus, Screen},
    session::SessionId,
    text_input::TextInputState,
    transcript::Transcript,
};

/// All state owned by one chat widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    running: bool,
    screen: Screen,
    name_input: TextInputState,
    name_focus: NameFocus,
    user_name: Option<String>,
    session_id: SessionId,
    pending_attachment: Option<PendingAttachment>,
    /// Path prompt standing in for the file picker; `Some` while open.
    file_prompt: Option<TextInputState>,
    composer: TextInputState,
    transcript: Transcript,
    alert: Option<String>,
    in_flight: Option<u64>,
    next_request_id: u64,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            running: true,
            screen: Screen::Landing,
            name_input: TextInputState::default(),
            name_focus: NameFocus::Unfocused,
            user_name: None,
            session_id: SessionId::default(),
            pending_attachment: None,
            file_prompt: None,
            composer: TextInputState::default(),
            transcript: Transcript::default(),
            alert: None,
            in_flight: None,
            next_request_id: 1,
        }
    }
}

impl WidgetState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn name_input(&self) -> &TextInputState {
        &self.name_input
    }

    pub fn name_focus(&self) -> NameFocus {
        self.name_focus
    }

    pub fn name_focus_mut(&mut self) -> &mut NameFocus {
        &mut self.name_focus
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Stores the display name. The first accepted name is kept.
    pub fn set_user_name(&mut self, name: String) {
        if self.user_name.is_none() {
            self.user_name = Some(name);
        }
    }

    /// Session to attach to outgoing requests, once one exists.
    pub fn established_session(&self) -> Option<&SessionId> {
        Some(&self.session_id).filter(|session| session.is_established())
    }

    pub fn adopt_session(&mut self, session_id: SessionId) {
        self.session_id = session_id;
    }

    pub fn pending_attachment(&self) -> Option<&PendingAttachment> {
        self.pending_attachment.as_ref()
    }

    pub fn set_pending_attachment(&mut self, attachment: PendingAttachment) {
        self.pending_attachment = Some(attachment);
    }

    pub fn clear_pending_attachment(&mut self) {
        self.pending_attachment = None;
    }

    pub fn file_prompt(&self) -> Option<&TextInputState> {
        self.file_prompt.as_ref()
    }

    pub fn open_file_prompt(&mut self) {
        self.file_prompt = Some(TextInputState::default());
    }

    /// Closes the prompt and hands back whatever was typed.
    pub fn close_file_prompt(&mut self) -> Option<String> {
        self.file_prompt.take().map(|mut prompt| prompt.take())
    }

    pub fn composer(&self) -> &TextInputState {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut TextInputState {
        &mut self.composer
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn raise_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Allocates a request id and marks it as the single in-flight request.
    pub fn begin_request(&mut self) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(request_id);
        request_id
    }

    /// Clears the in-flight marker if `request_id` matches it.
    pub fn finish_request(&mut self, request_id: u64) -> bool {
        if self.in_flight == Some(request_id) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// The text field that receives typed characters on the current screen.
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInputState> {
        match self.screen {
            Screen::Landing => None,
            Screen::NameEntry => Some(&mut self.name_input),
            Screen::Chat => Some(self.file_prompt.as_mut().unwrap_or(&mut self.composer)),
        }
    }
}
