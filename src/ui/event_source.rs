use std::{
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Merges terminal input with agent replies arriving from the transport.
pub struct CrosstermEventSource {
    replies: Receiver<AppEvent>,
    replies_closed: bool,
}

impl CrosstermEventSource {
    pub fn new(replies: Receiver<AppEvent>) -> Self {
        Self {
            replies,
            replies_closed: false,
        }
    }

    fn next_reply(&mut self) -> Option<AppEvent> {
        if self.replies_closed {
            return None;
        }

        match self.replies.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                tracing::warn!("agent reply channel closed");
                self.replies_closed = true;
                None
            }
        }
    }
}

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if let Some(reply) = self.next_reply() {
            return Ok(Some(reply));
        }

        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key_event(key)),
            _ => Ok(None),
        }
    }
}

fn map_key_event(key: KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(AppEvent::QuitRequested);
    }

    let name = match key.code {
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Enter => "enter".to_owned(),
        KeyCode::Esc => "esc".to_owned(),
        KeyCode::Backspace => "backspace".to_owned(),
        KeyCode::Delete => "delete".to_owned(),
        KeyCode::Left => "left".to_owned(),
        KeyCode::Right => "right".to_owned(),
        KeyCode::Home => "home".to_owned(),
        KeyCode::End => "end".to_owned(),
        KeyCode::PageUp => "pageup".to_owned(),
        KeyCode::PageDown => "pagedown".to_owned(),
        _ => return None,
    };

    Some(AppEvent::InputKey(KeyInput::new(name, ctrl)))
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::domain::reply::AgentReply;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Option<AppEvent> {
        map_key_event(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn ctrl_c_requests_quit() {
        assert_eq!(
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(AppEvent::QuitRequested)
        );
    }

    #[test]
    fn plain_q_is_an_ordinary_key() {
        assert_eq!(
            press(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(AppEvent::InputKey(KeyInput::new("q", false)))
        );
    }

    #[test]
    fn named_keys_and_ctrl_chords_are_normalized() {
        assert_eq!(
            press(KeyCode::Enter, KeyModifiers::NONE),
            Some(AppEvent::InputKey(KeyInput::new("enter", false)))
        );
        assert_eq!(
            press(KeyCode::Char('s'), KeyModifiers::CONTROL),
            Some(AppEvent::InputKey(KeyInput::new("s", true)))
        );
        assert_eq!(
            press(KeyCode::PageUp, KeyModifiers::NONE),
            Some(AppEvent::InputKey(KeyInput::new("pageup", false)))
        );
    }

    #[test]
    fn unsupported_keys_are_dropped() {
        assert_eq!(press(KeyCode::F(5), KeyModifiers::NONE), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;

        assert_eq!(map_key_event(key), None);
    }

    #[test]
    fn pending_reply_is_delivered_before_terminal_input() {
        let (tx, rx) = mpsc::channel();
        let reply = AppEvent::AgentReplied {
            request_id: 1,
            reply: AgentReply::ServerError("bad request".to_owned()),
        };
        tx.send(reply.clone()).expect("channel open");
        let mut source = CrosstermEventSource::new(rx);

        assert_eq!(source.next_reply(), Some(reply));
        assert_eq!(source.next_reply(), None);
    }

    #[test]
    fn closed_reply_channel_is_remembered() {
        let (tx, rx) = mpsc::channel::<AppEvent>();
        drop(tx);
        let mut source = CrosstermEventSource::new(rx);

        assert_eq!(source.next_reply(), None);
        assert!(source.replies_closed);
    }

    #[test]
    fn mock_source_replays_queue() {
        let mut source = MockEventSource::from(vec![AppEvent::Tick, AppEvent::QuitRequested]);

        assert_eq!(source.next_event().expect("event"), Some(AppEvent::Tick));
        assert_eq!(
            source.next_event().expect("event"),
            Some(AppEvent::QuitRequested)
        );
        assert_eq!(source.next_event().expect("event"), None);
    }
}
