// Terminal events, reduced to what the selector understands.
// crossterm types stop here; everything past this module sees `Key`.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Size;

/// Key classification consumed by components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Confirm,
    Cancel,
    Backspace,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Key(Key),
    Resize(Size),
    Focus(bool),
}

pub fn poll_event(timeout: Duration) -> Result<Option<HostEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate_event(event::read()?))
}

fn translate_event(event: Event) -> Option<HostEvent> {
    match event {
        Event::Key(key) => Some(HostEvent::Key(translate_key(key))),
        Event::Resize(width, height) => Some(HostEvent::Resize(Size::new(width, height))),
        Event::FocusGained => Some(HostEvent::Focus(true)),
        Event::FocusLost => Some(HostEvent::Focus(false)),
        _ => None,
    }
}

pub fn translate_key(key: KeyEvent) -> Key {
    if key.kind == KeyEventKind::Release {
        return Key::Other;
    }
    match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Confirm,
        KeyCode::Esc => Key::Cancel,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Cancel,
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Key::Other,
        KeyCode::Char(c) if !c.is_control() => Key::Char(c),
        _ => Key::Other,
    }
}
