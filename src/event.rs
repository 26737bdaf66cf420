//! Event system - keyboard, mouse, and terminal events

/// Keyboard key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Alt(char),
    Up,
    Down,
    Left,
    Right,
    BackTab,
    Backspace,
    Enter,
    Tab,
    Esc,
    Null,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Mouse event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
    Press(MouseButton, u16, u16), // button, col, row
    Release(u16, u16),            // col, row
    Moved(u16, u16),              // col, row
    ScrollUp(u16, u16),
    ScrollDown(u16, u16),
}

/// UI events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(Key),
    Mouse(MouseEvent),
    /// Terminal resized (new cols, new rows)
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Paste(String),
}

impl Event {
    /// Left click / tap at a cell
    pub fn tap(col: u16, row: u16) -> Self {
        Event::Mouse(MouseEvent::Press(MouseButton::Left, col, row))
    }
}

/// Event handler trait for components
pub trait EventHandler {
    /// Handle an event, return true if consumed (stops propagation)
    fn handle_event(&mut self, _event: &Event) -> bool {
        false
    }

    /// Called when component gains focus
    fn on_focus(&mut self) {}

    /// Called when component loses focus
    fn on_blur(&mut self) {}
}

#[cfg(feature = "tui")]
pub use poller::EventPoller;

#[cfg(feature = "tui")]
mod poller {
    use super::{Event, Key, MouseButton, MouseEvent};
    use anyhow::Result;
    use std::time::Duration;

    /// Raw-mode terminal input, converted from crossterm events
    pub struct EventPoller {
        _enabled: bool,
    }

    impl EventPoller {
        /// Enable raw mode and mouse capture
        pub fn new() -> Result<Self> {
            crossterm::terminal::enable_raw_mode()?;

            // Mouse capture is best effort
            if let Err(err) = crossterm::execute!(
                std::io::stdout(),
                crossterm::event::EnableMouseCapture,
                crossterm::event::EnableFocusChange,
            ) {
                log::warn!("mouse capture unavailable: {}", err);
            }

            Ok(EventPoller { _enabled: true })
        }

        /// Poll for next event with timeout
        pub fn poll(&self, timeout: Duration) -> Result<Option<Event>> {
            if crossterm::event::poll(timeout)? {
                Ok(convert_crossterm_event(crossterm::event::read()?))
            } else {
                Ok(None)
            }
        }

        /// Block until the next event we understand arrives
        pub fn read(&self) -> Result<Event> {
            loop {
                if let Some(event) = convert_crossterm_event(crossterm::event::read()?) {
                    return Ok(event);
                }
            }
        }
    }

    impl Drop for EventPoller {
        fn drop(&mut self) {
            let _ = crossterm::execute!(
                std::io::stdout(),
                crossterm::event::DisableMouseCapture,
                crossterm::event::DisableFocusChange,
            );
            let _ = crossterm::terminal::disable_raw_mode();
        }
    }

    /// Convert a crossterm event; key releases and repeats are dropped
    fn convert_crossterm_event(event: crossterm::event::Event) -> Option<Event> {
        use crossterm::event::{Event as CEvent, KeyEventKind, MouseEventKind};

        let event = match event {
            CEvent::Key(key) if key.kind == KeyEventKind::Press => {
                Event::Key(convert_key(key.code, key.modifiers))
            }
            CEvent::Key(_) => return None,
            CEvent::Mouse(me) => {
                let (col, row) = (me.column, me.row);
                let mouse_event = match me.kind {
                    MouseEventKind::Down(btn) => {
                        let button = match btn {
                            crossterm::event::MouseButton::Left => MouseButton::Left,
                            crossterm::event::MouseButton::Right => MouseButton::Right,
                            crossterm::event::MouseButton::Middle => MouseButton::Middle,
                        };
                        MouseEvent::Press(button, col, row)
                    }
                    MouseEventKind::Up(_) => MouseEvent::Release(col, row),
                    MouseEventKind::Drag(_) | MouseEventKind::Moved => MouseEvent::Moved(col, row),
                    MouseEventKind::ScrollUp => MouseEvent::ScrollUp(col, row),
                    MouseEventKind::ScrollDown => MouseEvent::ScrollDown(col, row),
                    _ => return None,
                };
                Event::Mouse(mouse_event)
            }
            CEvent::Resize(cols, rows) => Event::Resize(cols, rows),
            CEvent::FocusGained => Event::FocusGained,
            CEvent::FocusLost => Event::FocusLost,
            CEvent::Paste(data) => Event::Paste(data),
        };
        Some(event)
    }

    fn convert_key(code: crossterm::event::KeyCode, mods: crossterm::event::KeyModifiers) -> Key {
        use crossterm::event::{KeyCode, KeyModifiers};

        if let KeyCode::Char(c) = code {
            if mods.contains(KeyModifiers::CONTROL) {
                return Key::Ctrl(c);
            }
            if mods.contains(KeyModifiers::ALT) {
                return Key::Alt(c);
            }
        }

        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Esc,
            _ => Key::Null,
        }
    }

}
