use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

pub enum AppEvent {
    Key(KeyEvent),
    Resize,
}

/// Blocking reader over terminal events. Each call waits for the next event the
/// app cares about; nothing runs between key presses.
pub struct EventReader;

impl EventReader {
    pub fn new() -> Self {
        Self
    }

    pub fn next(&self) -> Result<AppEvent> {
        loop {
            match event::read()? {
                // Only Press: Release/Repeat arrive when keyboard enhancement is on
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(AppEvent::Key(key));
                }
                Event::Resize(_, _) => return Ok(AppEvent::Resize),
                _ => {}
            }
        }
    }
}

impl Default for EventReader {
    fn default() -> Self {
        Self::new()
    }
}
