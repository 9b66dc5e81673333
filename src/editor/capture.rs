use crossterm::event::{KeyCode, KeyEvent};

use crate::hotkey::keys::key_name;

/// What a single key press means while a hotkey is being captured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaptureOutcome {
    Cancel,
    Clear,
    Captured(String),
    /// No textual form for this key; keep listening.
    Ignored,
}

/// Interpret one key press during capture. Column switching and quitting are
/// handled by the editor before this is consulted.
pub fn interpret(key: KeyEvent) -> CaptureOutcome {
    match key.code {
        KeyCode::Esc => CaptureOutcome::Cancel,
        KeyCode::Backspace => CaptureOutcome::Clear,
        code => match key_name(code) {
            Some(name) => CaptureOutcome::Captured(name),
            None => CaptureOutcome::Ignored,
        },
    }
}
