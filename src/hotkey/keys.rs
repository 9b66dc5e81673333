use crossterm::event::KeyCode;

/// Canonical textual name for a key, as stored in the key half of a hotkey.
///
/// Returns `None` for keys that cannot be bound on their own (bare modifier
/// presses, lock keys, media keys).
pub fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) if c.is_control() => return None,
        KeyCode::Char(c) => c.to_lowercase().collect(),
        KeyCode::F(n) => format!("f{n}"),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::Delete => "delete".to_string(),
        _ => return None,
    };
    Some(name)
}
