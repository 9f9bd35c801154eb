use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Apply a free-text edit to a copy of `current`.
pub(crate) fn handle_text_edit(current: &str, key: &KeyEvent, multiline: bool) -> Option<String> {
    let mut buffer = current.to_string();
    match key.code {
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return None;
            }
            buffer.push(ch);
        }
        KeyCode::Enter if multiline => buffer.push('\n'),
        KeyCode::Backspace => {
            buffer.pop();
        }
        KeyCode::Delete => buffer.clear(),
        _ => return None,
    }
    Some(buffer)
}
