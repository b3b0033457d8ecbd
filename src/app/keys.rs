use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::Picker;

/// What a key press did to the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep going.
    Continue,
    /// The operator confirmed these item indices.
    Confirmed(Vec<usize>),
    /// The operator backed out.
    Cancelled,
}

pub fn handle_key(picker: &mut Picker, key: KeyEvent) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return KeyOutcome::Cancelled,
        KeyCode::Char('c' | 'd') if ctrl => return KeyOutcome::Cancelled,
        KeyCode::Enter => {
            if let Some(indices) = picker.confirm() {
                return KeyOutcome::Confirmed(indices);
            }
        }
        KeyCode::Up => picker.move_up(),
        KeyCode::Char('p' | 'k') if ctrl => picker.move_up(),
        KeyCode::Down => picker.move_down(),
        KeyCode::Char('n' | 'j') if ctrl => picker.move_down(),
        KeyCode::Tab => picker.toggle_mark(),
        KeyCode::Backspace => picker.pop_char(),
        KeyCode::Char('u') if ctrl => picker.clear_query(),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            picker.push_char(c)
        }
        _ => {}
    }

    KeyOutcome::Continue
}
