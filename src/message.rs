//! Messages that drive state changes, and the key bindings that produce them.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;

/// A single state change request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Move the selection to a specific row.
    Select(usize),
    /// Add one portion to a row and open its dialog.
    Increment(usize),
    /// Remove one portion from a row, if it has any.
    Decrement(usize),
    IncrementSelected,
    DecrementSelected,
    /// Close the dialog owned by a row.
    DismissDialog(usize),
    ToggleLog,
    Quit,
}

impl Message {
    /// Whether this message may pass while a dialog is open.
    #[must_use]
    pub const fn allowed_while_modal(self) -> bool {
        matches!(self, Self::DismissDialog(_) | Self::Quit)
    }
}

/// A clickable screen region recorded during render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitTarget {
    pub area: Rect,
    pub message: Message,
}

/// Translate a key press into a message.
///
/// `open_dialog` is the row whose dialog is showing, if any. While it is set
/// only the dismiss keys and Ctrl-C do anything.
#[must_use]
pub fn from_key(key: KeyEvent, open_dialog: Option<usize>) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    if let Some(index) = open_dialog {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ' | 'c') => {
                Some(Message::DismissDialog(index))
            }
            _ => None,
        };
    }

    let message = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Message::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => Message::SelectNext,
        KeyCode::Home | KeyCode::Char('g') => Message::SelectFirst,
        KeyCode::End | KeyCode::Char('G') => Message::SelectLast,
        KeyCode::Right | KeyCode::Char('+' | '=' | 'l') => Message::IncrementSelected,
        KeyCode::Left | KeyCode::Delete | KeyCode::Char('-' | 'h') => Message::DecrementSelected,
        KeyCode::Char('L') => Message::ToggleLog,
        KeyCode::Esc | KeyCode::Char('q') => Message::Quit,
        _ => return None,
    };
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(from_key(press(KeyCode::Up), None), Some(Message::SelectPrevious));
        assert_eq!(from_key(press(KeyCode::Char('j')), None), Some(Message::SelectNext));
        assert_eq!(from_key(press(KeyCode::Home), None), Some(Message::SelectFirst));
        assert_eq!(from_key(press(KeyCode::Char('G')), None), Some(Message::SelectLast));
    }

    #[test]
    fn test_counter_keys() {
        assert_eq!(
            from_key(press(KeyCode::Char('+')), None),
            Some(Message::IncrementSelected)
        );
        assert_eq!(
            from_key(press(KeyCode::Char('-')), None),
            Some(Message::DecrementSelected)
        );
        assert_eq!(
            from_key(press(KeyCode::Delete), None),
            Some(Message::DecrementSelected)
        );
    }

    #[test]
    fn test_dialog_swallows_everything_but_dismiss() {
        assert_eq!(from_key(press(KeyCode::Down), Some(2)), None);
        assert_eq!(from_key(press(KeyCode::Char('+')), Some(2)), None);
        assert_eq!(from_key(press(KeyCode::Char('q')), Some(2)), None);
        assert_eq!(
            from_key(press(KeyCode::Enter), Some(2)),
            Some(Message::DismissDialog(2))
        );
        assert_eq!(
            from_key(press(KeyCode::Esc), Some(2)),
            Some(Message::DismissDialog(2))
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(from_key(ctrl_c, None), Some(Message::Quit));
        assert_eq!(from_key(ctrl_c, Some(0)), Some(Message::Quit));
    }

    #[test]
    fn test_esc_quits_without_dialog() {
        assert_eq!(from_key(press(KeyCode::Esc), None), Some(Message::Quit));
    }

    #[test]
    fn test_key_release_ignored() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Char('+'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(from_key(release, None), None);
    }

    #[test]
    fn test_modal_filter() {
        assert!(Message::DismissDialog(0).allowed_while_modal());
        assert!(Message::Quit.allowed_while_modal());
        assert!(!Message::Increment(0).allowed_while_modal());
        assert!(!Message::SelectNext.allowed_while_modal());
    }
}
