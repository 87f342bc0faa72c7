use crossterm::event::{KeyCode, KeyModifiers};
use trem_core::dialog::DialogField;

/// What a key press means to the connection dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogAction {
    FocusNext,
    FocusPrev,
    Activate,
    Input(char),
    Backspace,
    Paste,
    StepPort(i64),
    Accept,
    Cancel,
    Ignore,
}

impl DialogAction {
    pub fn from_key(key: KeyCode, modifiers: KeyModifiers, focus: DialogField) -> Self {
        match (key, modifiers) {
            (KeyCode::Char('v'), KeyModifiers::CONTROL) => DialogAction::Paste,
            (KeyCode::Esc, _) => DialogAction::Cancel,
            (KeyCode::Enter, _) => DialogAction::Accept,
            (KeyCode::Down, _) | (KeyCode::Tab, _) => DialogAction::FocusNext,
            (KeyCode::Up, _) | (KeyCode::BackTab, _) => DialogAction::FocusPrev,
            (KeyCode::Backspace, _) => DialogAction::Backspace,
            (KeyCode::Char(' '), _) if !focus.is_text() => DialogAction::Activate,
            (KeyCode::Char('+'), _) if focus == DialogField::Port => DialogAction::StepPort(1),
            (KeyCode::Char('-'), _) if focus == DialogField::Port => DialogAction::StepPort(-1),
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => DialogAction::Input(c),
            _ => DialogAction::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_toggles_controls_but_types_into_text() {
        assert_eq!(
            DialogAction::from_key(KeyCode::Char(' '), KeyModifiers::NONE, DialogField::Auth),
            DialogAction::Activate
        );
        assert_eq!(
            DialogAction::from_key(KeyCode::Char(' '), KeyModifiers::NONE, DialogField::Password),
            DialogAction::Input(' ')
        );
    }

    #[test]
    fn plus_minus_step_only_the_port() {
        assert_eq!(
            DialogAction::from_key(KeyCode::Char('+'), KeyModifiers::NONE, DialogField::Port),
            DialogAction::StepPort(1)
        );
        assert_eq!(
            DialogAction::from_key(KeyCode::Char('-'), KeyModifiers::NONE, DialogField::Host),
            DialogAction::Input('-')
        );
    }

    #[test]
    fn control_chords() {
        assert_eq!(
            DialogAction::from_key(KeyCode::Char('v'), KeyModifiers::CONTROL, DialogField::Host),
            DialogAction::Paste
        );
        assert_eq!(
            DialogAction::from_key(KeyCode::Char('x'), KeyModifiers::CONTROL, DialogField::Host),
            DialogAction::Ignore
        );
        assert_eq!(
            DialogAction::from_key(KeyCode::Char('A'), KeyModifiers::SHIFT, DialogField::Host),
            DialogAction::Input('A')
        );
    }
}
