mod fields;
pub use fields::{DialogField, Sensitivity, AUTH_FIELDS, REMOTE_FIELDS};

use crate::{
    errors::{PrefsError, SessionError},
    models::settings::ConnectionSettings,
    prefs::Prefs,
    session::SessionController,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Open,
    Accepted,
    Cancelled,
}

/// Modal editor for the session connection settings.
///
/// Edits stay local to the dialog until `accept`, which copies them into the
/// preference store in one batch and restarts the session. `cancel` drops
/// them. Edits aimed at a disabled field are ignored and return `false`.
#[derive(Debug, Clone)]
pub struct ConnectionSettingsDialog {
    settings: ConnectionSettings,
    sensitivity: Sensitivity,
    focus: DialogField,
    state: DialogState,
}

impl ConnectionSettingsDialog {
    pub fn open(prefs: &Prefs) -> Result<Self, PrefsError> {
        let settings = ConnectionSettings::from_prefs(prefs)?;
        let focus = if settings.is_remote {
            DialogField::RemoteSession
        } else {
            DialogField::LocalSession
        };

        let mut dialog = Self {
            settings,
            sensitivity: Sensitivity::compute(false, false),
            focus,
            state: DialogState::Open,
        };
        dialog.resensitize();
        Ok(dialog)
    }

    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    pub fn is_enabled(&self, field: DialogField) -> bool {
        self.sensitivity.is_enabled(field)
    }

    pub fn focus(&self) -> DialogField {
        self.focus
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// Recomputes which field groups accept input from the two toggles.
    pub fn resensitize(&mut self) {
        self.sensitivity = Sensitivity::compute(self.settings.is_remote, self.settings.use_auth);
        if !self.sensitivity.is_enabled(self.focus) {
            self.focus = DialogField::RemoteSession;
        }
    }

    fn editable(&self, field: DialogField) -> bool {
        self.is_open() && self.sensitivity.is_enabled(field)
    }

    pub fn select_local(&mut self) -> bool {
        self.set_remote(false)
    }

    pub fn select_remote(&mut self) -> bool {
        self.set_remote(true)
    }

    fn set_remote(&mut self, is_remote: bool) -> bool {
        if !self.is_open() {
            return false;
        }
        self.settings.is_remote = is_remote;
        self.resensitize();
        true
    }

    pub fn set_auth(&mut self, use_auth: bool) -> bool {
        if !self.editable(DialogField::Auth) {
            return false;
        }
        self.settings.use_auth = use_auth;
        self.resensitize();
        true
    }

    pub fn toggle_auth(&mut self) -> bool {
        self.set_auth(!self.settings.use_auth)
    }

    fn text_mut(&mut self, field: DialogField) -> Option<&mut String> {
        if !self.editable(field) {
            return None;
        }
        match field {
            DialogField::Host => Some(&mut self.settings.remote_host),
            DialogField::Username => Some(&mut self.settings.username),
            DialogField::Password => Some(&mut self.settings.password),
            _ => None,
        }
    }

    pub fn set_text(&mut self, field: DialogField, text: &str) -> bool {
        match self.text_mut(field) {
            Some(value) => {
                *value = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn insert_str(&mut self, field: DialogField, text: &str) -> bool {
        match self.text_mut(field) {
            Some(value) => {
                value.push_str(text);
                true
            }
            None => false,
        }
    }

    pub fn push_char(&mut self, field: DialogField, c: char) -> bool {
        match self.text_mut(field) {
            Some(value) => {
                value.push(c);
                true
            }
            None => false,
        }
    }

    pub fn pop_char(&mut self, field: DialogField) -> bool {
        match self.text_mut(field) {
            Some(value) => {
                value.pop();
                true
            }
            None => false,
        }
    }

    pub fn set_port(&mut self, port: i64) -> bool {
        if !self.editable(DialogField::Port) {
            return false;
        }
        self.settings.remote_port = port;
        true
    }

    pub fn push_port_digit(&mut self, digit: u32) -> bool {
        if digit > 9 {
            return false;
        }
        let port = self.settings.remote_port;
        let digit = i64::from(digit);
        let shifted = port.checked_mul(10);
        let next = if port < 0 {
            shifted.and_then(|p| p.checked_sub(digit))
        } else {
            shifted.and_then(|p| p.checked_add(digit))
        };
        match next {
            Some(port) => self.set_port(port),
            None => false,
        }
    }

    pub fn pop_port_digit(&mut self) -> bool {
        self.set_port(self.settings.remote_port / 10)
    }

    pub fn step_port(&mut self, delta: i64) -> bool {
        self.set_port(self.settings.remote_port.saturating_add(delta))
    }

    pub fn set_focus(&mut self, field: DialogField) -> bool {
        if !self.editable(field) {
            return false;
        }
        self.focus = field;
        true
    }

    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.cycle_focus(DialogField::ALL.len() - 1);
    }

    fn cycle_focus(&mut self, step: usize) {
        if !self.is_open() {
            return;
        }
        let count = DialogField::ALL.len();
        let mut index = DialogField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        for _ in 0..count {
            index = (index + step) % count;
            let candidate = DialogField::ALL[index];
            if self.sensitivity.is_enabled(candidate) {
                self.focus = candidate;
                return;
            }
        }
    }

    /// Commits all six values to `prefs`, restarts `session` once and closes
    /// the dialog. The store keeps the new values even if the restart fails.
    pub async fn accept(
        &mut self,
        prefs: &mut Prefs,
        session: &dyn SessionController,
    ) -> Result<(), SessionError> {
        if !self.is_open() {
            return Err(SessionError::DialogClosed);
        }

        self.settings.write_to(prefs)?;
        self.state = DialogState::Accepted;
        log::info!("Connection settings accepted, restarting session");

        session.restart(prefs).await.map_err(|e| {
            log::error!("Error restarting session: {}", e);
            e
        })
    }

    pub fn cancel(&mut self) {
        if self.is_open() {
            log::debug!("Connection settings dialog cancelled");
            self.state = DialogState::Cancelled;
        }
    }
}
