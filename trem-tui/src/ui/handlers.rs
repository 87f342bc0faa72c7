use std::sync::Arc;

use arboard::Clipboard;
use crossterm::event::{KeyCode, KeyModifiers};
use trem_core::{dialog::DialogField, SessionTarget};

use super::{
    components::{dialog_input::DialogAction, types::ScreenState},
    SessionClientUI, UIHandler,
};

impl UIHandler for SessionClientUI {
    async fn handle_message_popup_input(&mut self) {
        self.message = None;
        self.current_screen = if self.dialog.as_ref().is_some_and(|d| d.is_open()) {
            ScreenState::ConnectionDialog
        } else {
            ScreenState::SessionOverview
        };
    }

    async fn handle_overview_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('s') | KeyCode::Enter => self.open_connection_dialog(),
            KeyCode::Char('q') | KeyCode::Esc => {
                log::info!("Quit requested");
                if let Err(message) = self.save_prefs() {
                    log::error!("{}", message);
                }
                self.should_quit = true;
            }
            _ => {}
        }
    }

    async fn handle_connection_dialog_input(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        let Some(dialog) = self.dialog.as_mut() else {
            self.current_screen = ScreenState::SessionOverview;
            return;
        };
        let focus = dialog.focus();

        match DialogAction::from_key(key, modifiers, focus) {
            DialogAction::FocusNext => dialog.focus_next(),
            DialogAction::FocusPrev => dialog.focus_prev(),
            DialogAction::Activate => {
                match focus {
                    DialogField::LocalSession => dialog.select_local(),
                    DialogField::RemoteSession => dialog.select_remote(),
                    DialogField::Auth => dialog.toggle_auth(),
                    _ => false,
                };
            }
            DialogAction::Input(c) => {
                if focus == DialogField::Port {
                    if let Some(digit) = c.to_digit(10) {
                        dialog.push_port_digit(digit);
                    }
                } else {
                    dialog.push_char(focus, c);
                }
            }
            DialogAction::Backspace => {
                if focus == DialogField::Port {
                    dialog.pop_port_digit();
                } else {
                    dialog.pop_char(focus);
                }
            }
            DialogAction::StepPort(delta) => {
                dialog.step_port(delta);
            }
            DialogAction::Paste => {
                if focus.is_text() {
                    match Clipboard::new().and_then(|mut ctx| ctx.get_text()) {
                        Ok(text) => {
                            let line = text.lines().next().unwrap_or("");
                            dialog.insert_str(focus, line);
                        }
                        Err(e) => log::error!("Error pasting from clipboard: {}", e),
                    }
                }
            }
            DialogAction::Accept => self.accept_connection_dialog().await,
            DialogAction::Cancel => {
                dialog.cancel();
                self.dialog = None;
                self.current_screen = ScreenState::SessionOverview;
            }
            DialogAction::Ignore => {}
        }
    }
}

impl SessionClientUI {
    async fn accept_connection_dialog(&mut self) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };

        let session = Arc::clone(&self.session);
        let result = dialog.accept(&mut self.prefs, session.as_ref()).await;
        self.dialog = None;
        self.current_screen = ScreenState::SessionOverview;

        // Values are committed even when the restart fails.
        let saved = self.save_prefs();

        if let Err(e) = result {
            if let Err(message) = &saved {
                log::error!("{}", message);
            }
            self.show_message(format!("Error restarting session: {}", e));
            return;
        }

        match SessionTarget::from_prefs(&self.prefs, self.config_dir.clone()) {
            Ok(target) => self.active_target = Some(target),
            Err(e) => log::error!("Error reading session preferences: {}", e),
        }

        if let Err(message) = saved {
            self.show_message(message);
        }
    }

    /// Writes a changed store to its backing file, if it has one.
    pub fn save_prefs(&mut self) -> Result<(), String> {
        if !self.prefs.is_dirty() || self.prefs.path().is_none() {
            return Ok(());
        }
        self.prefs
            .save()
            .map_err(|e| format!("Error saving preferences: {}", e))
    }
}
