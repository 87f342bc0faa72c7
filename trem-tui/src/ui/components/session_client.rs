use std::{io, path::PathBuf, sync::Arc};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use trem_core::{ConnectionSettingsDialog, Prefs, SessionController, SessionTarget};

use super::types::ScreenState;
use crate::ui::{utils::terminal_guard::TerminalGuard, UIHandler, UIRenderer};

pub struct SessionClientUI {
    pub prefs: Prefs,
    pub session: Arc<dyn SessionController>,
    pub config_dir: PathBuf,
    pub current_screen: ScreenState,
    pub dialog: Option<ConnectionSettingsDialog>,
    pub active_target: Option<SessionTarget>,
    pub message: Option<String>,
    pub should_quit: bool,
}

impl SessionClientUI {
    pub fn new(prefs: Prefs, session: Arc<dyn SessionController>, config_dir: PathBuf) -> Self {
        let active_target = match SessionTarget::from_prefs(&prefs, config_dir.clone()) {
            Ok(target) => Some(target),
            Err(e) => {
                log::error!("Error reading session preferences: {}", e);
                None
            }
        };

        Self {
            prefs,
            session,
            config_dir,
            current_screen: ScreenState::SessionOverview,
            dialog: None,
            active_target,
            message: None,
            should_quit: false,
        }
    }

    /// Opens a fresh connection dialog from the stored preferences.
    pub fn open_connection_dialog(&mut self) {
        match ConnectionSettingsDialog::open(&self.prefs) {
            Ok(dialog) => {
                self.dialog = Some(dialog);
                self.current_screen = ScreenState::ConnectionDialog;
            }
            Err(e) => self.show_message(format!("Unable to open connection settings: {}", e)),
        }
    }

    pub fn show_message(&mut self, message: String) {
        log::error!("{}", message);
        self.message = Some(message);
        self.current_screen = ScreenState::MessagePopup;
    }

    pub async fn run_ui(&mut self) -> Result<(), io::Error> {
        let _guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        let result = self.ui_loop(&mut terminal).await;

        terminal.clear()?;
        terminal.show_cursor()?;

        result
    }

    async fn ui_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        while !self.should_quit {
            match self.current_screen {
                ScreenState::SessionOverview => {
                    UIRenderer::render_overview_screen(self, terminal).await?
                }
                ScreenState::ConnectionDialog => {
                    UIRenderer::render_connection_dialog_screen(self, terminal).await?
                }
                ScreenState::MessagePopup => self.render_message_popup(terminal).await?,
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match self.current_screen {
                    ScreenState::SessionOverview => {
                        UIHandler::handle_overview_input(self, key.code).await;
                    }
                    ScreenState::ConnectionDialog => {
                        UIHandler::handle_connection_dialog_input(self, key.code, key.modifiers)
                            .await;
                    }
                    ScreenState::MessagePopup => {
                        UIHandler::handle_message_popup_input(self).await;
                    }
                }
            }
        }
        Ok(())
    }
}
