mod handlers;
mod screens;
mod components;
mod utils;

use std::io;

pub use components::session_client::SessionClientUI;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{prelude::CrosstermBackend, Terminal};

pub trait UIHandler {
    async fn handle_message_popup_input(&mut self);
    async fn handle_overview_input(&mut self, key: KeyCode);
    async fn handle_connection_dialog_input(&mut self, key: KeyCode, modifiers: KeyModifiers);
}

pub trait UIRenderer {
    async fn render_message_popup(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()>;
    async fn render_overview_screen(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()>;
    async fn render_connection_dialog_screen(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()>;
}
