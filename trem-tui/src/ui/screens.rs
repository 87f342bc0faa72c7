use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use trem_core::{dialog::DialogField, ConnectionSettingsDialog};

use super::{SessionClientUI, UIRenderer};

impl UIRenderer for SessionClientUI {
    async fn render_message_popup(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let message = self.message.clone().unwrap_or_default();

        terminal.draw(|f| {
            let chunks = screen_chunks(f.area());
            let popup_area = centered_rect(50, chunks[1]);

            let block = Block::default()
                .title("Error")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Red))
                .title_alignment(Alignment::Center);

            let paragraph = Paragraph::new(message)
                .block(block)
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });

            f.render_widget(Clear, popup_area);
            f.render_widget(paragraph, popup_area);

            let help_message = vec![Line::from(vec![Span::styled(
                "Press any key to return.",
                Style::default().fg(Color::White),
            )])];

            let help_paragraph = Paragraph::new(help_message)
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });

            f.render_widget(help_paragraph, chunks[2]);
        })?;

        Ok(())
    }

    async fn render_overview_screen(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut content = Vec::new();
        match &self.active_target {
            Some(target) => {
                content.push(Line::from(vec![
                    Span::styled("Session: ", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(target.to_string()),
                ]));
                if let Some(url) = target.rpc_url() {
                    content.push(Line::from(vec![
                        Span::styled("RPC: ", Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(url),
                    ]));
                }
            }
            None => content.push(Line::from("No active session")),
        }

        terminal.draw(|f| {
            let chunks = screen_chunks(f.area());
            let area = centered_rect(50, chunks[1]);

            let block = Block::default()
                .title("trem")
                .borders(Borders::ALL)
                .title_alignment(Alignment::Center);

            let paragraph = Paragraph::new(content)
                .block(block)
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Left)
                .wrap(Wrap { trim: true });

            f.render_widget(paragraph, area);

            let help_message = vec![Line::from(vec![
                Span::styled(
                    "s",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to change session, "),
                Span::styled(
                    "q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to quit"),
            ])];

            let help_paragraph = Paragraph::new(help_message)
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });

            f.render_widget(help_paragraph, chunks[2]);
        })?;

        Ok(())
    }

    async fn render_connection_dialog_screen(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let Some(dialog) = &self.dialog else {
            return Ok(());
        };
        let content: Vec<Line> = DialogField::ALL
            .iter()
            .map(|field| dialog_line(dialog, *field))
            .collect();

        terminal.draw(|f| {
            let chunks = screen_chunks(f.area());
            let area = centered_rect(50, chunks[1]);

            let block = Block::default()
                .title("Change Session")
                .borders(Borders::ALL)
                .title_alignment(Alignment::Center);

            let paragraph = Paragraph::new(content)
                .block(block)
                .alignment(Alignment::Left);

            f.render_widget(Clear, area);
            f.render_widget(paragraph, area);

            let help_message = vec![Line::from(vec![
                Span::styled(
                    "Up/Down",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to navigate, "),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to toggle, "),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to apply, "),
                Span::styled(
                    "Esc",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to cancel"),
            ])];

            let help_paragraph = Paragraph::new(help_message)
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });

            f.render_widget(help_paragraph, chunks[2]);
        })?;

        Ok(())
    }
}

fn dialog_line(dialog: &ConnectionSettingsDialog, field: DialogField) -> Line<'static> {
    let settings = dialog.settings();
    let mark = |on: bool| if on { "x" } else { " " };

    let text = match field {
        DialogField::LocalSession => format!("({}) {}", mark(!settings.is_remote), field.label()),
        DialogField::RemoteSession => format!("({}) {}", mark(settings.is_remote), field.label()),
        DialogField::Host => format!("    {}: {}", field.label(), settings.remote_host),
        DialogField::Port => format!("    {}: {}", field.label(), settings.remote_port),
        DialogField::Auth => format!("    [{}] {}", mark(settings.use_auth), field.label()),
        DialogField::Username => format!("        {}: {}", field.label(), settings.username),
        DialogField::Password => format!(
            "        {}: {}",
            field.label(),
            "*".repeat(settings.password.chars().count())
        ),
    };

    let style = if !dialog.is_enabled(field) {
        Style::default().fg(Color::DarkGray)
    } else if dialog.focus() == field {
        Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(Span::styled(text, style))
}

fn screen_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(20),
                Constraint::Percentage(10),
            ]
            .as_ref(),
        )
        .split(area)
}

fn centered_rect(percent_x: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    popup_layout[1]
}
