use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{board::Status, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let status = self.game.status();

        let color = match status {
            Status::Winner(_) => Color::Green,
            Status::Draw => Color::Yellow,
            Status::NextPlayer(_) => Color::White,
        };

        let mut lines = vec![Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))];

        if let Some(ref message) = self.message {
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Yellow),
            )));
        }

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }
}
