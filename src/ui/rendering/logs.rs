//! Recent UI log lines, newest at the bottom.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_logs(&self, f: &mut Frame, area: Rect) {
        let logs = self.logs.lines();

        // Inside the borders
        let visible = area.height.saturating_sub(2) as usize;
        let start = logs.len().saturating_sub(visible);

        let lines: Vec<Line> = logs[start..].iter().map(|l| Line::from(l.as_str())).collect();

        f.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).title("Log")),
            area,
        );
    }
}
