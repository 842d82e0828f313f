use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_controls(&self, f: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from("Arrows/hjkl: Move  |  1-9: Play cell"),
            Line::from("Enter: Play / Jump  |  Tab: Switch panel"),
            Line::from("Home/End: First/Last move"),
            Line::from("s: Sort moves  |  q/Esc: Quit"),
        ];

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Controls")),
            area,
        );
    }
}
