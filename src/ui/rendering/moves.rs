//! Move list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};

use crate::ui::{app::App, types::Focus};

impl App {
    pub(in crate::ui) fn draw_moves(&self, f: &mut Frame, area: Rect) {
        let entries = self.sort_order.apply(self.game.moves());

        let items: Vec<ListItem> = entries
            .iter()
            .map(|entry| {
                let mut style = if entry.is_current {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                if self.focus == Focus::History && entry.number == self.selected_move {
                    style = style.fg(Color::Cyan).add_modifier(Modifier::REVERSED);
                }

                let marker = if entry.is_current { "▶ " } else { "  " };
                ListItem::new(format!("{marker}{}", entry.description())).style(style)
            })
            .collect();

        let title = format!(
            "Moves ({}) | s: Sort | Tab: {}",
            self.sort_order.label(),
            match self.focus {
                Focus::Board => "Select moves",
                Focus::History => "Back to board",
            }
        );

        f.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
    }
}
