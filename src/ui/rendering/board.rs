//! 3x3 grid with the winning line highlighted.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    board::{BOARD_SIDE, Cell},
    ui::{app::App, types::Focus},
};

impl App {
    pub(in crate::ui) fn draw_board(&self, f: &mut Frame, area: Rect) {
        let board = self.game.current_board();
        let winner = self.game.winner();

        let mut lines = Vec::new();
        for row in 0..BOARD_SIDE {
            if row > 0 {
                lines.push(Line::from(Span::styled(
                    "───┼───┼───",
                    Style::default().fg(Color::DarkGray),
                )));
            }

            let mut spans = Vec::new();
            for col in 0..BOARD_SIDE {
                if col > 0 {
                    spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
                }

                let index = row * BOARD_SIDE + col;
                let (symbol, mut style) = match board.get(index) {
                    Cell::Empty => (" · ", Style::default().fg(Color::DarkGray)),
                    Cell::X => (
                        " X ",
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Cell::O => (
                        " O ",
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
                };

                if winner.is_some_and(|w| w.contains(index)) {
                    style = style.bg(Color::Green).fg(Color::Black);
                }
                if self.focus == Focus::Board && index == self.cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                spans.push(Span::styled(symbol, style));
            }
            lines.push(Line::from(spans));
        }

        let title = format!("Board (move #{})", self.game.current_move());
        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
    }
}
