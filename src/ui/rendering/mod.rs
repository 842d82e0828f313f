mod board;
mod controls;
mod logs;
mod moves;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(f.area());

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // status + message
                Constraint::Length(7), // board
                Constraint::Min(6),    // controls
            ])
            .split(main_layout[0]);

        let right_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),    // move list
                Constraint::Length(8), // logs panel
            ])
            .split(main_layout[1]);

        self.draw_status(f, left_layout[0]);
        self.draw_board(f, left_layout[1]);
        self.draw_controls(f, left_layout[2]);
        self.draw_moves(f, right_layout[0]);
        self.draw_logs(f, right_layout[1]);
    }
}
