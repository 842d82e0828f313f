//! Move list navigation and time travel.

use super::super::{app::App, types::SortOrder};

/// Helper struct for moving through the move list and jumping between positions.
pub struct HistoryHandler<'a> {
    app: &'a mut App,
}

impl<'a> HistoryHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Flip between ascending and descending display order.
    pub fn toggle_sort(&mut self) {
        self.app.sort_order = self.app.sort_order.toggled();
        self.app.log(format!("Move list sorted {}", self.app.sort_order.label()));
    }

    /// Move the selection one row up in the displayed list.
    pub fn select_up(&mut self) {
        match self.app.sort_order {
            SortOrder::Ascending => self.select_earlier(),
            SortOrder::Descending => self.select_later(),
        }
    }

    /// Move the selection one row down in the displayed list.
    pub fn select_down(&mut self) {
        match self.app.sort_order {
            SortOrder::Ascending => self.select_later(),
            SortOrder::Descending => self.select_earlier(),
        }
    }

    fn select_earlier(&mut self) {
        self.app.selected_move = self.app.selected_move.saturating_sub(1);
    }

    fn select_later(&mut self) {
        self.app.selected_move = (self.app.selected_move + 1).min(self.app.game.latest_move());
    }

    pub fn jump_to_selected(&mut self) {
        self.jump(self.app.selected_move);
    }

    pub fn jump_to_start(&mut self) {
        self.jump(0);
    }

    pub fn jump_to_latest(&mut self) {
        self.jump(self.app.game.latest_move());
    }

    fn jump(&mut self, index: usize) {
        if index == self.app.game.current_move() {
            return;
        }

        match self.app.game.jump_to(index) {
            Ok(()) => {
                self.app.selected_move = index;
                self.app.message = None;
                self.app.log(format!("Jumped to move #{index}"));
            }
            Err(e) => {
                tracing::warn!("Rejected jump: {e}");
                self.app.message = Some(e.to_string());
            }
        }
    }
}
