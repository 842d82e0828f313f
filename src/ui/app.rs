use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::game::Game;

use super::types::{Focus, LogBuffer, SortOrder};

/// Main application state container.
pub struct App {
    pub(in crate::ui) game: Game,
    pub(in crate::ui) cursor: usize,
    pub(in crate::ui) selected_move: usize,
    pub(in crate::ui) focus: Focus,
    pub(in crate::ui) sort_order: SortOrder,
    pub(in crate::ui) message: Option<String>,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(game: Game, sort_order: SortOrder, logs: LogBuffer) -> Self {
        let selected_move = game.current_move();

        Self {
            game,
            cursor: 4, // centre cell
            selected_move,
            focus: Focus::Board,
            sort_order,
            message: None,
            logs,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log(format!("Game ready at move #{}", self.game.current_move()));

        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && super::handlers::InputHandler::new(self).handle_key(key)
            {
                info!("UI stopped");
                return Ok(());
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
