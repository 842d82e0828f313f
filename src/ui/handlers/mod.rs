//! Handler modules for keyboard input, board play and move-list navigation.

mod board_handler;
mod history_handler;
mod input_handler;

pub use board_handler::BoardHandler;
pub use history_handler::HistoryHandler;
pub use input_handler::InputHandler;
