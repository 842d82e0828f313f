//! Tic-tac-toe with a time-travelling move list.
//!
//! - [`board`] — marks, cells, snapshots and the pure win/status queries
//! - [`game`] — snapshot history, move legality and time travel
//! - [`ui`] — terminal front end
//! - [`args`] / [`logging`] — command line and tracing setup

pub mod args;
pub mod board;
pub mod game;
pub mod logging;
pub mod ui;
