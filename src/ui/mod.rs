pub mod action;
pub mod app;
pub mod board;
pub mod components;
pub mod effect;
pub mod events;
pub mod terminal_guard;

pub use action::Action;
pub use app::App;
pub use board::{Board, BoardView};
pub use effect::Effect;
pub use events::{AppEvent, InputMode};
