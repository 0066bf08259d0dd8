pub mod command;
pub mod drag;
pub mod keys;
pub mod layout;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use command::{command_to_app_event, parse_command, Command};
pub use layout::{BoardLayout, Hit};
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
