pub mod action;
pub mod app;
pub mod components;
pub mod events;
pub mod terminal_guard;
pub mod view_state;

pub use action::Action;
pub use app::{App, StatusMessage};
pub use events::InputMode;
pub use terminal_guard::{install_panic_hook, TerminalGuard};
pub use view_state::DirectoryView;
