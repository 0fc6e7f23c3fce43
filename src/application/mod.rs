//! Application layer - Use cases and orchestration

pub mod menu;
pub mod session;

pub use menu::{run_menu, MenuChoice, SessionEnd};
pub use session::{Added, LoadNotice, Session};
