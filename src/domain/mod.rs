//! Domain layer - Business logic and domain models

pub mod journal;
pub mod mood;
pub mod recommend;
pub mod report;

pub use journal::{validate_name, Entry, Journal};
pub use mood::{classify, Mood};
pub use recommend::{recommend, recommend_label};
