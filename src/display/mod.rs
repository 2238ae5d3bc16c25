//! Terminal display for candidate lists and history.

pub mod tables;
pub mod theme;

pub use tables::{TableBuilder, candidates_table, choice_table, history_table};
pub use theme::{THEME, Theme};
