//! Ratatui front-end: entry forms for camps and donors plus the two list
//! views, all driven through the record operations on [`crate::db::Store`].

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
