pub mod app;
pub mod board;
pub mod card;
pub mod status_panel;
