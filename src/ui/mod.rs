//! Terminal display surface for the dashboard

pub mod layout;
pub mod renderer;
pub mod terminal;

pub use layout::render_dashboard;
pub use terminal::run_ui;
