//! Display formatting for terminal output
//!
//! Colors command replies and errors, and renders the configuration view.

pub mod config;
pub mod console;

pub use config::format_config;
pub use console::Painter;
