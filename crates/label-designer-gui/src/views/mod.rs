pub mod designer;
pub mod log_panel;

pub use designer::{ViewOutput, show_designer};
pub use log_panel::show_log_panel;
