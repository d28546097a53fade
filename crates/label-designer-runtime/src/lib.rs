mod handlers;
mod worker;

pub use worker::worker_task;

// Re-export the message types the worker speaks
pub use label_designer::{DesignerClient, DesignerCommand, DesignerUpdate};
