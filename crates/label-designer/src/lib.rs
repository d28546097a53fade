pub mod client;
pub mod constants;
mod controls;
mod designer;
mod form;
mod labels;
mod messages;
mod preview;
mod settings;
mod snapshot;
mod status;
mod styles;
mod types;
mod upload;

pub use client::DesignerClient;
pub use controls::{Availability, ControlState};
pub use designer::Designer;
pub use form::FormState;
pub use labels::*;
pub use messages::{DesignerCommand, DesignerUpdate};
pub use preview::{PreviewImage, PreviewTicket};
pub use settings::{DesignerSettings, ServerSettings};
pub use snapshot::PrintRequest;
pub use status::{PrintOutcome, PrintResponse, PrintStatus};
pub use styles::StyleOptions;
pub use types::*;
pub use upload::{FileState, QueuedFile, UploadId, UploadKind, UploadPurpose, UploadQueue};
