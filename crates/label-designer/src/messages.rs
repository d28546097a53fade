use crate::preview::{PreviewImage, PreviewTicket};
use crate::snapshot::PrintRequest;
use crate::status::PrintOutcome;
use crate::upload::{QueuedFile, UploadId, UploadPurpose};

/// Commands sent from the designer to the worker
#[derive(Debug, Clone)]
pub enum DesignerCommand {
    LoadStyles {
        family: String,
    },
    RenderPreview {
        ticket: PreviewTicket,
        request: PrintRequest,
    },
    SubmitPrint {
        request: PrintRequest,
    },
    /// Send the queued file with the request fields; the purpose picks the endpoint
    Upload {
        upload: UploadId,
        purpose: UploadPurpose,
        file: QueuedFile,
        request: PrintRequest,
    },
}

/// Updates sent from the worker to the designer
#[derive(Debug, Clone)]
pub enum DesignerUpdate {
    StylesLoaded {
        family: String,
        styles: Vec<String>,
    },
    StylesFailed {
        family: String,
        message: String,
    },
    PreviewRendered {
        ticket: PreviewTicket,
        image: PreviewImage,
    },
    PreviewFailed {
        ticket: PreviewTicket,
        message: String,
    },
    PrintFinished {
        outcome: PrintOutcome,
    },
    /// The upload request has completed, successfully or not
    UploadSettled { upload: UploadId },
}
