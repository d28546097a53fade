use label_designer::{
    DesignerClient, DesignerUpdate, PrintOutcome, PrintRequest, QueuedFile, UploadId,
    UploadPurpose,
};
use tokio::sync::mpsc;

/// Send the file to the endpoint its purpose names, then report it settled
pub async fn handle_upload(
    upload: UploadId,
    purpose: UploadPurpose,
    file: QueuedFile,
    request: PrintRequest,
    client: &DesignerClient,
    update_tx: &mpsc::UnboundedSender<DesignerUpdate>,
) {
    let update = match purpose {
        UploadPurpose::Preview(ticket) => match client.upload_preview(&file, &request).await {
            Ok(image) => DesignerUpdate::PreviewRendered { ticket, image },
            Err(e) => DesignerUpdate::PreviewFailed {
                ticket,
                message: format!("Failed to preview {}: {e}", file.name),
            },
        },
        UploadPurpose::Print => {
            let outcome = match client.upload_print(&file, &request).await {
                Ok(response) => PrintOutcome::from(response),
                Err(e) => PrintOutcome::failed(e.to_string()),
            };
            DesignerUpdate::PrintFinished { outcome }
        }
    };

    let _ = update_tx.send(update);
    let _ = update_tx.send(DesignerUpdate::UploadSettled { upload });
}
