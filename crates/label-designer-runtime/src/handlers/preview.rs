use label_designer::{DesignerClient, DesignerUpdate, PreviewTicket, PrintRequest};
use tokio::sync::mpsc;

pub async fn handle_render(
    ticket: PreviewTicket,
    request: PrintRequest,
    client: &DesignerClient,
    update_tx: &mpsc::UnboundedSender<DesignerUpdate>,
) {
    let update = match client.preview(&request).await {
        Ok(image) => DesignerUpdate::PreviewRendered { ticket, image },
        Err(e) => DesignerUpdate::PreviewFailed {
            ticket,
            message: format!("Failed to render preview: {e}"),
        },
    };
    let _ = update_tx.send(update);
}
