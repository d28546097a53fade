use label_designer::{DesignerClient, DesignerUpdate, PrintOutcome, PrintRequest};
use tokio::sync::mpsc;

pub async fn handle_submit(
    request: PrintRequest,
    client: &DesignerClient,
    update_tx: &mpsc::UnboundedSender<DesignerUpdate>,
) {
    let outcome = match client.print(&request).await {
        Ok(response) => PrintOutcome::from(response),
        Err(e) => PrintOutcome::failed(e.to_string()),
    };
    let _ = update_tx.send(DesignerUpdate::PrintFinished { outcome });
}
