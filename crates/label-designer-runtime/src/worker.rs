use label_designer::{DesignerClient, DesignerCommand, DesignerUpdate};
use tokio::sync::mpsc;

use crate::handlers;

/// Async worker task that performs designer requests and sends updates
///
/// Runs until every command sender has been dropped.
pub async fn worker_task(
    client: DesignerClient,
    mut command_rx: mpsc::UnboundedReceiver<DesignerCommand>,
    update_tx: mpsc::UnboundedSender<DesignerUpdate>,
) {
    log::info!("Designer worker talking to {}", client.base_url());

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &client, &mut command_rx, &update_tx).await;
    }

    log::debug!("Designer worker stopped");
}

async fn process_command(
    cmd: DesignerCommand,
    client: &DesignerClient,
    command_rx: &mut mpsc::UnboundedReceiver<DesignerCommand>,
    update_tx: &mpsc::UnboundedSender<DesignerUpdate>,
) {
    match cmd {
        DesignerCommand::LoadStyles { family } => {
            handlers::styles::handle_load(family, client, update_tx).await;
        }
        DesignerCommand::RenderPreview {
            mut ticket,
            mut request,
        } => {
            // Drain any queued preview commands, keeping only the most recent
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let DesignerCommand::RenderPreview {
                    ticket: new_ticket,
                    request: new_request,
                } = next_cmd
                {
                    log::debug!("Discarding queued preview {:?}, using {:?}", ticket, new_ticket);
                    ticket = new_ticket;
                    request = new_request;
                } else {
                    // Can't put it back, so it runs before the preview
                    Box::pin(process_command(next_cmd, client, command_rx, update_tx)).await;
                }
            }

            handlers::preview::handle_render(ticket, request, client, update_tx).await;
        }
        DesignerCommand::SubmitPrint { request } => {
            handlers::print::handle_submit(request, client, update_tx).await;
        }
        DesignerCommand::Upload {
            upload,
            purpose,
            file,
            request,
        } => {
            handlers::upload::handle_upload(upload, purpose, file, request, client, update_tx)
                .await;
        }
    }
}
