use label_designer::{DesignerClient, DesignerUpdate};
use tokio::sync::mpsc;

pub async fn handle_load(
    family: String,
    client: &DesignerClient,
    update_tx: &mpsc::UnboundedSender<DesignerUpdate>,
) {
    match client.font_styles(&family).await {
        Ok(styles) => {
            let _ = update_tx.send(DesignerUpdate::StylesLoaded { family, styles });
        }
        Err(e) => {
            let _ = update_tx.send(DesignerUpdate::StylesFailed {
                family,
                message: format!("Failed to load font styles: {e}"),
            });
        }
    }
}
