use eframe::egui;
use log::Level;

use crate::logger::AppLogger;

pub fn show_log_panel(ctx: &egui::Context, logger: &AppLogger) {
    egui::TopBottomPanel::bottom("log_panel")
        .resizable(true)
        .default_height(120.0)
        .show(ctx, |ui| {
            egui::CollapsingHeader::new("📜 Log")
                .default_open(false)
                .show(ui, |ui| {
                    if ui.small_button("Clear").clicked() {
                        logger.clear();
                    }

                    egui::ScrollArea::vertical()
                        .stick_to_bottom(true)
                        .auto_shrink([false, true])
                        .show(ui, |ui| {
                            for entry in logger.entries() {
                                let color = match entry.level {
                                    Level::Error => ui.visuals().error_fg_color,
                                    Level::Warn => ui.visuals().warn_fg_color,
                                    _ => ui.visuals().weak_text_color(),
                                };
                                ui.colored_label(
                                    color,
                                    format!(
                                        "{} {:<5} {}",
                                        entry.timestamp.format("%H:%M:%S"),
                                        entry.level,
                                        entry.message
                                    ),
                                );
                            }
                        });
                });
        });
}
