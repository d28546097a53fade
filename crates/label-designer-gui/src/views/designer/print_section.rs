use eframe::egui;
use label_designer::{Designer, PrintColor, PrintStatus};

use super::ViewOutput;
use crate::ui_components::labeled_drag_clamped;

pub fn show(ui: &mut egui::Ui, designer: &mut Designer, out: &mut ViewOutput) {
    egui::CollapsingHeader::new("🖨 Print")
        .default_open(true)
        .show(ui, |ui| {
            let controls = *designer.controls();

            let mut changed =
                labeled_drag_clamped(ui, "Copies:", &mut designer.form.print_count, 1..=100, "");

            ui.horizontal(|ui| {
                ui.label("Colour:");
                ui.add_enabled_ui(controls.color_choice_enabled, |ui| {
                    changed |= ui
                        .radio_value(&mut designer.form.print_color, PrintColor::Black, "Black")
                        .changed();
                    changed |= ui
                        .radio_value(&mut designer.form.print_color, PrintColor::Red, "Red")
                        .changed();
                })
                .response
                .on_disabled_hover_text("Red needs black/red/white tape");
            });

            if changed {
                out.refresh(designer);
            }

            ui.add_space(10.0);

            let enabled = designer.print_enabled();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(enabled, egui::Button::new("🖨 Print"))
                    .clicked()
                {
                    out.commands.extend(designer.print(false));
                }

                // Uploaded files are always cut per label
                let can_cut = enabled && controls.text_panel_visible;
                if ui
                    .add_enabled(can_cut, egui::Button::new("✂ Print, Cut Once"))
                    .on_hover_text("Cut only after the last copy")
                    .clicked()
                {
                    out.commands.extend(designer.print(true));
                }
            });

            if let Some(status) = designer.status() {
                ui.add_space(5.0);
                show_status(ui, status);
            }
        });
}

fn show_status(ui: &mut egui::Ui, status: &PrintStatus) {
    match status {
        PrintStatus::InProgress => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(status.headline());
            });
        }
        PrintStatus::Succeeded => {
            ui.colored_label(egui::Color32::DARK_GREEN, status.headline());
        }
        PrintStatus::Failed(_) => {
            ui.colored_label(ui.visuals().error_fg_color, status.message());
        }
    }
}
