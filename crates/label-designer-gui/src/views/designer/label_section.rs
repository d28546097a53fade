use eframe::egui;
use label_designer::{Designer, Orientation, PrintType};

use super::ViewOutput;
use crate::ui_components::{button_group, enum_selector, string_selector};

pub fn show(ui: &mut egui::Ui, designer: &mut Designer, out: &mut ViewOutput) {
    egui::CollapsingHeader::new("🏷 Label")
        .default_open(true)
        .show(ui, |ui| {
            let mut changed = false;

            let sizes = designer
                .catalog()
                .iter()
                .map(|size| (size.id.clone(), size.name.clone()))
                .collect::<Vec<_>>();
            if let Some(label_size) =
                string_selector(ui, "label_size", "Size:", &designer.form.label_size, sizes)
            {
                designer.form.label_size = label_size;
                changed = true;
            }

            ui.horizontal(|ui| {
                ui.label("Orientation:");
                changed |= button_group(
                    ui,
                    &mut designer.form.orientation,
                    &[
                        (Orientation::Standard, "Standard"),
                        (Orientation::Rotated, "Rotated"),
                    ],
                );
            });

            changed |= enum_selector(
                ui,
                "print_type",
                "Content:",
                &mut designer.form.print_type,
                &[
                    (PrintType::Text, "Text"),
                    (PrintType::QrCode, "QR code"),
                    (PrintType::QrCodeText, "QR code and text"),
                    (PrintType::Image, "Image / PDF"),
                ],
            );

            if changed {
                out.refresh(designer);
            }
        });
}
